use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Declares a status enum that round-trips through its display name and keeps
/// unrecognised values instead of failing the whole record.
macro_rules! status_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub const KNOWN: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Other(raw) => raw,
                }
            }

            pub fn parse(raw: &str) -> Self {
                match raw.trim() {
                    $(s if s.eq_ignore_ascii_case($label) => $name::$variant,)+
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = Option::<String>::deserialize(deserializer)?;
                Ok(raw.map(|s| $name::parse(&s)).unwrap_or_default())
            }
        }
    };
}

status_enum!(
    /// Fulfilment state of an order.
    OrderStatus {
        Pending => "Pending",
        Shipped => "Shipped",
        Delivered => "Delivered",
        Cancelled => "Cancelled",
    }
);

status_enum!(
    /// Lifecycle of a return/refund request.
    ReturnStatus {
        Requested => "Requested",
        Approved => "Approved",
        Rejected => "Rejected",
        Refunded => "Refunded",
    }
);

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl Default for ReturnStatus {
    fn default() -> Self {
        Self::Requested
    }
}

impl ReturnStatus {
    /// Only open requests can still be approved or rejected.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(OrderStatus::parse("shipped"), OrderStatus::Shipped);
        assert_eq!(ReturnStatus::parse(" Approved "), ReturnStatus::Approved);
    }

    #[test]
    fn test_unknown_values_are_preserved() {
        let status: OrderStatus = serde_json::from_str("\"On Hold\"").unwrap();
        assert_eq!(status, OrderStatus::Other("On Hold".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"On Hold\"");
    }

    #[test]
    fn test_null_status_uses_default() {
        let status: OrderStatus = serde_json::from_str("null").unwrap();
        assert_eq!(status, OrderStatus::Pending);
    }
}
