//! Admin API access for shopdesk.
//!
//! Every request goes through a [`Transport`]; [`HttpTransport`] is the reqwest
//! implementation and tests substitute a scripted one. Response bodies are
//! normalized by [`Envelope`] before [`ApiClient`] decodes them into the
//! `shopdesk-types` payloads, so callers only ever see typed data or an
//! [`ApiError`].

pub mod client;
pub mod envelope;
pub mod error;
pub mod http;
pub mod transport;

pub use client::{ApiClient, MonthRange};
pub use envelope::Envelope;
pub use error::{ApiError, Result};
pub use http::HttpTransport;
pub use transport::{ApiRequest, Method, Transport};
