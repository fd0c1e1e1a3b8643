//! CRUD modal lifecycle.
//!
//! `Closed → Open → Submitting → Closed`, with cancel from `Open` and a failed
//! submission falling back to `Open` with the server's error and the operator's
//! input intact.

use serde::Serialize;

use shopdesk_types::{Product, ProductDraft, Seller, SellerDraft};

use crate::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Entity {
    Product,
    Seller,
}

impl Entity {
    pub fn name(self) -> &'static str {
        match self {
            Entity::Product => "Product",
            Entity::Seller => "Seller",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormMode {
    Create,
    Edit(u64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

impl Field {
    fn new(key: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            label,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Form {
    pub entity: Entity,
    pub mode: FormMode,
    pub fields: Vec<Field>,
    /// Inline message, from validation or from the server.
    pub error: Option<String>,
    /// `(id, label)` of every seller a product can be assigned to.
    pub seller_choices: Vec<(u64, String)>,
}

impl Form {
    /// Product form. `existing` pre-fills every field; a new product defaults to
    /// the first known seller.
    pub fn product(existing: Option<&Product>, sellers: &[Seller]) -> Self {
        let seller = existing
            .and_then(|p| p.seller_id)
            .or_else(|| sellers.first().map(|s| s.id))
            .map(|id| id.to_string())
            .unwrap_or_default();
        let fields = match existing {
            Some(p) => vec![
                Field::new("name", "Name", p.name.clone()),
                Field::new("category", "Category", p.category.clone()),
                Field::new("price", "Price", p.price.to_string()),
                Field::new("stock", "Stock", p.quantityavailable.to_string()),
                Field::new("description", "Description", p.description.clone().unwrap_or_default()),
                Field::new("seller", "Seller", seller),
            ],
            None => vec![
                Field::new("name", "Name", ""),
                Field::new("category", "Category", ""),
                Field::new("price", "Price", ""),
                Field::new("stock", "Stock", ""),
                Field::new("description", "Description", ""),
                Field::new("seller", "Seller", seller),
            ],
        };
        Self {
            entity: Entity::Product,
            mode: existing.map_or(FormMode::Create, |p| FormMode::Edit(p.product_id)),
            fields,
            error: None,
            seller_choices: sellers.iter().map(|s| (s.id, s.label())).collect(),
        }
    }

    pub fn seller(existing: Option<&Seller>) -> Self {
        let blank = Seller {
            id: 0,
            name: String::new(),
            company: String::new(),
            email: String::new(),
            phone: String::new(),
        };
        let source = existing.unwrap_or(&blank);
        Self {
            entity: Entity::Seller,
            mode: existing.map_or(FormMode::Create, |s| FormMode::Edit(s.id)),
            fields: vec![
                Field::new("name", "Name", source.name.clone()),
                Field::new("company", "Company", source.company.clone()),
                Field::new("email", "Email", source.email.clone()),
                Field::new("phone", "Phone", source.phone.clone()),
            ],
            error: None,
            seller_choices: Vec::new(),
        }
    }

    pub fn title(&self) -> String {
        match self.mode {
            FormMode::Create => format!("New {}", self.entity.name()),
            FormMode::Edit(_) => format!("Edit {}", self.entity.name()),
        }
    }

    pub fn value(&self, key: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Returns false for a field the form does not have.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.key == key) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    fn id(&self) -> Option<u64> {
        match self.mode {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }

    pub fn validate(&self) -> Result<Submission, ValidationError> {
        match self.entity {
            Entity::Product => self.product_draft().map(Submission::Product),
            Entity::Seller => self.seller_draft().map(Submission::Seller),
        }
    }

    fn product_draft(&self) -> Result<ProductDraft, ValidationError> {
        let name = self.value("name").trim();
        if name.is_empty() {
            return Err(ValidationError::new("name", "Name is required"));
        }
        let category = self.value("category").trim();
        if category.is_empty() {
            return Err(ValidationError::new("category", "Category is required"));
        }
        let price = match self.value("price").trim().parse::<f64>() {
            Ok(price) if price.is_finite() && price > 0.0 => price,
            _ => return Err(ValidationError::new("price", "Price must be a number greater than zero")),
        };
        let stock = match self.value("stock").trim() {
            "" => 0,
            raw => raw
                .parse::<u64>()
                .map_err(|_| ValidationError::new("stock", "Stock must be a whole number of zero or more"))?,
        };
        Ok(ProductDraft {
            product_id: self.id(),
            name: name.to_string(),
            category: category.to_string(),
            price,
            quantityavailable: stock,
            description: self.value("description").trim().to_string(),
            seller_id: self.value("seller").trim().parse().ok(),
        })
    }

    fn seller_draft(&self) -> Result<SellerDraft, ValidationError> {
        let name = self.value("name").trim();
        if name.is_empty() {
            return Err(ValidationError::new("name", "Name is required"));
        }
        Ok(SellerDraft {
            id: self.id(),
            name: name.to_string(),
            company: self.value("company").trim().to_string(),
            email: self.value("email").trim().to_string(),
            phone: self.value("phone").trim().to_string(),
        })
    }
}

/// A validated form, ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Product(ProductDraft),
    Seller(SellerDraft),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub enum ModalState {
    #[default]
    Closed,
    Open(Form),
    Submitting(Form),
}

#[derive(Debug, Default)]
pub struct Modal {
    state: ModalState,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn open(&mut self, form: Form) {
        self.state = ModalState::Open(form);
    }

    pub fn cancel(&mut self) {
        self.state = ModalState::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, ModalState::Closed)
    }

    pub fn form(&self) -> Option<&Form> {
        match &self.state {
            ModalState::Open(form) | ModalState::Submitting(form) => Some(form),
            ModalState::Closed => None,
        }
    }

    /// Editable only while open; a submission in flight locks the fields.
    pub fn form_mut(&mut self) -> Option<&mut Form> {
        match &mut self.state {
            ModalState::Open(form) => Some(form),
            _ => None,
        }
    }

    /// Validate the open form. On success the modal moves to `Submitting`; on
    /// failure it stays open with the message inline. `None` when nothing is open.
    pub fn begin_submit(&mut self) -> Option<Result<Submission, ValidationError>> {
        let ModalState::Open(form) = &mut self.state else {
            return None;
        };
        match form.validate() {
            Ok(submission) => {
                form.error = None;
                let form = form.clone();
                self.state = ModalState::Submitting(form);
                Some(Ok(submission))
            }
            Err(err) => {
                form.error = Some(err.message.clone());
                Some(Err(err))
            }
        }
    }

    /// Settle a submission: close on success, reopen with `error` otherwise.
    pub fn finish(&mut self, result: Result<(), String>) {
        let state = std::mem::take(&mut self.state);
        self.state = match (state, result) {
            (ModalState::Submitting(_), Ok(())) => ModalState::Closed,
            (ModalState::Submitting(mut form), Err(message)) => {
                form.error = Some(message);
                ModalState::Open(form)
            }
            (other, _) => other,
        };
    }
}
