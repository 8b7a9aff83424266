use crate::api::{Customer, Seller};

/// Whether an admin form creates a record or edits the one with this id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    pub fn from_param(id: Option<String>) -> Self {
        match id {
            Some(id) if !id.trim().is_empty() => FormMode::Edit(id),
            _ => FormMode::Create,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

pub trait Record {
    fn record_id(&self) -> &str;
}

impl Record for Seller {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Record for Customer {
    fn record_id(&self) -> &str {
        &self.id
    }
}

pub fn remove_by_id<T: Record>(items: &mut Vec<T>, id: &str) {
    items.retain(|item| item.record_id() != id);
}

/// Case-insensitive substring match; an empty needle matches everything.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
