use crate::{
    api::{ApiError, Seller, SellerPayload},
    utils::{
        masks,
        records::{contains_folded, FormMode},
    },
};
use rust_i18n::t;

pub const SELLER_ROLE: &str = "SELLER";

/// Name or email, case-insensitive, or CPF digits with punctuation ignored on
/// both sides.
pub fn matches_query(seller: &Seller, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    if contains_folded(&seller.name, query) || contains_folded(&seller.email, query) {
        return true;
    }
    let digits = masks::digits_only(query);
    !digits.is_empty() && masks::digits_only(&seller.cpf).contains(&digits)
}

pub fn filter_sellers(sellers: &[Seller], query: &str) -> Vec<Seller> {
    sellers
        .iter()
        .filter(|seller| matches_query(seller, query))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerFormState {
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub active: bool,
}

impl Default for SellerFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            cpf: String::new(),
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            active: true,
        }
    }
}

impl SellerFormState {
    pub fn from_seller(seller: &Seller) -> Self {
        Self {
            name: seller.name.clone(),
            cpf: masks::mask_cpf(&seller.cpf),
            email: seller.email.clone(),
            phone: seller.phone.clone().unwrap_or_default(),
            password: String::new(),
            active: seller.active,
        }
    }

    pub fn set_cpf(&mut self, raw: &str) {
        self.cpf = masks::mask_cpf(raw);
    }

    /// Builds the payload for `mode`. Edits resend the unchanged CPF and never a password.
    pub fn to_request(&self, mode: &FormMode) -> Result<SellerPayload, ApiError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() {
            return Err(ApiError::validation(t!("sellers.name_required")));
        }
        if email.is_empty() || !email.contains('@') {
            return Err(ApiError::validation(t!("sellers.email_invalid")));
        }
        let phone = Some(self.phone.trim().to_string()).filter(|phone| !phone.is_empty());

        match mode {
            FormMode::Create => {
                if !masks::is_complete_cpf(&self.cpf) {
                    return Err(ApiError::validation(t!("login.cpf_invalid")));
                }
                if self.password.trim().is_empty() {
                    return Err(ApiError::validation(t!("login.password_required")));
                }
                Ok(SellerPayload {
                    name: name.to_string(),
                    cpf: Some(masks::digits_only(&self.cpf)),
                    email: email.to_string(),
                    phone,
                    password: Some(self.password.clone()),
                    role: Some(SELLER_ROLE.to_string()),
                    active: None,
                })
            }
            FormMode::Edit(_) => Ok(SellerPayload {
                name: name.to_string(),
                cpf: Some(masks::digits_only(&self.cpf)),
                email: email.to_string(),
                phone,
                password: None,
                role: None,
                active: Some(self.active),
            }),
        }
    }
}
