use crate::{
    api::{Address, ApiError, Customer, CustomerPayload, PostalAddress},
    utils::{
        geolocation::Coordinates,
        masks,
        records::{contains_folded, FormMode},
    },
};
use rust_i18n::t;

/// Company name or city, case-insensitive, or CNPJ digits.
pub fn matches_query(customer: &Customer, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    if contains_folded(&customer.company_name, query) || contains_folded(&customer.address.city, query) {
        return true;
    }
    let digits = masks::digits_only(query);
    !digits.is_empty() && masks::digits_only(&customer.cnpj).contains(&digits)
}

pub fn filter_customers(customers: &[Customer], query: &str) -> Vec<Customer> {
    customers
        .iter()
        .filter(|customer| matches_query(customer, query))
        .cloned()
        .collect()
}

/// Accepts `-23.55` and `-23,55`; rejects values outside `[-limit, limit]`.
pub fn parse_coordinate(raw: &str, limit: f64) -> Option<f64> {
    let value: f64 = raw.trim().replace(',', ".").parse().ok()?;
    (value.is_finite() && value.abs() <= limit).then_some(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerFormState {
    pub company_name: String,
    pub cnpj: String,
    pub zip_code: String,
    pub street: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub latitude: String,
    pub longitude: String,
    pub active: bool,
}

impl Default for CustomerFormState {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            cnpj: String::new(),
            zip_code: String::new(),
            street: String::new(),
            number: String::new(),
            complement: String::new(),
            neighborhood: String::new(),
            city: String::new(),
            state: String::new(),
            latitude: String::new(),
            longitude: String::new(),
            active: true,
        }
    }
}

impl CustomerFormState {
    pub fn from_customer(customer: &Customer) -> Self {
        let address = &customer.address;
        Self {
            company_name: customer.company_name.clone(),
            cnpj: masks::mask_cnpj(&customer.cnpj),
            zip_code: masks::mask_cep(&address.zip_code),
            street: address.street.clone(),
            number: address.number.clone(),
            complement: address.complement.clone().unwrap_or_default(),
            neighborhood: address.neighborhood.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            latitude: customer.latitude.to_string(),
            longitude: customer.longitude.to_string(),
            active: customer.active,
        }
    }

    pub fn set_cnpj(&mut self, raw: &str) {
        self.cnpj = masks::mask_cnpj(raw);
    }

    pub fn set_zip_code(&mut self, raw: &str) {
        self.zip_code = masks::mask_cep(raw);
    }

    /// Overwrites the address lines the postal service knows about.
    pub fn apply_postal(&mut self, found: &PostalAddress) {
        self.street = found.logradouro.clone();
        self.neighborhood = found.bairro.clone();
        self.city = found.localidade.clone();
        self.state = found.uf.clone();
    }

    pub fn apply_position(&mut self, position: Coordinates) {
        self.latitude = format!("{:.6}", position.latitude);
        self.longitude = format!("{:.6}", position.longitude);
    }

    pub fn to_request(&self, mode: &FormMode) -> Result<CustomerPayload, ApiError> {
        let required = [
            (&self.company_name, "customers.company_name_required"),
            (&self.street, "customers.address_required"),
            (&self.number, "customers.address_required"),
            (&self.neighborhood, "customers.address_required"),
            (&self.city, "customers.address_required"),
            (&self.state, "customers.address_required"),
        ];
        if let Some(&(_, key)) = required.iter().find(|(value, _)| value.trim().is_empty()) {
            return Err(ApiError::validation(t!(key)));
        }
        if !masks::is_complete_cnpj(&self.cnpj) {
            return Err(ApiError::validation(t!("customers.cnpj_invalid")));
        }
        if !masks::is_complete_cep(&self.zip_code) {
            return Err(ApiError::validation(t!("customers.cep_invalid")));
        }
        let latitude = parse_coordinate(&self.latitude, 90.0)
            .ok_or_else(|| ApiError::validation(t!("customers.latitude_invalid")))?;
        let longitude = parse_coordinate(&self.longitude, 180.0)
            .ok_or_else(|| ApiError::validation(t!("customers.longitude_invalid")))?;

        let complement = Some(self.complement.trim().to_string()).filter(|c| !c.is_empty());
        Ok(CustomerPayload {
            company_name: self.company_name.trim().to_string(),
            cnpj: masks::digits_only(&self.cnpj),
            address: Address {
                zip_code: masks::digits_only(&self.zip_code),
                street: self.street.trim().to_string(),
                number: self.number.trim().to_string(),
                complement,
                neighborhood: self.neighborhood.trim().to_string(),
                city: self.city.trim().to_string(),
                state: self.state.trim().to_uppercase(),
            },
            latitude,
            longitude,
            active: mode.is_edit().then_some(self.active),
        })
    }
}
