pub mod admin_customers;
pub mod admin_dashboard;
pub mod admin_sellers;
pub mod login;
pub mod seller_dashboard;
