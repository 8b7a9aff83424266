pub mod auth;
pub mod locale;
pub mod session;
