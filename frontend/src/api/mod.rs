mod auth;
pub mod client;
mod customers;
mod postal;
mod sellers;
pub mod types;
mod visits;

pub use client::*;
pub use postal::{PostalAddress, PostalClient};
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
