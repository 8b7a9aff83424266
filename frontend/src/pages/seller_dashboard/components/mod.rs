pub mod checkout_dialog;
pub mod customer_card;
