//! Service layer module.
//!
//! Contains the Luhn engine and the card number business logic.

pub mod card;
pub mod luhn;
pub mod profile;

pub use card::CardService;
pub use luhn::{generate_luhn_number, is_valid_luhn};
pub use profile::ProfileRegistry;
