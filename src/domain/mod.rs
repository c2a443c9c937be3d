//! Domain models for the card worker.
//!
//! Card number and profile types plus the API contracts.

pub mod card;
pub mod dto;

pub use card::{CardProfile, DigitString};
pub use dto::{
    ApiResponse, BatchValidateRequest, BatchValidateResponse, CheckDigitResponse,
    GenerateResponse, ProfileListResponse, ValidationResponse,
};
