#![forbid(unsafe_code)]
//! mailvet — validation syntaxique du format e-mail (scanner + grammaire)

pub mod validator;
pub use validator::{AddressError, Validator, validate_email};
