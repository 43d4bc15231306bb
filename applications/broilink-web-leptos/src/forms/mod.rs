//! Client-side checks run before anything is sent to the backend

mod config;
mod fields;
mod upload;

pub use config::*;
pub use fields::*;
pub use upload::*;

use thiserror::Error;

/// Validation failure on a form field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} harus diisi")]
    Required(&'static str),
    #[error("{0} harus berupa angka")]
    NotANumber(&'static str),
    #[error("{0} tidak boleh negatif")]
    Negative(&'static str),
    #[error("{0} harus berupa bilangan bulat")]
    NotAnInteger(&'static str),
    #[error("Kode OTP harus 6 digit angka")]
    InvalidOtp,
    #[error("Nomor telepon tidak valid")]
    InvalidPhone,
}
