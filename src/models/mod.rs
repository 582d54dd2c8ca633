pub mod appointment;
pub mod enums;
pub mod provider;
pub mod slot;

pub use appointment::*;
pub use enums::*;
pub use provider::*;
pub use slot::*;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
