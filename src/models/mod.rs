pub mod enums;
pub mod lab;
pub mod topic;

pub use enums::*;
pub use lab::*;
pub use topic::*;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
