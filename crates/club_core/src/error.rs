use crate::attributes::AttributeId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RatingError {
    #[error("Missing attribute: {attribute}")]
    MissingAttribute { attribute: AttributeId },

    #[error("Attribute set is empty")]
    EmptyAttributeSet,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Player not found: {id}")]
    PlayerNotFound { id: String },
}

pub type Result<T> = std::result::Result<T, RatingError>;
