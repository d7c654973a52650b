use thiserror::Error;

use crate::types::LoanField;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid input: {}", field_list(.fields))]
    InvalidInput {
        fields: Vec<LoanField>,
    },

    #[error("user not found: {id}")]
    UserNotFound {
        id: u64,
    },

    #[error("name and email are required")]
    MissingUserFields,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

fn field_list(fields: &[LoanField]) -> String {
    fields
        .iter()
        .map(|f| f.form_id())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, Error>;
