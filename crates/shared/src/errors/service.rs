use crate::errors::repository::RepositoryError;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed")]
    Validation(HashMap<String, Vec<String>>),
}
