use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::category::Category;

/// Errors raised while building a stemmer. Stemming itself never fails.
#[derive(Error, Debug)]
pub enum StemmerError {
    /// A reference list could not be read from its backing file.
    #[error("missing reference list '{category}' at {}: {source}", path.display())]
    MissingCategory {
        category: Category,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A reference list was absent from an in-memory source.
    #[error("reference list '{0}' not provided")]
    CategoryNotProvided(Category),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StemmerError>;
