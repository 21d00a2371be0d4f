pub mod category;
pub mod config;
pub mod data;
pub mod document;
pub mod error;
pub mod lexicon;
pub mod normalize;
pub mod rules;
pub mod stemmer;
pub mod token;

#[cfg(test)]
pub(crate) mod test_support;

pub use category::Category;
pub use config::StemmerConfig;
pub use document::StemmedDocument;
pub use error::{Result, StemmerError};
pub use lexicon::{Lexicon, WordList};
pub use normalize::Normalizer;
pub use stemmer::Stemmer;
pub use token::{Classification, Rule, StemResult};
