use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json;
use tracing::info;

use crate::category::Category;
use crate::error::{Result, StemmerError};
use crate::lexicon::{Lexicon, WordList};

/// Loads every reference list from `<dir>/<category>.txt`.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<Lexicon> {
    let dir = dir.as_ref();
    info!("loading stemmer reference lists from {}", dir.display());
    Lexicon::from_source(|category| {
        let path = dir.join(category.file_name());
        fs::read_to_string(&path).map_err(|source| StemmerError::MissingCategory {
            category,
            path,
            source,
        })
    })
}

/// Loads every reference list from a JSON object mapping category names to
/// arrays of lines, e.g. `{"tri_roots": ["كتب", "درس"], ...}`.
pub fn load_json(json: &str) -> Result<Lexicon> {
    let mut bundle: HashMap<Category, Vec<String>> = serde_json::from_str(json)?;
    Lexicon::from_lists(|category| {
        bundle
            .remove(&category)
            .map(WordList::from_words)
            .ok_or(StemmerError::CategoryNotProvided(category))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_all(dir: &Path, skip: Option<Category>) {
        for category in Category::ALL {
            if Some(category) == skip {
                continue;
            }
            let body = match category {
                Category::TriRoots => "كتب درس\nقول\n",
                Category::Stopwords => "في\nمن\n",
                _ => "",
            };
            fs::write(dir.join(category.file_name()), body).unwrap();
        }
    }

    #[test]
    fn test_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        write_all(dir.path(), None);

        let lexicon = load_dir(dir.path()).unwrap();
        assert!(lexicon.contains(Category::TriRoots, "كتب"));
        assert!(lexicon.contains(Category::TriRoots, "قول"));
        assert!(lexicon.contains(Category::Stopwords, "من"));
        assert_eq!(lexicon.len(Category::Prefixes), 0);
    }

    #[test]
    fn test_load_dir_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_all(dir.path(), Some(Category::Suffixes));

        match load_dir(dir.path()) {
            Err(StemmerError::MissingCategory { category, path, .. }) => {
                assert_eq!(category, Category::Suffixes);
                assert!(path.ends_with("suffixes.txt"));
            }
            other => panic!("expected missing category, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_load_json() {
        let mut bundle = serde_json::Map::new();
        for category in Category::ALL {
            bundle.insert(category.name().to_string(), serde_json::json!([]));
        }
        bundle.insert("suffixes".into(), serde_json::json!(["ها ات", "ون"]));
        let json = serde_json::Value::Object(bundle).to_string();

        let lexicon = load_json(&json).unwrap();
        assert_eq!(lexicon.words(Category::Suffixes), &["ها", "ات", "ون"]);
    }

    #[test]
    fn test_load_json_missing_category() {
        let json = r#"{"tri_roots": ["كتب"]}"#;
        assert!(matches!(
            load_json(json),
            Err(StemmerError::CategoryNotProvided(Category::DefiniteArticle))
        ));
    }

    #[test]
    fn test_load_json_malformed() {
        assert!(matches!(load_json("{not json"), Err(StemmerError::Json(_))));
    }
}
