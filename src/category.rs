use serde::{Deserialize, Serialize};
use std::fmt;

/// One named reference list the stemmer is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    DefiniteArticle,
    Duplicate,
    FirstWaw,
    FirstYah,
    LastAlif,
    LastHamza,
    LastMaksoura,
    LastYah,
    MidWaw,
    MidYah,
    Prefixes,
    Punctuation,
    QuadRoots,
    Stopwords,
    Suffixes,
    TriPatt,
    TriRoots,
    Diacritics,
    Strange,
}

impl Category {
    pub const ALL: [Category; 19] = [
        Category::DefiniteArticle,
        Category::Duplicate,
        Category::FirstWaw,
        Category::FirstYah,
        Category::LastAlif,
        Category::LastHamza,
        Category::LastMaksoura,
        Category::LastYah,
        Category::MidWaw,
        Category::MidYah,
        Category::Prefixes,
        Category::Punctuation,
        Category::QuadRoots,
        Category::Stopwords,
        Category::Suffixes,
        Category::TriPatt,
        Category::TriRoots,
        Category::Diacritics,
        Category::Strange,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::DefiniteArticle => "definite_article",
            Category::Duplicate => "duplicate",
            Category::FirstWaw => "first_waw",
            Category::FirstYah => "first_yah",
            Category::LastAlif => "last_alif",
            Category::LastHamza => "last_hamza",
            Category::LastMaksoura => "last_maksoura",
            Category::LastYah => "last_yah",
            Category::MidWaw => "mid_waw",
            Category::MidYah => "mid_yah",
            Category::Prefixes => "prefixes",
            Category::Punctuation => "punctuation",
            Category::QuadRoots => "quad_roots",
            Category::Stopwords => "stopwords",
            Category::Suffixes => "suffixes",
            Category::TriPatt => "tri_patt",
            Category::TriRoots => "tri_roots",
            Category::Diacritics => "diacritics",
            Category::Strange => "strange",
        }
    }

    /// Backing file name inside a stemmer data directory.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.name())
    }

    /// Categories holding single characters rather than words.
    pub fn is_char_set(&self) -> bool {
        matches!(self, Category::Punctuation | Category::Diacritics)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One slot per category, indexed by declaration order.
#[derive(Debug, Clone)]
pub(crate) struct CategoryMap<T> {
    slots: Vec<T>,
}

impl<T> CategoryMap<T> {
    pub(crate) fn try_from_fn<E>(mut f: impl FnMut(Category) -> Result<T, E>) -> Result<Self, E> {
        let slots = Category::ALL.iter().map(|&c| f(c)).collect::<Result<Vec<_>, E>>()?;
        Ok(Self { slots })
    }

    pub(crate) fn get(&self, category: Category) -> &T {
        &self.slots[category.index()]
    }
}
