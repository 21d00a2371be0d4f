use serde::{Deserialize, Serialize};

/// How a stemming call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    /// A root was matched against one of the root lists.
    Root,
    /// The word, or a form stripped from it, is a stopword.
    Stopword,
    /// Nothing matched; `resolved` is the best-effort stripped form.
    Unresolved,
}

/// The rule that produced a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// The three-letter form is itself a known root.
    Direct,
    Quadriliteral,
    /// Two-letter stem of a doubled root, e.g. مد -> مدد.
    Duplicate,
    LastWeak,
    FirstWeak,
    /// A medial waw or yah was reinserted into a two-letter stem.
    MiddleWeak,
    /// An initial or medial hamza seat was normalized.
    HamzaSeat,
    /// A trailing shadda was dropped and the second radical doubled,
    /// e.g. مدّ -> مدد. The resolved root never keeps the shadda.
    Shadda,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemResult {
    pub original: String,
    pub resolved: String,
    pub classification: Classification,
    /// Set only when `classification` is `Root`.
    pub rule: Option<Rule>,
}

impl StemResult {
    pub fn unresolved(original: &str) -> Self {
        Self {
            original: original.to_string(),
            resolved: original.to_string(),
            classification: Classification::Unresolved,
            rule: None,
        }
    }

    pub fn is_root(&self) -> bool {
        self.classification == Classification::Root
    }

    pub fn is_stopword(&self) -> bool {
        self.classification == Classification::Stopword
    }
}
