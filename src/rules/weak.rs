use super::Restoration;
use crate::category::Category;
use crate::lexicon::Lexicon;
use crate::token::Rule;

/// Where the restored letter goes relative to the two-letter stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Start,
    Middle,
    End,
}

/// Table-driven weak-letter restoration: the first category whose list holds
/// the stem decides which letter is inserted.
#[derive(Debug)]
pub struct WeakInsertion {
    pub position: Position,
    pub table: &'static [(Category, char)],
    pub rule: Rule,
}

pub const LAST_WEAK: WeakInsertion = WeakInsertion {
    position: Position::End,
    table: &[
        (Category::LastAlif, '\u{0627}'),
        (Category::LastHamza, '\u{0623}'),
        (Category::LastMaksoura, '\u{0649}'),
        (Category::LastYah, '\u{064a}'),
    ],
    rule: Rule::LastWeak,
};

pub const FIRST_WEAK: WeakInsertion = WeakInsertion {
    position: Position::Start,
    table: &[(Category::FirstWaw, '\u{0648}'), (Category::FirstYah, '\u{064a}')],
    rule: Rule::FirstWeak,
};

pub const MIDDLE_WEAK: WeakInsertion = WeakInsertion {
    position: Position::Middle,
    table: &[(Category::MidWaw, '\u{0648}'), (Category::MidYah, '\u{064a}')],
    rule: Rule::MiddleWeak,
};

impl WeakInsertion {
    fn insert(&self, stem: &str, letter: char) -> String {
        let mut out = String::with_capacity(stem.len() + letter.len_utf8());
        match self.position {
            Position::Start => {
                out.push(letter);
                out.push_str(stem);
            }
            Position::End => {
                out.push_str(stem);
                out.push(letter);
            }
            Position::Middle => {
                let mut chars = stem.chars();
                out.extend(chars.next());
                out.push(letter);
                out.push_str(chars.as_str());
            }
        }
        out
    }
}

impl Restoration for WeakInsertion {
    fn restore(&self, stem: &str, lexicon: &Lexicon) -> Option<String> {
        self.table
            .iter()
            .find(|(category, _)| lexicon.contains(*category, stem))
            .map(|&(_, letter)| self.insert(stem, letter))
    }

    fn rule(&self) -> Rule {
        self.rule
    }
}

/// Two-letter stem of a root whose last two radicals are the same.
#[derive(Debug)]
pub struct DuplicateRoot;

impl Restoration for DuplicateRoot {
    fn restore(&self, stem: &str, lexicon: &Lexicon) -> Option<String> {
        if !lexicon.contains(Category::Duplicate, stem) {
            return None;
        }
        let mut chars = stem.chars();
        chars.next();
        Some(format!("{}{}", stem, chars.as_str()))
    }

    fn rule(&self) -> Rule {
        Rule::Duplicate
    }
}
