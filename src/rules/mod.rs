//! Character tables and weak-letter restorations used by the stemming cascade.

use crate::lexicon::Lexicon;
use crate::token::Rule;

pub mod weak;

pub use weak::{DuplicateRoot, FIRST_WEAK, LAST_WEAK, MIDDLE_WEAK, WeakInsertion};

pub const ALIF: char = '\u{0627}';
pub const HAMZA_ON_ALIF: char = '\u{0623}';
pub const WAW: char = '\u{0648}';
pub const SHADDA: char = '\u{0651}';

/// Initial letters rewritten to hamza-on-alif in a three-letter word.
pub const HAMZA_SEATS: [char; 3] = ['\u{0627}', '\u{0624}', '\u{0626}'];

/// Final letters dropped before trying a last-weak restoration.
pub const TRAILING_WEAK: [char; 6] = [
    '\u{0648}', '\u{064a}', '\u{0627}', '\u{0649}', '\u{0621}', '\u{0626}',
];

/// Medial letters dropped before trying a middle-weak restoration.
pub const MEDIAL_WEAK: [char; 4] = ['\u{0648}', '\u{064a}', '\u{0627}', '\u{0626}'];

/// Medial hamza carriers that are reseated on alif.
pub const MEDIAL_HAMZA: [char; 2] = ['\u{0624}', '\u{0626}'];

/// Third radicals after which a medial hamza sits on a bare alif.
pub const ALIF_SEAT_FOLLOWERS: [char; 3] = ['\u{0645}', '\u{0632}', '\u{0631}'];

/// Initial hamza forms folded to a bare alif before pattern matching.
pub const PATTERN_HAMZA: [char; 3] = ['\u{0623}', '\u{0625}', '\u{0622}'];

/// Fa, ain and lam: the radical placeholders of a pattern template.
pub const PATTERN_SLOTS: [char; 3] = ['\u{0641}', '\u{0639}', '\u{0644}'];

pub fn is_pattern_slot(c: char) -> bool {
    PATTERN_SLOTS.contains(&c)
}

/// Rebuilds a full root from a two-letter stem.
pub trait Restoration: Send + Sync {
    fn restore(&self, stem: &str, lexicon: &Lexicon) -> Option<String>;

    fn rule(&self) -> Rule;
}

/// Restorations tried, in order, on a two-letter word.
pub fn two_letter_restorations() -> [&'static dyn Restoration; 4] {
    [&DuplicateRoot, &LAST_WEAK, &FIRST_WEAK, &MIDDLE_WEAK]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_letters() {
        assert!(is_pattern_slot('ف'));
        assert!(is_pattern_slot('ع'));
        assert!(is_pattern_slot('ل'));
        assert!(!is_pattern_slot('م'));
    }

    #[test]
    fn test_two_letter_order() {
        let rules: Vec<Rule> = two_letter_restorations().iter().map(|r| r.rule()).collect();
        assert_eq!(
            rules,
            vec![Rule::Duplicate, Rule::LastWeak, Rule::FirstWeak, Rule::MiddleWeak]
        );
    }
}
