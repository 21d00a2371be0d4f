use std::path::Path;
use std::sync::Arc;

use regex::Regex;
use tracing::{debug, trace};

use crate::category::Category;
use crate::config::StemmerConfig;
use crate::data;
use crate::document::StemmedDocument;
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::normalize::Normalizer;
use crate::rules::{
    self, ALIF, ALIF_SEAT_FOLLOWERS, HAMZA_ON_ALIF, HAMZA_SEATS, LAST_WEAK, MEDIAL_HAMZA,
    MEDIAL_WEAK, MIDDLE_WEAK, PATTERN_HAMZA, Restoration, SHADDA, TRAILING_WEAK, WAW,
};
use crate::token::{Classification, Rule, StemResult};

/// Runs of Arabic letters, combining marks and tatweel.
const TOKEN_PATTERN: &str = r"[\p{Arabic}\p{Mn}\x{0640}]+";

/// Reduces Arabic words to their roots.
///
/// The engine is immutable: every call to [`Stemmer::stem`] works on its own
/// scratch state, so one instance can be shared between threads.
pub struct Stemmer {
    lexicon: Arc<Lexicon>,
    config: StemmerConfig,
    token_regex: Regex,
}

impl Stemmer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_config(Arc::new(lexicon), StemmerConfig::default())
    }

    pub fn with_config(lexicon: Arc<Lexicon>, config: StemmerConfig) -> Self {
        Self {
            lexicon,
            config,
            token_regex: Regex::new(TOKEN_PATTERN).unwrap(),
        }
    }

    /// Loads the reference lists from `config.data_dir`.
    pub fn from_config(config: StemmerConfig) -> Result<Self> {
        let lexicon = data::load_dir(&config.data_dir)?;
        Ok(Self::with_config(Arc::new(lexicon), config))
    }

    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::from_config(StemmerConfig {
            data_dir: dir.as_ref().to_path_buf(),
            ..StemmerConfig::default()
        })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &StemmerConfig {
        &self.config
    }

    /// Stems a single word. The word is used as given, without normalization.
    pub fn stem(&self, word: &str) -> StemResult {
        let mut cascade = Cascade::new(&self.lexicon);
        let resolved = cascade.run(word);
        let attempt = cascade.attempt;

        let classification = if attempt.root_found {
            Classification::Root
        } else if attempt.stopword_found {
            Classification::Stopword
        } else {
            Classification::Unresolved
        };
        trace!("stemmed '{}' -> '{}' ({:?})", word, resolved, classification);

        StemResult {
            original: word.to_string(),
            resolved,
            classification,
            rule: attempt.rule.filter(|_| attempt.root_found),
        }
    }

    /// Normalizes a token of running text and stems it. Returns `None` when
    /// nothing is left after normalization.
    pub fn stem_token(&self, token: &str) -> Option<StemResult> {
        let normalizer = Normalizer::new(&self.lexicon);
        let word = if self.config.normalize {
            normalizer.normalize(token)
        } else {
            token.to_string()
        };
        if word.is_empty() {
            return None;
        }
        if self.config.skip_strange && normalizer.is_strange(&word) {
            debug!("skipping strange word '{}'", word);
            return Some(StemResult::unresolved(&word));
        }
        Some(self.stem(&word))
    }

    /// Splits running text into Arabic tokens and stems each of them.
    pub fn stem_text(&self, text: &str) -> StemmedDocument {
        let mut document = StemmedDocument::new();
        self.stem_text_into(text, &mut document);
        document
    }

    /// Like [`Stemmer::stem_text`], appending to an existing document.
    pub fn stem_text_into(&self, text: &str, document: &mut StemmedDocument) {
        for m in self.token_regex.find_iter(text) {
            if let Some(result) = self.stem_token(m.as_str()) {
                document.push(result);
            }
        }
    }
}

/// Per-call scratch state.
#[derive(Debug, Default, Clone, Copy)]
struct StemAttempt {
    root_found: bool,
    stopword_found: bool,
    /// Set while suffixes are being stripped, so the length dispatch does not
    /// strip suffixes again from inside.
    in_suffixes: bool,
    rule: Option<Rule>,
}

struct Cascade<'a> {
    lexicon: &'a Lexicon,
    attempt: StemAttempt,
}

impl<'a> Cascade<'a> {
    fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            attempt: StemAttempt::default(),
        }
    }

    fn run(&mut self, word: &str) -> String {
        if self.check_stopword(word) {
            return word.to_string();
        }

        let mut word = self.by_length(word);
        if !self.resolved() {
            word = self.strip_definite_article(&word);
        }
        if !self.resolved() {
            word = self.strip_waw(&word);
        }
        if !self.resolved() {
            word = self.strip_suffixes(&word);
        }
        if !self.resolved() {
            word = self.strip_prefixes(&word);
        }
        word
    }

    fn resolved(&self) -> bool {
        self.attempt.root_found || self.attempt.stopword_found
    }

    fn check_stopword(&mut self, word: &str) -> bool {
        let found = self.lexicon.contains(Category::Stopwords, word);
        if found {
            trace!("stopword '{}'", word);
            self.attempt.stopword_found = true;
        }
        found
    }

    fn mark_root(&mut self, root: &str, rule: Rule) {
        trace!("root '{}' via {:?}", root, rule);
        self.attempt.root_found = true;
        self.attempt.rule = Some(rule);
    }

    fn by_length(&mut self, word: &str) -> String {
        let len = word.chars().count();
        if len == 2 {
            return self.two_letters(word);
        }
        if len == 3 && !self.attempt.root_found {
            return self.three_letters(word);
        }

        let mut word = word.to_string();
        if len == 4 {
            self.four_letters(&word);
        }
        if !self.attempt.root_found && len > 2 {
            word = self.match_patterns(&word);
        }
        if !self.resolved() && !self.attempt.in_suffixes {
            word = self.strip_suffixes(&word);
        }
        word
    }

    /// Checks the stopword list, then runs the length dispatch on a word
    /// left over after stripping an affix.
    fn descend(&mut self, stripped: &str) -> String {
        if self.check_stopword(stripped) {
            return stripped.to_string();
        }
        self.by_length(stripped)
    }

    fn restore(&mut self, restoration: &dyn Restoration, stem: &str) -> Option<String> {
        let root = restoration.restore(stem, self.lexicon)?;
        self.mark_root(&root, restoration.rule());
        Some(root)
    }

    fn two_letters(&mut self, word: &str) -> String {
        for restoration in rules::two_letter_restorations() {
            if let Some(root) = self.restore(restoration, word) {
                return root;
            }
        }
        word.to_string()
    }

    fn three_letters(&mut self, word: &str) -> String {
        let c: Vec<char> = word.chars().collect();
        if c.len() != 3 {
            return word.to_string();
        }

        let mut candidate: Option<(String, Rule)> = None;

        if HAMZA_SEATS.contains(&c[0]) {
            candidate = Some((
                [HAMZA_ON_ALIF, c[1], c[2]].iter().collect(),
                Rule::HamzaSeat,
            ));
        }

        if TRAILING_WEAK.contains(&c[2]) {
            let stem: String = [c[0], c[1]].iter().collect();
            if let Some(root) = self.restore(&LAST_WEAK, &stem) {
                return root;
            }
            candidate = None;
        }

        if MEDIAL_WEAK.contains(&c[1]) {
            let stem: String = [c[0], c[2]].iter().collect();
            if let Some(root) = self.restore(&MIDDLE_WEAK, &stem) {
                return root;
            }
            candidate = None;
        }

        if MEDIAL_HAMZA.contains(&c[1]) {
            let seat = if ALIF_SEAT_FOLLOWERS.contains(&c[2]) {
                ALIF
            } else {
                HAMZA_ON_ALIF
            };
            candidate = Some(([c[0], seat, c[2]].iter().collect(), Rule::HamzaSeat));
        }

        if c[2] == SHADDA {
            candidate = Some(([c[0], c[1], c[1]].iter().collect(), Rule::Shadda));
        }

        if self.lexicon.contains(Category::TriRoots, word) {
            self.mark_root(word, Rule::Direct);
            return word.to_string();
        }
        if let Some((root, rule)) = candidate {
            if self.lexicon.contains(Category::TriRoots, &root) {
                self.mark_root(&root, rule);
                return root;
            }
        }
        word.to_string()
    }

    fn four_letters(&mut self, word: &str) {
        if self.lexicon.contains(Category::QuadRoots, word) {
            self.mark_root(word, Rule::Quadriliteral);
        }
    }

    fn match_patterns(&mut self, word: &str) -> String {
        let mut chars: Vec<char> = word.chars().collect();
        if let Some(first) = chars.first_mut() {
            if PATTERN_HAMZA.contains(first) {
                *first = ALIF;
            }
        }
        let len = chars.len();

        let lexicon = self.lexicon;
        for pattern in lexicon.words(Category::TriPatt) {
            let template: Vec<char> = pattern.chars().collect();
            if template.len() != len {
                continue;
            }

            let same = template
                .iter()
                .zip(&chars)
                .filter(|(t, w)| t == w && !rules::is_pattern_slot(**t))
                .count();

            // six-letter augmented forms whose last radical repeats
            if len == 6 && chars[3] == chars[5] && same == 2 {
                let core: String = chars[1..4].iter().collect();
                let root = self.three_letters(&core);
                if self.attempt.root_found {
                    return root;
                }
            }

            if same + 3 >= len {
                let core: String = template
                    .iter()
                    .zip(&chars)
                    .filter(|(t, _)| rules::is_pattern_slot(**t))
                    .map(|(_, w)| *w)
                    .collect();
                let root = self.three_letters(&core);
                if self.attempt.root_found {
                    return root;
                }
            }
        }
        chars.into_iter().collect()
    }

    fn strip_suffixes(&mut self, word: &str) -> String {
        debug!("checking suffixes of '{}'", word);
        self.attempt.in_suffixes = true;

        let lexicon = self.lexicon;
        for suffix in lexicon.words(Category::Suffixes) {
            if let Some(stem) = word.strip_suffix(suffix.as_str()) {
                let stem = self.descend(stem);
                if self.resolved() {
                    self.attempt.in_suffixes = false;
                    return stem;
                }
            }
        }
        self.attempt.in_suffixes = false;
        word.to_string()
    }

    fn strip_prefixes(&mut self, word: &str) -> String {
        debug!("checking prefixes of '{}'", word);
        let lexicon = self.lexicon;
        // a failed prefix leaves its remainder in place, so stacked
        // proclitics are peeled off in list order
        let mut current = word.to_string();
        for prefix in lexicon.words(Category::Prefixes) {
            if let Some(stem) = current.strip_prefix(prefix.as_str()) {
                let stem = self.descend(stem);
                if self.resolved() {
                    return stem;
                }
                current = stem;
            }
        }
        word.to_string()
    }

    fn strip_definite_article(&mut self, word: &str) -> String {
        debug!("checking definite article of '{}'", word);
        let lexicon = self.lexicon;
        let mut last_attempt = None;
        for article in lexicon.words(Category::DefiniteArticle) {
            if let Some(rest) = word.strip_prefix(article.as_str()) {
                let rest = self.descend(rest);
                if self.resolved() {
                    return rest;
                }
                last_attempt = Some(rest);
            }
        }
        // TODO: decide whether an unconfirmed remainder should be kept only
        // because it is longer than three letters.
        match last_attempt {
            Some(rest) if rest.chars().count() > 3 => rest,
            _ => word.to_string(),
        }
    }

    fn strip_waw(&mut self, word: &str) -> String {
        let Some(rest) = word.strip_prefix(WAW) else {
            return word.to_string();
        };
        if word.chars().count() <= 3 {
            return word.to_string();
        }
        let rest = self.descend(rest);
        if self.resolved() {
            return rest;
        }
        word.to_string()
    }
}
