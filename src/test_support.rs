use crate::category::Category;
use crate::lexicon::Lexicon;

pub(crate) fn fixture_text(category: Category) -> &'static str {
    match category {
        Category::DefiniteArticle => "ال وال بال كال فال لل",
        Category::Duplicate => "مد شد",
        Category::FirstWaw => "عد صل",
        Category::FirstYah => "بس",
        Category::LastAlif => "دع",
        Category::LastHamza => "بد",
        Category::LastMaksoura => "هد",
        Category::LastYah => "رم مش",
        Category::MidWaw => "قل قم",
        Category::MidYah => "بع سر",
        Category::Prefixes => "ف ب ل ك س و ي ت ن",
        Category::Punctuation => "، ؛ ؟ . , ! :",
        Category::QuadRoots => "زلزل دحرج ترجم",
        Category::Stopwords => "في من على الذي هذا إلى عن هو",
        Category::Suffixes => "ها ات ون ين ان ة ه ي ا ك ت نا هم",
        Category::TriPatt => "فاعل فعال فعيل مفعل تفاعل افتعل مفاعل مفعول استفعل مستفعل افتعال",
        Category::TriRoots => "كتب درس قول بيع سأل سار أخذ مدد وعد رمي علم كبب",
        Category::Diacritics => "\u{064e} \u{064f} \u{0650} \u{0652} \u{064b} \u{064c} \u{064d} \u{0651}",
        Category::Strange => "ممممم",
    }
}

pub(crate) fn fixture_lexicon() -> Lexicon {
    Lexicon::from_source(|category| Ok(fixture_text(category).to_string()))
        .expect("fixture lexicon loads")
}

/// The fixture lexicon with one category replaced.
pub(crate) fn fixture_lexicon_with(category: Category, text: &'static str) -> Lexicon {
    Lexicon::from_source(|c| {
        let body = if c == category { text } else { fixture_text(c) };
        Ok(body.to_string())
    })
    .expect("fixture lexicon loads")
}
