use super::language::Language;

/// Text kept in every supported language.
///
/// The per-language values are only reachable through [`LocalizedString::get`],
/// so callers always resolve against a [`Language`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedString<T = String> {
    en: T,
    ru: T,
    fr: T,
}

impl<T> LocalizedString<T> {
    pub fn new(en: T, ru: T, fr: T) -> Self {
        Self { en, ru, fr }
    }

    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::Ru => &self.ru,
            Language::Fr => &self.fr,
            Language::En => &self.en,
        }
    }
}

impl LocalizedString<Option<String>> {
    pub fn resolve(&self, language: Language) -> Option<String> {
        self.get(language).clone()
    }
}

impl LocalizedString<String> {
    pub fn resolve(&self, language: Language) -> String {
        self.get(language).clone()
    }
}
