use serde::Serialize;

use crate::source::SourceError;

/// Provider-agnostic outcome of a word lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub headword: String,
    pub language: String,
    pub entries: Vec<Entry>,
}

/// One grammatical or usage grouping of a lookup result ("verb", "noun", ...)
///
/// An entry may carry dictionary-style content, thesaurus-style content, or
/// both, depending on what the upstream provider returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub category: String,
    pub dictionary: Option<DictionaryEntry>,
    pub thesaurus: Option<ThesaurusEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DictionaryEntry {
    pub pronunciations: Vec<Pronunciation>,
    pub senses: Vec<Sense>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThesaurusEntry {
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pronunciation {
    pub text: String,
    pub audio_url: Option<String>,
}

/// A single meaning within a dictionary-style entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sense {
    pub definitions: Vec<String>,
    pub examples: Vec<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

impl Entry {
    pub fn dictionary(category: impl Into<String>, entry: DictionaryEntry) -> Self {
        Self {
            category: category.into(),
            dictionary: Some(entry),
            thesaurus: None,
        }
    }

    pub fn thesaurus(category: impl Into<String>, entry: ThesaurusEntry) -> Self {
        Self {
            category: category.into(),
            dictionary: None,
            thesaurus: Some(entry),
        }
    }

    /// Whether any of the entry's variants carries something to show
    pub fn has_content(&self) -> bool {
        self.dictionary.as_ref().is_some_and(DictionaryEntry::has_content)
            || self.thesaurus.as_ref().is_some_and(ThesaurusEntry::has_content)
    }
}

impl DictionaryEntry {
    pub fn has_content(&self) -> bool {
        self.pronunciations.iter().any(Pronunciation::has_content)
            || self.senses.iter().any(Sense::has_content)
    }
}

impl ThesaurusEntry {
    pub fn has_content(&self) -> bool {
        non_blank(&self.synonyms) || non_blank(&self.antonyms)
    }
}

impl Pronunciation {
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty()
            || self.audio_url.as_deref().is_some_and(|url| !url.trim().is_empty())
    }
}

impl Sense {
    pub fn has_content(&self) -> bool {
        non_blank(&self.definitions)
            || non_blank(&self.examples)
            || non_blank(&self.synonyms)
            || non_blank(&self.antonyms)
    }
}

fn non_blank(values: &[String]) -> bool {
    values.iter().any(|value| !value.trim().is_empty())
}

/// Reject results that carry nothing meaningful for `result.headword`
pub fn validate_result(result: &LookupResult) -> Result<(), SourceError> {
    if result.entries.iter().any(Entry::has_content) {
        return Ok(());
    }

    Err(SourceError::EmptyResult {
        word: result.headword.clone(),
    })
}

/// Validate a freshly parsed result and hand it back on success
///
/// Every provider funnels its parsed output through here so that an empty
/// upstream response always surfaces as [`SourceError::EmptyResult`].
pub fn validate_and_return_result(result: LookupResult) -> Result<LookupResult, SourceError> {
    validate_result(&result)?;
    Ok(result)
}
