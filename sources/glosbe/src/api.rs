use async_trait::async_trait;
use define_core::http::{JSON_MIME_TYPE, validate_http_response};
use define_core::{
    DictionaryEntry, Entry, LookupResult, Sense, Source, SourceError, ThesaurusEntry,
    validate_and_return_result,
};
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::NAME;

const API_URL: &str = "https://glosbe.com/gapi/translate?format=json&from=en&dest=en";

/// Query parameter carrying the word to define
const WORD_PARAMETER: &str = "phrase";

#[derive(Clone)]
pub struct GlosbeSource {
    client: reqwest::Client,
}

impl GlosbeSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Source for GlosbeSource {
    fn name(&self) -> &str {
        NAME
    }

    async fn define(&self, word: &str) -> Result<LookupResult, SourceError> {
        tracing::debug!("Glosbe lookup for {word:?}");

        let response = self
            .client
            .get(API_URL)
            .query(&[(WORD_PARAMETER, word)])
            .header(ACCEPT, JSON_MIME_TYPE)
            .send()
            .await?;

        validate_http_response(&response, &[JSON_MIME_TYPE], &[])?;

        let body = response.bytes().await?;
        let result: ApiResult = serde_json::from_slice(&body)?;

        if result.tuc.is_empty() {
            return Err(SourceError::EmptyResult {
                word: word.to_string(),
            });
        }

        validate_and_return_result(result.into_lookup_result())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiResult {
    tuc: Vec<Tuple>,
    phrase: String,
    dest: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Tuple {
    meanings: Vec<Phrase>,
    phrase: Option<Phrase>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Phrase {
    text: String,
}

impl ApiResult {
    /// Tuples without a phrase of their own, or whose phrase is the looked
    /// up one, hold definitions. Any other phrase is a synonym.
    fn into_lookup_result(self) -> LookupResult {
        let mut senses = Vec::new();
        let mut synonyms = Vec::new();
        let headword = self.phrase.to_lowercase();

        for tuple in self.tuc {
            match tuple.phrase {
                Some(phrase) if phrase.text.to_lowercase() != headword => {
                    if !phrase.text.is_empty() {
                        synonyms.push(phrase.text);
                    }
                }
                _ => senses.extend(tuple.meanings.into_iter().map(|meaning| Sense {
                    definitions: vec![meaning.text],
                    ..Sense::default()
                })),
            }
        }

        let entry = Entry {
            category: String::new(),
            dictionary: Some(DictionaryEntry {
                pronunciations: vec![],
                senses,
            }),
            thesaurus: Some(ThesaurusEntry {
                synonyms,
                antonyms: vec![],
            }),
        };

        LookupResult {
            headword: self.phrase,
            language: self.dest,
            entries: vec![entry],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "result": "ok",
        "tuc": [
            {
                "phrase": {"text": "test", "language": "en"},
                "meanings": [
                    {"language": "en", "text": "a challenge, trial"},
                    {"language": "en", "text": "an examination"}
                ],
                "authors": [1]
            },
            {
                "meanings": [{"language": "en", "text": "a cupel or cupelling hearth"}],
                "authors": [2]
            },
            {
                "phrase": {"text": "exam", "language": "en"},
                "meanings": [{"language": "en", "text": "ignored"}]
            },
            {
                "phrase": {"text": "", "language": "en"}
            }
        ],
        "phrase": "Test",
        "from": "en",
        "dest": "en"
    }"#;

    #[test]
    fn test_converts_tuples() {
        let api: ApiResult = serde_json::from_str(RESPONSE).unwrap();
        let result = api.into_lookup_result();

        assert_eq!(result.headword, "Test");
        assert_eq!(result.language, "en");
        assert_eq!(result.entries.len(), 1);

        let entry = &result.entries[0];
        let definitions: Vec<_> = entry
            .dictionary
            .as_ref()
            .unwrap()
            .senses
            .iter()
            .flat_map(|sense| sense.definitions.clone())
            .collect();
        assert_eq!(
            definitions,
            vec![
                "a challenge, trial",
                "an examination",
                "a cupel or cupelling hearth"
            ]
        );

        assert_eq!(entry.thesaurus.as_ref().unwrap().synonyms, vec!["exam"]);
        assert!(validate_and_return_result(result.clone()).is_ok());
    }

    #[test]
    fn test_only_blank_meanings_is_empty() {
        let api: ApiResult =
            serde_json::from_str(r#"{"tuc": [{"meanings": [{"text": ""}]}], "phrase": "zzz"}"#)
                .unwrap();

        let err = validate_and_return_result(api.into_lookup_result()).unwrap_err();
        assert!(matches!(err, SourceError::EmptyResult { ref word } if word == "zzz"));
    }

    #[test]
    fn test_headword_match_folds_unicode_case() {
        let api: ApiResult = serde_json::from_str(
            r#"{
                "tuc": [
                    {"phrase": {"text": "éclair"}, "meanings": [{"text": "a pastry"}]},
                    {"phrase": {"text": "ÉCLAIR"}, "meanings": [{"text": "a flash"}]}
                ],
                "phrase": "Éclair"
            }"#,
        )
        .unwrap();

        let result = api.into_lookup_result();
        let entry = &result.entries[0];

        assert_eq!(entry.dictionary.as_ref().unwrap().senses.len(), 2);
        assert!(entry.thesaurus.as_ref().unwrap().synonyms.is_empty());
    }
}
