use async_trait::async_trait;
use define_core::http::{JSON_MIME_TYPE, validate_http_response};
use define_core::{
    DictionaryEntry, Entry, LookupResult, Pronunciation, Sense, Source, SourceError,
    validate_and_return_result,
};
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::NAME;

const ENTRIES_URL: &str = "https://od-api.oxforddictionaries.com/api/v2/entries/en-us";

const APP_ID_HEADER: &str = "app_id";
const APP_KEY_HEADER: &str = "app_key";

#[derive(Clone)]
pub struct OxfordSource {
    client: reqwest::Client,
    app_id: String,
    app_key: String,
}

impl OxfordSource {
    pub fn new(client: reqwest::Client, app_id: String, app_key: String) -> Self {
        Self {
            client,
            app_id,
            app_key,
        }
    }
}

#[async_trait]
impl Source for OxfordSource {
    fn name(&self) -> &str {
        NAME
    }

    async fn define(&self, word: &str) -> Result<LookupResult, SourceError> {
        tracing::debug!("Oxford lookup for {word:?}");

        let mut request = self
            .client
            .get(ENTRIES_URL)
            .header(ACCEPT, JSON_MIME_TYPE)
            .header(APP_ID_HEADER, &self.app_id)
            .header(APP_KEY_HEADER, &self.app_key)
            .build()?;

        // The word is a path segment, escaped by the URL itself
        if let Ok(mut segments) = request.url_mut().path_segments_mut() {
            segments.push(&word.to_lowercase());
        }

        let response = self.client.execute(request).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(SourceError::EmptyResult {
                word: word.to_string(),
            });
        }

        validate_http_response(&response, &[JSON_MIME_TYPE], &[])?;

        let body = response.bytes().await?;
        let result: ApiResult = serde_json::from_slice(&body)?;

        validate_and_return_result(result.into_lookup_result(word))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ApiResult {
    word: String,
    results: Vec<HeadwordEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct HeadwordEntry {
    word: String,
    language: String,
    lexical_entries: Vec<LexicalEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LexicalEntry {
    lexical_category: Option<Label>,
    pronunciations: Vec<ApiPronunciation>,
    entries: Vec<ApiEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiEntry {
    pronunciations: Vec<ApiPronunciation>,
    senses: Vec<ApiSense>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ApiPronunciation {
    phonetic_spelling: String,
    audio_file: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiSense {
    definitions: Vec<String>,
    examples: Vec<Label>,
    synonyms: Vec<Label>,
    antonyms: Vec<Label>,
    subsenses: Vec<ApiSense>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Label {
    text: String,
}

fn texts(labels: Vec<Label>) -> Vec<String> {
    labels.into_iter().map(|label| label.text).collect()
}

impl ApiSense {
    /// Flatten a sense and its subsenses, parent first
    fn flatten_into(self, senses: &mut Vec<Sense>) {
        senses.push(Sense {
            definitions: self.definitions,
            examples: texts(self.examples),
            synonyms: texts(self.synonyms),
            antonyms: texts(self.antonyms),
        });

        for subsense in self.subsenses {
            subsense.flatten_into(senses);
        }
    }
}

impl From<ApiPronunciation> for Pronunciation {
    fn from(pronunciation: ApiPronunciation) -> Self {
        Self {
            text: pronunciation.phonetic_spelling,
            audio_url: pronunciation.audio_file,
        }
    }
}

impl ApiResult {
    fn into_lookup_result(self, word: &str) -> LookupResult {
        let mut headword = self.word;
        let mut language = String::new();
        let mut entries = Vec::new();

        for result in self.results {
            if headword.is_empty() {
                headword = result.word;
            }
            if language.is_empty() {
                language = result.language;
            }

            for lexical in result.lexical_entries {
                let category = lexical
                    .lexical_category
                    .map(|label| label.text)
                    .unwrap_or_default();

                let mut pronunciations: Vec<Pronunciation> =
                    lexical.pronunciations.into_iter().map(Into::into).collect();
                let mut senses = Vec::new();

                for entry in lexical.entries {
                    pronunciations.extend(entry.pronunciations.into_iter().map(Into::into));
                    for sense in entry.senses {
                        sense.flatten_into(&mut senses);
                    }
                }

                entries.push(Entry::dictionary(
                    category,
                    DictionaryEntry {
                        pronunciations,
                        senses,
                    },
                ));
            }
        }

        if headword.is_empty() {
            headword = word.to_string();
        }

        LookupResult {
            headword,
            language,
            entries,
        }
    }
}
