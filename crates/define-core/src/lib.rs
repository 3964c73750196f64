pub mod http;
pub mod result;
pub mod source;

pub use result::{
    DictionaryEntry, Entry, LookupResult, Pronunciation, Sense, ThesaurusEntry,
    validate_and_return_result, validate_result,
};
pub use source::{Source, SourceError};
