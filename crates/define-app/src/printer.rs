use std::io::{self, Write};

use define_core::{DictionaryEntry, Entry, LookupResult, Sense, ThesaurusEntry};

use crate::writer::IndentWriter;

/// Pretty print a validated lookup result
pub fn print_result<W: Write>(out: &mut IndentWriter<W>, result: &LookupResult) -> io::Result<()> {
    out.write_padded_line(&result.headword, 1)?;

    out.indent_writes(1, |out| {
        for entry in &result.entries {
            print_entry(out, entry)?;
        }
        Ok(())
    })
}

pub fn print_source_name<W: Write>(out: &mut IndentWriter<W>, name: &str) -> io::Result<()> {
    out.write_line(&format!("Results provided by: {name}"))?;
    out.new_line()
}

fn print_entry<W: Write>(out: &mut IndentWriter<W>, entry: &Entry) -> io::Result<()> {
    if !entry.has_content() {
        return Ok(());
    }

    let nested = if entry.category.is_empty() {
        0
    } else {
        out.write_line(&entry.category)?;
        1
    };

    out.indent_writes(nested, |out| {
        if let Some(dictionary) = &entry.dictionary {
            print_dictionary(out, dictionary)?;
        }
        if let Some(thesaurus) = &entry.thesaurus {
            print_thesaurus(out, thesaurus)?;
        }
        Ok(())
    })?;

    out.new_line()
}

fn print_dictionary<W: Write>(out: &mut IndentWriter<W>, entry: &DictionaryEntry) -> io::Result<()> {
    for pronunciation in entry.pronunciations.iter().filter(|p| p.has_content()) {
        match (pronunciation.text.as_str(), pronunciation.audio_url.as_deref()) {
            ("", Some(url)) => out.write_line(&format!("({url})"))?,
            (text, Some(url)) if !url.is_empty() => out.write_line(&format!("/{text}/ ({url})"))?,
            (text, _) => out.write_line(&format!("/{text}/"))?,
        }
    }

    let senses = entry.senses.iter().filter(|sense| sense.has_content());
    for (number, sense) in senses.enumerate() {
        print_sense(out, number + 1, sense)?;
    }

    Ok(())
}

fn print_sense<W: Write>(out: &mut IndentWriter<W>, number: usize, sense: &Sense) -> io::Result<()> {
    let definition = joined(&sense.definitions, "; ");
    out.write_line(format!("{number}. {definition}").trim_end())?;

    out.indent_writes(1, |out| {
        for example in sense.examples.iter().filter(|e| !e.trim().is_empty()) {
            out.write_line(&format!("\"{example}\""))?;
        }
        print_related(out, "Synonyms", &sense.synonyms)?;
        print_related(out, "Antonyms", &sense.antonyms)
    })
}

fn print_thesaurus<W: Write>(out: &mut IndentWriter<W>, entry: &ThesaurusEntry) -> io::Result<()> {
    print_related(out, "Synonyms", &entry.synonyms)?;
    print_related(out, "Antonyms", &entry.antonyms)
}

fn print_related<W: Write>(out: &mut IndentWriter<W>, label: &str, words: &[String]) -> io::Result<()> {
    let words = joined(words, ", ");
    if words.is_empty() {
        return Ok(());
    }
    out.write_line(&format!("{label}: {words}"))
}

fn joined(values: &[String], separator: &str) -> String {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
