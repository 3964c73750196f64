use std::io::{self, Write};

use define_config::Configuration;
use define_registry::Registry;

use crate::writer::IndentWriter;

pub fn print_config<W: Write>(out: &mut IndentWriter<W>, conf: &Configuration) -> anyhow::Result<()> {
    out.write_line(&conf.to_json_pretty()?)?;
    Ok(())
}

pub fn print_sources<W: Write>(out: &mut IndentWriter<W>, registry: &Registry) -> io::Result<()> {
    out.indent_writes(1, |out| {
        out.write_padded_line("Available sources:", 1)?;

        for (number, name) in registry.provider_names().iter().enumerate() {
            out.write_line(&format!("{}. {name:?}", number + 1))?;
        }

        out.new_line()
    })
}

pub fn print_usage<W: Write>(out: &mut IndentWriter<W>, help: &str) -> io::Result<()> {
    out.indent_writes(1, |out| {
        out.new_line()?;
        out.write_line(help.trim_end())?;
        out.new_line()
    })
}

/// Report an error the way the CLI shows every failure
pub fn print_error<W: Write>(out: &mut IndentWriter<W>, error: &anyhow::Error) -> io::Result<()> {
    let message = error.to_string();
    let mut chars = message.chars();
    let Some(first) = chars.next() else {
        return Ok(());
    };
    let message = first.to_uppercase().chain(chars).collect::<String>();

    out.indent_writes(1, |out| out.write_padded_line(&message, 1))
}
