use std::path::PathBuf;

use clap::{Command, CommandFactory, Parser};
use define_config::Configuration;
use define_registry::Registry;

/// A command-line dictionary (thesaurus) app
#[derive(Debug, Parser)]
#[command(name = "define", version, override_usage = "define [<options>...] <word>")]
pub struct Cli {
    /// The word to define
    pub word: Option<String>,

    /// The location of the config file to use
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// The number of spaces to indent output by
    #[arg(long, value_name = "SIZE")]
    pub indent_size: Option<u32>,

    /// The preferred source to use, if available
    #[arg(long, value_name = "SOURCE")]
    pub preferred_source: Option<String>,

    /// Print the effective configuration and exit
    #[arg(long, conflicts_with = "list_sources")]
    pub print_config: bool,

    /// List the available sources and exit
    #[arg(long)]
    pub list_sources: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    PrintConfig,
    ListSources,
    DefineWord(String),
    Usage,
}

/// The base command plus every provider's flags
pub fn command(registry: &Registry) -> Command {
    registry.declare_flags(Cli::command())
}

impl Cli {
    pub fn action(&self) -> Action {
        if self.print_config {
            return Action::PrintConfig;
        }

        if self.list_sources {
            return Action::ListSources;
        }

        match self.word.as_deref().map(str::trim) {
            Some(word) if !word.is_empty() => Action::DefineWord(word.to_string()),
            _ => Action::Usage,
        }
    }

    /// The highest priority configuration layer
    pub fn flag_layer(&self) -> Configuration {
        Configuration::new(
            self.indent_size.unwrap_or_default(),
            self.preferred_source.clone().unwrap_or_default(),
        )
        .with_config_file_location(self.config_file.clone())
    }
}
