use std::io;
use std::process::ExitCode;

use anyhow::{Context, anyhow, bail};
use clap::FromArgMatches;
use define_config::Configuration;
use define_core::validate_result;
use define_registry::Registry;
use tracing_subscriber::EnvFilter;

mod actions;
mod cli;
mod printer;
mod writer;

use self::cli::{Action, Cli};
use self::writer::IndentWriter;

const DEFAULT_CONFIG_FILE: &str = "~/.define.conf.json";
const DEFAULT_INDENTATION_SIZE: u32 = 2;
const DEFAULT_PREFERRED_SOURCE: &str = define_source_glosbe::JSON_KEY;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let mut indentation_size = DEFAULT_INDENTATION_SIZE;

    match run(&mut indentation_size).await {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!("exiting with error: {e:?}");
            let mut stderr = IndentWriter::new(io::stderr().lock(), indentation_size);
            let _ = actions::print_error(&mut stderr, &e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Every compiled-in provider
fn providers() -> anyhow::Result<Registry> {
    let mut registry = Registry::new();
    define_source_glosbe::register(&mut registry)?;
    define_source_oxford::register(&mut registry)?;
    Ok(registry)
}

async fn run(indentation_size: &mut u32) -> anyhow::Result<ExitCode> {
    let registry = providers()?;

    if registry.is_empty() {
        bail!("no registered source providers");
    }

    let mut command = cli::command(&registry);
    let matches = command.clone().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let flags = cli
        .flag_layer()
        .with_provider_configs(registry.configure_providers(&matches));
    let defaults = Configuration::new(DEFAULT_INDENTATION_SIZE, DEFAULT_PREFERRED_SOURCE);

    let mut conf = Configuration::from_runtime(
        flags,
        Configuration::from_env(),
        defaults,
        DEFAULT_CONFIG_FILE,
        &registry,
    )?;
    *indentation_size = conf.indentation_size;

    conf.finalize(&registry);
    tracing::debug!("preferred source: {:?}", conf.preferred_source);

    match cli.action() {
        Action::PrintConfig => {
            let mut out = IndentWriter::new(io::stdout().lock(), conf.indentation_size);
            actions::print_config(&mut out, &conf)?;
        }
        Action::ListSources => {
            let mut out = IndentWriter::new(io::stdout().lock(), conf.indentation_size);
            actions::print_sources(&mut out, &registry)?;
        }
        Action::Usage => {
            let help = command.render_help().to_string();
            let mut out = IndentWriter::new(io::stdout().lock(), conf.indentation_size);
            actions::print_usage(&mut out, &help)?;
            return Ok(ExitCode::FAILURE);
        }
        Action::DefineWord(word) => define_word(&registry, &conf, &word).await?,
    }

    Ok(ExitCode::SUCCESS)
}

async fn define_word(registry: &Registry, conf: &Configuration, word: &str) -> anyhow::Result<()> {
    let provider_config = conf.preferred_provider_config()?;
    let name = registry.provider_name(provider_config);

    let source = registry
        .provide(provider_config)
        .map_err(|e| anyhow!("source {name:?} failed to initialize with error: {e}"))?;

    tracing::info!("looking up {word:?} with {name}");

    let result = tokio::select! {
        result = source.define(word) => result?,
        _ = tokio::signal::ctrl_c() => bail!("lookup of {word:?} interrupted"),
    };

    validate_result(&result)?;

    let mut out = IndentWriter::new(io::stdout().lock(), conf.indentation_size);
    printer::print_result(&mut out, &result).context("failed to print result")?;
    printer::print_source_name(&mut out, source.name()).context("failed to print result")?;

    Ok(())
}
