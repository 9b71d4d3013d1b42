use anyhow::{anyhow, Context, Result};
use clap::Parser;
use quote_clip::cli::Cli;
use quote_clip::clipboard::{copy_quote, ArboardClipboard};
use quote_clip::config::Config;
use quote_clip::error::QuoteError;
use quote_clip::quotes::QuoteStore;
use quote_clip::utils::paths::resolve_quote_file;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print().ok();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let expected = err
                .chain()
                .find_map(|cause| cause.downcast_ref::<QuoteError>())
                .is_some_and(QuoteError::is_expected);
            if expected {
                eprintln!("Error: {err:#}");
            } else {
                eprintln!("Error: {err:?}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load().unwrap_or_else(|err| {
        warn!("Ignoring config: {err:#}");
        Config::default()
    });

    let quote_file = resolve_quote_file(cli.quote_file.as_deref(), &config);
    debug!("Using quote file {}", quote_file.display());

    let mut store = QuoteStore::new();
    store.load(&quote_file).with_context(|| {
        format!("Quote file '{}' is not a valid quote file", quote_file.display())
    })?;

    let quote = store
        .random_quote()
        .ok_or_else(|| anyhow!("No quote to pick"))?;

    let mut clipboard = ArboardClipboard::new(cli.wait || config.hold_clipboard)?;
    copy_quote(&mut clipboard, quote, None)?;

    Ok(())
}
