//! ghsync - Declarative GitHub Actions secret synchronization.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ghsync::cli::output;
use ghsync::cli::{execute, Cli};
use ghsync::core::constants::LOG_ENV;
use ghsync::error::{AuthError, ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ghsync=debug")
        } else {
            EnvFilter::new("ghsync=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match execute(cli.command, cli.config) {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            output::error(&e.to_string());
            if let Some(hint) = suggestion(&e) {
                output::hint(hint);
            }
            std::process::exit(1);
        }
    }
}

fn suggestion(e: &Error) -> Option<&'static str> {
    match e {
        Error::Auth(AuthError::NotAuthenticated(_)) => Some("run: gh auth login"),
        Error::Auth(AuthError::ProbeUnavailable { .. }) => {
            Some("install the GitHub CLI: https://cli.github.com")
        }
        Error::Config(ConfigError::MissingRepo) => Some("pass --repo owner/name"),
        Error::Conflict(_) => Some(
            "keys set by an earlier apply are listed under their plain name and \
             conflict on re-run; remove them from the repository or use a different namespace",
        ),
        Error::Probe(_) => Some("check repository access, or drop --abort-on-probe-failure"),
        _ => None,
    }
}
