//! Command-line argument dispatch and server initialization.
//!
//! This module parses validated CLI arguments and maps them to the appropriate
//! action, such as starting the API server with its full configuration state.

use crate::cli::actions::{Action, server::Args};
use crate::cli::commands::auth;
use anyhow::{Context, Result};
use secrecy::SecretString;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);
    let dsn = matches
        .get_one::<String>("dsn")
        .cloned()
        .context("missing required argument: --dsn")?;

    let auth_opts = auth::Options::parse(matches)?;

    Ok(Action::Server(Args {
        port,
        dsn,
        session_secret: SecretString::from(auth_opts.session_secret),
        session_ttl_seconds: auth_opts.session_ttl_seconds,
        frontend_base_url: auth_opts.frontend_base_url,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_secret_required() {
        temp_env::with_vars(
            [
                ("NOTOJ_SESSION_SECRET", None::<&str>),
                ("NOTOJ_DSN", Some("postgres://user@localhost:5432/notoj")),
            ],
            || {
                let command = crate::cli::commands::new();
                let result = command.try_get_matches_from(vec!["notoj"]);
                // clap enforces the required argument before dispatch runs.
                assert_eq!(
                    result.map(|_| ()).map_err(|e| e.kind()),
                    Err(clap::error::ErrorKind::MissingRequiredArgument)
                );
            },
        );
    }

    #[test]
    fn dispatch_builds_server_action() -> Result<()> {
        temp_env::with_vars(
            [
                ("NOTOJ_DSN", Some("postgres://user@localhost:5432/notoj")),
                ("NOTOJ_SESSION_SECRET", Some("sekreta")),
                ("NOTOJ_SESSION_TTL_SECONDS", Some("1200")),
                ("NOTOJ_PORT", None),
                ("NOTOJ_FRONTEND_BASE_URL", None),
            ],
            || {
                let command = crate::cli::commands::new();
                let matches = command.get_matches_from(vec!["notoj"]);
                let action = handler(&matches)?;
                let Action::Server(args) = action;
                assert_eq!(args.port, 8080);
                assert_eq!(args.dsn, "postgres://user@localhost:5432/notoj");
                assert_eq!(args.session_ttl_seconds, 1200);
                assert_eq!(args.frontend_base_url, "http://localhost:5173");
                Ok(())
            },
        )
    }
}
