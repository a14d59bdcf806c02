use anyhow::{Context, Result};
use clap::{Arg, Command};

pub const ARG_SESSION_SECRET: &str = "session-secret";
pub const ARG_SESSION_TTL_SECONDS: &str = "session-ttl-seconds";
pub const ARG_FRONTEND_BASE_URL: &str = "frontend-base-url";

pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_SESSION_SECRET)
                .long("session-secret")
                .help("Secret used to sign and verify session tokens")
                .env("NOTOJ_SESSION_SECRET")
                .required(true),
        )
        .arg(
            Arg::new(ARG_SESSION_TTL_SECONDS)
                .long("session-ttl-seconds")
                .help("Session token TTL in seconds")
                .env("NOTOJ_SESSION_TTL_SECONDS")
                .default_value("3600")
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new(ARG_FRONTEND_BASE_URL)
                .long("frontend-base-url")
                .help("Frontend origin allowed by CORS")
                .env("NOTOJ_FRONTEND_BASE_URL")
                .default_value("http://localhost:5173"),
        )
}

pub struct Options {
    pub session_secret: String,
    pub session_ttl_seconds: i64,
    pub frontend_base_url: String,
}

impl Options {
    /// Extract auth options from parsed matches.
    ///
    /// # Errors
    /// Returns an error if a required argument is missing.
    pub fn parse(matches: &clap::ArgMatches) -> Result<Self> {
        let session_secret = matches
            .get_one::<String>(ARG_SESSION_SECRET)
            .cloned()
            .context("missing required argument: --session-secret")?;
        let session_ttl_seconds = matches
            .get_one::<i64>(ARG_SESSION_TTL_SECONDS)
            .copied()
            .unwrap_or(3600);
        let frontend_base_url = matches
            .get_one::<String>(ARG_FRONTEND_BASE_URL)
            .cloned()
            .context("missing required argument: --frontend-base-url")?;

        Ok(Self {
            session_secret,
            session_ttl_seconds,
            frontend_base_url,
        })
    }
}
