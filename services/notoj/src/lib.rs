//! # Notoj (Personal Notes with a Gated Private Partition)
//!
//! `notoj` is a personal notes service. Users register and authenticate with
//! an email/password pair, receive a signed, time-limited session token, and
//! manage notes that are either public (default dashboard) or private.
//!
//! ## Authentication
//!
//! Login and registration issue a stateless HS256 session token carrying the
//! subject id, email, and expiry. There is no server-side session table: a
//! token is valid exactly when its signature verifies against the process-wide
//! secret and it has not expired. No refresh, no revocation.
//!
//! ## Private partition
//!
//! Notes flagged private are gated behind a second, independently-set
//! "private password". The gate is a per-request re-proof of knowledge: the
//! server never records an "unlocked" state, and clients re-validate through
//! `POST /auth/validate-private-password` before showing private notes.
//!
//! ## Authorization
//!
//! Every note operation is scoped to the authenticated owner. Requests for
//! notes that are missing or owned by someone else return `404 Not Found`
//! rather than `403 Forbidden` to prevent resource enumeration.

pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        // Should be a hex string (full SHA-1 is 40 chars, but could be short)
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }
}
