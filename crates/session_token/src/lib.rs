mod jwt;

pub use jwt::{Error, SessionTokenClaims, SessionTokenHeader, sign_hs256, verify_hs256};
