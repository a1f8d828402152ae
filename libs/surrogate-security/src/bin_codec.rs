//! Versioned binary encoding of [`Authentication`] for hand-off between processes.
//!
//! Layout: one version byte followed by the `postcard` payload. Credentials
//! are never part of the payload.

use thiserror::Error;

use crate::authentication::Authentication;

pub const AUTH_BIN_VERSION: u8 = 1;

#[derive(Debug, Error)]
pub enum AuthEncodeError {
    #[error("failed to encode authentication: {0}")]
    Postcard(#[from] postcard::Error),
}

#[derive(Debug, Error)]
pub enum AuthDecodeError {
    #[error("authentication payload is empty")]
    Empty,

    #[error("unsupported authentication payload version {found} (expected {expected})")]
    UnsupportedVersion { found: u8, expected: u8 },

    #[error("failed to decode authentication: {0}")]
    Postcard(#[from] postcard::Error),
}

/// Encode `auth` with the current version prefix.
///
/// # Errors
///
/// Returns [`AuthEncodeError`] if serialization fails.
pub fn encode_bin(auth: &Authentication) -> Result<Vec<u8>, AuthEncodeError> {
    let payload = postcard::to_allocvec(auth)?;
    let mut out = Vec::with_capacity(payload.len() + 1);
    out.push(AUTH_BIN_VERSION);
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Decode a payload produced by [`encode_bin`].
///
/// # Errors
///
/// Returns [`AuthDecodeError`] on an empty buffer, a version mismatch, or a
/// malformed payload.
pub fn decode_bin(bytes: &[u8]) -> Result<Authentication, AuthDecodeError> {
    let (&version, payload) = bytes.split_first().ok_or(AuthDecodeError::Empty)?;
    if version != AUTH_BIN_VERSION {
        return Err(AuthDecodeError::UnsupportedVersion {
            found: version,
            expected: AUTH_BIN_VERSION,
        });
    }
    Ok(postcard::from_bytes(payload)?)
}
