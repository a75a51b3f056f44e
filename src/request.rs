//! Request fingerprints used as cache keys.

use std::fmt;

use sha2::{Digest, Sha256};

/// Deterministic fingerprint of an image request.
///
/// Derived from the source URL plus the processing parameters applied to it,
/// so differently processed variants of one URL occupy distinct cache slots.
/// Equality and hashing are stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestKey(String);

impl RequestKey {
    /// Fingerprint a URL together with an optional processing key.
    #[must_use]
    pub fn new(url: &str, processing: Option<&str>) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        if let Some(processing) = processing {
            // Separator keeps "ab"+"c" distinct from "a"+"bc".
            hasher.update([0u8]);
            hasher.update(processing.as_bytes());
        }
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Fingerprint a bare URL with no processing applied.
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        Self::new(url, None)
    }

    /// The full hex digest.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short prefix is plenty for logs.
        write!(f, "{}", &self.0[..8])
    }
}
