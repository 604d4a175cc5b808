// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

//! HMAC-based extract-and-expand key derivation.
//!
//! https://datatracker.ietf.org/doc/html/rfc5869

use hkdf::Hkdf;
use serde::{Deserialize, Serialize};
use sha2::{Sha256, Sha384, Sha512};
use thiserror::Error;

/// The HMAC used by [`hkdf`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacAlgorithm {
    /// HMAC with SHA-256
    HmacSha256,

    /// HMAC with SHA-384
    HmacSha384,

    /// HMAC with SHA-512
    HmacSha512,
}

impl MacAlgorithm {
    /// Output size of the underlying hash in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            Self::HmacSha256 => 32,
            Self::HmacSha384 => 48,
            Self::HmacSha512 => 64,
        }
    }
}

/// Describes errors that can occur during key derivation.
#[derive(Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum HkdfError {
    /// More output was requested than HKDF can produce.
    #[error("requested {requested} bytes, at most {max} can be derived")]
    OutputTooLong {
        /// Requested output length.
        requested: usize,

        /// `255 × digest length`.
        max: usize,
    },
}

/// Derive `length` bytes from the input keying material `ikm`.
///
/// An empty `salt` stands for a string of zeros as long as the digest.
/// Fails if `length` exceeds `255 × digest length`.
pub fn hkdf(
    alg: MacAlgorithm,
    ikm: &[u8],
    salt: &[u8],
    info: &[u8],
    length: usize,
) -> Result<Vec<u8>, HkdfError> {
    let max = 255 * alg.digest_len();
    let too_long = |_| HkdfError::OutputTooLong {
        requested: length,
        max,
    };

    // An empty salt means HashLen zeros
    let salt = (!salt.is_empty()).then_some(salt);
    let mut okm = vec![0u8; length];

    match alg {
        MacAlgorithm::HmacSha256 => Hkdf::<Sha256>::new(salt, ikm)
            .expand(info, &mut okm)
            .map_err(too_long)?,
        MacAlgorithm::HmacSha384 => Hkdf::<Sha384>::new(salt, ikm)
            .expand(info, &mut okm)
            .map_err(too_long)?,
        MacAlgorithm::HmacSha512 => Hkdf::<Sha512>::new(salt, ikm)
            .expand(info, &mut okm)
            .map_err(too_long)?,
    }

    Ok(okm)
}
