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

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::cose::labels::CoseAlgorithm;

/// Describes the ECDSA signature algorithms a document signer may use in a
/// `COSE_Sign1` envelope.
///
/// ISO/IEC 18013-5 restricts issuer and device signatures to ECDSA over the
/// NIST curves (or curves of the same size), each paired with the SHA-2 hash
/// of the same strength.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum SigningAlg {
    /// ECDSA with SHA-256
    Es256,

    /// ECDSA with SHA-384
    Es384,

    /// ECDSA with SHA-512
    Es512,
}

impl SigningAlg {
    /// Return the COSE algorithm identifier for this algorithm.
    pub fn cose_algorithm(&self) -> CoseAlgorithm {
        match self {
            Self::Es256 => CoseAlgorithm::Es256,
            Self::Es384 => CoseAlgorithm::Es384,
            Self::Es512 => CoseAlgorithm::Es512,
        }
    }

    /// Return the size in bytes of each of the `R` and `S` components of a
    /// signature in COSE form.
    pub fn key_size(&self) -> usize {
        match self {
            Self::Es256 => 32,
            Self::Es384 => 48,
            Self::Es512 => 64,
        }
    }

    /// Return the signing algorithm for a COSE algorithm identifier, if it
    /// is one of the ECDSA identifiers.
    pub fn from_cose_algorithm(alg: CoseAlgorithm) -> Option<Self> {
        match alg {
            CoseAlgorithm::Es256 => Some(Self::Es256),
            CoseAlgorithm::Es384 => Some(Self::Es384),
            CoseAlgorithm::Es512 => Some(Self::Es512),
            CoseAlgorithm::HmacSha256 => None,
        }
    }
}

impl FromStr for SigningAlg {
    type Err = UnknownAlgorithmError;

    fn from_str(alg: &str) -> Result<Self, Self::Err> {
        match alg {
            "es256" => Ok(Self::Es256),
            "es384" => Ok(Self::Es384),
            "es512" => Ok(Self::Es512),
            _ => Err(UnknownAlgorithmError(alg.to_owned())),
        }
    }
}

impl fmt::Display for SigningAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "{}",
            match self {
                Self::Es256 => "es256",
                Self::Es384 => "es384",
                Self::Es512 => "es512",
            }
        )
    }
}

/// This error is thrown when converting from a string to [`SigningAlg`]
/// if the algorithm string is unrecognized.
///
/// The string must be one of "es256", "es384", or "es512".
#[derive(Debug, PartialEq, Eq)]
pub struct UnknownAlgorithmError(pub String);

impl fmt::Display for UnknownAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "UnknownAlgorithmError({})", self.0)
    }
}

impl std::error::Error for UnknownAlgorithmError {}
