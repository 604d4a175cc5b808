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

//! Integer labels and identifiers shared by the COSE envelope layer and the
//! `COSE_Key` codec.

/// Header label of the algorithm identifier.
pub const ALG: i64 = 1;

/// Header label of the X.509 certificate chain (RFC 9360).
pub const X5CHAIN: i64 = 33;

/// `COSE_Key` label of the key type.
pub const KTY: i64 = 1;

/// `COSE_Key` label of the curve of an EC2 key.
pub const CRV: i64 = -1;

/// `COSE_Key` label of the x coordinate of an EC2 key.
pub const X: i64 = -2;

/// `COSE_Key` label of the y coordinate of an EC2 key.
pub const Y: i64 = -3;

/// Key type: elliptic curve with x and y coordinates.
pub const KTY_EC2: i64 = 2;

/// Curve: NIST P-256.
pub const CRV_P256: i64 = 1;

/// CBOR tag of a `COSE_Mac0` message.
pub const TAG_COSE_MAC0: u64 = 17;

/// CBOR tag of a `COSE_Sign1` message.
pub const TAG_COSE_SIGN1: u64 = 18;

/// Context string of the structure signed for a `COSE_Sign1`.
pub const CONTEXT_SIGNATURE1: &str = "Signature1";

/// Context string of the structure authenticated for a `COSE_Mac0`.
pub const CONTEXT_MAC0: &str = "MAC0";

/// COSE algorithm identifiers supported by this crate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum CoseAlgorithm {
    /// ECDSA with SHA-256
    Es256,

    /// ECDSA with SHA-384
    Es384,

    /// ECDSA with SHA-512
    Es512,

    /// HMAC with SHA-256, 256-bit tag
    HmacSha256,
}

impl CoseAlgorithm {
    /// Return the integer identifier registered for this algorithm.
    pub fn id(&self) -> i64 {
        match self {
            Self::Es256 => -7,
            Self::Es384 => -35,
            Self::Es512 => -36,
            Self::HmacSha256 => 5,
        }
    }

    /// Look up an algorithm by its integer identifier.
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            -7 => Some(Self::Es256),
            -35 => Some(Self::Es384),
            -36 => Some(Self::Es512),
            5 => Some(Self::HmacSha256),
            _ => None,
        }
    }
}
