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

use hmac::{Hmac, Mac};
use mdoc_cbor::{decode_one, to_canonical_vec, Map, Value};
use sha2::Sha256;

use crate::cose::{
    labels::{CoseAlgorithm, TAG_COSE_MAC0},
    structure::{build_to_be_maced, protected_algorithm, protected_header, select_content, Envelope},
    CoseError,
};

type HmacSha256 = Hmac<Sha256>;

/// A parsed `COSE_Mac0` message.
#[derive(Clone, Debug)]
pub struct CoseMac0 {
    /// Encoded protected header bucket.
    pub protected: Vec<u8>,

    /// Unprotected header bucket, normally empty.
    pub unprotected: Map,

    /// Embedded payload, or `None` when the payload is carried separately.
    pub payload: Option<Vec<u8>>,

    /// Authentication tag.
    pub tag: Vec<u8>,
}

impl CoseMac0 {
    /// Parse a decoded `COSE_Mac0`, tagged or untagged.
    pub fn from_value(value: &Value) -> Result<Self, CoseError> {
        let Envelope {
            protected,
            unprotected,
            payload,
            last,
        } = Envelope::from_value(value, TAG_COSE_MAC0)?;

        Ok(CoseMac0 {
            protected,
            unprotected,
            payload,
            tag: last,
        })
    }

    /// Return the untagged four element array.
    pub fn to_value(&self) -> Value {
        Envelope {
            protected: self.protected.clone(),
            unprotected: self.unprotected.clone(),
            payload: self.payload.clone(),
            last: self.tag.clone(),
        }
        .to_value()
    }

    /// Encode the message.
    pub fn to_vec(&self) -> Result<Vec<u8>, CoseError> {
        Ok(to_canonical_vec(&self.to_value())?)
    }

    /// Return the algorithm named in the protected header.
    pub fn algorithm(&self) -> Result<CoseAlgorithm, CoseError> {
        protected_algorithm(&self.protected)
    }
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<HmacSha256, CoseError> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(key)
        .map_err(|err| CoseError::InvalidKey(err.to_string()))?;
    mac.update(data);
    Ok(mac)
}

/// Authenticate `payload` (or `detached` content) with HMAC-SHA-256 under
/// `key` and return the encoded `COSE_Mac0`.
///
/// The protected header holds only algorithm 5 (HMAC 256/256) and the
/// unprotected header is empty.
pub fn mac0(key: &[u8], payload: &[u8], detached: &[u8]) -> Result<Vec<u8>, CoseError> {
    let protected = protected_header(CoseAlgorithm::HmacSha256)?;
    let tbm = build_to_be_maced(&protected, payload, detached)?;

    let tag = hmac_sha256(key, &tbm)?.finalize().into_bytes().to_vec();

    CoseMac0 {
        protected,
        unprotected: Map::new(),
        payload: (!payload.is_empty()).then(|| payload.to_vec()),
        tag,
    }
    .to_vec()
}

/// Parse an encoded `COSE_Mac0`, checking its shape.
pub fn parse_mac0(envelope: &[u8]) -> Result<CoseMac0, CoseError> {
    CoseMac0::from_value(&decode_one(envelope)?)
}

/// Return the authentication tag of an encoded `COSE_Mac0`.
pub fn mac0_tag(envelope: &[u8]) -> Result<Vec<u8>, CoseError> {
    Ok(parse_mac0(envelope)?.tag)
}

/// Recompute the tag of an encoded `COSE_Mac0` under `key` and compare it
/// in constant time with the one received.
///
/// Returns `Ok(false)` on a mismatch. A malformed envelope or an algorithm
/// other than HMAC 256/256 is an `Err`.
pub fn mac0_verify(envelope: &[u8], key: &[u8], detached: &[u8]) -> Result<bool, CoseError> {
    let mac0 = parse_mac0(envelope)?;
    let payload = mac0.payload.as_deref().unwrap_or_default();
    select_content(payload, detached)?;

    let alg = mac0.algorithm()?;
    if alg != CoseAlgorithm::HmacSha256 {
        log::debug!("COSE_Mac0 with algorithm {} rejected", alg.id());
        return Err(CoseError::UnsupportedAlgorithm(alg.id()));
    }

    let tbm = build_to_be_maced(&mac0.protected, payload, detached)?;
    Ok(hmac_sha256(key, &tbm)?.verify_slice(&mac0.tag).is_ok())
}
