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

//! The structures that COSE signatures and MACs are computed over, and the
//! envelope shape shared by `COSE_Sign1` and `COSE_Mac0`.

use mdoc_cbor::{decode_one, to_canonical_vec, ArrayBuilder, Map, MapBuilder, Value};

use crate::cose::{
    labels::{CoseAlgorithm, ALG, CONTEXT_MAC0, CONTEXT_SIGNATURE1},
    CoseError,
};

/// Build the canonically encoded `Sig_structure` for a `COSE_Sign1`:
/// `["Signature1", protected, h'', payload-or-detached]`.
///
/// Fails with [`CoseError::PayloadAndDetachedContent`] if `payload` and
/// `detached` are both non-empty.
pub fn build_to_be_signed(
    protected: &[u8],
    payload: &[u8],
    detached: &[u8],
) -> Result<Vec<u8>, CoseError> {
    build_structure(CONTEXT_SIGNATURE1, protected, payload, detached)
}

/// Build the canonically encoded `MAC_structure` for a `COSE_Mac0`:
/// `["MAC0", protected, h'', payload-or-detached]`.
pub fn build_to_be_maced(
    protected: &[u8],
    payload: &[u8],
    detached: &[u8],
) -> Result<Vec<u8>, CoseError> {
    build_structure(CONTEXT_MAC0, protected, payload, detached)
}

fn build_structure(
    context: &str,
    protected: &[u8],
    payload: &[u8],
    detached: &[u8],
) -> Result<Vec<u8>, CoseError> {
    let content = select_content(payload, detached)?;

    let structure = ArrayBuilder::new()
        .push(context)
        .push(protected)
        .push(Vec::<u8>::new())
        .push(content)
        .build();

    Ok(to_canonical_vec(&structure)?)
}

pub(crate) fn select_content<'a>(
    payload: &'a [u8],
    detached: &'a [u8],
) -> Result<&'a [u8], CoseError> {
    match (payload.is_empty(), detached.is_empty()) {
        (false, false) => Err(CoseError::PayloadAndDetachedContent),
        (true, _) => Ok(detached),
        (false, true) => Ok(payload),
    }
}

/// Encode the protected header bucket, which holds only the algorithm.
pub(crate) fn protected_header(alg: CoseAlgorithm) -> Result<Vec<u8>, CoseError> {
    let header = MapBuilder::new().put(ALG, alg.id()).build();
    Ok(to_canonical_vec(&header)?)
}

/// Read the algorithm out of an encoded protected header bucket.
pub(crate) fn protected_algorithm(protected: &[u8]) -> Result<CoseAlgorithm, CoseError> {
    if protected.is_empty() {
        return Err(CoseError::MalformedEnvelope(
            "empty protected header".to_string(),
        ));
    }

    let header = decode_one(protected)?;
    let id = header
        .as_map()?
        .get(&Value::from(ALG))
        .ok_or_else(|| CoseError::MalformedEnvelope("missing algorithm".to_string()))?
        .as_int::<i64>()?;

    CoseAlgorithm::from_id(id).ok_or(CoseError::UnsupportedAlgorithm(id))
}

/// The four elements common to `COSE_Sign1` and `COSE_Mac0`.
pub(crate) struct Envelope {
    pub(crate) protected: Vec<u8>,
    pub(crate) unprotected: Map,
    pub(crate) payload: Option<Vec<u8>>,
    pub(crate) last: Vec<u8>,
}

impl Envelope {
    /// Check the envelope shape: an array of at least four items, optionally
    /// carrying the message tag `tag`, with byte strings at positions 0 and
    /// 3, a map at 1, and a byte string or null at 2.
    pub(crate) fn from_value(value: &Value, tag: u64) -> Result<Self, CoseError> {
        let value = match value {
            Value::Tag(found, inner) if *found == tag => inner.as_ref(),
            Value::Tag(found, _) => {
                return Err(CoseError::MalformedEnvelope(format!(
                    "unexpected tag {found}"
                )))
            }
            other => other,
        };

        let Value::Array(items) = value else {
            return Err(CoseError::MalformedEnvelope(format!(
                "expected array, found {}",
                value.type_name()
            )));
        };

        if items.len() < 4 {
            return Err(CoseError::MalformedEnvelope(format!(
                "expected 4 elements, found {}",
                items.len()
            )));
        }

        let Value::Bytes(protected) = &items[0] else {
            return Err(CoseError::MalformedEnvelope(
                "protected header is not a byte string".to_string(),
            ));
        };

        let Value::Map(unprotected) = &items[1] else {
            return Err(CoseError::MalformedEnvelope(
                "unprotected header is not a map".to_string(),
            ));
        };

        let payload = match &items[2] {
            Value::Null => None,
            Value::Bytes(payload) => Some(payload.clone()),
            _ => {
                return Err(CoseError::MalformedEnvelope(
                    "payload is neither a byte string nor null".to_string(),
                ))
            }
        };

        let Value::Bytes(last) = &items[3] else {
            return Err(CoseError::MalformedEnvelope(
                "signature or tag is not a byte string".to_string(),
            ));
        };

        Ok(Envelope {
            protected: protected.clone(),
            unprotected: unprotected.clone(),
            payload,
            last: last.clone(),
        })
    }

    pub(crate) fn to_value(&self) -> Value {
        let payload = match &self.payload {
            Some(payload) => Value::from(payload.as_slice()),
            None => Value::Null,
        };

        ArrayBuilder::new()
            .push(self.protected.as_slice())
            .push(self.unprotected.clone())
            .push(payload)
            .push(self.last.as_slice())
            .build()
    }
}
