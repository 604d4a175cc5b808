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

use mdoc_cbor::{decode_one, to_canonical_vec, Map, Value};

use crate::{
    cose::{
        labels::{CoseAlgorithm, TAG_COSE_SIGN1, X5CHAIN},
        structure::{build_to_be_signed, protected_algorithm, protected_header, Envelope},
        x5chain::{x5chain_from_header, x5chain_header},
        CoseError,
    },
    ec_utils::der_to_cose,
    raw_signature::{RawSigner, SigningAlg},
};

/// A parsed `COSE_Sign1` message.
///
/// The fields are kept as they were received, so re-encoding with
/// [`to_vec`](Self::to_vec) reproduces the same signed bytes.
#[derive(Clone, Debug)]
pub struct CoseSign1 {
    /// Encoded protected header bucket.
    pub protected: Vec<u8>,

    /// Unprotected header bucket.
    pub unprotected: Map,

    /// Embedded payload, or `None` when the payload is carried separately.
    pub payload: Option<Vec<u8>>,

    /// Signature in COSE (`R‖S`) form.
    pub signature: Vec<u8>,
}

impl CoseSign1 {
    /// Parse a decoded `COSE_Sign1`, tagged or untagged.
    pub fn from_value(value: &Value) -> Result<Self, CoseError> {
        let Envelope {
            protected,
            unprotected,
            payload,
            last,
        } = Envelope::from_value(value, TAG_COSE_SIGN1)?;

        Ok(CoseSign1 {
            protected,
            unprotected,
            payload,
            signature: last,
        })
    }

    /// Return the untagged four element array.
    pub fn to_value(&self) -> Value {
        Envelope {
            protected: self.protected.clone(),
            unprotected: self.unprotected.clone(),
            payload: self.payload.clone(),
            last: self.signature.clone(),
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

    /// Return the ECDSA algorithm named in the protected header.
    ///
    /// A MAC algorithm fails with [`CoseError::UnsupportedAlgorithm`].
    pub fn signing_alg(&self) -> Result<SigningAlg, CoseError> {
        let alg = self.algorithm()?;
        SigningAlg::from_cose_algorithm(alg).ok_or(CoseError::UnsupportedAlgorithm(alg.id()))
    }

    /// Return the certificates carried in the unprotected `x5chain` header,
    /// end-entity first. Empty if there is none.
    pub fn x5chain(&self) -> Result<Vec<Vec<u8>>, CoseError> {
        x5chain_from_header(&self.unprotected)
    }
}

/// Sign `payload` (or `detached` content) and return the encoded
/// `COSE_Sign1`.
///
/// The protected header holds only the algorithm of `signer`. The
/// certificates in `cert_chain` go to the unprotected `x5chain` header: a
/// single byte string for one certificate, an array for more, nothing for
/// none. The payload element is null unless `payload` is non-empty.
///
/// Fails with [`CoseError::PayloadAndDetachedContent`] if `payload` and
/// `detached` are both non-empty.
pub fn sign1(
    signer: &dyn RawSigner,
    payload: &[u8],
    detached: &[u8],
    cert_chain: &[Vec<u8>],
) -> Result<Vec<u8>, CoseError> {
    let alg = signer.alg();

    let protected = protected_header(alg.cose_algorithm())?;
    let tbs = build_to_be_signed(&protected, payload, detached)?;

    let der = signer.sign(&tbs)?;
    let signature = der_to_cose(&der, alg.key_size())?;

    let mut unprotected = Map::new();
    if let Some(x5chain) = x5chain_header(cert_chain) {
        unprotected.insert(X5CHAIN, x5chain);
    }

    let sign1 = CoseSign1 {
        protected,
        unprotected,
        payload: (!payload.is_empty()).then(|| payload.to_vec()),
        signature,
    };

    log::debug!(
        "signed COSE_Sign1 with {alg}, {} certificate(s)",
        cert_chain.len()
    );

    sign1.to_vec()
}

/// Parse an encoded `COSE_Sign1`, checking its shape.
pub fn parse_sign1(envelope: &[u8]) -> Result<CoseSign1, CoseError> {
    CoseSign1::from_value(&decode_one(envelope)?)
}

/// Return the payload embedded in an encoded `COSE_Sign1`, or an empty
/// vector if the payload element is null.
pub fn sign1_payload(envelope: &[u8]) -> Result<Vec<u8>, CoseError> {
    Ok(parse_sign1(envelope)?.payload.unwrap_or_default())
}
