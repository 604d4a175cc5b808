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

use crate::{
    cose::{
        structure::{build_to_be_signed, select_content},
        CoseError, CoseSign1,
    },
    ec_utils::cose_to_der,
    raw_signature::{
        validator_for_signing_alg, RawSignatureValidationError, RawSignatureValidator, SigningAlg,
    },
};

/// Verify an encoded `COSE_Sign1` against a public key with the built-in
/// validators.
///
/// `public_key` is a DER encoded `SubjectPublicKeyInfo`. Pass the detached
/// content in `detached` when the payload element is null, or an empty slice
/// otherwise.
///
/// Returns `Ok(false)` if the envelope is well formed but the signature does
/// not match. Any malformed input, an unsupported algorithm (including ES512,
/// which has no built-in validator), or a validator failure is an `Err`.
pub fn verify1(envelope: &[u8], detached: &[u8], public_key: &[u8]) -> Result<bool, CoseError> {
    verify1_with(envelope, detached, public_key, validator_for_signing_alg)
}

/// Verify an encoded `COSE_Sign1`, obtaining the signature validator from
/// `validator_for`.
///
/// Use this to verify with a platform provider, or to add algorithms the
/// built-in validators lack. Returning `None` from `validator_for` fails
/// with [`CoseError::UnsupportedAlgorithm`].
pub fn verify1_with<F>(
    envelope: &[u8],
    detached: &[u8],
    public_key: &[u8],
    validator_for: F,
) -> Result<bool, CoseError>
where
    F: Fn(SigningAlg) -> Option<Box<dyn RawSignatureValidator>>,
{
    let sign1 = crate::cose::parse_sign1(envelope)?;
    verify_parsed(&sign1, detached, public_key, validator_for)
}

impl CoseSign1 {
    /// Verify this message against a public key with the built-in
    /// validators. See [`verify1`].
    pub fn verify(&self, detached: &[u8], public_key: &[u8]) -> Result<bool, CoseError> {
        verify_parsed(self, detached, public_key, validator_for_signing_alg)
    }
}

fn verify_parsed<F>(
    sign1: &CoseSign1,
    detached: &[u8],
    public_key: &[u8],
    validator_for: F,
) -> Result<bool, CoseError>
where
    F: Fn(SigningAlg) -> Option<Box<dyn RawSignatureValidator>>,
{
    let payload = sign1.payload.as_deref().unwrap_or_default();
    select_content(payload, detached)?;

    let alg = sign1.signing_alg()?;

    let Some(validator) = validator_for(alg) else {
        log::debug!("no signature validator for {alg}");
        return Err(CoseError::UnsupportedAlgorithm(alg.cose_algorithm().id()));
    };

    if sign1.signature.len() != 2 * alg.key_size() {
        return Err(CoseError::MalformedEnvelope(format!(
            "{} byte signature for {alg}",
            sign1.signature.len()
        )));
    }

    let tbs = build_to_be_signed(&sign1.protected, payload, detached)?;
    let der = cose_to_der(&sign1.signature)?;

    match validator.validate(&der, &tbs, public_key) {
        Ok(()) => Ok(true),
        Err(RawSignatureValidationError::SignatureMismatch) => Ok(false),
        Err(err) => Err(err.into()),
    }
}
