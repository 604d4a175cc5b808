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

use thiserror::Error;

use crate::{
    ec_utils::SignatureConversionError,
    raw_signature::{RawSignatureValidationError, RawSignerError},
};

/// Describes errors that can occur when building or checking [COSE]
/// envelopes and keys.
///
/// A signature or MAC that simply does not match is not an error: the
/// verification functions report it as `Ok(false)`.
///
/// [COSE]: https://datatracker.ietf.org/doc/rfc8152/
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoseError {
    /// A payload and non-empty detached content were both supplied.
    #[error("payload and detached content can not both be present")]
    PayloadAndDetachedContent,

    /// The envelope does not have the `COSE_Sign1`/`COSE_Mac0` shape.
    #[error("malformed COSE envelope ({0})")]
    MalformedEnvelope(String),

    /// The protected headers name an algorithm this operation can not use.
    #[error("unsupported COSE algorithm {0}")]
    UnsupportedAlgorithm(i64),

    /// The `COSE_Key` is malformed or is not an EC2/P-256 key.
    #[error("invalid COSE key ({0})")]
    InvalidKey(String),

    /// A certificate could not be parsed.
    #[error("invalid certificate ({0})")]
    InvalidCertificate(String),

    /// An error occurred while encoding or decoding CBOR.
    #[error(transparent)]
    CborError(#[from] mdoc_cbor::Error),

    /// The signature could not be converted between DER and COSE form.
    #[error(transparent)]
    SignatureConversionError(#[from] SignatureConversionError),

    /// The signer failed.
    #[error(transparent)]
    RawSignerError(#[from] RawSignerError),

    /// The signature validator failed for a reason other than a mismatch.
    #[error(transparent)]
    RawSignatureValidationError(#[from] RawSignatureValidationError),
}
