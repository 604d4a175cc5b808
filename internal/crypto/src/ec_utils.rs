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

//! Conversion of ECDSA signatures between the ASN.1/DER form produced by most
//! cryptography libraries and the fixed-width `R‖S` form used by COSE.

use std::borrow::Cow;

use asn1_rs::{FromDer, Integer, Sequence, ToDer};
use thiserror::Error;
use x509_parser::{
    der_parser::{
        der::{parse_der_integer, parse_der_sequence_defined_g},
        error::BerResult,
    },
    x509::SubjectPublicKeyInfo,
};

use crate::raw_signature::oids::{EC_PUBLICKEY_OID, PRIME256V1_OID, SECP384R1_OID, SECP521R1_OID};

/// Describes errors that can occur while converting a signature between its
/// DER and COSE forms.
#[derive(Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum SignatureConversionError {
    /// The DER input is not a SEQUENCE of two INTEGERs.
    #[error("invalid DER signature: {0}")]
    InvalidDer(String),

    /// One of the DER integers is negative.
    #[error("signature component is negative")]
    NegativeComponent,

    /// One of the integers does not fit in the requested key size.
    #[error("signature component of {len} bytes does not fit in {key_size} bytes")]
    ComponentTooLong {
        /// Length of the component without leading zeros.
        len: usize,

        /// Requested size of each component.
        key_size: usize,
    },

    /// The COSE signature is empty or has an odd length.
    #[error("COSE signature length {0} is not a positive even number")]
    InvalidLength(usize),

    /// The DER encoder reported an error.
    #[error("unable to encode DER signature: {0}")]
    Encoding(String),
}

struct EcSigComps<'a> {
    r: &'a [u8],
    s: &'a [u8],
}

fn parse_ec_der_sig(data: &[u8]) -> BerResult<'_, EcSigComps<'_>> {
    parse_der_sequence_defined_g(|content: &[u8], _| {
        let (rem, r) = parse_der_integer(content)?;
        let (rem, s) = parse_der_integer(rem)?;

        Ok((
            rem,
            EcSigComps {
                r: r.as_slice()?,
                s: s.as_slice()?,
            },
        ))
    })(data)
}

/// Return `bytes` without its leading zero bytes.
///
/// An all-zero input yields an empty slice.
pub fn strip_leading_zeroes(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

fn left_pad(component: &[u8], key_size: usize) -> Result<Vec<u8>, SignatureConversionError> {
    if component.first().is_some_and(|b| b & 0x80 != 0) {
        return Err(SignatureConversionError::NegativeComponent);
    }

    let stripped = strip_leading_zeroes(component);
    if stripped.len() > key_size {
        return Err(SignatureConversionError::ComponentTooLong {
            len: stripped.len(),
            key_size,
        });
    }

    let mut padded = vec![0u8; key_size - stripped.len()];
    padded.extend_from_slice(stripped);
    Ok(padded)
}

/// Convert a DER encoded ECDSA signature to the COSE form: `R` and `S`, each
/// left-padded with zeros to `key_size` bytes, concatenated.
pub fn der_to_cose(der: &[u8], key_size: usize) -> Result<Vec<u8>, SignatureConversionError> {
    let (rest, comps) = parse_ec_der_sig(der)
        .map_err(|err| SignatureConversionError::InvalidDer(err.to_string()))?;

    if !rest.is_empty() {
        return Err(SignatureConversionError::InvalidDer(format!(
            "{} bytes after signature",
            rest.len()
        )));
    }

    let mut sig = left_pad(comps.r, key_size)?;
    sig.extend(left_pad(comps.s, key_size)?);
    Ok(sig)
}

fn der_integer(unsigned: &[u8]) -> Result<Vec<u8>, SignatureConversionError> {
    let stripped = strip_leading_zeroes(unsigned);

    let mut content = Vec::with_capacity(stripped.len() + 1);
    if !matches!(stripped.first(), Some(b) if b & 0x80 == 0) {
        content.push(0);
    }
    content.extend_from_slice(stripped);

    Integer::new(&content)
        .to_der_vec()
        .map_err(|err| SignatureConversionError::Encoding(err.to_string()))
}

/// Convert a COSE signature (`R‖S`, equal halves) to a DER SEQUENCE of two
/// INTEGERs.
pub fn cose_to_der(sig: &[u8]) -> Result<Vec<u8>, SignatureConversionError> {
    if sig.is_empty() || sig.len() % 2 != 0 {
        return Err(SignatureConversionError::InvalidLength(sig.len()));
    }

    let (r, s) = sig.split_at(sig.len() / 2);

    let mut content = der_integer(r)?;
    content.extend(der_integer(s)?);

    Sequence::new(Cow::Owned(content))
        .to_der_vec()
        .map_err(|err| SignatureConversionError::Encoding(err.to_string()))
}

/// NIST curves recognized in a `SubjectPublicKeyInfo`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum EcdsaCurve {
    /// NIST curve P-256
    P256,

    /// NIST curve P-384
    P384,

    /// NIST curve P-521
    P521,
}

impl EcdsaCurve {
    // Size of each of R and S for this curve.
    pub(crate) fn key_size(&self) -> usize {
        match self {
            EcdsaCurve::P256 => 32,
            EcdsaCurve::P384 => 48,
            EcdsaCurve::P521 => 66,
        }
    }
}

/// Returns the curve named by a DER encoded EC `SubjectPublicKeyInfo`.
pub(crate) fn ec_curve_from_public_key_der(public_key: &[u8]) -> Option<EcdsaCurve> {
    let (_, pk) = SubjectPublicKeyInfo::from_der(public_key).ok()?;

    let public_key_alg = &pk.algorithm;
    if public_key_alg.algorithm != EC_PUBLICKEY_OID {
        return None;
    }

    let named_curve_oid = public_key_alg.parameters.as_ref()?.as_oid().ok()?;

    if named_curve_oid == PRIME256V1_OID {
        Some(EcdsaCurve::P256)
    } else if named_curve_oid == SECP384R1_OID {
        Some(EcdsaCurve::P384)
    } else if named_curve_oid == SECP521R1_OID {
        Some(EcdsaCurve::P521)
    } else {
        None
    }
}
