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

use mdoc_cbor::{Map, Value};
use x509_parser::{certificate::X509Certificate, prelude::FromDer};

use crate::cose::{labels::X5CHAIN, parse_sign1, CoseError};

/// Build the `x5chain` header value: a byte string for one certificate, an
/// array of byte strings for more, nothing for an empty chain.
pub(crate) fn x5chain_header(cert_chain: &[Vec<u8>]) -> Option<Value> {
    match cert_chain {
        [] => None,
        [cert] => Some(Value::from(cert.as_slice())),
        certs => Some(Value::Array(
            certs.iter().map(|c| Value::from(c.as_slice())).collect(),
        )),
    }
}

pub(crate) fn x5chain_from_header(unprotected: &Map) -> Result<Vec<Vec<u8>>, CoseError> {
    let Some(x5chain) = unprotected.get(&Value::from(X5CHAIN)) else {
        return Ok(Vec::new());
    };

    match x5chain {
        Value::Bytes(cert) => Ok(vec![cert.clone()]),
        Value::Array(certs) => certs
            .iter()
            .map(|cert| match cert {
                Value::Bytes(cert) => Ok(cert.clone()),
                other => Err(CoseError::MalformedEnvelope(format!(
                    "x5chain entry is a {}",
                    other.type_name()
                ))),
            })
            .collect(),
        other => Err(CoseError::MalformedEnvelope(format!(
            "x5chain is a {}",
            other.type_name()
        ))),
    }
}

/// Return the certificates in the `x5chain` header of an encoded
/// `COSE_Sign1`, in the order they appear. Empty if the header is absent.
pub fn x5chain_extract(envelope: &[u8]) -> Result<Vec<Vec<u8>>, CoseError> {
    parse_sign1(envelope)?.x5chain()
}

/// Return the DER encoded `SubjectPublicKeyInfo` of a DER certificate.
pub fn certificate_public_key(cert_der: &[u8]) -> Result<Vec<u8>, CoseError> {
    let (_, cert) = X509Certificate::from_der(cert_der)
        .map_err(|err| CoseError::InvalidCertificate(err.to_string()))?;

    Ok(cert.public_key().raw.to_vec())
}
