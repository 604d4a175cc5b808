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

use mdoc_cbor::{MapBuilder, Value};
use p256::{
    elliptic_curve::sec1::ToEncodedPoint,
    pkcs8::{DecodePublicKey, EncodePublicKey},
    EncodedPoint, PublicKey as P256PublicKey,
};

use crate::cose::{
    labels::{CRV, CRV_P256, KTY, KTY_EC2, X, Y},
    CoseError,
};

const COORDINATE_SIZE: usize = 32;

/// A P-256 public key as its affine coordinates, each a 32-byte unsigned
/// big-endian field element.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EcPublicKey {
    /// The x coordinate.
    pub x: [u8; COORDINATE_SIZE],

    /// The y coordinate.
    pub y: [u8; COORDINATE_SIZE],
}

impl EcPublicKey {
    /// Take the coordinates of a P-256 public key.
    pub fn from_p256(key: &P256PublicKey) -> Self {
        let point = key.to_encoded_point(false);
        let mut x = [0u8; COORDINATE_SIZE];
        let mut y = [0u8; COORDINATE_SIZE];

        // An uncompressed point of a valid key always carries both.
        if let (Some(px), Some(py)) = (point.x(), point.y()) {
            x.copy_from_slice(px);
            y.copy_from_slice(py);
        }

        EcPublicKey { x, y }
    }

    /// Check that the coordinates are a point on P-256.
    pub fn to_p256(&self) -> Result<P256PublicKey, CoseError> {
        P256PublicKey::from_sec1_bytes(&self.to_sec1_bytes())
            .map_err(|_| CoseError::InvalidKey("point is not on P-256".to_string()))
    }

    /// Parse a SEC1 encoded point, compressed or uncompressed.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, CoseError> {
        let key = P256PublicKey::from_sec1_bytes(bytes)
            .map_err(|_| CoseError::InvalidKey("invalid SEC1 point".to_string()))?;
        Ok(Self::from_p256(&key))
    }

    /// Return the uncompressed SEC1 encoding `04 ‖ x ‖ y`.
    pub fn to_sec1_bytes(&self) -> Vec<u8> {
        EncodedPoint::from_affine_coordinates(&self.x.into(), &self.y.into(), false)
            .as_bytes()
            .to_vec()
    }

    /// Parse a DER encoded P-256 `SubjectPublicKeyInfo`.
    pub fn from_spki_der(der: &[u8]) -> Result<Self, CoseError> {
        let key = P256PublicKey::from_public_key_der(der)
            .map_err(|err| CoseError::InvalidKey(err.to_string()))?;
        Ok(Self::from_p256(&key))
    }

    /// Return the key as a DER encoded `SubjectPublicKeyInfo`.
    pub fn to_spki_der(&self) -> Result<Vec<u8>, CoseError> {
        let document = self
            .to_p256()?
            .to_public_key_der()
            .map_err(|err| CoseError::InvalidKey(err.to_string()))?;
        Ok(document.as_bytes().to_vec())
    }
}

/// Encode an EC2/P-256 `COSE_Key`: `{1: 2, -1: 1, -2: x, -3: y}`.
pub fn cose_key_encode(key: &EcPublicKey) -> Value {
    MapBuilder::new()
        .put(KTY, KTY_EC2)
        .put(CRV, CRV_P256)
        .put(X, key.x.as_slice())
        .put(Y, key.y.as_slice())
        .build()
}

/// Decode an EC2/P-256 `COSE_Key`.
///
/// A coordinate shorter than 32 bytes is logged and left-padded with zeros,
/// for producers that drop leading zero bytes. A longer one is rejected.
pub fn cose_key_decode(key: &Value) -> Result<EcPublicKey, CoseError> {
    let map = key.as_map()?;

    let kty = map.require(&Value::from(KTY))?.as_int::<i64>()?;
    if kty != KTY_EC2 {
        return Err(CoseError::InvalidKey(format!("key type {kty} is not EC2")));
    }

    let crv = map.require(&Value::from(CRV))?.as_int::<i64>()?;
    if crv != CRV_P256 {
        return Err(CoseError::InvalidKey(format!("curve {crv} is not P-256")));
    }

    let x = coordinate(map.require(&Value::from(X))?.as_bytes()?, "x")?;
    let y = coordinate(map.require(&Value::from(Y))?.as_bytes()?, "y")?;

    Ok(EcPublicKey { x, y })
}

fn coordinate(bytes: &[u8], name: &str) -> Result<[u8; COORDINATE_SIZE], CoseError> {
    if bytes.len() != COORDINATE_SIZE {
        log::warn!(
            "COSE_Key {name} coordinate is {} bytes, expected {COORDINATE_SIZE}",
            bytes.len()
        );
    }

    if bytes.len() > COORDINATE_SIZE {
        return Err(CoseError::InvalidKey(format!(
            "{name} coordinate is {} bytes",
            bytes.len()
        )));
    }

    let mut padded = [0u8; COORDINATE_SIZE];
    padded[COORDINATE_SIZE - bytes.len()..].copy_from_slice(bytes);
    Ok(padded)
}
