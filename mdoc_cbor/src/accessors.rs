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

//! Strict, typed access to decoded values.
//!
//! Every accessor either returns the requested shape or an error that says
//! which contract was broken: [`Error::MissingKey`], [`Error::TypeMismatch`],
//! [`Error::OutOfRange`] or [`Error::TagMismatch`]. Nothing is coerced and no
//! default is ever substituted.
//!
//! Accessors look through semantic tags, except the date/time and embedded
//! CBOR accessors, which require their specific tag.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::{
    constants::{TAG_DATETIME_STRING, TAG_ENCODED_CBOR},
    decode_one,
    pretty::pretty_print,
    Error, Map, Result, Value,
};

fn mismatch(expected: &'static str, found: &Value) -> Error {
    Error::TypeMismatch {
        expected,
        found: found.type_name(),
    }
}

impl Value {
    /// Builds `#6.0(tstr)` holding `timestamp` as an RFC 3339 string in UTC
    /// with whole seconds, such as `2020-10-01T13:30:02Z`.
    pub fn datetime(timestamp: DateTime<Utc>) -> Self {
        Value::tagged(
            TAG_DATETIME_STRING,
            timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
        )
    }

    /// Returns the entries of a map.
    pub fn as_map(&self) -> Result<&Map> {
        match self.untagged() {
            Value::Map(map) => Ok(map),
            other => Err(mismatch("map", other)),
        }
    }

    /// Returns the items of an array.
    pub fn as_array(&self) -> Result<&[Value]> {
        match self.untagged() {
            Value::Array(items) => Ok(items),
            other => Err(mismatch("array", other)),
        }
    }

    /// Returns the contents of a byte string.
    pub fn as_bytes(&self) -> Result<&[u8]> {
        match self.untagged() {
            Value::Bytes(bytes) => Ok(bytes),
            other => Err(mismatch("byte string", other)),
        }
    }

    /// Returns the contents of a text string.
    pub fn as_text(&self) -> Result<&str> {
        match self.untagged() {
            Value::Text(text) => Ok(text),
            other => Err(mismatch("text string", other)),
        }
    }

    /// Returns the value of a boolean.
    pub fn as_bool(&self) -> Result<bool> {
        match self.untagged() {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch("boolean", other)),
        }
    }

    /// Returns an integer converted to `T`.
    ///
    /// A non-integer item is a [`Error::TypeMismatch`]; an integer that does
    /// not fit in `T` is an [`Error::OutOfRange`].
    pub fn as_int<T: TryFrom<i128>>(&self) -> Result<T> {
        let value = self
            .as_integer()
            .ok_or_else(|| mismatch("integer", self.untagged()))?;
        T::try_from(value).map_err(|_| Error::OutOfRange {
            value,
            target: std::any::type_name::<T>(),
        })
    }

    /// Returns true if the item is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self.untagged(), Value::Null)
    }

    /// Parses a `#6.0(tstr)` date/time and converts it to UTC.
    pub fn as_datetime(&self) -> Result<DateTime<Utc>> {
        let text = match self {
            Value::Tag(TAG_DATETIME_STRING, inner) => inner.as_text()?,
            Value::Text(_) | Value::Tag(_, _) => {
                return Err(Error::TagMismatch {
                    expected: TAG_DATETIME_STRING,
                    found: self.tag(),
                })
            }
            other => return Err(mismatch("text string", other)),
        };
        DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| Error::InvalidDateTime(text.to_string()))
    }

    /// Returns the bytes inside a `#6.24(bstr)` item.
    pub fn as_encoded_cbor(&self) -> Result<&[u8]> {
        match self {
            Value::Tag(TAG_ENCODED_CBOR, inner) => inner.as_bytes(),
            other => Err(Error::TagMismatch {
                expected: TAG_ENCODED_CBOR,
                found: other.tag(),
            }),
        }
    }

    /// Decodes the data item embedded in a `#6.24(bstr)` item.
    pub fn as_tagged_cbor(&self) -> Result<Value> {
        decode_one(self.as_encoded_cbor()?)
    }

    /// Returns true if this is a map containing `key`.
    pub fn has_key(&self, key: impl Into<Value>) -> bool {
        self.as_map()
            .map(|map| map.contains_key(&key.into()))
            .unwrap_or(false)
    }

    /// Looks up `key` in a map.
    pub fn get(&self, key: impl Into<Value>) -> Result<&Value> {
        self.as_map()?.require(&key.into())
    }

    /// Looks up `key` in a map and returns it as an integer of type `T`.
    pub fn get_int<T: TryFrom<i128>>(&self, key: impl Into<Value>) -> Result<T> {
        self.get(key)?.as_int()
    }

    /// Looks up `key` in a map and returns it as text.
    pub fn get_text(&self, key: impl Into<Value>) -> Result<&str> {
        self.get(key)?.as_text()
    }

    /// Looks up `key` in a map and returns it as bytes.
    pub fn get_bytes(&self, key: impl Into<Value>) -> Result<&[u8]> {
        self.get(key)?.as_bytes()
    }

    /// Looks up `key` in a map and returns it as an array.
    pub fn get_array(&self, key: impl Into<Value>) -> Result<&[Value]> {
        self.get(key)?.as_array()
    }

    /// Looks up `key` in a map and returns it as a nested map.
    pub fn get_map(&self, key: impl Into<Value>) -> Result<&Map> {
        self.get(key)?.as_map()
    }

    /// Looks up `key` in a map and returns it as a boolean.
    pub fn get_bool(&self, key: impl Into<Value>) -> Result<bool> {
        self.get(key)?.as_bool()
    }

    /// Looks up `key` in a map and parses it as a tagged date/time.
    pub fn get_datetime(&self, key: impl Into<Value>) -> Result<DateTime<Utc>> {
        self.get(key)?.as_datetime()
    }
}

impl Map {
    /// Returns the value stored under `key` or [`Error::MissingKey`].
    pub fn require(&self, key: &Value) -> Result<&Value> {
        self.get(key)
            .ok_or_else(|| Error::MissingKey(pretty_print(key)))
    }

    /// Returns every key as text, in insertion order. Fails if any key is not
    /// a text string.
    pub fn text_keys(&self) -> Result<Vec<&str>> {
        self.keys().map(Value::as_text).collect()
    }

    /// Returns every key as an `i64`, in insertion order. Fails if any key is
    /// not an integer.
    pub fn int_keys(&self) -> Result<Vec<i64>> {
        self.keys().map(Value::as_int::<i64>).collect()
    }
}

/// Returns the bytes inside an encoded `#6.24(bstr)` item.
pub fn extract_tagged_cbor(encoded: &[u8]) -> Result<Vec<u8>> {
    Ok(decode_one(encoded)?.as_encoded_cbor()?.to_vec())
}
