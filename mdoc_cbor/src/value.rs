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

//! The decoded CBOR data model.

use std::fmt;

use crate::constants::TAG_ENCODED_CBOR;

/// A decoded CBOR data item.
///
/// Each variant corresponds to one CBOR major type (or, for major type 7, one
/// of the simple values this crate supports). A semantic tag wraps the item
/// it applies to via [`Value::Tag`], so a tag survives a decode and re-encode
/// unchanged.
///
/// # Example
///
/// ```
/// use mdoc_cbor::{decode_one, to_canonical_vec, Value};
///
/// let value = Value::tagged(24, Value::from(vec![0xa0_u8]));
/// let bytes = to_canonical_vec(&value).unwrap();
/// assert_eq!(bytes, [0xd8, 0x18, 0x41, 0xa0]);
/// assert_eq!(decode_one(&bytes).unwrap(), value);
/// ```
#[derive(Clone, Debug)]
pub enum Value {
    /// Unsigned integer (major type 0).
    Unsigned(u64),

    /// Negative integer (major type 1). The field holds the encoded argument
    /// `n`; the represented value is `-1 - n`.
    Negative(u64),

    /// Byte string (major type 2).
    Bytes(Vec<u8>),

    /// Text string (major type 3).
    Text(String),

    /// Array (major type 4).
    Array(Vec<Value>),

    /// Map (major type 5).
    Map(Map),

    /// Semantic tag (major type 6) applied to the boxed item.
    Tag(u64, Box<Value>),

    /// `true` or `false`.
    Bool(bool),

    /// `null`.
    Null,

    /// `undefined`.
    Undefined,

    /// Floating point number, held at double precision.
    Float(f64),
}

impl Value {
    /// Wraps `value` in the semantic tag `tag`.
    pub fn tagged(tag: u64, value: impl Into<Value>) -> Self {
        Value::Tag(tag, Box::new(value.into()))
    }

    /// Builds `#6.24(bstr)` around an already encoded CBOR data item.
    pub fn encoded_cbor(encoded: impl Into<Vec<u8>>) -> Self {
        Value::Tag(TAG_ENCODED_CBOR, Box::new(Value::Bytes(encoded.into())))
    }

    /// Returns the outermost semantic tag, if any.
    pub fn tag(&self) -> Option<u64> {
        match self {
            Value::Tag(tag, _) => Some(*tag),
            _ => None,
        }
    }

    /// Returns the item with every enclosing tag removed.
    pub fn untagged(&self) -> &Value {
        let mut value = self;
        while let Value::Tag(_, inner) = value {
            value = inner;
        }
        value
    }

    /// Returns the value of an integer item, looking through tags.
    pub fn as_integer(&self) -> Option<i128> {
        match self.untagged() {
            Value::Unsigned(n) => Some(i128::from(*n)),
            Value::Negative(n) => Some(-1 - i128::from(*n)),
            _ => None,
        }
    }

    /// Returns `true` for arrays and maps (after looking through tags).
    pub fn is_compound(&self) -> bool {
        matches!(self.untagged(), Value::Array(_) | Value::Map(_))
    }

    /// Short name of the item's type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unsigned(_) => "unsigned integer",
            Value::Negative(_) => "negative integer",
            Value::Bytes(_) => "byte string",
            Value::Text(_) => "text string",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Tag(_, inner) => inner.type_name(),
            Value::Bool(_) => "boolean",
            Value::Null => "null",
            Value::Undefined => "undefined",
            Value::Float(_) => "float",
        }
    }
}

// Floats compare by bit pattern so that every value, NaN included, equals
// its own decoded encoding.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Unsigned(a), Value::Unsigned(b)) => a == b,
            (Value::Negative(a), Value::Negative(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Tag(ta, a), Value::Tag(tb, b)) => ta == tb && a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Undefined, Value::Undefined) => true,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::pretty::pretty_print(self))
    }
}

/// A CBOR map that keeps its keys unique and remembers insertion order.
///
/// Lookups are linear; maps in credential exchange messages are small.
/// Equality ignores order, so a map equals its canonically re-encoded
/// counterpart.
#[derive(Clone, Debug, Default)]
pub struct Map {
    entries: Vec<(Value, Value)>,
}

impl Map {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &Value) -> bool {
        self.get(key).is_some()
    }

    /// Inserts an entry.
    ///
    /// If `key` is already present its value is replaced in place (the entry
    /// keeps its original position) and the previous value is returned.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Inserts an entry, failing if `key` is already present.
    pub(crate) fn try_insert(&mut self, key: Value, value: Value) -> Result<(), Value> {
        if self.contains_key(&key) {
            return Err(key);
        }
        self.entries.push((key, value));
        Ok(())
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for Map {}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl IntoIterator for Map {
    type Item = (Value, Value);
    type IntoIter = std::vec::IntoIter<(Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Unsigned(u64::from(n))
            }
        })*
    };
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                let n = i64::from(n);
                if n >= 0 {
                    Value::Unsigned(n.unsigned_abs())
                } else {
                    // -1 - n without overflow at i64::MIN
                    Value::Negative((n + 1).unsigned_abs())
                }
            }
        })*
    };
}

from_unsigned!(u8, u16, u32, u64);
from_signed!(i8, i16, i32, i64);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}
