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

//! CBOR encoding of [`Value`] trees, in preserving or canonical mode.

use std::io::Write;

use crate::{constants::*, Map, Result, Value};

/// Writes [`Value`] trees as CBOR.
///
/// Lengths are always definite and every integer header uses its shortest
/// form. In canonical mode map entries are sorted by the bytes of their
/// canonically encoded keys (shorter encodings first, then bytewise);
/// otherwise they are written in insertion order.
pub struct Encoder<W: Write> {
    writer: W,
    canonical: bool,
}

impl<W: Write> Encoder<W> {
    /// Creates an encoder that preserves map insertion order.
    pub fn new(writer: W) -> Self {
        Encoder {
            writer,
            canonical: false,
        }
    }

    /// Creates an encoder that produces canonical output.
    pub fn canonical(writer: W) -> Self {
        Encoder {
            writer,
            canonical: true,
        }
    }

    /// Consume the encoder and return the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    pub(crate) fn write_type_value(&mut self, major: u8, value: u64) -> Result<()> {
        if value < 24 {
            self.writer.write_all(&[(major << 5) | value as u8])?;
        } else if value < 256 {
            self.writer.write_all(&[(major << 5) | 24, value as u8])?;
        } else if value < 65536 {
            self.writer.write_all(&[(major << 5) | 25])?;
            self.writer.write_all(&(value as u16).to_be_bytes())?;
        } else if value < 4294967296 {
            self.writer.write_all(&[(major << 5) | 26])?;
            self.writer.write_all(&(value as u32).to_be_bytes())?;
        } else {
            self.writer.write_all(&[(major << 5) | 27])?;
            self.writer.write_all(&value.to_be_bytes())?;
        }
        Ok(())
    }

    /// Writes a tag header. The tagged item must be written next.
    pub fn write_tag(&mut self, tag: u64) -> Result<()> {
        self.write_type_value(MAJOR_TAG, tag)
    }

    /// Writes one data item.
    pub fn encode(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Unsigned(n) => self.write_type_value(MAJOR_UNSIGNED, *n),
            Value::Negative(n) => self.write_type_value(MAJOR_NEGATIVE, *n),
            Value::Bytes(bytes) => {
                self.write_type_value(MAJOR_BYTES, bytes.len() as u64)?;
                self.writer.write_all(bytes)?;
                Ok(())
            }
            Value::Text(text) => {
                self.write_type_value(MAJOR_TEXT, text.len() as u64)?;
                self.writer.write_all(text.as_bytes())?;
                Ok(())
            }
            Value::Array(items) => {
                self.write_type_value(MAJOR_ARRAY, items.len() as u64)?;
                for item in items {
                    self.encode(item)?;
                }
                Ok(())
            }
            Value::Map(map) => self.encode_map(map),
            Value::Tag(tag, inner) => {
                self.write_tag(*tag)?;
                self.encode(inner)
            }
            Value::Bool(false) => self.write_simple(FALSE),
            Value::Bool(true) => self.write_simple(TRUE),
            Value::Null => self.write_simple(NULL),
            Value::Undefined => self.write_simple(UNDEFINED),
            Value::Float(f) => {
                self.writer.write_all(&[(MAJOR_SIMPLE << 5) | FLOAT64])?;
                self.writer.write_all(&f.to_be_bytes())?;
                Ok(())
            }
        }
    }

    fn write_simple(&mut self, simple: u8) -> Result<()> {
        self.writer.write_all(&[(MAJOR_SIMPLE << 5) | simple])?;
        Ok(())
    }

    fn encode_map(&mut self, map: &Map) -> Result<()> {
        self.write_type_value(MAJOR_MAP, map.len() as u64)?;

        if !self.canonical {
            for (key, value) in map.iter() {
                self.encode(key)?;
                self.encode(value)?;
            }
            return Ok(());
        }

        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map.iter() {
            entries.push((to_canonical_vec(key)?, value));
        }
        entries.sort_by(|(a, _), (b, _)| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        for (key, value) in entries {
            self.writer.write_all(&key)?;
            self.encode(value)?;
        }
        Ok(())
    }
}

/// Encodes `value`, canonically if `canonical` is set and in insertion order
/// otherwise.
pub fn encode(value: &Value, canonical: bool) -> Result<Vec<u8>> {
    let mut encoder = if canonical {
        Encoder::canonical(Vec::new())
    } else {
        Encoder::new(Vec::new())
    };
    encoder.encode(value)?;
    Ok(encoder.into_inner())
}

/// Encodes `value` canonically.
pub fn to_canonical_vec(value: &Value) -> Result<Vec<u8>> {
    encode(value, true)
}

/// Encodes `value` keeping every map in insertion order.
pub fn to_vec(value: &Value) -> Result<Vec<u8>> {
    encode(value, false)
}

/// Writes `value` canonically to `writer`.
pub fn to_writer<W: Write>(writer: W, value: &Value) -> Result<()> {
    Encoder::canonical(writer).encode(value)
}
