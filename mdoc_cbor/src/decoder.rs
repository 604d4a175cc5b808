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

//! CBOR decoding into [`Value`] trees, plus measuring the length of an encoded item.

use std::io::{Cursor, Read};

use crate::{constants::*, pretty::pretty_print, Error, Map, Result, Value};

/// Reads CBOR data items into [`Value`] trees.
///
/// Indefinite-length strings, arrays and maps are accepted and produce the
/// same `Value` as their definite-length forms. Half and single precision
/// floats are widened to `f64`. Maps with repeated keys are rejected.
pub struct Decoder<R: Read> {
    reader: R,
    peeked: Option<u8>,
    max_allocation: Option<usize>,
    recursion_depth: usize,
    max_recursion_depth: usize,
}

/// Safely convert u64 to usize, checking for overflow on 32-bit platforms
#[inline]
fn u64_to_usize(val: u64) -> Result<usize> {
    usize::try_from(val).map_err(|_| {
        Error::Syntax(format!(
            "length {val} exceeds maximum supported size on this platform"
        ))
    })
}

impl<R: Read> Decoder<R> {
    /// Create a new CBOR decoder with default limits
    ///
    /// Default limits:
    /// - No allocation limit
    /// - Maximum recursion depth: 128 levels
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    ///
    /// use mdoc_cbor::{Decoder, Value};
    ///
    /// let data = vec![0xa0]; // empty map
    /// let mut decoder = Decoder::new(Cursor::new(&data));
    /// assert!(matches!(decoder.decode_value().unwrap(), Value::Map(_)));
    /// ```
    pub fn new(reader: R) -> Self {
        Decoder {
            reader,
            peeked: None,
            max_allocation: None,
            recursion_depth: 0,
            max_recursion_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum size accepted for a single string (builder pattern).
    ///
    /// For indefinite-length strings the limit applies to the total size of
    /// all chunks.
    pub fn with_max_allocation(mut self, max_bytes: usize) -> Self {
        self.max_allocation = Some(max_bytes);
        self
    }

    /// Set the maximum nesting depth of arrays, maps and tags (builder
    /// pattern).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_recursion_depth = max_depth;
        self
    }

    /// Consume the decoder and return the inner reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn check_recursion_depth(&self) -> Result<()> {
        if self.recursion_depth >= self.max_recursion_depth {
            return Err(Error::Syntax(format!(
                "CBOR nesting depth {} exceeds maximum {}",
                self.recursion_depth, self.max_recursion_depth
            )));
        }
        Ok(())
    }

    fn check_allocation(&self, size: usize) -> Result<()> {
        match self.max_allocation {
            Some(max) if size > max => Err(Error::Syntax(format!(
                "allocation size {size} bytes exceeds maximum {max} bytes"
            ))),
            _ => Ok(()),
        }
    }

    fn read_u8(&mut self) -> Result<u8> {
        if let Some(byte) = self.peeked.take() {
            return Ok(byte);
        }
        let mut buf = [0u8; 1];
        self.reader.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.reader.read_exact(&mut buf)?;
        Ok(buf)
    }

    fn read_length(&mut self, info: u8) -> Result<Option<u64>> {
        Ok(match info {
            0..=23 => Some(info as u64),
            24 => Some(self.read_u8()? as u64),
            25 => Some(u16::from_be_bytes(self.read_array()?) as u64),
            26 => Some(u32::from_be_bytes(self.read_array()?) as u64),
            27 => Some(u64::from_be_bytes(self.read_array()?)),
            INDEFINITE => None,
            _ => {
                return Err(Error::Syntax(format!(
                    "reserved additional information value {info}"
                )))
            }
        })
    }

    fn read_definite_length(&mut self, info: u8, what: &str) -> Result<u64> {
        self.read_length(info)?
            .ok_or_else(|| Error::Syntax(format!("{what} cannot be indefinite")))
    }

    fn peek_u8(&mut self) -> Result<u8> {
        if let Some(byte) = self.peeked {
            return Ok(byte);
        }
        let byte = self.read_u8()?;
        self.peeked = Some(byte);
        Ok(byte)
    }

    fn is_break(&mut self) -> Result<bool> {
        if self.peek_u8()? == BREAK {
            self.peeked = None;
            return Ok(true);
        }
        Ok(false)
    }

    /// Read a definite-length byte buffer.
    ///
    /// The buffer grows as bytes arrive, so a truncated input never causes
    /// the full declared length to be allocated up front.
    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        self.check_allocation(len)?;
        let mut buf = Vec::new();
        let read = self.reader.by_ref().take(len as u64).read_to_end(&mut buf)?;
        if read < len {
            return Err(Error::Eof);
        }
        Ok(buf)
    }

    fn read_text(&mut self, len: usize) -> Result<String> {
        let buf = self.read_bytes(len)?;
        String::from_utf8(buf).map_err(|_| Error::InvalidUtf8)
    }

    /// Read the chunks of an indefinite-length string of the given major
    /// type and concatenate them.
    fn read_chunks(&mut self, major: u8) -> Result<Vec<u8>> {
        let mut result = Vec::new();
        while !self.is_break()? {
            let initial = self.read_u8()?;
            if initial >> 5 != major {
                return Err(Error::Syntax(
                    "indefinite-length string chunks must match the string type".to_string(),
                ));
            }
            let len = self.read_definite_length(initial & 0x1f, "string chunk")?;
            let len = u64_to_usize(len)?;
            self.check_allocation(result.len().saturating_add(len))?;
            let chunk = self.read_bytes(len)?;
            result.extend_from_slice(&chunk);
        }
        Ok(result)
    }

    /// Read a tag header.
    pub fn read_tag(&mut self) -> Result<u64> {
        let initial = self.read_u8()?;
        if initial >> 5 != MAJOR_TAG {
            return Err(Error::Syntax("expected a tag".to_string()));
        }
        self.read_definite_length(initial & 0x1f, "tag")
    }

    /// Decode the next complete data item.
    pub fn decode_value(&mut self) -> Result<Value> {
        let initial = self.read_u8()?;
        let major = initial >> 5;
        let info = initial & 0x1f;

        match major {
            MAJOR_UNSIGNED => Ok(Value::Unsigned(
                self.read_definite_length(info, "integer")?,
            )),
            MAJOR_NEGATIVE => Ok(Value::Negative(
                self.read_definite_length(info, "integer")?,
            )),
            MAJOR_BYTES => match self.read_length(info)? {
                Some(len) => Ok(Value::Bytes(self.read_bytes(u64_to_usize(len)?)?)),
                None => Ok(Value::Bytes(self.read_chunks(MAJOR_BYTES)?)),
            },
            MAJOR_TEXT => match self.read_length(info)? {
                Some(len) => Ok(Value::Text(self.read_text(u64_to_usize(len)?)?)),
                None => {
                    let bytes = self.read_chunks(MAJOR_TEXT)?;
                    Ok(Value::Text(
                        String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)?,
                    ))
                }
            },
            MAJOR_ARRAY => {
                let len = self.read_length(info)?;
                self.nested(|de| de.decode_array(len))
            }
            MAJOR_MAP => {
                let len = self.read_length(info)?;
                self.nested(|de| de.decode_map(len))
            }
            MAJOR_TAG => {
                let tag = self.read_definite_length(info, "tag")?;
                let inner = self.nested(|de| de.decode_value())?;
                Ok(Value::Tag(tag, Box::new(inner)))
            }
            _ => self.decode_simple(info),
        }
    }

    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.check_recursion_depth()?;
        self.recursion_depth += 1;
        let result = f(self);
        self.recursion_depth -= 1;
        result
    }

    fn decode_array(&mut self, len: Option<u64>) -> Result<Value> {
        let mut items = Vec::new();
        match len {
            Some(len) => {
                for _ in 0..len {
                    items.push(self.decode_value()?);
                }
            }
            None => {
                while !self.is_break()? {
                    items.push(self.decode_value()?);
                }
            }
        }
        Ok(Value::Array(items))
    }

    fn decode_map(&mut self, len: Option<u64>) -> Result<Value> {
        let mut map = Map::new();
        match len {
            Some(len) => {
                for _ in 0..len {
                    self.decode_entry(&mut map)?;
                }
            }
            None => {
                while !self.is_break()? {
                    self.decode_entry(&mut map)?;
                }
            }
        }
        Ok(Value::Map(map))
    }

    fn decode_entry(&mut self, map: &mut Map) -> Result<()> {
        let key = self.decode_value()?;
        let value = self.decode_value()?;
        map.try_insert(key, value)
            .map_err(|key| Error::DuplicateKey(pretty_print(&key)))
    }

    fn decode_simple(&mut self, info: u8) -> Result<Value> {
        match info {
            FALSE => Ok(Value::Bool(false)),
            TRUE => Ok(Value::Bool(true)),
            NULL => Ok(Value::Null),
            UNDEFINED => Ok(Value::Undefined),
            FLOAT16 => {
                let bits = half::f16::from_be_bytes(self.read_array()?);
                Ok(Value::Float(bits.to_f64()))
            }
            FLOAT32 => Ok(Value::Float(f64::from(f32::from_be_bytes(
                self.read_array()?,
            )))),
            FLOAT64 => Ok(Value::Float(f64::from_be_bytes(self.read_array()?))),
            INDEFINITE => Err(Error::Syntax("unexpected break".to_string())),
            _ => Err(Error::Syntax(format!("unsupported simple value {info}"))),
        }
    }
}

impl<T: AsRef<[u8]>> Decoder<Cursor<T>> {
    /// Number of bytes consumed so far.
    pub fn position(&self) -> u64 {
        self.reader.position()
    }
}

/// Decodes the first data item in `bytes` and reports how many bytes it
/// occupies. Bytes after the item are ignored.
///
/// Fails with [`Error::Eof`] when `bytes` holds only a prefix of an item.
pub fn decode_next(bytes: &[u8]) -> Result<(Value, usize)> {
    let mut decoder = Decoder::new(Cursor::new(bytes)).with_max_allocation(DEFAULT_MAX_ALLOCATION);
    let value = decoder.decode_value()?;
    Ok((value, u64_to_usize(decoder.position())?))
}

/// Returns the encoded length of the first data item in `bytes`.
pub fn probe_length(bytes: &[u8]) -> Result<usize> {
    decode_next(bytes).map(|(_, len)| len)
}

/// Decodes exactly one data item.
///
/// Fails if `bytes` is empty, malformed, or has bytes left over after the
/// first item.
pub fn decode_one(bytes: &[u8]) -> Result<Value> {
    let (value, consumed) = decode_next(bytes)?;
    if consumed < bytes.len() {
        return Err(Error::TrailingData(bytes.len() - consumed));
    }
    Ok(value)
}

/// Decodes a sequence of concatenated data items.
pub fn decode_sequence(bytes: &[u8]) -> Result<Vec<Value>> {
    let mut items = Vec::new();
    let mut offset = 0;
    while offset < bytes.len() {
        let (value, consumed) = decode_next(&bytes[offset..])?;
        items.push(value);
        offset += consumed;
    }
    Ok(items)
}
