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

//! Byte-level edits of encoded data items.
//!
//! These helpers never touch their input. They splice the new entry into a
//! copy of the original bytes, so every other entry keeps its exact encoding
//! (float widths, header widths, indefinite lengths and key order included).

use crate::{
    constants::{INDEFINITE, MAJOR_MAP, MAJOR_TAG},
    decode_next, decode_one, probe_length, to_canonical_vec, to_vec, Encoder, Error, Result,
    Value,
};

/// Returns a copy of the encoded map `encoded_map` in which `key` maps to the
/// data item `encoded_value`.
///
/// An existing entry keeps its position; a new key is appended and the
/// map's entry count is rewritten in its shortest form.
pub fn set_map_value(
    encoded_map: &[u8],
    key: impl Into<Value>,
    encoded_value: &[u8],
) -> Result<Vec<u8>> {
    decode_one(encoded_value)?;
    replace_entry(encoded_map, key.into(), encoded_value)
}

/// Returns a copy of the encoded map `encoded_map` in which `key` maps to
/// `null`.
pub fn clear_map_value(encoded_map: &[u8], key: impl Into<Value>) -> Result<Vec<u8>> {
    replace_entry(encoded_map, key.into(), &[0xf6])
}

fn replace_entry(encoded_map: &[u8], key: Value, encoded_value: &[u8]) -> Result<Vec<u8>> {
    let item = decode_one(encoded_map)?;
    let entries = item.as_map()?.len();

    // skip any tags in front of the map
    let mut header_start = 0;
    let (count, header_len) = loop {
        let (major, argument, len) = read_header(&encoded_map[header_start..])?;
        if major == MAJOR_TAG {
            header_start += len;
            continue;
        }
        if major != MAJOR_MAP {
            return Err(Error::Syntax("expected a map header".to_string()));
        }
        break (argument, len);
    };

    let mut pos = header_start + header_len;
    for _ in 0..entries {
        let (entry_key, key_len) = decode_next(&encoded_map[pos..])?;
        let value_start = pos + key_len;
        let value_end = value_start + probe_length(&encoded_map[value_start..])?;

        if entry_key == key {
            let mut edited = Vec::with_capacity(encoded_map.len() + encoded_value.len());
            edited.extend_from_slice(&encoded_map[..value_start]);
            edited.extend_from_slice(encoded_value);
            edited.extend_from_slice(&encoded_map[value_end..]);
            return Ok(edited);
        }
        pos = value_end;
    }

    let mut edited = Vec::with_capacity(encoded_map.len() + encoded_value.len() + 16);
    match count {
        Some(count) => {
            edited.extend_from_slice(&encoded_map[..header_start]);
            Encoder::new(&mut edited).write_type_value(MAJOR_MAP, count + 1)?;
            edited.extend_from_slice(&encoded_map[header_start + header_len..pos]);
        }
        // an indefinite map keeps its header, the break byte stays last
        None => edited.extend_from_slice(&encoded_map[..pos]),
    }
    edited.extend_from_slice(&to_vec(&key)?);
    edited.extend_from_slice(encoded_value);
    edited.extend_from_slice(&encoded_map[pos..]);
    Ok(edited)
}

/// Reads one item header: the major type, its argument (`None` when
/// indefinite) and the header length.
fn read_header(bytes: &[u8]) -> Result<(u8, Option<u64>, usize)> {
    let initial = *bytes.first().ok_or(Error::Eof)?;
    let (major, info) = (initial >> 5, initial & 0x1f);

    let width = match info {
        0..=23 => return Ok((major, Some(u64::from(info)), 1)),
        24 => 1,
        25 => 2,
        26 => 4,
        27 => 8,
        INDEFINITE => return Ok((major, None, 1)),
        _ => {
            return Err(Error::Syntax(format!(
                "reserved additional information value {info}"
            )))
        }
    };

    let argument = bytes
        .get(1..1 + width)
        .ok_or(Error::Eof)?
        .iter()
        .fold(0u64, |acc, b| (acc << 8) | u64::from(*b));
    Ok((major, Some(argument), 1 + width))
}

/// Decodes one data item and re-encodes it canonically.
pub fn canonicalize(encoded: &[u8]) -> Result<Vec<u8>> {
    to_canonical_vec(&decode_one(encoded)?)
}
