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

//! Human-readable rendering of decoded values.
//!
//! Byte strings print as lists of hex bytes, text strings in single quotes
//! and tags as a `tag N ` prefix. An array whose items are all scalars fits
//! on one line; other arrays and all non-empty maps put one entry per line,
//! indented two spaces per level.

use std::fmt::Write;

use crate::{decode_sequence, Result, Value};

/// Renders `value` as indented text.
///
/// ```
/// use mdoc_cbor::{pretty_print, ArrayBuilder, MapBuilder};
///
/// let value = MapBuilder::new()
///     .put("a", ArrayBuilder::new().push(1).push(vec![0xff_u8]).build())
///     .build();
/// assert_eq!(pretty_print(&value), "{\n  'a' : [1, [0xff]]\n}");
/// ```
pub fn pretty_print(value: &Value) -> String {
    let mut out = String::new();
    print_value(&mut out, 0, value);
    out
}

/// Renders every data item in `encoded`, separating items with `",\n"`.
pub fn pretty_print_encoded(encoded: &[u8]) -> Result<String> {
    let items = decode_sequence(encoded)?;
    Ok(items
        .iter()
        .map(pretty_print)
        .collect::<Vec<_>>()
        .join(",\n"))
}

fn print_value(out: &mut String, indent: usize, value: &Value) {
    let pad = " ".repeat(indent);

    match value {
        Value::Tag(tag, inner) => {
            let _ = write!(out, "tag {tag} ");
            print_value(out, indent, inner);
        }
        Value::Unsigned(n) => {
            let _ = write!(out, "{n}");
        }
        Value::Negative(n) => {
            let _ = write!(out, "{}", -1 - i128::from(*n));
        }
        Value::Bytes(bytes) => {
            out.push('[');
            for (i, b) in bytes.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "0x{b:02x}");
            }
            out.push(']');
        }
        Value::Text(text) => {
            out.push('\'');
            out.push_str(text);
            out.push('\'');
        }
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Array(items) if !items.iter().any(Value::is_compound) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                print_value(out, indent, item);
            }
            out.push(']');
        }
        Value::Array(items) => {
            out.push_str("[\n");
            out.push_str(&pad);
            for (i, item) in items.iter().enumerate() {
                out.push_str("  ");
                print_value(out, indent + 2, item);
                if i + 1 < items.len() {
                    out.push(',');
                }
                out.push('\n');
                out.push_str(&pad);
            }
            out.push(']');
        }
        Value::Map(map) if map.is_empty() => out.push_str("{}"),
        Value::Map(map) => {
            out.push_str("{\n");
            out.push_str(&pad);
            for (i, (key, value)) in map.iter().enumerate() {
                out.push_str("  ");
                print_value(out, indent + 2, key);
                out.push_str(" : ");
                print_value(out, indent + 2, value);
                if i + 1 < map.len() {
                    out.push(',');
                }
                out.push('\n');
                out.push_str(&pad);
            }
            out.push('}');
        }
        Value::Bool(b) => {
            let _ = write!(out, "{b}");
        }
        Value::Null => out.push_str("null"),
        Value::Undefined => out.push_str("undefined"),
        Value::Float(f) => {
            let _ = write!(out, "{f}");
        }
    }
}
