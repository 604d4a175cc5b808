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

use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use mdoc_cbor::{pretty_print, to_canonical_vec, Value};

use super::read_file;
use crate::config::{DecoderSettings, Settings};

#[derive(Debug, Parser)]
pub struct Print {
    /// Input path to a file holding one or more CBOR data items.
    pub path: PathBuf,

    /// Read the input as hex text instead of binary.
    #[clap(long)]
    pub hex: bool,

    /// Print each item re-encoded canonically, as hex.
    #[clap(long)]
    pub canonical: bool,
}

impl Print {
    pub fn execute(&self, settings: &Settings) -> Result<()> {
        let bytes = if self.hex {
            if !self.path.is_file() {
                bail!("Input path {:?} must be a file", self.path);
            }
            let text = fs::read_to_string(&self.path)
                .with_context(|| format!("Failed to read {:?}", self.path))?;
            let text: String = text.split_whitespace().collect();
            hex::decode(text).context("Input is not valid hex")?
        } else {
            read_file(&self.path)?
        };

        let items = decode_all(&bytes, &settings.decoder)?;

        if self.canonical {
            for item in &items {
                println!("{}", hex::encode(to_canonical_vec(item)?));
            }
        } else {
            let report = items
                .iter()
                .map(pretty_print)
                .collect::<Vec<_>>()
                .join(",\n");
            println!("{report}");
        }

        Ok(())
    }
}

fn decode_all(bytes: &[u8], settings: &DecoderSettings) -> Result<Vec<Value>> {
    if bytes.is_empty() {
        bail!("Input contains no CBOR data");
    }

    let mut decoder = settings.decoder(bytes);
    let mut items = Vec::new();

    while decoder.position() < bytes.len() as u64 {
        let offset = decoder.position();
        let item = decoder
            .decode_value()
            .with_context(|| format!("Failed to decode data item at offset {offset}"))?;
        items.push(item);
    }

    log::debug!("decoded {} data items", items.len());
    Ok(items)
}
