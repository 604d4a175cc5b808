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

use std::{fs, num::NonZeroUsize, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use super::read_file;
use crate::config::Settings;

#[derive(Debug, Parser)]
pub struct Split {
    /// Input path to a capture of an unframed message stream.
    pub path: PathBuf,

    /// Directory to write each message to, as `message-NNN.cbor`.
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Bytes handed to the extractor at a time.
    #[clap(long, default_value = "512")]
    pub chunk_size: NonZeroUsize,

    /// Force overwrite of messages already in the output directory.
    #[clap(short, long)]
    pub force: bool,
}

impl Split {
    pub fn execute(&self, settings: &Settings) -> Result<()> {
        let capture = read_file(&self.path)?;

        let mut extractor = settings.decoder.stream_extractor();
        let mut messages = Vec::new();

        for chunk in capture.chunks(self.chunk_size.get()) {
            extractor.push(chunk);
            while let Some(message) = extractor
                .extract()
                .with_context(|| format!("Malformed data after message {}", messages.len()))?
            {
                messages.push(message);
            }
        }

        if !extractor.pending().is_empty() {
            bail!(
                "Capture ends with {} bytes of an incomplete message",
                extractor.pending().len()
            );
        }

        if let Some(output) = &self.output {
            fs::create_dir_all(output)
                .with_context(|| format!("Failed to create directory {output:?}"))?;
        }

        for (index, message) in messages.iter().enumerate() {
            let number = index + 1;
            println!("message {number}: {} bytes", message.len());

            if let Some(output) = &self.output {
                let path = output.join(format!("message-{number:03}.cbor"));
                if path.exists() && !self.force {
                    bail!("{path:?} already exists, use --force to overwrite");
                }
                fs::write(&path, message).with_context(|| format!("Failed to write {path:?}"))?;
            }
        }

        Ok(())
    }
}
