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

mod chain;
mod print;
mod split;
mod verify;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};

pub use self::{chain::Chain, print::Print, split::Split, verify::Verify};
use crate::config::Settings;

/// Tool for inspecting mobile document CBOR messages and COSE envelopes.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a TOML settings file.
    #[arg(long, global = true, env = "MDOCTOOL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Use verbose output.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Pretty-print the CBOR data items in a file.
    Print(Print),
    /// Split an unframed capture into individual messages.
    Split(Split),
    /// Verify a COSE_Sign1 envelope.
    Verify(Verify),
    /// Check the signatures along a certificate chain.
    Chain(Chain),
}

impl Commands {
    pub fn execute(&self, settings: &Settings) -> Result<()> {
        match self {
            Commands::Print(print) => print.execute(settings),
            Commands::Split(split) => split.execute(settings),
            Commands::Verify(verify) => verify.execute(),
            Commands::Chain(chain) => chain.execute(),
        }
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    if !path.is_file() {
        bail!("Input path {path:?} must be a file");
    }
    fs::read(path).with_context(|| format!("Failed to read {path:?}"))
}

/// Read DER certificates from `path`, which holds either PEM (one or more
/// `CERTIFICATE` blocks) or a single DER certificate.
fn read_certificates(path: &Path) -> Result<Vec<Vec<u8>>> {
    let bytes = read_file(path)?;

    if !bytes.starts_with(b"-----BEGIN") {
        return Ok(vec![bytes]);
    }

    let certs: Vec<Vec<u8>> = pem::parse_many(&bytes)
        .with_context(|| format!("Failed to parse PEM from {path:?}"))?
        .into_iter()
        .filter(|pem| pem.tag() == "CERTIFICATE")
        .map(|pem| pem.into_contents())
        .collect();

    if certs.is_empty() {
        bail!("No certificates found in {path:?}");
    }
    Ok(certs)
}
