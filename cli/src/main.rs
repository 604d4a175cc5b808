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

#![doc = include_str!("../README.md")]

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

mod commands;
mod config;

use commands::CliArgs;
use config::Settings;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // RUST_LOG still applies, -v raises everything to debug
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.verbose > 0 {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let settings = Settings::load(args.config.as_deref())?;
    log::debug!("using {settings:?}");

    args.command.execute(&settings)
}
