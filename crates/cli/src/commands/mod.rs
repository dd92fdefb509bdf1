//! Command implementations for the CLI.
//!
//! Each submodule takes already-parsed arguments, computes its view through
//! `gateway_client`, and hands the formatted text to `Output::emit`.

use std::path::PathBuf;

use anyhow::Result;

use crate::formatters::{Formatter, OutputFormat, get_formatter, output_result};

pub mod discover;
pub mod nav;
pub mod records;
pub mod schema;

/// Where and how a command prints its result.
pub struct Output<'a> {
    pub format: OutputFormat,
    pub file: Option<&'a PathBuf>,
}

impl Output<'_> {
    pub fn formatter(&self) -> Box<dyn Formatter> {
        get_formatter(self.format)
    }

    pub fn emit(&self, text: &str) -> Result<()> {
        output_result(text, self.format, self.file)
    }
}
