// SPDX-License-Identifier: Apache-2.0

//! Output rendering for CLI commands.
//!
//! Command handlers return data; this module handles presentation in
//! text or JSON.

use std::io::{self, Write};

use anyhow::{Context, Result};
use console::style;
use nulist_core::VisibilityResult;
use serde::Serialize;

use crate::cli::{OutputContext, OutputFormat};

/// Trait for types that can be rendered in multiple output formats.
pub trait Renderable: Serialize {
    /// Render as human-readable text to the given writer.
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()>;
}

/// Generic render function - handles JSON via serde, delegates text to the trait.
pub fn render<T: Renderable>(result: &T, ctx: &OutputContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(result).context("Failed to serialize to JSON")?;
            println!("{json}");
        }
        OutputFormat::Text => {
            result
                .render_text(&mut io::stdout(), ctx)
                .context("Failed to render text")?;
        }
    }
    Ok(())
}

impl Renderable for VisibilityResult {
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        if ctx.quiet && self.succeeded {
            return Ok(());
        }
        if self.succeeded {
            if ctx.is_interactive() {
                writeln!(w, "{}", style(&self.message).green())
            } else {
                writeln!(w, "{}", self.message)
            }
        } else if ctx.is_interactive() {
            writeln!(w, "{}", style(&self.message).yellow())?;
            writeln!(w, "  HTTP status: {}", style(self.status).bold())
        } else {
            writeln!(w, "{}", self.message)?;
            writeln!(w, "  HTTP status: {}", self.status)
        }
    }
}
