// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the Nulist CLI.

pub mod completion;
pub mod visibility;

use anyhow::Result;
use nulist_core::AppConfig;

use crate::cli::{Commands, OutputContext};
use crate::output;

/// Dispatch to the appropriate command handler.
pub async fn run(command: Commands, ctx: OutputContext, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Hide {
            package_id,
            package_version,
        } => {
            let result = visibility::run_hide(&package_id, &package_version, config).await?;
            output::render(&result, &ctx)
        }

        Commands::Show {
            package_id,
            package_version,
        } => {
            let result = visibility::run_show(&package_id, &package_version, config).await?;
            output::render(&result, &ctx)
        }

        Commands::Set {
            action,
            package_id,
            package_version,
        } => {
            let result =
                visibility::run_set(&action, &package_id, &package_version, config).await?;
            output::render(&result, &ctx)
        }

        Commands::Completion { shell } => completion::run_generate(shell),
    }
}
