// SPDX-License-Identifier: Apache-2.0

//! Unlist a package using the library API.
//!
//! Run with: `NUGET_API_KEY=... cargo run --example unlist -p nulist-core -- Foo 1.0.0`

use nulist_core::{GalleryClient, GalleryConfig};
use secrecy::SecretString;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let package_id = args.next().unwrap_or_else(|| "Foo".to_string());
    let package_version = args.next().unwrap_or_else(|| "1.0.0".to_string());
    let api_key = SecretString::new(std::env::var("NUGET_API_KEY")?.into());

    let client = GalleryClient::new(&GalleryConfig::default())?;
    let result = client.hide(&package_id, &package_version, &api_key).await?;

    println!("{}", result.message);

    Ok(())
}
