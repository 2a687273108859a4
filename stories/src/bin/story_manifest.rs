//! Validate every campaign story and print the manifest as JSON.
//!
//! ```bash
//! cargo run -p campaign-hub-stories --bin story-manifest > stories.json
//! ```

use anyhow::Context;
use campaign_hub_stories::{catalog, manifest, validate};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let files = catalog();
    for file in &files {
        validate(file).with_context(|| format!("validating {}", file.meta.title))?;
        info!(
            title = file.meta.title,
            stories = file.stories.len(),
            "story file valid"
        );
    }

    let manifest = manifest(&files).context("building manifest")?;
    let json = serde_json::to_string_pretty(&manifest).context("rendering manifest")?;
    println!("{json}");

    Ok(())
}

// Logs go to stderr so stdout stays pure JSON.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campaign_hub_stories=info,story_manifest=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
