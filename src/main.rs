use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the Cardkit demo site generator
///
/// Renders every demo page through the built-in card registry and writes the
/// resulting HTML files to the output directory.
///
/// # Environment Variables
/// - `CARDKIT_OUT_DIR`: Output directory for the generated site (default: "./public")
///
/// # Returns
/// * `Ok(())` - If every page renders and writes successfully
/// * `Err(anyhow::Error)` - If rendering or writing fails
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cardkit=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let out_dir = std::env::var("CARDKIT_OUT_DIR").unwrap_or_else(|_| "./public".into());

    tracing::info!("++ Generating demo site into {}", out_dir);

    let written = cardkit_site::generate(Path::new(&out_dir))?;
    for path in &written {
        tracing::info!("++ Wrote {}", path.display());
    }
    tracing::info!("++ Done: {} pages", written.len());

    Ok(())
}
