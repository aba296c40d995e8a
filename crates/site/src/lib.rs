//! # Cardkit Site
//!
//! Demo site content for the card renderer: static in-memory datasets
//! (doctors, appointments, medications, health metrics) and page builders
//! that compose the built-in cards into complete standalone HTML documents.
//!
//! **No serving concerns**: pages are plain strings; the run binary writes
//! them to disk. There is no routing, no server, and no interactivity.

pub mod data;
pub mod error;
pub mod pages;

pub use error::{SiteError, SiteResult};

use std::fs;
use std::path::{Path, PathBuf};

/// Generates the full demo site into `out_dir`.
///
/// Creates the directory if needed and writes one HTML file per page.
///
/// # Returns
///
/// The paths of the files written, in write order.
///
/// # Errors
///
/// Returns [`SiteError`] if a page fails to render or a file cannot be
/// written.
pub fn generate(out_dir: &Path) -> SiteResult<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(SiteError::OutputDirCreation)?;

    let registry = cardkit_cards::builtins();
    let pages = [
        ("index.html", pages::index()),
        ("dashboard.html", pages::dashboard(registry)?),
        ("doctors.html", pages::doctors_directory(registry)?),
        ("pharmacy.html", pages::pharmacy(registry)?),
    ];

    let mut written = Vec::with_capacity(pages.len());
    for (name, html) in pages {
        let path = out_dir.join(name);
        fs::write(&path, html).map_err(SiteError::PageWrite)?;
        tracing::debug!(page = name, "wrote page");
        written.push(path);
    }
    Ok(written)
}
