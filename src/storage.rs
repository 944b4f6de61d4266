use crate::models::Manifest;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

pub const ENTRY_FILE: &str = "index.html";
pub const MANIFEST_FILE: &str = "manifest.json";

/// Writes the rendered page and its manifest into `dir`, creating it if needed.
pub async fn write_bundle(dir: &Path, public_base: &str, html: &str) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir).await?;

    let entry_path = dir.join(ENTRY_FILE);
    fs::write(&entry_path, html).await?;

    let manifest = Manifest {
        entry: format!("{public_base}{ENTRY_FILE}"),
        files: vec![ENTRY_FILE.to_string()],
        public_base: public_base.to_string(),
        generated_at: chrono::Utc::now().to_rfc3339(),
    };
    let payload = serde_json::to_vec_pretty(&manifest)?;
    fs::write(dir.join(MANIFEST_FILE), payload).await?;

    info!("wrote bundle to {}", dir.display());
    Ok(entry_path)
}
