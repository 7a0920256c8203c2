//! Storage creation for the CLI.

use std::{path::Path, sync::Arc};

use localaccount::{Accounts, backend::JsonFile};

/// Open the account flows over the JSON file at `path`.
///
/// The parent directory is created if needed; the file itself appears on first write.
pub fn open_accounts(path: &Path) -> Result<Accounts, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    tracing::debug!("Using storage file {}", path.display());
    Ok(Accounts::open(Arc::new(JsonFile::open(path))))
}
