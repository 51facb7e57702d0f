mod error;

pub use error::{Error, Result};

use std::{
	path::{Path, PathBuf},
	sync::Arc,
};

use tokio::sync::OnceCell;

use tally_domain::{FilterOptions, SalesRecord, derive_options, normalize_dataset};

/// Process-scoped cache over the JSON sales source. The load runs once,
/// lazily, on the first query; concurrent first calls await one in-flight
/// load instead of each starting their own. A failed load is never cached,
/// so a later call retries, and a partial dataset is never handed out.
pub struct SalesStore {
	path: PathBuf,
	records: OnceCell<Arc<Vec<SalesRecord>>>,
	options: OnceCell<Arc<FilterOptions>>,
}
impl SalesStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into(), records: OnceCell::new(), options: OnceCell::new() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Idempotent across calls: every success returns the same collection.
	pub async fn records(&self) -> Result<Arc<Vec<SalesRecord>>> {
		self.records.get_or_try_init(|| load(&self.path)).await.cloned()
	}

	/// Derived filter options, memoized alongside the records.
	pub async fn filter_options(&self) -> Result<Arc<FilterOptions>> {
		self.options
			.get_or_try_init(|| async {
				let records = self.records().await?;

				Ok(Arc::new(derive_options(&records)))
			})
			.await
			.cloned()
	}

	/// Drops both cached cells so the next call reloads from disk. Test
	/// isolation hook; nothing invalidates the cache in normal operation.
	pub fn reset(&mut self) {
		self.records = OnceCell::new();
		self.options = OnceCell::new();
	}
}

async fn load(path: &Path) -> Result<Arc<Vec<SalesRecord>>> {
	let raw = tokio::fs::read_to_string(path)
		.await
		.map_err(|err| Error::SourceUnavailable { path: path.to_path_buf(), source: err })?;
	let parsed: serde_json::Value = serde_json::from_str(&raw)
		.map_err(|err| Error::MalformedSource { message: err.to_string() })?;
	let records = normalize_dataset(&parsed)
		.map_err(|err| Error::MalformedSource { message: err.to_string() })?;

	tracing::info!(count = records.len(), path = %path.display(), "Loaded sales records.");

	Ok(Arc::new(records))
}
