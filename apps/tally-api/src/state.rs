use std::sync::Arc;

use tally_service::SalesService;
use tally_store::SalesStore;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<SalesService>,
}
impl AppState {
	/// Construction is cheap: the store loads the dataset lazily on the
	/// first query, not here.
	pub fn new(config: &tally_config::Config) -> Self {
		let store = SalesStore::new(config.storage.data_path.clone());

		Self { service: Arc::new(SalesService::new(store)) }
	}
}
