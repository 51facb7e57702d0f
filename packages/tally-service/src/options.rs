use tally_domain::FilterOptions;

use crate::{SalesService, ServiceResult};

impl SalesService {
	/// The distinct, sorted filter choices. Derived once per process; later
	/// calls serve the store's memoized copy.
	pub async fn filter_options(&self) -> ServiceResult<FilterOptions> {
		let options = self.store.filter_options().await?;

		Ok(options.as_ref().clone())
	}
}
