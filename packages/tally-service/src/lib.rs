mod error;
pub mod list;
pub mod options;
pub mod paginate;
pub mod params;

pub use error::ServiceError;
pub use list::{ListRequest, ListResponse};
pub use paginate::{Pagination, paginate};
pub use params::ListParams;

use tally_store::SalesStore;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// The operations behind the HTTP contract: one listing query and one
/// filter-options query, both reading the store's cached dataset.
pub struct SalesService {
	pub store: SalesStore,
}
impl SalesService {
	pub fn new(store: SalesStore) -> Self {
		Self { store }
	}
}
