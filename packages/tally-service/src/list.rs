use tally_domain::{FilterSet, SalesRecord, SortKey, sort_records};

use crate::{
	Pagination, SalesService, ServiceResult,
	paginate::paginate,
	params::{DEFAULT_LIMIT, DEFAULT_PAGE},
};

/// A fully coerced listing query. Built from [`crate::ListParams`]; by the
/// time the engine sees it, "absent" and "present-but-empty" constraints
/// have collapsed into the same no-constraint state.
#[derive(Debug, Clone)]
pub struct ListRequest {
	pub page: u32,
	pub limit: u32,
	pub sort_by: SortKey,
	pub search: String,
	pub filters: FilterSet,
}
impl Default for ListRequest {
	fn default() -> Self {
		Self {
			page: DEFAULT_PAGE,
			limit: DEFAULT_LIMIT,
			sort_by: SortKey::DateDesc,
			search: String::new(),
			filters: FilterSet::default(),
		}
	}
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ListResponse {
	pub data: Vec<SalesRecord>,
	pub pagination: Pagination,
}

impl SalesService {
	/// Search, then filter, then sort, then paginate. Operates on a copy of
	/// the cached collection; both stages preserve the dataset's relative
	/// order, and the sort is stable on ties.
	pub async fn list(&self, req: ListRequest) -> ServiceResult<ListResponse> {
		let records = self.store.records().await?;
		let needle = req.search.to_lowercase();
		let mut matched: Vec<SalesRecord> = records
			.iter()
			.filter(|record| matches_search(record, &needle))
			.filter(|record| req.filters.matches(record))
			.cloned()
			.collect();

		sort_records(&mut matched, req.sort_by);

		let (data, pagination) = paginate(matched, req.page, req.limit);

		Ok(ListResponse { data, pagination })
	}
}

/// Case-insensitive substring match on the customer name or the phone
/// number's text form. An empty term matches everything.
fn matches_search(record: &SalesRecord, needle: &str) -> bool {
	if needle.is_empty() {
		return true;
	}

	record.customer_name.to_lowercase().contains(needle)
		|| record.phone_number.to_lowercase().contains(needle)
}
