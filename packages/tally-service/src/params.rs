use serde::Deserialize;
use time::Date;

use tally_domain::{FilterSet, SortKey, dates};

use crate::ListRequest;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Raw query parameters exactly as the HTTP layer hands them over. Every
/// field is an optional string, so extraction itself can never fail;
/// malformed values degrade to defaults or "no constraint" during
/// coercion. This is documented, accepted behavior: a bad `ageMin` widens
/// the query instead of failing it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListParams {
	pub page: Option<String>,
	pub limit: Option<String>,
	pub sort_by: Option<String>,
	pub search: Option<String>,
	pub regions: Option<String>,
	pub genders: Option<String>,
	pub categories: Option<String>,
	pub tags: Option<String>,
	pub payment_methods: Option<String>,
	pub age_min: Option<String>,
	pub age_max: Option<String>,
	pub date_start: Option<String>,
	pub date_end: Option<String>,
}
impl ListParams {
	pub fn into_request(self) -> ListRequest {
		ListRequest {
			page: positive_int(self.page.as_deref(), DEFAULT_PAGE),
			limit: positive_int(self.limit.as_deref(), DEFAULT_LIMIT),
			sort_by: SortKey::from_param(self.sort_by.as_deref().unwrap_or("")),
			search: self.search.unwrap_or_default().trim().to_string(),
			filters: FilterSet {
				regions: csv(self.regions.as_deref()),
				genders: csv(self.genders.as_deref()),
				categories: csv(self.categories.as_deref()),
				tags: csv(self.tags.as_deref()),
				payment_methods: csv(self.payment_methods.as_deref()),
				age_min: int_bound(self.age_min.as_deref()),
				age_max: int_bound(self.age_max.as_deref()),
				date_start: date_bound(self.date_start.as_deref()),
				date_end: date_bound(self.date_end.as_deref()),
			},
		}
	}
}

fn positive_int(raw: Option<&str>, default: u32) -> u32 {
	raw.map(str::trim)
		.filter(|value| !value.is_empty())
		.and_then(|value| value.parse::<u32>().ok())
		.filter(|value| *value >= 1)
		.unwrap_or(default)
}

fn int_bound(raw: Option<&str>) -> Option<i64> {
	raw.map(str::trim).filter(|value| !value.is_empty()).and_then(|value| value.parse().ok())
}

fn date_bound(raw: Option<&str>) -> Option<Date> {
	raw.and_then(dates::parse_date_bound)
}

/// Comma-separated values, trimmed, empties dropped. An absent parameter
/// and a present-but-empty one both produce the empty set, i.e. no
/// constraint.
fn csv(raw: Option<&str>) -> Vec<String> {
	raw.map(|value| {
		value.split(',').map(str::trim).filter(|piece| !piece.is_empty()).map(str::to_string).collect()
	})
	.unwrap_or_default()
}
