use std::cmp::Reverse;

use time::OffsetDateTime;
use unicode_normalization::UnicodeNormalization;

use crate::{SalesRecord, dates};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
	DateDesc,
	DateAsc,
	QuantityDesc,
	QuantityAsc,
	NameAsc,
	NameDesc,
	/// A present but unrecognized key performs no reordering. This fallback
	/// is observable through the API and is kept on purpose.
	Unsorted,
}
impl SortKey {
	/// Absent or empty input selects the default ordering; anything else
	/// that is not one of the six known keys maps to [`SortKey::Unsorted`].
	pub fn from_param(raw: &str) -> Self {
		match raw.trim() {
			"" | "date_desc" => Self::DateDesc,
			"date_asc" => Self::DateAsc,
			"quantity_desc" => Self::QuantityDesc,
			"quantity_asc" => Self::QuantityAsc,
			"name_asc" => Self::NameAsc,
			"name_desc" => Self::NameDesc,
			_ => Self::Unsorted,
		}
	}
}

/// Stable in-place sort. Ties keep their incoming relative order under
/// every key, so filtered/searched order survives where keys compare equal.
pub fn sort_records(records: &mut [SalesRecord], key: SortKey) {
	match key {
		SortKey::DateDesc => records.sort_by_cached_key(|record| Reverse(timestamp_key(record))),
		SortKey::DateAsc => records.sort_by_cached_key(timestamp_key),
		SortKey::QuantityDesc => records.sort_by_key(|record| Reverse(record.quantity)),
		SortKey::QuantityAsc => records.sort_by_key(|record| record.quantity),
		SortKey::NameAsc =>
			records.sort_by_cached_key(|record| collation_key(&record.customer_name)),
		SortKey::NameDesc =>
			records.sort_by_cached_key(|record| Reverse(collation_key(&record.customer_name))),
		SortKey::Unsorted => {},
	}
}

/// Unparsable dates compare as `None`, the minimum instant: last under
/// `date_desc`, first under `date_asc`.
fn timestamp_key(record: &SalesRecord) -> Option<OffsetDateTime> {
	dates::parse_timestamp(&record.date)
}

/// Case-insensitive, NFKC-normalized key standing in for locale-aware
/// collation.
fn collation_key(name: &str) -> String {
	name.nfkc().collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_param_distinguishes_absent_from_unrecognized() {
		assert_eq!(SortKey::from_param(""), SortKey::DateDesc);
		assert_eq!(SortKey::from_param("  "), SortKey::DateDesc);
		assert_eq!(SortKey::from_param("date_asc"), SortKey::DateAsc);
		assert_eq!(SortKey::from_param("price_desc"), SortKey::Unsorted);
	}

	#[test]
	fn collation_key_ignores_case() {
		assert_eq!(collation_key("PRIYA SHAH"), collation_key("priya shah"));
	}
}
