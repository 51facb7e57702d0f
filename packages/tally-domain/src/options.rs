use std::collections::BTreeSet;

use crate::SalesRecord;

/// Distinct, sorted value sets usable as filter choices.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
	pub regions: Vec<String>,
	pub genders: Vec<String>,
	pub categories: Vec<String>,
	pub tags: Vec<String>,
	pub payment_methods: Vec<String>,
}

/// Pure function of the dataset: per field, drop empty values, deduplicate,
/// sort with the default string ordering. Tags are exploded on comma and
/// trimmed before deduplication.
pub fn derive_options(records: &[SalesRecord]) -> FilterOptions {
	FilterOptions {
		regions: distinct(records, |record| record.customer_region.as_str()),
		genders: distinct(records, |record| record.gender.as_str()),
		categories: distinct(records, |record| record.category.as_str()),
		tags: distinct_tags(records),
		payment_methods: distinct(records, |record| record.payment_method.as_str()),
	}
}

fn distinct<'a>(
	records: &'a [SalesRecord],
	field: impl Fn(&'a SalesRecord) -> &'a str,
) -> Vec<String> {
	records
		.iter()
		.map(field)
		.filter(|value| !value.is_empty())
		.map(str::to_string)
		.collect::<BTreeSet<_>>()
		.into_iter()
		.collect()
}

fn distinct_tags(records: &[SalesRecord]) -> Vec<String> {
	records
		.iter()
		.flat_map(|record| record.exploded_tags())
		.map(str::to_string)
		.collect::<BTreeSet<_>>()
		.into_iter()
		.collect()
}
