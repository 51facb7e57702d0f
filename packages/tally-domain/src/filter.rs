use time::Date;

use crate::{SalesRecord, dates};

/// One query's combined per-field constraints. Empty value sets and `None`
/// bounds mean "no constraint"; the caller normalizes present-but-empty
/// parameters to that same state before this type is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
	pub regions: Vec<String>,
	pub genders: Vec<String>,
	pub categories: Vec<String>,
	pub tags: Vec<String>,
	pub payment_methods: Vec<String>,
	pub age_min: Option<i64>,
	pub age_max: Option<i64>,
	pub date_start: Option<Date>,
	pub date_end: Option<Date>,
}
impl FilterSet {
	/// AND across fields, OR within a field's value set. Ranges are
	/// inclusive on every given bound.
	pub fn matches(&self, record: &SalesRecord) -> bool {
		if !self.regions.is_empty() && !self.regions.contains(&record.customer_region) {
			return false;
		}
		if !self.genders.is_empty() && !self.genders.contains(&record.gender) {
			return false;
		}
		if !self.categories.is_empty() && !self.categories.contains(&record.category) {
			return false;
		}
		if !self.payment_methods.is_empty()
			&& !self.payment_methods.contains(&record.payment_method)
		{
			return false;
		}
		if !self.tags.is_empty()
			&& !record.exploded_tags().any(|tag| self.tags.iter().any(|wanted| wanted == tag))
		{
			return false;
		}

		let age = i64::from(record.age);

		if let Some(min) = self.age_min
			&& age < min
		{
			return false;
		}
		if let Some(max) = self.age_max
			&& age > max
		{
			return false;
		}

		if self.date_start.is_some() || self.date_end.is_some() {
			// A record whose date does not parse is not excluded by a date
			// range, mirroring the source system.
			if let Some(date) = dates::parse_timestamp(&record.date).map(|ts| ts.date()) {
				if let Some(start) = self.date_start
					&& date < start
				{
					return false;
				}
				// Comparing calendar dates makes the end bound cover the
				// whole closing day.
				if let Some(end) = self.date_end
					&& date > end
				{
					return false;
				}
			}
		}

		true
	}
}
