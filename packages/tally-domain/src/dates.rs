use time::{
	Date, OffsetDateTime, PrimitiveDateTime,
	format_description::{BorrowedFormatItem, well_known::Rfc3339},
	macros::format_description,
};

const DATE_ONLY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DATE_TIME_SPACED: &[BorrowedFormatItem<'static>] =
	format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const DATE_TIME_T: &[BorrowedFormatItem<'static>] =
	format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Tolerant parse of a record's string-encoded date. Accepts RFC 3339,
/// `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DDTHH:MM:SS` (assumed UTC), and bare
/// `YYYY-MM-DD` (midnight UTC). Anything else is `None`.
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
	let raw = raw.trim();

	if raw.is_empty() {
		return None;
	}
	if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
		return Some(ts);
	}
	if let Ok(dt) = PrimitiveDateTime::parse(raw, DATE_TIME_SPACED) {
		return Some(dt.assume_utc());
	}
	if let Ok(dt) = PrimitiveDateTime::parse(raw, DATE_TIME_T) {
		return Some(dt.assume_utc());
	}
	if let Ok(date) = Date::parse(raw, DATE_ONLY) {
		return Some(date.midnight().assume_utc());
	}

	None
}

/// Parse a date-only filter bound. Full timestamps are accepted and reduced
/// to their calendar date. Malformed input yields `None`, which callers
/// treat as "no constraint".
pub fn parse_date_bound(raw: &str) -> Option<Date> {
	let raw = raw.trim();

	if raw.is_empty() {
		return None;
	}
	if let Ok(date) = Date::parse(raw, DATE_ONLY) {
		return Some(date);
	}

	parse_timestamp(raw).map(|ts| ts.date())
}
