use serde_json::json;

use tally_domain::{NormalizeError, SalesRecord, normalize_dataset};

fn normalize_one(value: serde_json::Value) -> SalesRecord {
	let records = normalize_dataset(&json!([value])).expect("dataset must normalize");

	assert_eq!(records.len(), 1);

	records.into_iter().next().expect("one record")
}

#[test]
fn key_spelling_variants_normalize_identically() {
	let spaced = json!({
		"Customer ID": "C-1",
		"Customer Name": "Priya Shah",
		"Phone Number": "9876543210",
		"Customer Region": "West",
		"Product Category": "Electronics",
		"Age": 28,
		"Quantity": 2,
		"Final Amount": 410.5,
		"Date": "2024-01-05",
	});
	let snake = json!({
		"customer_id": "C-1",
		"customer_name": "Priya Shah",
		"phone_number": "9876543210",
		"customer_region": "West",
		"product_category": "Electronics",
		"age": 28,
		"quantity": 2,
		"final_amount": 410.5,
		"date": "2024-01-05",
	});
	let camel = json!({
		"customerId": "C-1",
		"customerName": "Priya Shah",
		"phoneNumber": "9876543210",
		"region": "West",
		"category": "Electronics",
		"age": 28,
		"quantity": 2,
		"finalAmount": 410.5,
		"date": "2024-01-05",
	});
	let a = normalize_one(spaced);
	let b = normalize_one(snake);
	let c = normalize_one(camel);

	assert_eq!(a, b);
	assert_eq!(b, c);
	assert_eq!(a.customer_name, "Priya Shah");
	assert_eq!(a.customer_region, "West");
	assert_eq!(a.category, "Electronics");
}

#[test]
fn canonical_spelling_wins_over_alternates() {
	let record = normalize_one(json!({
		"Customer Name": "From Spaced",
		"customer_name": "From Snake",
		"customerName": "From Camel",
	}));

	assert_eq!(record.customer_name, "From Spaced");
}

#[test]
fn null_canonical_value_falls_through_to_alternate() {
	let record = normalize_one(json!({
		"Customer Name": null,
		"customer_name": "From Snake",
	}));

	assert_eq!(record.customer_name, "From Snake");
}

#[test]
fn missing_fields_default_per_type() {
	let record = normalize_one(json!({}));

	assert_eq!(record.customer_name, "");
	assert_eq!(record.tags, "");
	assert_eq!(record.date, "");
	assert_eq!(record.age, 0);
	assert_eq!(record.quantity, 0);
	assert_eq!(record.price_per_unit, 0.0);
	assert_eq!(record.final_amount, 0.0);
}

#[test]
fn numeric_coercion_accepts_strings_and_truncates() {
	let record = normalize_one(json!({
		"Age": "28",
		"Quantity": "3.9",
		"Price per Unit": "19.95",
		"Total Amount": 59.85,
	}));

	assert_eq!(record.age, 28);
	assert_eq!(record.quantity, 3);
	assert_eq!(record.price_per_unit, 19.95);
	assert_eq!(record.total_amount, 59.85);
}

#[test]
fn unparsable_numbers_degrade_to_defaults() {
	let record = normalize_one(json!({
		"Age": "unknown",
		"Quantity": {"nested": true},
		"Final Amount": "n/a",
	}));

	assert_eq!(record.age, 0);
	assert_eq!(record.quantity, 0);
	assert_eq!(record.final_amount, 0.0);
}

#[test]
fn negative_counts_clamp_to_zero() {
	let record = normalize_one(json!({ "Age": -4, "Quantity": "-2" }));

	assert_eq!(record.age, 0);
	assert_eq!(record.quantity, 0);
}

#[test]
fn numeric_phone_numbers_become_text() {
	let record = normalize_one(json!({ "Phone Number": 9876543210_u64 }));

	assert_eq!(record.phone_number, "9876543210");
}

#[test]
fn order_and_length_are_preserved() {
	let raw = json!([
		{ "Customer ID": "C-1" },
		{ "Customer ID": "C-2" },
		{ "Customer ID": "C-3" },
	]);
	let records = normalize_dataset(&raw).expect("dataset must normalize");
	let ids: Vec<_> = records.iter().map(|record| record.customer_id.as_str()).collect();

	assert_eq!(ids, ["C-1", "C-2", "C-3"]);
}

#[test]
fn top_level_shape_errors_are_reported() {
	assert!(matches!(
		normalize_dataset(&json!({"not": "an array"})),
		Err(NormalizeError::NotAnArray)
	));
	assert!(matches!(
		normalize_dataset(&json!([{}, 42])),
		Err(NormalizeError::NotAnObject { index: 1 })
	));
}

#[test]
fn exploded_tags_trim_and_drop_empty_pieces() {
	let record = normalize_one(json!({ "Tags": " wireless , sale ,, gift " }));
	let tags: Vec<_> = record.exploded_tags().collect();

	assert_eq!(tags, ["wireless", "sale", "gift"]);
}
