use serde_json::{Map, Value};

use crate::SalesRecord;

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
	#[error("Sales dataset must be a JSON array.")]
	NotAnArray,
	#[error("Sales record at index {index} is not a JSON object.")]
	NotAnObject { index: usize },
}

/// Normalize a raw dataset into canonical records, same order, one-to-one.
/// Total over record contents: malformed field values degrade to type
/// defaults and never drop a record. Fails only when the top level is not
/// an array of objects.
pub fn normalize_dataset(raw: &Value) -> Result<Vec<SalesRecord>, NormalizeError> {
	let items = raw.as_array().ok_or(NormalizeError::NotAnArray)?;

	items
		.iter()
		.enumerate()
		.map(|(index, item)| {
			let obj = item.as_object().ok_or(NormalizeError::NotAnObject { index })?;

			Ok(normalize_record(obj))
		})
		.collect()
}

/// Candidate keys per field are ordered: the source's original spelling
/// first, then snake_case, then camelCase. The first present non-null value
/// wins.
pub fn normalize_record(obj: &Map<String, Value>) -> SalesRecord {
	SalesRecord {
		customer_id: text(obj, &["Customer ID", "customer_id", "customerId"]),
		customer_name: text(obj, &["Customer Name", "customer_name", "customerName"]),
		phone_number: text(obj, &["Phone Number", "phone_number", "phoneNumber"]),
		gender: text(obj, &["Gender", "gender"]),
		age: count(obj, &["Age", "age"]),
		customer_region: text(obj, &["Customer Region", "customer_region", "region"]),
		customer_type: text(obj, &["Customer Type", "customer_type", "customerType"]),
		product_id: text(obj, &["Product ID", "product_id", "productId"]),
		product_name: text(obj, &["Product Name", "product_name", "productName"]),
		brand: text(obj, &["Brand", "brand"]),
		category: text(obj, &["Product Category", "product_category", "category"]),
		tags: text(obj, &["Tags", "tags"]),
		quantity: count(obj, &["Quantity", "quantity"]),
		price_per_unit: amount(obj, &["Price per Unit", "price_per_unit", "pricePerUnit"]),
		discount_percentage: amount(obj, &[
			"Discount Percentage",
			"discount_percentage",
			"discountPercentage",
		]),
		total_amount: amount(obj, &["Total Amount", "total_amount", "totalAmount"]),
		final_amount: amount(obj, &["Final Amount", "final_amount", "finalAmount"]),
		date: text(obj, &["Date", "date"]),
		payment_method: text(obj, &["Payment Method", "payment_method", "paymentMethod"]),
		order_status: text(obj, &["Order Status", "order_status", "orderStatus"]),
		delivery_type: text(obj, &["Delivery Type", "delivery_type", "deliveryType"]),
		store_id: text(obj, &["Store ID", "store_id", "storeId"]),
		store_location: text(obj, &["Store Location", "store_location", "storeLocation"]),
		salesperson_id: text(obj, &["Salesperson ID", "salesperson_id", "salespersonId"]),
		employee_name: text(obj, &["Employee Name", "employee_name", "employeeName"]),
	}
}

fn resolve<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
	keys.iter().filter_map(|key| obj.get(*key)).find(|value| !value.is_null())
}

fn text(obj: &Map<String, Value>, keys: &[&str]) -> String {
	match resolve(obj, keys) {
		Some(Value::String(value)) => value.clone(),
		Some(Value::Number(value)) => value.to_string(),
		Some(Value::Bool(value)) => value.to_string(),
		_ => String::new(),
	}
}

fn count(obj: &Map<String, Value>, keys: &[&str]) -> u32 {
	let parsed = match resolve(obj, keys) {
		Some(Value::Number(value)) => value.as_f64(),
		Some(Value::String(raw)) => raw.trim().parse::<f64>().ok(),
		_ => None,
	};

	parsed.map(f64_to_count).unwrap_or(0)
}

fn amount(obj: &Map<String, Value>, keys: &[&str]) -> f64 {
	let parsed = match resolve(obj, keys) {
		Some(Value::Number(value)) => value.as_f64(),
		Some(Value::String(raw)) => raw.trim().parse::<f64>().ok(),
		_ => None,
	};

	parsed.filter(|value| value.is_finite()).unwrap_or(0.0)
}

fn f64_to_count(value: f64) -> u32 {
	if !value.is_finite() || value <= 0.0 {
		return 0;
	}

	value.trunc().min(f64::from(u32::MAX)) as u32
}
