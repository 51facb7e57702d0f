/// Canonical sales record. Every field is populated by normalization, so
/// query and sort logic never has to branch on a missing value.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
	pub customer_id: String,
	pub customer_name: String,
	pub phone_number: String,
	pub gender: String,
	pub age: u32,
	pub customer_region: String,
	pub customer_type: String,
	pub product_id: String,
	pub product_name: String,
	pub brand: String,
	pub category: String,
	/// Comma-separated free-form labels. Set semantics are derived, the
	/// stored form stays a single string.
	pub tags: String,
	pub quantity: u32,
	pub price_per_unit: f64,
	pub discount_percentage: f64,
	pub total_amount: f64,
	pub final_amount: f64,
	pub date: String,
	pub payment_method: String,
	pub order_status: String,
	pub delivery_type: String,
	pub store_id: String,
	pub store_location: String,
	pub salesperson_id: String,
	pub employee_name: String,
}
impl SalesRecord {
	pub fn exploded_tags(&self) -> impl Iterator<Item = &str> {
		self.tags.split(',').map(str::trim).filter(|tag| !tag.is_empty())
	}
}
