use std::{
	env, fs, io,
	path::{Path, PathBuf},
};

use serde_json::json;
use uuid::Uuid;

/// A throwaway on-disk sales dataset for integration tests. Each instance
/// lives in its own uuid-named directory under the system temp dir, so
/// parallel tests never collide.
pub struct TestDataset {
	dir: PathBuf,
	path: PathBuf,
}
impl TestDataset {
	pub fn write(dataset: &serde_json::Value) -> io::Result<Self> {
		Self::write_raw(&dataset.to_string())
	}

	pub fn write_raw(contents: &str) -> io::Result<Self> {
		let dir = env::temp_dir().join(format!("tally-test-{}", Uuid::new_v4()));

		fs::create_dir_all(&dir)?;

		let path = dir.join("sales.json");

		fs::write(&path, contents)?;

		Ok(Self { dir, path })
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// A path inside the dataset directory that no file occupies.
	pub fn missing_path(&self) -> PathBuf {
		self.dir.join("missing.json")
	}

	pub fn overwrite(&self, contents: &str) -> io::Result<()> {
		fs::write(&self.path, contents)
	}

	pub fn cleanup(self) -> io::Result<()> {
		fs::remove_dir_all(&self.dir)
	}
}

/// Three records across the three accepted key spellings, with the dates,
/// names, and ages the acceptance tests assert on.
pub fn sample_dataset() -> serde_json::Value {
	json!([
		{
			"Customer ID": "C-1001",
			"Customer Name": "Priya Shah",
			"Phone Number": "9876543210",
			"Gender": "Female",
			"Age": 25,
			"Customer Region": "West",
			"Customer Type": "Member",
			"Product ID": "P-1",
			"Product Name": "Noise Buds",
			"Brand": "boAt",
			"Product Category": "Electronics",
			"Tags": "wireless, sale",
			"Quantity": 2,
			"Price per Unit": 1299.0,
			"Discount Percentage": 10.0,
			"Total Amount": 2598.0,
			"Final Amount": 2338.2,
			"Date": "2024-01-01",
			"Payment Method": "UPI",
			"Order Status": "Delivered",
			"Delivery Type": "Home",
			"Store ID": "S-1",
			"Store Location": "Mumbai",
			"Salesperson ID": "E-1",
			"Employee Name": "Kiran Rao"
		},
		{
			"customer_id": "C-1002",
			"customer_name": "Anil Gupta",
			"phone_number": "9123456780",
			"gender": "Male",
			"age": 30,
			"customer_region": "North",
			"customer_type": "Guest",
			"product_id": "P-2",
			"product_name": "Trail Shoes",
			"brand": "Sparx",
			"product_category": "Footwear",
			"tags": "sale",
			"quantity": 10,
			"price_per_unit": 1999.0,
			"discount_percentage": 0.0,
			"total_amount": 19990.0,
			"final_amount": 19990.0,
			"date": "2024-03-01",
			"payment_method": "Card",
			"order_status": "Shipped",
			"delivery_type": "Pickup",
			"store_id": "S-2",
			"store_location": "Delhi",
			"salesperson_id": "E-2",
			"employee_name": "Meera Nair"
		},
		{
			"customerId": "C-1003",
			"customerName": "PRIYA SHAH",
			"phoneNumber": "9000000001",
			"gender": "Female",
			"age": 18,
			"region": "South",
			"customerType": "Member",
			"productId": "P-3",
			"productName": "Cotton Kurta",
			"brand": "FabIndia",
			"category": "Apparel",
			"tags": "gift",
			"quantity": 5,
			"pricePerUnit": 899.0,
			"discountPercentage": 5.0,
			"totalAmount": 4495.0,
			"finalAmount": 4270.25,
			"date": "2024-02-01",
			"paymentMethod": "UPI",
			"orderStatus": "Delivered",
			"deliveryType": "Home",
			"storeId": "S-3",
			"storeLocation": "Chennai",
			"salespersonId": "E-3",
			"employeeName": "Kiran Rao"
		}
	])
}
