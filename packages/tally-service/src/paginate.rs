#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
	pub current_page: u32,
	pub total_pages: u32,
	pub total_items: usize,
	pub items_per_page: u32,
}

/// Slice `[(page-1)*limit, page*limit)` clipped to the available length.
/// A page past the end yields empty items with unchanged totals, never an
/// error. Zero total items reports zero total pages.
pub fn paginate<T>(items: Vec<T>, page: u32, limit: u32) -> (Vec<T>, Pagination) {
	let total_items = items.len();
	let total_pages = total_items.div_ceil(limit.max(1) as usize) as u32;
	let start = (page.saturating_sub(1) as usize).saturating_mul(limit as usize);
	let page_items: Vec<T> = items.into_iter().skip(start).take(limit as usize).collect();

	(
		page_items,
		Pagination { current_page: page, total_pages, total_items, items_per_page: limit },
	)
}
