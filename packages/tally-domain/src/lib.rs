pub mod dates;
pub mod filter;
pub mod normalize;
pub mod options;
pub mod record;
pub mod sort;

pub use filter::FilterSet;
pub use normalize::{NormalizeError, normalize_dataset, normalize_record};
pub use options::{FilterOptions, derive_options};
pub use record::SalesRecord;
pub use sort::{SortKey, sort_records};
