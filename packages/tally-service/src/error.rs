#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
	#[error(transparent)]
	Store(#[from] tally_store::Error),
}
