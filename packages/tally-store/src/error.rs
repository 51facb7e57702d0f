use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Sales data source is unavailable at {path:?}.")]
	SourceUnavailable { path: PathBuf, source: std::io::Error },
	#[error("Sales data source is malformed: {message}")]
	MalformedSource { message: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
