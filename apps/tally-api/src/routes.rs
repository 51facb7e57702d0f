use axum::{
	Json, Router,
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
};
use serde::Serialize;

use tally_domain::FilterOptions;
use tally_service::{ListParams, ListResponse, ServiceError};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/sales", get(list_sales))
		.route("/v1/sales/filters", get(filter_options))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn list_sales(
	State(state): State<AppState>,
	Query(params): Query<ListParams>,
) -> Result<Json<ListResponse>, ApiError> {
	let response = state.service.list(params.into_request()).await?;

	Ok(Json(response))
}

async fn filter_options(State(state): State<AppState>) -> Result<Json<FilterOptions>, ApiError> {
	let options = state.service.filter_options().await?;

	Ok(Json(options))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		// Data-layer failures stay local: clients get a generic
		// unavailable response, the cause goes to the log.
		tracing::error!(error = %err, "Sales data layer failure.");

		Self {
			status: StatusCode::SERVICE_UNAVAILABLE,
			error_code: "service_unavailable".to_string(),
			message: "Sales data is temporarily unavailable.".to_string(),
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
