//! HTTP request handlers for the payroll API.
//!
//! Every handler tags its log lines with a fresh correlation id and turns
//! [`PayrollError`] into an [`ApiErrorResponse`].

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::PayrollError;
use crate::export::{ExportFile, ExportFormat};
use crate::service::RecordOutcome;
use crate::models::EmployeeDraft;

use super::request::{
    DeleteRangeRequest, EmployeeQuery, LoginRequest, PassphraseRequest, RangeQuery,
    WageEntryRequest,
};
use super::response::{ApiError, ApiErrorResponse, DeletedResponse, LoginResponse};
use super::state::AppState;

/// Header naming what saving an exported batch did to the ledger.
pub const RECORD_OUTCOME_HEADER: &str = "x-record-outcome";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/login", post(login_handler))
        .route(
            "/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/employees/:id",
            put(update_employee_handler).delete(delete_employee_handler),
        )
        .route("/wages", get(list_wages_handler).post(record_wages_handler))
        .route("/wages/preview", post(preview_wages_handler))
        .route("/wages/preview/export/:format", post(export_preview_handler))
        .route("/wages/delete", post(delete_wages_handler))
        .route("/wages/export/:format", get(export_handler))
        .route("/dashboard", get(dashboard_handler))
        .with_state(state)
}

fn error_response(correlation_id: Uuid, error: PayrollError) -> Response {
    if error.is_validation() {
        info!(correlation_id = %correlation_id, error = %error, "Request rejected");
    } else {
        warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    }
    ApiErrorResponse::from(error).into_response()
}

fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}

fn query_rejection_response(correlation_id: Uuid, rejection: QueryRejection) -> Response {
    let body_text = rejection.body_text();
    warn!(correlation_id = %correlation_id, error = %body_text, "Query string error");
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error: ApiError::validation_error(body_text),
    }
    .into_response()
}

fn file_response(file: ExportFile) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.file_name),
            ),
        ],
        file.bytes,
    )
        .into_response()
}

/// Handler for POST /login.
async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match state.service().login(&request.username, &request.password) {
        Ok(()) => Json(LoginResponse {
            authenticated: true,
            username: request.username,
        })
        .into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /employees.
async fn list_employees_handler(
    State(state): State<AppState>,
    query: Result<Query<EmployeeQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return query_rejection_response(correlation_id, rejection),
    };

    match state
        .service()
        .list_employees(query.branch, query.payment_method)
    {
        Ok(employees) => Json(employees).into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /employees.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeDraft>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Creating employee");
    let draft = match payload {
        Ok(Json(draft)) => draft,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match state.service().create_employee(draft) {
        Ok(employee) => (StatusCode::CREATED, Json(employee)).into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /employees/:id.
async fn update_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeDraft>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Updating employee");
    let draft = match payload {
        Ok(Json(draft)) => draft,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match state.service().update_employee(&id, draft) {
        Ok(employee) => Json(employee).into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for DELETE /employees/:id.
async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PassphraseRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Deleting employee");
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match state
        .service()
        .delete_employee(&id, request.passphrase.as_deref())
    {
        Ok(employee) => Json(employee).into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /wages/preview.
async fn preview_wages_handler(
    State(state): State<AppState>,
    payload: Result<Json<WageEntryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let result = request
        .period()
        .and_then(|period| state.service().preview_period(period, &request.hours));
    match result {
        Ok(preview) => Json(preview).into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /wages/preview/export/:format.
///
/// Downloads the batch calculated from the body without reading stored
/// records. With `"save": true` the batch is then recorded under the same
/// collision rules as POST /wages and the outcome is reported in the
/// `x-record-outcome` header.
async fn export_preview_handler(
    State(state): State<AppState>,
    Path(format): Path<String>,
    payload: Result<Json<WageEntryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, format = %format, "Exporting wage entry batch");
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let service = state.service();
    let result = request.period().and_then(|period| {
        let format: ExportFormat = format.parse()?;
        if request.save {
            service
                .export_and_record(period, &request.hours, format, request.passphrase.as_deref())
                .map(|(file, outcome)| (file, Some(outcome)))
        } else {
            service
                .export_preview(period, &request.hours, format)
                .map(|file| (file, None))
        }
    });
    match result {
        Ok((file, outcome)) => {
            info!(
                correlation_id = %correlation_id,
                file_name = %file.file_name,
                saved = outcome.is_some(),
                "Export ready"
            );
            let mut response = file_response(file);
            if let Some(outcome) = outcome {
                let value = match outcome {
                    RecordOutcome::Appended { .. } => "appended",
                    RecordOutcome::Replaced { .. } => "replaced",
                };
                response
                    .headers_mut()
                    .insert(RECORD_OUTCOME_HEADER, header::HeaderValue::from_static(value));
            }
            response
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /wages.
///
/// Answers 409 when the period is already recorded and no passphrase was
/// sent, so the client can ask the operator to confirm the overwrite.
async fn record_wages_handler(
    State(state): State<AppState>,
    payload: Result<Json<WageEntryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = request.period().and_then(|period| {
        state
            .service()
            .record_period(period, &request.hours, request.passphrase.as_deref())
    });
    match result {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                entries = request.hours.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Wage records saved"
            );
            Json(outcome).into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /wages.
async fn list_wages_handler(
    State(state): State<AppState>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return query_rejection_response(correlation_id, rejection),
    };

    let result = query
        .selection()
        .and_then(|range| state.service().records_in_range(range));
    match result {
        Ok(records) => Json(records).into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /wages/delete.
async fn delete_wages_handler(
    State(state): State<AppState>,
    payload: Result<Json<DeleteRangeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Deleting wage records in range");
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let result = request.selection().and_then(|range| {
        state
            .service()
            .delete_records_in_range(range, request.passphrase.as_deref())
    });
    match result {
        Ok(deleted) => Json(DeletedResponse { deleted }).into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /wages/export/:format.
///
/// `format` is `BSP`, `BRED` or `xlsx`, case-insensitive.
async fn export_handler(
    State(state): State<AppState>,
    Path(format): Path<String>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, format = %format, "Exporting wage records");
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return query_rejection_response(correlation_id, rejection),
    };

    let service = state.service();
    let result = query.selection().and_then(|range| {
        match format.parse::<ExportFormat>()? {
            ExportFormat::Workbook => service.export_spreadsheet(range),
            ExportFormat::Bank(bank_format) => service.export_bank_file(range, bank_format),
        }
    });
    match result {
        Ok(file) => {
            info!(
                correlation_id = %correlation_id,
                file_name = %file.file_name,
                bytes = file.bytes.len(),
                "Export ready"
            );
            file_response(file)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /dashboard.
async fn dashboard_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.service().dashboard() {
        Ok(dashboard) => Json(dashboard).into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}
