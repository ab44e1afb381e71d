//! Expense HTTP Routes
//!
//! JSON endpoints under `/api/expenses`.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, get_service},
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tower_http::services::ServeFile;

use crate::dashboard::{Dashboard, YearMonth};
use crate::expense::{
    Expense, ExpenseError, ExpenseFilter, ExpensePatch, ExpenseResult, ExpenseService, NewExpense,
    Summary,
};
use crate::store::StoreError;

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub month: Option<String>,
}

impl IntoResponse for ExpenseError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

fn malformed_body(rejection: JsonRejection) -> ExpenseError {
    ExpenseError::invalid_input(rejection.body_text())
}

fn malformed_query(rejection: QueryRejection) -> ExpenseError {
    ExpenseError::invalid_input(rejection.body_text())
}

/// Decode a request body that must be a JSON object
fn object_body<T: DeserializeOwned>(
    payload: Result<Json<Value>, JsonRejection>,
) -> ExpenseResult<T> {
    let Json(value) = payload.map_err(malformed_body)?;
    if !value.is_object() {
        return Err(ExpenseError::invalid_input("request body must be a JSON object"));
    }
    serde_json::from_value(value).map_err(|e| ExpenseError::invalid_input(e.to_string()))
}

/// Run a service call on the blocking pool; every call touches the data file.
async fn blocking<T, F>(service: Arc<ExpenseService>, op: F) -> ExpenseResult<T>
where
    T: Send + 'static,
    F: FnOnce(&ExpenseService) -> ExpenseResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || op(&service))
        .await
        .map_err(|e| ExpenseError::StorageFailure(StoreError::Unavailable(e.to_string())))?
}

// ==================
// Expense Routes
// ==================

/// Create expense routes.
///
/// `ui_entry` answers GETs on `/expenses/:id`, which is not an API read.
pub fn expense_routes(service: Arc<ExpenseService>, ui_entry: ServeFile) -> Router {
    Router::new()
        .route("/expenses", get(list_expenses_handler).post(create_expense_handler))
        .route(
            "/expenses/summary",
            get(summary_handler)
                .put(reserved_id_handler)
                .delete(reserved_id_handler),
        )
        .route(
            "/expenses/dashboard",
            get(dashboard_handler)
                .put(reserved_id_handler)
                .delete(reserved_id_handler),
        )
        .route(
            "/expenses/:id",
            get_service(ui_entry)
                .put(update_expense_handler)
                .delete(delete_expense_handler),
        )
        .with_state(service)
}

// ==================
// Handlers
// ==================

async fn list_expenses_handler(
    State(service): State<Arc<ExpenseService>>,
    query: Result<Query<ExpenseFilter>, QueryRejection>,
) -> Result<Json<Vec<Expense>>, ExpenseError> {
    let Query(filter) = query.map_err(malformed_query)?;
    Ok(Json(blocking(service, move |s| s.list(&filter)).await?))
}

async fn create_expense_handler(
    State(service): State<Arc<ExpenseService>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Expense>), ExpenseError> {
    let input: NewExpense = object_body(payload)?;
    let expense = blocking(service, move |s| s.create(input)).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

async fn update_expense_handler(
    State(service): State<Arc<ExpenseService>>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Expense>, ExpenseError> {
    let patch: ExpensePatch = object_body(payload)?;
    Ok(Json(blocking(service, move |s| s.update(&id, patch)).await?))
}

async fn delete_expense_handler(
    State(service): State<Arc<ExpenseService>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ExpenseError> {
    blocking(service, move |s| s.delete(&id)).await?;
    Ok(Json(MessageResponse {
        message: "Expense deleted".to_string(),
    }))
}

/// `summary` and `dashboard` are never expense ids
async fn reserved_id_handler(uri: Uri) -> ExpenseError {
    let id = uri.path().rsplit('/').next().unwrap_or_default();
    ExpenseError::NotFound(id.to_string())
}

async fn summary_handler(
    State(service): State<Arc<ExpenseService>>,
) -> Result<Json<Summary>, ExpenseError> {
    Ok(Json(blocking(service, |s| s.summary()).await?))
}

async fn dashboard_handler(
    State(service): State<Arc<ExpenseService>>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Result<Json<Dashboard>, ExpenseError> {
    let Query(query) = query.map_err(malformed_query)?;
    let month = match query.month.as_deref().filter(|m| !m.is_empty()) {
        Some(month) => YearMonth::parse(month)?,
        None => YearMonth::current(),
    };
    Ok(Json(blocking(service, move |s| s.dashboard(month)).await?))
}
