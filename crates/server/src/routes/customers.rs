use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use tracing::info;

use service::customer::Customer;
use service::store::CustomerStore;

use crate::errors::ApiError;

const OVERVIEW_HTML: &str = r#"<h1>API Overview</h1>
<p>This API provides endpoints to manage customers. Below are the available endpoints:</p>
<ul>
    <li><a href="/customers">GET /customers</a> - Retrieve all customers</li>
    <li>POST /customers - Create a new customer</li>
    <li>GET /customers/{id} - Retrieve a specific customer (replace "{id}" with a specific customer ID)</li>
    <li>PUT /customers/{id} - Update a specific customer</li>
    <li>POST /customers/batchUpdate - Batch update customers' information</li>
    <li>DELETE /customers/{id} - Delete a specific customer</li>
</ul>
<p>Use the above endpoints with appropriate HTTP methods to interact with the API.</p>"#;

/// Static HTML landing page listing the endpoints.
pub async fn overview() -> Html<&'static str> {
    Html(OVERVIEW_HTML)
}

/// List all customers.
pub async fn list(State(store): State<CustomerStore>) -> Json<Vec<Customer>> {
    Json(store.list().await)
}

/// Get one customer by id.
pub async fn get_one(
    State(store): State<CustomerStore>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    match store.get(&id).await {
        Some(customer) => Ok(Json(customer)),
        None => Err(ApiError::not_found("customer not found")),
    }
}

/// Create a customer; any id in the payload is discarded and the store
/// assigns the real one.
pub async fn create(
    State(store): State<CustomerStore>,
    payload: Result<Json<Customer>, JsonRejection>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let Json(candidate) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let stored = store.insert(candidate).await;
    info!(id = %stored.id, "customer created");
    Ok((StatusCode::CREATED, Json(stored)))
}

/// Replace the customer at the path id. The body is decoded before the
/// store is touched, so a malformed body answers 400 even for an
/// unknown id.
pub async fn update(
    State(store): State<CustomerStore>,
    Path(id): Path<String>,
    payload: Result<Json<Customer>, JsonRejection>,
) -> Result<Json<Customer>, ApiError> {
    let Json(candidate) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let stored = store.replace(&id, candidate).await?;
    info!(id = %stored.id, "customer updated");
    Ok(Json(stored))
}

/// Delete the customer at the path id.
pub async fn remove(
    State(store): State<CustomerStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    store.delete(&id).await?;
    info!(%id, "customer deleted");
    Ok(StatusCode::OK)
}

/// Batch replace: applies every candidate whose id exists, silently
/// skips the rest.
pub async fn batch_update(
    State(store): State<CustomerStore>,
    payload: Result<Json<Vec<Customer>>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(candidates) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let count = candidates.len();
    store.batch_replace(candidates).await;
    info!(count, "batch update applied");
    Ok(StatusCode::OK)
}
