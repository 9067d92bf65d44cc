use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use models::employee::{EmployeeInput, Model};
use service::employee_service;

use crate::errors::ApiError;
use crate::state::ServerState;

/// List all employees.
pub async fn list_employees(
    State(state): State<ServerState>,
) -> Result<Json<Vec<Model>>, ApiError> {
    let employees = employee_service::list_employees(&state.db).await?;
    Ok(Json(employees))
}

/// Fetch a single employee by id.
pub async fn get_employee(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<Model>, ApiError> {
    match employee_service::get_employee(&state.db, id).await? {
        Some(found) => Ok(Json(found)),
        None => Err(ApiError::not_found("employee")),
    }
}

/// Create an employee; the store assigns the id.
pub async fn create_employee(
    State(state): State<ServerState>,
    Json(input): Json<EmployeeInput>,
) -> Result<Json<Model>, ApiError> {
    let created = employee_service::save_employee(&state.db, input).await?;
    Ok(Json(created))
}

/// Delete an employee by id; absent ids still succeed.
pub async fn delete_employee(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> StatusCode {
    match employee_service::delete_employee(&state.db, id).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
