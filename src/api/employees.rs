//! Employee API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::auth::Actor;
use crate::errors::AppError;
use crate::models::{
    CreateEmployeeRequest, Employee, ImportEmployeesRequest, UpdateEmployeeRequest,
};
use crate::AppState;

/// GET /api/employees - List the active sector's roster.
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Vec<Employee>> {
    let sync_status = state.store.status().await.as_str();
    success(state.store.list_employees().await, sync_status)
}

/// POST /api/employees - Register a new employee.
pub async fn create_employee(
    State(state): State<AppState>,
    actor: Actor,
    Json(request): Json<CreateEmployeeRequest>,
) -> ApiResult<Employee> {
    let sync_status = state.store.status().await.as_str();

    // Validate required fields
    if request.name.trim().is_empty() {
        return error(
            AppError::Validation("Name is required".to_string()),
            sync_status,
        );
    }
    if request.registration.trim().is_empty() {
        return error(
            AppError::Validation("Registration is required".to_string()),
            sync_status,
        );
    }

    match state.store.create_employee(&actor, &request).await {
        Ok(employee) => success(employee, sync_status),
        Err(e) => error(e, sync_status),
    }
}

/// PUT /api/employees/:id - Update an employee.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    actor: Actor,
    Json(request): Json<UpdateEmployeeRequest>,
) -> ApiResult<Employee> {
    let sync_status = state.store.status().await.as_str();

    match state.store.update_employee(&actor, &id, &request).await {
        Ok(employee) => success(employee, sync_status),
        Err(e) => error(e, sync_status),
    }
}

/// DELETE /api/employees/:id - Delete an employee.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    actor: Actor,
) -> ApiResult<()> {
    let sync_status = state.store.status().await.as_str();

    match state.store.delete_employee(&actor, &id).await {
        Ok(()) => success((), sync_status),
        Err(e) => error(e, sync_status),
    }
}

/// POST /api/employees/import - Replace the whole roster of the active sector.
pub async fn import_employees(
    State(state): State<AppState>,
    actor: Actor,
    Json(request): Json<ImportEmployeesRequest>,
) -> ApiResult<Vec<Employee>> {
    let sync_status = state.store.status().await.as_str();

    match state.store.import_employees(&actor, &request.employees).await {
        Ok(employees) => success(employees, sync_status),
        Err(e) => error(e, sync_status),
    }
}
