use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use models::employee::{self, EmployeeInput, Model};

/// List every employee on record.
pub async fn list_employees(db: &DatabaseConnection) -> Result<Vec<Model>, ServiceError> {
    Ok(employee::find_all(db).await?)
}

/// Get an employee by id.
pub async fn get_employee(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, ServiceError> {
    Ok(employee::find_by_id(db, id).await?)
}

/// Save an employee: insert without an id, full replacement with one.
pub async fn save_employee(db: &DatabaseConnection, input: EmployeeInput) -> Result<Model, ServiceError> {
    Ok(employee::save(db, input).await?)
}

/// Delete an employee by id. Absent ids are a no-op.
pub async fn delete_employee(db: &DatabaseConnection, id: i64) -> Result<(), ServiceError> {
    employee::delete_by_id(db, id).await?;
    Ok(())
}
