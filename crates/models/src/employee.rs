use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, Set, TryIntoModel};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Incoming employee payload. `id` is absent for rows the store has not
/// assigned one to yet; unknown JSON fields are ignored and missing string
/// fields default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeInput {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find().all(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Insert when `id` is unset (the store assigns one), otherwise replace the
/// full row with that id.
pub async fn save(db: &DatabaseConnection, input: EmployeeInput) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: match input.id { Some(id) => Set(id), None => NotSet },
        first_name: Set(input.first_name),
        last_name: Set(input.last_name),
        email: Set(input.email),
    };
    let saved = am.save(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    saved.try_into_model().map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> Result<(), ModelError> {
    Entity::delete_by_id(id).exec(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(())
}
