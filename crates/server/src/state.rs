use sea_orm::DatabaseConnection;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}
