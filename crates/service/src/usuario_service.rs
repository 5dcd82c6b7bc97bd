use sea_orm::DatabaseConnection;

use models::usuario;
use crate::errors::ServiceError;

/// Look up a user by exact username. Reserved for authentication lookups.
pub async fn find_by_username(db: &DatabaseConnection, username: &str) -> Result<Option<usuario::Model>, ServiceError> {
    let found = usuario::find_by_usuario(db, username).await?;
    Ok(found)
}
