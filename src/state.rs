use std::sync::Arc;

use crate::config::database::init_database;
use crate::config::jwt::JwtConfig;
use crate::store::mongo::{MongoStudentStore, MongoUserStore};
use crate::store::{StudentStore, UserStore};

/// Shared application state, constructed once at startup and cloned into
/// every handler. The stores are trait objects so tests can swap in the
/// in-memory backend.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub students: Arc<dyn StudentStore>,
    pub jwt_config: JwtConfig,
}

pub async fn init_app_state() -> AppState {
    let db = init_database().await;

    AppState {
        users: Arc::new(MongoUserStore::new(&db)),
        students: Arc::new(MongoStudentStore::new(&db)),
        jwt_config: JwtConfig::from_env(),
    }
}
