//! Document-store abstraction.
//!
//! Handlers and services only see these two traits; the concrete backend is
//! chosen at startup and injected through [`crate::state::AppState`]. The
//! production backend is [`mongo`], while [`memory`] backs the test suite.
//!
//! Neither backend serializes concurrent callers: the login find-or-create
//! path and the students read-modify-replace path can both race, and the
//! username uniqueness check is not atomic.

pub mod memory;
pub mod mongo;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::modules::auth::model::User;
use crate::modules::students::model::Student;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>>;

    /// Inserts a new user record and returns it with its server-assigned id.
    async fn insert(&self, username: &str, password: Option<&str>) -> Result<User>;
}

#[async_trait]
pub trait StudentStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Student>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Student>>;

    /// Inserts the document as-is and returns it with its server-assigned id.
    async fn insert(&self, fields: Map<String, Value>) -> Result<Student>;

    /// Replaces the whole document stored under `id`.
    async fn replace(&self, id: &str, fields: Map<String, Value>) -> Result<()>;

    /// Deletes by id. Absent records are not an error.
    async fn delete(&self, id: &str) -> Result<()>;
}
