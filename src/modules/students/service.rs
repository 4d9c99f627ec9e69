use serde_json::{Map, Value};
use tracing::instrument;

use crate::store::StudentStore;
use crate::utils::errors::AppError;

use super::model::Student;

/// Placeholder assigned to records created without an `image` field.
pub const DEFAULT_IMAGE_URL: &str = "https://picsum.photos/200/300";

pub struct StudentService;

impl StudentService {
    #[instrument(skip(store))]
    pub async fn list(store: &dyn StudentStore) -> Result<Vec<Student>, AppError> {
        Ok(store.list().await?)
    }

    /// Inserts the submitted document with `image` defaulted. A
    /// caller-supplied `image` wins over the placeholder.
    #[instrument(skip(store, fields))]
    pub async fn create(
        store: &dyn StudentStore,
        fields: Map<String, Value>,
    ) -> Result<Student, AppError> {
        let mut doc = Map::new();
        doc.insert(
            "image".to_string(),
            Value::String(DEFAULT_IMAGE_URL.to_string()),
        );
        for (key, value) in fields {
            // The id is server-assigned; a client-supplied one is dropped.
            if key == "id" {
                continue;
            }
            doc.insert(key, value);
        }

        Ok(store.insert(doc).await?)
    }

    #[instrument(skip(store))]
    pub async fn get(store: &dyn StudentStore, id: &str) -> Result<Student, AppError> {
        store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Not found".to_string()))
    }

    /// Shallow-merges the submitted fields over the stored document and
    /// replaces the whole record. Read-modify-replace: concurrent updates are
    /// not serialized, last writer wins.
    #[instrument(skip(store, fields))]
    pub async fn update(
        store: &dyn StudentStore,
        id: &str,
        fields: Map<String, Value>,
    ) -> Result<Student, AppError> {
        let existing = Self::get(store, id).await?;

        let mut doc = existing.fields;
        for (key, value) in fields {
            if key == "id" {
                continue;
            }
            doc.insert(key, value);
        }

        store.replace(id, doc.clone()).await?;

        Ok(Student {
            id: id.to_string(),
            fields: doc,
        })
    }

    #[instrument(skip(store))]
    pub async fn delete(store: &dyn StudentStore, id: &str) -> Result<(), AppError> {
        Ok(store.delete(id).await?)
    }
}
