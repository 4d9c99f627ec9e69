//! In-memory stores backing the test suite.
//!
//! Semantics mirror the MongoDB backend: ids are opaque strings (UUIDv4
//! here), username uniqueness is not enforced on insert, and deletes are
//! unconditional.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::auth::model::User;
use crate::modules::students::model::Student;
use crate::store::{StudentStore, UserStore};

#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn insert(&self, username: &str, password: Option<&str>) -> Result<User> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            password: password.map(String::from),
        };

        self.users.write().await.push(user.clone());
        Ok(user)
    }
}

#[derive(Default)]
pub struct MemoryStudentStore {
    students: RwLock<HashMap<String, Map<String, Value>>>,
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn list(&self) -> Result<Vec<Student>> {
        let students = self.students.read().await;
        Ok(students
            .iter()
            .map(|(id, fields)| Student {
                id: id.clone(),
                fields: fields.clone(),
            })
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Student>> {
        let students = self.students.read().await;
        Ok(students.get(id).map(|fields| Student {
            id: id.to_string(),
            fields: fields.clone(),
        }))
    }

    async fn insert(&self, fields: Map<String, Value>) -> Result<Student> {
        let id = Uuid::new_v4().to_string();
        self.students.write().await.insert(id.clone(), fields.clone());

        Ok(Student { id, fields })
    }

    async fn replace(&self, id: &str, fields: Map<String, Value>) -> Result<()> {
        self.students.write().await.insert(id.to_string(), fields);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.students.write().await.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[tokio::test]
    async fn test_user_insert_and_find() {
        let store = MemoryUserStore::default();

        let inserted = store.insert("ann", Some("pw")).await.unwrap();
        assert!(!inserted.id.is_empty());

        let by_name = store.find_by_username("ann").await.unwrap().unwrap();
        assert_eq!(by_name.id, inserted.id);
        assert_eq!(by_name.password.as_deref(), Some("pw"));

        let by_id = store.find_by_id(&inserted.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "ann");

        assert!(store.find_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_user_insert_without_password() {
        let store = MemoryUserStore::default();

        let inserted = store.insert("ann", None).await.unwrap();
        assert!(inserted.password.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_usernames_are_not_rejected() {
        let store = MemoryUserStore::default();

        let first = store.insert("ann", None).await.unwrap();
        let second = store.insert("ann", None).await.unwrap();
        assert_ne!(first.id, second.id);

        // Lookup resolves to the earliest record, like a Mongo findOne scan.
        let found = store.find_by_username("ann").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn test_student_crud_roundtrip() {
        let store = MemoryStudentStore::default();

        let inserted = store
            .insert(fields(json!({"name": "Ann", "image": "x"})))
            .await
            .unwrap();

        let found = store.find_by_id(&inserted.id).await.unwrap().unwrap();
        assert_eq!(found.fields["name"], "Ann");

        store
            .replace(&inserted.id, fields(json!({"name": "Bob"})))
            .await
            .unwrap();
        let replaced = store.find_by_id(&inserted.id).await.unwrap().unwrap();
        assert_eq!(replaced.fields["name"], "Bob");
        assert!(!replaced.fields.contains_key("image"));

        store.delete(&inserted.id).await.unwrap();
        assert!(store.find_by_id(&inserted.id).await.unwrap().is_none());

        // Deleting again is still a success.
        store.delete(&inserted.id).await.unwrap();
    }
}
