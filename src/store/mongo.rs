//! MongoDB-backed stores.
//!
//! Ids are ObjectId hex strings at the API boundary. A path id that does not
//! parse as an ObjectId cannot match any document, so reads treat it as
//! absent and deletes as a no-op.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document, doc, oid::ObjectId, to_document};
use mongodb::{Collection, Database};
use serde_json::{Map, Value};

use crate::modules::auth::model::User;
use crate::modules::students::model::Student;
use crate::store::{StudentStore, UserStore};

pub struct MongoUserStore {
    collection: Collection<Document>,
}

impl MongoUserStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("users"),
        }
    }

    fn to_user(mut doc: Document) -> Result<User> {
        let id = take_object_id(&mut doc)?;
        let username = doc
            .get_str("username")
            .context("user document is missing a username")?
            .to_string();
        let password = doc.get_str("password").ok().map(String::from);

        Ok(User {
            id,
            username,
            password,
        })
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let found = self
            .collection
            .find_one(doc! { "username": username })
            .await?;

        found.map(Self::to_user).transpose()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let found = self.collection.find_one(doc! { "_id": oid }).await?;
        found.map(Self::to_user).transpose()
    }

    async fn insert(&self, username: &str, password: Option<&str>) -> Result<User> {
        let mut new_user = doc! { "username": username };
        if let Some(password) = password {
            new_user.insert("password", password);
        }

        let result = self.collection.insert_one(new_user).await?;
        let id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => bail!("insert returned a non-ObjectId id: {:?}", other),
        };

        Ok(User {
            id,
            username: username.to_string(),
            password: password.map(String::from),
        })
    }
}

pub struct MongoStudentStore {
    collection: Collection<Document>,
}

impl MongoStudentStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("students"),
        }
    }

    fn to_student(mut doc: Document) -> Result<Student> {
        let id = take_object_id(&mut doc)?;
        let fields = match serde_json::to_value(&doc)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        Ok(Student { id, fields })
    }
}

#[async_trait]
impl StudentStore for MongoStudentStore {
    async fn list(&self) -> Result<Vec<Student>> {
        let mut cursor = self.collection.find(doc! {}).await?;

        let mut students = Vec::new();
        while let Some(doc) = cursor.try_next().await? {
            students.push(Self::to_student(doc)?);
        }

        Ok(students)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Student>> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let found = self.collection.find_one(doc! { "_id": oid }).await?;
        found.map(Self::to_student).transpose()
    }

    async fn insert(&self, fields: Map<String, Value>) -> Result<Student> {
        let doc = to_document(&fields).context("student document is not BSON-representable")?;

        let result = self.collection.insert_one(doc).await?;
        let id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => bail!("insert returned a non-ObjectId id: {:?}", other),
        };

        Ok(Student { id, fields })
    }

    async fn replace(&self, id: &str, fields: Map<String, Value>) -> Result<()> {
        let oid = ObjectId::parse_str(id).context("replace called with a malformed id")?;
        let doc = to_document(&fields).context("student document is not BSON-representable")?;

        self.collection
            .replace_one(doc! { "_id": oid }, doc)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        // Unconditional delete: neither an unknown nor a malformed id is an
        // error.
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(());
        };

        self.collection.delete_one(doc! { "_id": oid }).await?;
        Ok(())
    }
}

fn take_object_id(doc: &mut Document) -> Result<String> {
    match doc.remove("_id") {
        Some(Bson::ObjectId(oid)) => Ok(oid.to_hex()),
        other => bail!("document has a non-ObjectId _id: {:?}", other),
    }
}
