use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Map, Value, json};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::Student;
use super::service::StudentService;

/// List all students. This route is public.
#[instrument(skip(state))]
pub async fn get_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    let students = StudentService::list(state.students.as_ref()).await?;
    Ok(Json(students))
}

#[instrument(skip(state, _auth_user, fields))]
pub async fn create_student(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Json(fields): Json<Map<String, Value>>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::create(state.students.as_ref(), fields).await?;
    Ok(Json(student))
}

#[instrument(skip(state, _auth_user))]
pub async fn get_student(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::get(state.students.as_ref(), &id).await?;
    Ok(Json(student))
}

#[instrument(skip(state, _auth_user, fields))]
pub async fn update_student(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<String>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::update(state.students.as_ref(), &id, fields).await?;
    Ok(Json(student))
}

#[instrument(skip(state, _auth_user))]
pub async fn delete_student(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    StudentService::delete(state.students.as_ref(), &id).await?;
    Ok(Json(json!({})))
}
