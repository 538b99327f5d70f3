use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::classify::NoteCategory;
use crate::entity::note;
use crate::error::AppError;

/// Column values for a note row insert, produced by the upload flow.
pub struct NewNote<'a> {
    pub title: &'a str,
    pub course_id: i32,
    pub category: NoteCategory,
    pub file_path: String,
    pub file_url: String,
    pub file_name: String,
}

pub async fn insert<C: ConnectionTrait>(db: &C, new: NewNote<'_>) -> Result<note::Model, AppError> {
    let new_note = note::ActiveModel {
        id: Set(Uuid::now_v7()),
        title: Set(new.title.trim().to_string()),
        file_url: Set(new.file_url),
        file_path: Set(new.file_path),
        file_category: Set(new.category.as_str().to_string()),
        file_name: Set(new.file_name),
        course_id: Set(new.course_id),
        created_at: Set(Utc::now()),
    };

    Ok(new_note.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<note::Model>, AppError> {
    Ok(note::Entity::find_by_id(id).one(db).await?)
}

/// Notes of a course, newest first. An empty list is a valid result.
pub async fn list_by_course<C: ConnectionTrait>(
    db: &C,
    course_id: i32,
) -> Result<Vec<note::Model>, AppError> {
    Ok(note::Entity::find()
        .filter(note::Column::CourseId.eq(course_id))
        .order_by_desc(note::Column::CreatedAt)
        .all(db)
        .await?)
}

/// Delete one note row. Returns whether a row was actually removed.
pub async fn delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<bool, AppError> {
    let result = note::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

/// Bulk-delete all of a course's note rows in one statement. Returns the
/// number of rows removed.
pub async fn delete_by_course<C: ConnectionTrait>(
    db: &C,
    course_id: i32,
) -> Result<u64, AppError> {
    let result = note::Entity::delete_many()
        .filter(note::Column::CourseId.eq(course_id))
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}
