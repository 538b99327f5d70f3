use chrono::Utc;
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entity::course;
use crate::error::AppError;
use crate::models::CreateCourseRequest;

/// Insert a course for `owner` with an empty note counter.
pub async fn insert<C: ConnectionTrait>(
    db: &C,
    owner: &str,
    req: &CreateCourseRequest,
) -> Result<course::Model, AppError> {
    let new_course = course::ActiveModel {
        title: Set(req.title.trim().to_string()),
        description: Set(req.description.clone()),
        professor: Set(req.professor.trim().to_string()),
        owner: Set(owner.to_string()),
        note_count: Set(0),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    Ok(new_course.insert(db).await?)
}

/// Courses belonging to `owner`, newest first.
pub async fn list_by_owner<C: ConnectionTrait>(
    db: &C,
    owner: &str,
) -> Result<Vec<course::Model>, AppError> {
    Ok(course::Entity::find()
        .filter(course::Column::Owner.eq(owner))
        .order_by_desc(course::Column::CreatedAt)
        .all(db)
        .await?)
}

/// Resolve a course the caller must own.
///
/// A missing course is `NotFound`; someone else's course is
/// `PermissionDenied`, never silently readable.
pub async fn find_owned<C: ConnectionTrait>(
    db: &C,
    id: i32,
    owner: &str,
) -> Result<course::Model, AppError> {
    let course = course::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Course not found".into()))?;

    if course.owner != owner {
        return Err(AppError::PermissionDenied);
    }

    Ok(course)
}

/// Delete the course row scoped to `(id, owner)`.
pub async fn delete_owned<C: ConnectionTrait>(
    db: &C,
    id: i32,
    owner: &str,
) -> Result<(), AppError> {
    let result = course::Entity::delete_many()
        .filter(course::Column::Id.eq(id))
        .filter(course::Column::Owner.eq(owner))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Course not found".into()));
    }
    Ok(())
}

/// Read-modify-write increment of the denormalized note counter.
///
/// Two concurrent increments can both read the same value and lose one
/// update. The counter is advisory; listing never relies on it.
pub async fn increment_note_count<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), AppError> {
    let course = course::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Course not found".into()))?;

    course::Entity::update_many()
        .col_expr(
            course::Column::NoteCount,
            Expr::value(course.note_count + 1),
        )
        .filter(course::Column::Id.eq(id))
        .exec(db)
        .await?;

    Ok(())
}

/// Single arithmetic decrement, clamped at zero by the filter.
pub async fn decrement_note_count<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), AppError> {
    course::Entity::update_many()
        .col_expr(
            course::Column::NoteCount,
            Expr::col(course::Column::NoteCount).sub(1),
        )
        .filter(course::Column::Id.eq(id))
        .filter(course::Column::NoteCount.gt(0))
        .exec(db)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};

    use super::*;

    fn sample_course(id: i32, owner: &str, note_count: i32) -> course::Model {
        course::Model {
            id,
            title: "Algorithms".to_string(),
            description: None,
            professor: "Dr. Smith".to_string(),
            owner: owner.to_string(),
            note_count,
            created_at: Utc::now(),
        }
    }

    fn exec_ok(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn insert_returns_created_course() {
        let db: DatabaseConnection = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_course(1, "alice", 0)]])
            .into_connection();

        let req = CreateCourseRequest {
            title: "Algorithms".to_string(),
            professor: "Dr. Smith".to_string(),
            description: None,
        };
        let course = insert(&db, "alice", &req).await.unwrap();

        assert_eq!(course.owner, "alice");
        assert_eq!(course.note_count, 0);
    }

    #[tokio::test]
    async fn find_owned_rejects_foreign_owner() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_course(1, "bob", 0)]])
            .into_connection();

        let result = find_owned(&db, 1, "alice").await;
        assert!(matches!(result, Err(AppError::PermissionDenied)));
    }

    #[tokio::test]
    async fn find_owned_missing_course_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<course::Model>::new()])
            .into_connection();

        let result = find_owned(&db, 99, "alice").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_owned_requires_a_matching_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_ok(0)])
            .into_connection();

        let result = delete_owned(&db, 1, "alice").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    // The increment is deliberately read-then-write (one SELECT, one
    // UPDATE): both statements are stubbed and must both be consumed.
    #[tokio::test]
    async fn increment_reads_then_writes() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_course(1, "alice", 5)]])
            .append_exec_results([exec_ok(1)])
            .into_connection();

        increment_note_count(&db, 1).await.unwrap();
    }

    #[tokio::test]
    async fn increment_missing_course_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<course::Model>::new()])
            .into_connection();

        let result = increment_note_count(&db, 1).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    // The decrement is a single arithmetic UPDATE; no read is issued, so a
    // lone exec stub is enough.
    #[tokio::test]
    async fn decrement_is_a_single_statement() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_ok(1)])
            .into_connection();

        decrement_note_count(&db, 1).await.unwrap();
    }

    #[tokio::test]
    async fn list_by_owner_returns_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                sample_course(2, "alice", 3),
                sample_course(1, "alice", 0),
            ]])
            .into_connection();

        let courses = list_by_owner(&db, "alice").await.unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].id, 2);
    }
}
