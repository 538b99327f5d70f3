use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,
    pub description: Option<String>,
    pub professor: String,

    /// Opaque identity of the creating user. Immutable.
    pub owner: String,

    /// Denormalized count of notes in this course.
    ///
    /// Maintained incrementally by the upload/delete flows; advisory for
    /// display and allowed to drift, never consulted when listing notes.
    pub note_count: i32,

    #[sea_orm(has_many)]
    pub notes: HasMany<super::note::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
