use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notes")]
pub struct Model {
    /// UUIDv7 primary key, generated at insert time.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub title: String,

    /// Public URL the blob's bytes resolve at.
    pub file_url: String,

    /// Blob store key. Required to remove the blob later.
    pub file_path: String,

    /// One of `image`, `audio`, `pdf`, `text`.
    pub file_category: String,

    /// Original upload filename, or the synthesized name for text notes.
    pub file_name: String,

    pub course_id: i32,

    #[sea_orm(belongs_to, from = "course_id", to = "id")]
    pub course: Option<super::course::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
