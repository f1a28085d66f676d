use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One multiple-choice question.
///
/// `options` holds a JSON-encoded list of strings, use [`Model::option_list`] to read it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "quizzes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub topic_id: i32,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    #[sea_orm(column_type = "Text")]
    pub options: String,
    pub correct_option: i32,
    pub created_at: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(pub Vec<String>);

impl Model {
    pub fn option_list(&self) -> Result<Options, serde_json::Error> {
        serde_json::from_str(&self.options)
    }
}

impl Options {
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::topic::Entity",
        from = "Column::TopicId",
        to = "crate::topic::Column::Id"
    )]
    Topic,
}

impl Related<crate::topic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
