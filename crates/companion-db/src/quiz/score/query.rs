use companion_entity::quiz::score::{self, Entity as Score, Model as ScoreModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn get_scores<C: ConnectionTrait>(conn: &C, user_id: i32) -> Result<Vec<ScoreModel>, DbErr> {
        let query = Score::find().filter(score::Column::UserId.eq(user_id));
        query.all(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to load scores");
        })
    }

    pub async fn get_scores_by_topic<C: ConnectionTrait>(
        conn: &C,
        user_id: i32,
        topic_id: i32,
    ) -> Result<Vec<ScoreModel>, DbErr> {
        let query = Score::find()
            .filter(score::Column::UserId.eq(user_id))
            .filter(score::Column::TopicId.eq(topic_id));
        query.all(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to load scores by topic");
        })
    }
}
