use companion_entity::quiz::score::Model as ScoreModel;
use companion_model::quiz::score::UserScore;

use crate::convert::FromDbModel;

impl FromDbModel<ScoreModel> for UserScore {
    fn from_db_model(model: ScoreModel) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            topic_id: model.topic_id,
            score: model.score,
            total_questions: model.total_questions,
            timestamp: model.timestamp,
        }
    }
}
