use companion_entity::quiz::question::Model as QuestionModel;
use companion_model::quiz::question::{Quiz, QuizQuestion};

use crate::convert::TryFromDbModel;
use crate::error::Error;

impl TryFromDbModel<QuestionModel> for Quiz {
    type Error = Error;

    fn try_from_db_model(model: QuestionModel) -> Result<Self, Self::Error> {
        let options = model.option_list()?.0;
        Ok(Self {
            id: model.id,
            topic_id: model.topic_id,
            question: model.question,
            options,
            correct_option: model.correct_option,
            created_at: model.created_at,
        })
    }
}

impl TryFromDbModel<QuestionModel> for QuizQuestion {
    type Error = Error;

    fn try_from_db_model(model: QuestionModel) -> Result<Self, Self::Error> {
        let options = model.option_list()?.0;
        Ok(Self {
            id: model.id,
            question: model.question,
            options,
        })
    }
}
