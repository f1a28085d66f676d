use companion_entity::topic::Model as TopicModel;
use companion_model::topic::Topic;

use crate::convert::FromDbModel;

impl FromDbModel<TopicModel> for Topic {
    fn from_db_model(model: TopicModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            created_at: model.created_at,
        }
    }
}
