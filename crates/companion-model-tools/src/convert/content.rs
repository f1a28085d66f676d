use companion_entity::content::Model as ContentModel;
use companion_model::content::Content;

use crate::convert::FromDbModel;

impl FromDbModel<ContentModel> for Content {
    fn from_db_model(model: ContentModel) -> Self {
        Self {
            id: model.id,
            topic_id: model.topic_id,
            summary_text: model.summary_text,
            created_at: model.created_at,
        }
    }
}
