use companion_entity::user::Model as UserModel;
use companion_model::user::User;

use crate::convert::FromDbModel;

impl FromDbModel<UserModel> for User {
    fn from_db_model(model: UserModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            created_at: model.created_at,
        }
    }
}
