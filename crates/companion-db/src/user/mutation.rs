use companion_entity::user::{ActiveModel, Model};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::prelude::*;

pub struct Mutation;

impl Mutation {
    /// Stores a new user. Fails with a unique constraint violation if the email is taken.
    pub async fn create_user<C: ConnectionTrait>(
        conn: &C,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<Model, DbErr> {
        let user = ActiveModel {
            id: NotSet,
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            password_hash: Set(password_hash.to_owned()),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };
        user.insert(conn).await
    }

    pub async fn delete_user<C: ConnectionTrait>(conn: &C, user_id: i32) -> Result<(), DbErr> {
        companion_entity::user::Entity::delete_by_id(user_id).exec(conn).await?;
        Ok(())
    }
}
