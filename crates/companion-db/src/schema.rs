//! Table bootstrap.
//!
//! Tables are created from the entity definitions when they don't exist yet. There are no migrations, a changed
//! entity on an existing database has to be handled by hand.

use companion_entity::{content, quiz, topic, user};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, Schema};

async fn create_table<C: ConnectionTrait, E: EntityTrait>(conn: &C, schema: &Schema, entity: E) -> Result<(), DbErr> {
    let backend = conn.get_database_backend();
    let statement = schema.create_table_from_entity(entity).if_not_exists().to_owned();
    conn.execute(backend.build(&statement)).await.inspect_err(|error| {
        tracing::error!(
            error = error as &dyn std::error::Error,
            table = entity.table_name(),
            "failed to create table"
        );
    })?;
    Ok(())
}

/// Creates all tables in foreign key order.
pub async fn create_tables<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    let schema = Schema::new(conn.get_database_backend());

    create_table(conn, &schema, user::Entity).await?;
    create_table(conn, &schema, topic::Entity).await?;
    create_table(conn, &schema, content::Entity).await?;
    create_table(conn, &schema, quiz::question::Entity).await?;
    create_table(conn, &schema, quiz::score::Entity).await?;

    tracing::debug!("database tables ready");
    Ok(())
}
