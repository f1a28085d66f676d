//! Sample data for a fresh database.

use sea_orm::{ConnectionTrait, DbErr, TransactionTrait};
use std::error::Error;

pub(crate) const SAMPLE_TOPICS: [(&str, &str); 8] = [
    (
        "Machine Learning Fundamentals",
        "Introduction to machine learning concepts, types of learning, and basic algorithms",
    ),
    (
        "Neural Networks",
        "Understanding artificial neural networks, perceptrons, and deep learning basics",
    ),
    (
        "Decision Trees",
        "Tree-based learning algorithms for classification and regression",
    ),
    (
        "Supervised Learning",
        "Learning with labeled data, classification and regression techniques",
    ),
    (
        "Unsupervised Learning",
        "Learning from unlabeled data, clustering and dimensionality reduction",
    ),
    (
        "Natural Language Processing",
        "Processing and understanding human language with AI",
    ),
    (
        "Computer Vision",
        "Teaching computers to interpret and understand visual information",
    ),
    (
        "Reinforcement Learning",
        "Learning through interaction with environment and rewards",
    ),
];

/// Inserts [`SAMPLE_TOPICS`] unless there already are topics. Returns the number of inserted topics.
pub(crate) async fn seed_topics<C: ConnectionTrait + TransactionTrait>(conn: &C) -> Result<usize, DbErr> {
    let existing = companion_db::topic::Query::count_topics(conn).await?;
    if existing > 0 {
        tracing::info!(existing, "database already contains topics, skipping seed");
        return Ok(0);
    }

    let txn = conn.begin().await?;
    for (title, description) in SAMPLE_TOPICS {
        companion_db::topic::Mutation::create_topic(&txn, title, Some(description))
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, title, "failed to seed topic"))?;
    }
    txn.commit().await?;

    tracing::info!(count = SAMPLE_TOPICS.len(), "seeded sample topics");
    Ok(SAMPLE_TOPICS.len())
}
