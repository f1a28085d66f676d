mod common;

use crate::common::fixtures::{create_test_topic, create_test_user};
use crate::common::setup_db;
use companion_db::quiz::{question, score};
use paste::paste;
use test_log::test;

#[test(tokio::test)]
async fn test_question_options_are_json_encoded() {
    let db = &setup_db().await;
    let topic = create_test_topic(db).await;

    let created = question::Mutation::create_question(
        db,
        topic.id,
        "What is a perceptron?",
        vec!["A neuron".to_owned(), "A tree".to_owned()],
        0,
    )
    .await
    .unwrap();

    assert_eq!(created.options, r#"["A neuron","A tree"]"#);
    assert_eq!(created.option_list().unwrap().0, vec!["A neuron", "A tree"]);

    let loaded = question::Query::get_questions_by_topic(db, topic.id).await.unwrap();
    assert_eq!(loaded, vec![created]);
}

#[test(tokio::test)]
async fn test_questions_by_ids_skips_unknown() {
    let db = &setup_db().await;
    let topic = create_test_topic(db).await;
    let q = question::Mutation::create_question(db, topic.id, "q", vec!["a".to_owned()], 0)
        .await
        .unwrap();

    let loaded = question::Query::get_questions_by_ids(db, [q.id, q.id + 100]).await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, q.id);

    let none = question::Query::get_questions_by_ids(db, []).await.unwrap();
    assert!(none.is_empty());
}

#[test(tokio::test)]
async fn test_questions_by_many_ids() {
    let db = &setup_db().await;
    let topic = create_test_topic(db).await;
    let mut created = Vec::new();
    for text in ["first", "second"] {
        created.push(
            question::Mutation::create_question(db, topic.id, text, vec!["a".to_owned(), "b".to_owned()], 0)
                .await
                .unwrap(),
        );
    }

    // more ids than SQLite accepts as bind variables in one statement
    let ids = (1..=40_000).chain([created[0].id, created[1].id, created[1].id]);
    let mut loaded = question::Query::get_questions_by_ids(db, ids).await.unwrap();
    loaded.sort_by_key(|q| q.id);

    assert_eq!(loaded, created);
}

macro_rules! test_scores_filter {
    ($name:ident, $topic_filter:expr_2021, $expected:expr_2021) => {
        paste! {
            #[test(tokio::test)]
            async fn [<test_scores_ $name>]() {
                let db = &setup_db().await;
                let user = create_test_user(db).await;
                let topic = create_test_topic(db).await;
                let other = companion_db::topic::Mutation::create_topic(db, "Other", None).await.unwrap();

                score::Mutation::create_score(db, user.id, topic.id, 2, 3).await.unwrap();
                score::Mutation::create_score(db, user.id, topic.id, 3, 3).await.unwrap();
                score::Mutation::create_score(db, user.id, other.id, 0, 1).await.unwrap();

                let filter: Option<bool> = $topic_filter;
                let scores = match filter {
                    Some(true) => score::Query::get_scores_by_topic(db, user.id, topic.id).await.unwrap(),
                    Some(false) => score::Query::get_scores_by_topic(db, user.id, other.id).await.unwrap(),
                    None => score::Query::get_scores(db, user.id).await.unwrap(),
                };
                assert_eq!(scores.len(), $expected);
                assert!(scores.iter().all(|s| s.user_id == user.id));
            }
        }
    };
}

test_scores_filter!(all, None, 3);
test_scores_filter!(by_topic, Some(true), 2);
test_scores_filter!(by_other_topic, Some(false), 1);

#[test(tokio::test)]
async fn test_scores_of_other_users_are_hidden() {
    let db = &setup_db().await;
    let user = create_test_user(db).await;
    let other = companion_db::user::Mutation::create_user(db, "Other", "other@example.com", "hash")
        .await
        .unwrap();
    let topic = create_test_topic(db).await;

    score::Mutation::create_score(db, other.id, topic.id, 1, 1).await.unwrap();
    assert!(score::Query::get_scores(db, user.id).await.unwrap().is_empty());
}
