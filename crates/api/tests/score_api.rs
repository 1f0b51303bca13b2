//! HTTP-level integration tests for scoring and the playlist ranking.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, create_playlist, get_auth, post_json_auth, signup};
use sqlx::PgPool;

/// Submit one video to a playlist and return its id.
async fn submit_video(app: &Router, token: &str, playlist_id: i64, code: &str) -> i64 {
    let body = serde_json::json!({ "links": [format!("https://youtu.be/{code}")] });
    let response = post_json_auth(
        app.clone(),
        &format!("/api/videos/{playlist_id}"),
        token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"][0]["id"].as_i64().unwrap()
}

/// Submit a score for a video.
async fn submit_score(app: &Router, token: &str, video_id: i64, score: i32) {
    let body = serde_json::json!({ "video_id": video_id, "score": score });
    let response = post_json_auth(app.clone(), "/api/scores", token, body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Scores outside 1..=11 are rejected; scoring an unknown video is 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_score_validation(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, token) = signup(&app, "owner").await;
    let playlist = create_playlist(&app, &token, "Movie night", 3, true).await;
    let video = submit_video(&app, &token, playlist, "abc").await;

    for bad in [0, 12, -1] {
        let body = serde_json::json!({ "video_id": video, "score": bad });
        let response = post_json_auth(app.clone(), "/api/scores", &token, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "score {bad}");
    }

    let body = serde_json::json!({ "video_id": 999999, "score": 5 });
    let response = post_json_auth(app, "/api/scores", &token, body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Re-submitting a score overwrites the previous one instead of adding a
/// second row.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_score_resubmit_overwrites(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, owner_token) = signup(&app, "owner").await;
    let (voter_id, voter_token) = signup(&app, "voter").await;
    let playlist = create_playlist(&app, &owner_token, "Movie night", 3, true).await;
    let video = submit_video(&app, &owner_token, playlist, "abc").await;

    let body = serde_json::json!({ "video_id": video, "score": 3, "comment": "meh" });
    let response = post_json_auth(app.clone(), "/api/scores", &voter_token, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = serde_json::json!({ "video_id": video, "score": 11, "comment": "grew on me" });
    let response = post_json_auth(app.clone(), "/api/scores", &voter_token, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["score"], 11);
    assert_eq!(json["data"]["comment"], "grew on me");

    let response = get_auth(app, &format!("/api/scores/video/{video}"), &voter_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let scores = json["data"].as_array().unwrap();
    assert_eq!(scores.len(), 1, "one score per user per video");
    assert_eq!(scores[0]["user_id"], voter_id);
    assert_eq!(scores[0]["username"], "voter");
    assert_eq!(scores[0]["score"], 11);
}

/// The ranking averages all votes when the owner's vote counts.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_ranking_includes_owner_votes(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, owner_token) = signup(&app, "owner").await;
    let (_, a_token) = signup(&app, "voter_a").await;
    let playlist = create_playlist(&app, &owner_token, "Movie night", 3, true).await;
    let video = submit_video(&app, &owner_token, playlist, "abc").await;

    submit_score(&app, &owner_token, video, 11).await;
    submit_score(&app, &a_token, video, 5).await;

    let response = get_auth(app, &format!("/api/scores/all/{playlist}"), &owner_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let entry = &json["data"][0];
    assert_eq!(entry["video_id"], video);
    assert_eq!(entry["score_count"], 2);
    assert!((entry["average_score"].as_f64().unwrap() - 8.0).abs() < 1e-9);
}

/// With `owner_vote_counts = false` the owner's votes are excluded from
/// average and count.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_ranking_excludes_owner_votes(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, owner_token) = signup(&app, "owner").await;
    let (_, a_token) = signup(&app, "voter_a").await;
    let (_, b_token) = signup(&app, "voter_b").await;
    let playlist = create_playlist(&app, &owner_token, "Movie night", 3, false).await;
    let video = submit_video(&app, &owner_token, playlist, "abc").await;

    submit_score(&app, &owner_token, video, 11).await;
    submit_score(&app, &a_token, video, 4).await;
    submit_score(&app, &b_token, video, 6).await;

    let response = get_auth(app, &format!("/api/scores/all/{playlist}"), &owner_token).await;
    let json = body_json(response).await;
    let entry = &json["data"][0];
    assert_eq!(entry["score_count"], 2, "owner's vote must not count");
    assert!((entry["average_score"].as_f64().unwrap() - 5.0).abs() < 1e-9);
}

/// The ranking orders by average descending with unscored videos last.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_ranking_ordering(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, owner_token) = signup(&app, "owner").await;
    let (_, helper_token) = signup(&app, "helper").await;
    let (_, voter_token) = signup(&app, "voter").await;
    let playlist = create_playlist(&app, &owner_token, "Movie night", 3, true).await;

    let grant = serde_json::json!({ "username": "helper" });
    let response = post_json_auth(
        app.clone(),
        &format!("/api/playlists/{playlist}/contributors"),
        &owner_token,
        grant,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let high = submit_video(&app, &helper_token, playlist, "high").await;

    // The owner submits two videos; "silent" never gets a score.
    let body = serde_json::json!({ "links": [
        "https://youtu.be/low",
        "https://youtu.be/silent",
    ]});
    let response = post_json_auth(
        app.clone(),
        &format!("/api/videos/{playlist}"),
        &owner_token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let low = json["data"][0]["id"].as_i64().unwrap();
    let silent = json["data"][1]["id"].as_i64().unwrap();

    submit_score(&app, &voter_token, low, 2).await;
    submit_score(&app, &voter_token, high, 10).await;

    let response = get_auth(app, &format!("/api/scores/all/{playlist}"), &voter_token).await;
    let json = body_json(response).await;
    let order: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["video_id"].as_i64().unwrap())
        .collect();
    assert_eq!(order, vec![high, low, silent]);
    assert!(json["data"][2]["average_score"].is_null());
    assert_eq!(json["data"][2]["score_count"], 0);
}

/// `GET /scores/mine/{playlist}` returns only the caller's scores.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_my_scores(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, owner_token) = signup(&app, "owner").await;
    let (_, voter_token) = signup(&app, "voter").await;
    let playlist = create_playlist(&app, &owner_token, "Movie night", 3, true).await;
    let video = submit_video(&app, &owner_token, playlist, "abc").await;

    submit_score(&app, &owner_token, video, 8).await;
    submit_score(&app, &voter_token, video, 4).await;

    let response = get_auth(
        app,
        &format!("/api/scores/mine/{playlist}"),
        &voter_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let scores = json["data"].as_array().unwrap();
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0]["score"], 4);
}
