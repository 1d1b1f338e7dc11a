use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use lipucook::config::Config;
use lipucook::db::Store;
use lipucook::models::catalog::Vegetable;
use lipucook::seed::{Datasets, RawFlavor, RawProtein, RawRecipe, RawVegetable, SeedLoader};
use lipucook::state::SharedState;
use std::sync::Arc;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    store: Store,
}

async fn spawn_app() -> TestApp {
    spawn_app_with_database("sqlite::memory:").await
}

async fn spawn_app_with_database(database_path: &str) -> TestApp {
    let mut config = Config::default();
    config.general.database_path = database_path.to_string();

    let store = Store::new(&config.general.database_path)
        .await
        .expect("Failed to open store");
    let shared = Arc::new(SharedState::with_store(config, store.clone()));
    let state = lipucook::api::create_app_state(shared, None);

    TestApp {
        router: lipucook::api::router(state),
        store,
    }
}

/// One vegetable (Cabbage), one protein (Tofu), one flavor (Spicy) and one
/// recipe combining them.
fn sample_datasets() -> Datasets {
    Datasets {
        vegetables: Some(vec![RawVegetable {
            veg_id: Some(1),
            veg_name: Some("Cabbage".to_string()),
            veg_type_id: Some(1),
            veg_type_name: Some("Leafy".to_string()),
        }]),
        proteins: Some(vec![RawProtein {
            protein_id: Some(1),
            protein_name: Some("Tofu".to_string()),
            protein_type_id: Some(1),
            protein_type_name: Some("Soy".to_string()),
        }]),
        flavors: Some(vec![RawFlavor {
            flavor_id: Some(1),
            flavor_type: Some("Spicy".to_string()),
        }]),
        recipes: Some(vec![RawRecipe {
            recipe_name: Some("Spicy Tofu Cabbage".to_string()),
            recipe_context: Some("Stir-fry everything.".to_string()),
            veg_id: Some(1),
            protein_id: Some(1),
            flavor_id: Some(1),
        }]),
    }
}

async fn seeded_app() -> TestApp {
    seed(spawn_app().await).await
}

async fn seed(app: TestApp) -> TestApp {
    SeedLoader::new(app.store.clone(), 100)
        .seed(sample_datasets())
        .await
        .expect("Failed to seed");
    app
}

async fn get(app: &TestApp, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post(app: &TestApp, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("POST").uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn only_recipe_id(app: &TestApp) -> String {
    let (status, body) = get(app, "/api/find_recipes?veg_id=1&protein_id=1&flavor_id=1").await;
    assert_eq!(status, StatusCode::OK);
    body["recipes"][0]["recipe_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_find_recipes_returns_seeded_recipe() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/find_recipes?veg_id=1&protein_id=1&flavor_id=1").await;
    assert_eq!(status, StatusCode::OK);

    let recipes = body["recipes"].as_array().unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0]["recipe_name"], "Spicy Tofu Cabbage");
    assert_eq!(recipes[0]["recipe_context"], "Stir-fry everything.");
    assert_eq!(recipes[0]["likes"], 0);
    assert_eq!(recipes[0]["dislikes"], 0);

    let id = recipes[0]["recipe_id"].as_str().unwrap();
    assert_eq!(id.len(), 7);
    assert!(id.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
}

#[tokio::test]
async fn test_find_recipes_missing_parameter() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/find_recipes?veg_id=1&flavor_id=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "missing protein_id");

    let (status, body) = get(&app, "/api/find_recipes").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "missing veg_id");
}

#[tokio::test]
async fn test_find_recipes_non_integer_parameter() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/find_recipes?veg_id=abc&protein_id=1&flavor_id=1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "no matching recipes found");

    let (status, body) = get(&app, "/api/find_recipes?veg_id=1.0&protein_id=1&flavor_id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recipes"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_find_recipes_no_match() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/find_recipes?veg_id=1&protein_id=1&flavor_id=2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "no matching recipes found");
    assert!(body.get("recipes").is_none());
}

#[tokio::test]
async fn test_like_and_dislike_increment() {
    let app = seeded_app().await;
    let id = only_recipe_id(&app).await;

    let (status, body) = post(&app, &format!("/api/like/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["likes"], 1);

    for expected in 2..=4 {
        let (_, body) = post(&app, &format!("/api/like/{id}"), None).await;
        assert_eq!(body["likes"], expected);
    }

    let (status, body) = post(&app, &format!("/api/dislike_recipe/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dislikes"], 1);

    let (_, body) = get(&app, "/api/find_recipes?veg_id=1&protein_id=1&flavor_id=1").await;
    assert_eq!(body["recipes"][0]["likes"], 4);
    assert_eq!(body["recipes"][0]["dislikes"], 1);
}

#[tokio::test]
async fn test_like_unknown_recipe() {
    let app = seeded_app().await;

    let (status, body) = post(&app, "/api/like/ZZZZZZZ", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, _) = post(&app, "/api/dislike/ZZZZZZZ", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(app.store.count_recipes().await.unwrap(), 1);
    assert!(!app.store.recipe_exists("ZZZZZZZ").await.unwrap());
}

#[tokio::test]
async fn test_like_path_id_is_not_trimmed() {
    let app = seeded_app().await;
    let id = only_recipe_id(&app).await;

    let (status, _) = post(&app, &format!("/api/like/%20{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = get(&app, "/api/find_recipes?veg_id=1&protein_id=1&flavor_id=1").await;
    assert_eq!(body["recipes"][0]["likes"], 0);
}

#[tokio::test]
async fn test_concurrent_likes_are_not_lost() {
    const LIKES: i64 = 20;

    let path = std::env::temp_dir().join(format!("lipucook-likes-{}.db", uuid::Uuid::new_v4()));
    let app = seed(spawn_app_with_database(&format!("sqlite:{}", path.display())).await).await;
    let id = only_recipe_id(&app).await;

    let handles: Vec<_> = (0..LIKES)
        .map(|_| {
            let router = app.router.clone();
            let uri = format!("/api/like/{id}");
            tokio::spawn(async move {
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri(uri)
                            .body(Body::empty())
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                assert_eq!(response.status(), StatusCode::OK);
                let body = response.into_body().collect().await.unwrap().to_bytes();
                let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
                json["likes"].as_i64().unwrap()
            })
        })
        .collect();

    let mut counts = Vec::new();
    for handle in handles {
        counts.push(handle.await.unwrap());
    }
    counts.sort_unstable();
    assert_eq!(counts, (1..=LIKES).collect::<Vec<_>>());

    let (_, body) = get(&app, "/api/find_recipes?veg_id=1&protein_id=1&flavor_id=1").await;
    assert_eq!(body["recipes"][0]["likes"], LIKES);

    drop(app);
    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn test_add_comment_validation() {
    let app = seeded_app().await;
    let id = only_recipe_id(&app).await;
    let uri = format!("/api/add_comment/{id}");

    let (status, body) = post(&app, &uri, Some(serde_json::json!({ "comment_text": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = post(&app, &uri, Some(serde_json::json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(&app, &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = get(&app, &format!("/api/get_comments/{id}")).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_add_comment_keeps_whitespace_text() {
    let app = seeded_app().await;
    let id = only_recipe_id(&app).await;

    let (status, body) = post(
        &app,
        &format!("/api/add_comment/{id}"),
        Some(serde_json::json!({ "comment_text": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["comment_id"].as_i64().unwrap() > 0);

    let (_, body) = get(&app, &format!("/api/get_comments/{id}")).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["comments"][0]["comment_text"], "   ");
}

#[tokio::test]
async fn test_add_comment_unknown_recipe() {
    let app = seeded_app().await;

    let (status, body) = post(
        &app,
        "/api/add_comment/ZZZZZZZ",
        Some(serde_json::json!({ "comment_text": "Great" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_comments_ids_increase_and_paginate() {
    let app = seeded_app().await;
    let id = only_recipe_id(&app).await;
    let uri = format!("/api/add_comment/{id}");

    let mut last_id = 0;
    for n in 0..5 {
        let (status, body) = post(
            &app,
            &uri,
            Some(serde_json::json!({ "comment_text": format!("comment {n}") })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let comment_id = body["comment_id"].as_i64().unwrap();
        assert!(comment_id > last_id);
        last_id = comment_id;
    }

    let (status, body) = get(&app, &format!("/api/get_comments/{id}?page=2&per_page=2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
    assert_eq!(body["pages"], 3);
    assert_eq!(body["current_page"], 2);

    let comments = body["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["comment_text"], "comment 2");
    assert_eq!(comments[1]["comment_text"], "comment 3");

    let (_, body) = get(&app, "/api/get_comments/ZZZZZZZ").await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["comments"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_catalog_pagination() {
    let app = spawn_app().await;

    let proteins = (1..=45)
        .map(|i| RawProtein {
            protein_id: Some(i),
            protein_name: Some(format!("Protein {i}")),
            protein_type_id: Some(1),
            protein_type_name: Some("Meat".to_string()),
        })
        .collect();
    let datasets = Datasets {
        proteins: Some(proteins),
        ..sample_datasets()
    };
    SeedLoader::new(app.store.clone(), 10)
        .seed(datasets)
        .await
        .unwrap();

    let (status, body) = get(&app, "/api/proteins?per_page=20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 45);
    assert_eq!(body["pages"], 3);
    assert_eq!(body["current_page"], 1);
    assert_eq!(body["items"].as_array().unwrap().len(), 20);
    assert_eq!(body["items"][0]["protein_id"], 1);
    assert_eq!(body["items"][0]["protein_type_name"], "Meat");

    let (_, body) = get(&app, "/api/proteins?page=3&per_page=20").await;
    assert_eq!(body["items"].as_array().unwrap().len(), 5);

    let (status, body) = get(&app, "/api/proteins?page=4&per_page=20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 0);
    assert_eq!(body["current_page"], 4);
    assert_eq!(body["pages"], 3);

    let (status, body) = get(&app, "/api/proteins?page=abc&per_page=xyz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_page"], 1);
    assert_eq!(body["items"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn test_catalog_listing_shapes() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/vegetables").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["veg_name"], "Cabbage");
    assert_eq!(body["items"][0]["veg_type_name"], "Leafy");
    assert!(body["items"][0].get("veg_type_id").is_none());

    let (status, body) = get(&app, "/api/flavors").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["flavor_type"], "Spicy");
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_catalog_cache_serves_identical_body() {
    let app = seeded_app().await;

    let request = || {
        Request::builder()
            .uri("/api/vegetables?page=1")
            .body(Body::empty())
            .unwrap()
    };

    let first = app.router.clone().oneshot(request()).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(first.headers().get("x-cache").unwrap(), "MISS");
    let first_body = first.into_body().collect().await.unwrap().to_bytes();

    app.store
        .insert_vegetables(&[Vegetable {
            veg_id: 2,
            veg_name: "Carrot".to_string(),
            veg_type_id: 2,
            veg_type_name: "Root".to_string(),
        }])
        .await
        .unwrap();

    let second = app.router.clone().oneshot(request()).await.unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(second.headers().get("x-cache").unwrap(), "HIT");
    assert_eq!(
        second.headers().get("content-type").unwrap(),
        "application/json"
    );
    let second_body = second.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(first_body, second_body);

    // A different query string is a different key.
    let (_, body) = get(&app, "/api/vegetables?page=1&per_page=51").await;
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_health() {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();

    let state = lipucook::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    let router = lipucook::api::router(state);

    let response = router
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "ok");
}
