use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

use hangman::{app, AppState, CreatePlayerRequest, GameService, WordBank};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestApp {
    pub router: Router,
    pub game_service: Arc<GameService>,
}

pub struct TestAppBuilder {
    words: Vec<&'static str>,
    initial_word: Option<&'static str>,
    players: Vec<&'static str>,
    seed: u64,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            words: vec![],
            initial_word: None,
            players: vec![],
            seed: 2024,
        }
    }

    pub fn with_words(mut self, words: Vec<&'static str>) -> Self {
        self.words = words;
        self
    }

    pub fn with_initial_word(mut self, word: &'static str) -> Self {
        self.initial_word = Some(word);
        self
    }

    pub fn with_players(mut self, players: Vec<&'static str>) -> Self {
        self.players = players;
        self
    }

    pub fn build(self) -> TestApp {
        let mut builder = GameService::builder().with_seed(self.seed);

        if !self.words.is_empty() {
            builder = builder.with_word_bank(WordBank::new(self.words).unwrap());
        }
        if let Some(word) = self.initial_word {
            builder = builder.with_initial_word(word);
        }
        for name in self.players {
            builder = builder.with_player(CreatePlayerRequest::named(name));
        }

        let game_service = Arc::new(builder.build().unwrap());
        let router = app(AppState::new(Arc::clone(&game_service)));

        TestApp {
            router,
            game_service,
        }
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn guess(&self, player_id: u32, letter: &str) -> (StatusCode, Value) {
        self.get(&format!("/guess/{}/{}", player_id, letter)).await
    }

    pub async fn current_word(&self) -> String {
        let (status, body) = self.get("/word").await;
        assert_eq!(status, StatusCode::OK);
        body.as_str().expect("word should be a JSON string").to_string()
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }
}
