#![allow(dead_code)]

use anyhow::{Context, Result};
use chrono::Duration;
use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use gradebook_api::auth::{password, TokenService};
use gradebook_api::config::AppConfig;
use gradebook_api::database::models::{NewUser, Role, User};
use gradebook_api::database::queries::users;
use gradebook_api::middleware::AUTH_HEADER;
use gradebook_api::{app, AppState};

pub const PASSWORD: &str = "password123";

/// Router served on an ephemeral local port, backed by the per-test database
pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    pub pool: PgPool,
    pub tokens: TokenService,
}

impl TestApp {
    pub async fn spawn(pool: PgPool) -> Result<Self> {
        let tokens = TokenService::new("integration-secret", Duration::days(30))?;

        let mut config = AppConfig::development();
        config.api.enable_request_logging = false;
        let router = app(AppState::new(pool.clone(), tokens.clone()), &config);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("failed to bind test listener")?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
            pool,
            tokens,
        })
    }

    /// Insert a user whose password is `PASSWORD`
    pub async fn seed_user(&self, email: &str, role: Role, admin: bool) -> Result<User> {
        let hashed = password::hash_password_async(PASSWORD.to_string()).await?;
        let user = users::create_user(
            &self.pool,
            &NewUser {
                firstname: "Test".to_string(),
                lastname: role.to_string(),
                email: email.to_string(),
                password: hashed,
                role,
                admin,
                classroom: None,
            },
        )
        .await?;
        Ok(user)
    }

    pub fn token_for(&self, user_id: Uuid) -> Result<String> {
        Ok(self.tokens.issue(user_id)?)
    }

    fn with_token(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.header(AUTH_HEADER, token),
            None => request,
        }
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> Result<Response> {
        let request = self.client.get(format!("{}{}", self.base_url, path));
        Ok(Self::with_token(request, token).send().await?)
    }

    pub async fn post(&self, path: &str, token: Option<&str>, body: &Value) -> Result<Response> {
        let request = self.client.post(format!("{}{}", self.base_url, path)).json(body);
        Ok(Self::with_token(request, token).send().await?)
    }

    pub async fn put(&self, path: &str, token: Option<&str>, body: &Value) -> Result<Response> {
        let request = self.client.put(format!("{}{}", self.base_url, path)).json(body);
        Ok(Self::with_token(request, token).send().await?)
    }
}
