//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure. The production router
//! is wired to in-memory repositories, so no database is needed.

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use axum_test::TestServer;
use chrono::{Duration, Utc};
use fake::{faker::lorem::en::Sentence, faker::name::en::Name, Fake};
use tokio::sync::RwLock;
use tower::ServiceExt;

use posts_api::application::services::{AuthServiceImpl, PostServiceImpl};
use posts_api::config::{
    CorsSettings, DatabaseSettings, JwtSettings, ServerSettings, Settings,
};
use posts_api::domain::{NewUser, Post, PostRepository, User, UserRepository};
use posts_api::shared::error::AppError;
use posts_api::startup::{build_router, AppState};

pub const JWT_SECRET: &str = "integration-test-secret-at-least-32-chars";

pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "postgres://localhost/posts_test".into(),
            max_connections: 1,
            min_connections: 0,
            acquire_timeout: 1,
            run_migrations: false,
        },
        jwt: JwtSettings {
            secret: JWT_SECRET.into(),
            access_token_expiry_minutes: 60,
        },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        environment: "test".into(),
    }
}

// ============================================================================
// In-memory repositories
// ============================================================================

/// Post storage backed by a vector, ids assigned in insertion order.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
    next_id: AtomicI64,
}

impl InMemoryPostRepository {
    pub async fn find(&self, id: i64) -> Option<Post> {
        self.posts.read().await.iter().find(|p| p.id == id).cloned()
    }

    pub async fn exists(&self, id: i64) -> bool {
        self.find(id).await.is_some()
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    /// Move both timestamps of a stored post into the past.
    pub async fn backdate(&self, id: i64, by: Duration) -> Option<Post> {
        let mut posts = self.posts.write().await;
        let post = posts.iter_mut().find(|p| p.id == id)?;
        post.created_at = post.created_at - by;
        post.updated_at = post.updated_at - by;
        Some(post.clone())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, title: &str) -> Result<Post, AppError> {
        let now = Utc::now();
        let post = Post {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            title: title.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError> {
        Ok(self.find(id).await)
    }

    async fn update(&self, post: &Post) -> Result<Post, AppError> {
        let mut posts = self.posts.write().await;
        let stored = posts
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or_else(|| AppError::NotFound(format!("Post with id {} not found", post.id)))?;

        stored.title = post.title.clone();
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(AppError::NotFound(format!("Post with id {} not found", id)));
        }
        Ok(())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Post>, AppError> {
        let mut posts = self.posts.read().await.clone();
        posts.sort_by_key(|p| p.id);
        Ok(posts
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.posts.read().await.len() as i64)
    }
}

/// User storage backed by a vector.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
    next_id: AtomicI64,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(AppError::Conflict("Email already registered".into()));
        }

        let now = Utc::now();
        let created = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            name: user.name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}

// ============================================================================
// Test application
// ============================================================================

/// Test application with direct access to its storage
pub struct TestApp {
    pub server: TestServer,
    pub router: Router,
    pub posts: Arc<InMemoryPostRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub auth: Arc<AuthServiceImpl<InMemoryUserRepository>>,
}

impl TestApp {
    pub fn new() -> Self {
        let settings = test_settings();
        let posts = Arc::new(InMemoryPostRepository::default());
        let users = Arc::new(InMemoryUserRepository::default());
        let auth = Arc::new(AuthServiceImpl::new(users.clone(), settings.jwt.clone()));

        let state = AppState {
            posts: Arc::new(PostServiceImpl::new(posts.clone())),
            auth: auth.clone(),
            settings: Arc::new(settings),
        };

        let router = build_router(state);
        let server = TestServer::new(router.clone()).expect("Failed to start test server");

        Self {
            server,
            router,
            posts,
            users,
            auth,
        }
    }

    /// Create a user and return a bearer token for it.
    pub async fn acting_as(&self) -> String {
        let user = self
            .users
            .create(&NewUser {
                name: Name().fake(),
                email: unique_email(),
                password_hash: "not-a-real-hash".into(),
            })
            .await
            .expect("Failed to create test user");

        self.auth
            .issue_token(&user)
            .expect("Failed to issue test token")
            .access_token
    }

    /// Persist `count` posts with generated titles.
    pub async fn create_posts(&self, count: usize) -> Vec<Post> {
        let mut created = Vec::with_capacity(count);
        for _ in 0..count {
            created.push(self.create_post(&fake_title()).await);
        }
        created
    }

    pub async fn create_post(&self, title: &str) -> Post {
        self.posts
            .create(title)
            .await
            .expect("Failed to create test post")
    }

    /// Send a raw request through the router, bypassing the test server.
    pub async fn oneshot(&self, request: Request<Body>) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible")
    }
}

pub fn fake_title() -> String {
    Sentence(3..8).fake()
}

/// Generate a unique test email
pub fn unique_email() -> String {
    format!("test_{}@example.com", uuid::Uuid::new_v4())
}
