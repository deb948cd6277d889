use std::net::SocketAddr;

use axum::Router;
use sapunoa::config::AppConfig;
use sapunoa::templates::init_templates;
use sapunoa::{create_diagnostic_router, create_router, AppState};

/// A server bound to an ephemeral local port for the lifetime of a test.
pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the site router with the repository's templates and assets.
    pub async fn spawn() -> Self {
        let config = AppConfig::development(0);
        let tera = init_templates(&config.site).expect("templates load from the crate root");
        Self::serve(create_router(AppState::new(config, tera))).await
    }

    #[allow(dead_code)]
    pub async fn spawn_diagnostic() -> Self {
        Self::serve(create_diagnostic_router()).await
    }

    async fn serve(app: Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap()
    }
}
