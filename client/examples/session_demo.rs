//! End-to-end session walkthrough against a running platform API.
//!
//! Reads `LAUNCHLAB_API_URL` (or falls back to the environment default),
//! plus `LAUNCHLAB_EMAIL` / `LAUNCHLAB_PASSWORD` for the login step.
//!
//! Run with: `cargo run --example session_demo`

use std::sync::Arc;

use ll_client::{ApiClient, ClientConfig, FileTokenStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let email = std::env::var("LAUNCHLAB_EMAIL").unwrap_or_else(|_| "demo@example.com".into());
    let password = std::env::var("LAUNCHLAB_PASSWORD").unwrap_or_else(|_| "demo-password".into());

    let store = Arc::new(FileTokenStore::new(".launchlab/session.json"));
    let client = ApiClient::new(ClientConfig::from_env()?, store)?;

    let user = client.login(&email, &password).await?;
    println!("logged in as {} <{}>", user.name, user.email);

    let me = client.me().await?;
    println!("session user id: {}", me.id);

    let analytics = client.platform_analytics().await?;
    println!("platform analytics: {}", serde_json::to_string_pretty(&analytics)?);

    client.logout().await?;
    println!("logged out, local credentials cleared");

    Ok(())
}
