//! CraftScout API Server
//!
//! Keyword research API and landing page for Etsy sellers.

use std::{env, net::SocketAddr};

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod routes;

mod defaults {
    pub const API_PORT: &str = "8080";
    pub const API_HOST: &str = "0.0.0.0";
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CraftScout API Server...");

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Landing page with the research form
        .route("/", get(index))
        // Health check
        .route("/health", get(health_check))
        // API routes
        .nest("/api", routes::api_routes())
        // Middleware
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http());

    // Get port from environment
    let port = env::var("API_PORT")
        .unwrap_or_else(|_| defaults::API_PORT.to_string())
        .parse::<u16>()
        .unwrap_or(8080);

    let host = env::var("API_HOST").unwrap_or_else(|_| defaults::API_HOST.to_string());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Landing page - keyword research form
async fn index() -> axum::response::Html<&'static str> {
    axum::response::Html(r#"
<!DOCTYPE html>
<html>
<head>
    <title>CraftScout</title>
    <style>
        body { font-family: system-ui, sans-serif; max-width: 800px; margin: 50px auto; padding: 20px; background: #1a1a2e; color: #eee; }
        h1 { color: #f26522; }
        p.tagline { color: #aaa; }
        input { flex: 1; padding: 12px; border-radius: 8px; border: 1px solid #444; background: #252540; color: #eee; font-size: 16px; }
        button { padding: 12px 24px; border-radius: 8px; border: none; background: #f26522; color: #fff; font-size: 16px; cursor: pointer; }
        .search-row { display: flex; gap: 10px; }
        .examples button { background: #252540; color: #aaa; padding: 6px 12px; font-size: 13px; margin: 10px 6px 0 0; }
        .error { display: none; margin-top: 20px; padding: 10px; background: #5c2b2b; border-radius: 8px; }
        .results { display: none; margin-top: 30px; }
        .metric { margin: 10px 0; padding: 15px; background: #252540; border-radius: 8px; }
        .metric .value { font-size: 28px; font-weight: bold; color: #f5a623; }
        .chip { display: inline-block; margin: 4px 4px 0 0; padding: 6px 12px; background: #252540; border-radius: 16px; font-size: 14px; }
    </style>
</head>
<body>
    <h1>CraftScout</h1>
    <p class="tagline">Etsy keyword research - search volume, ranking difficulty, earnings estimates and related keywords</p>

    <div class="search-row">
        <input id="keyword" type="text" placeholder="Enter a keyword, e.g. personalized necklace" />
        <button id="analyze">Analyze</button>
    </div>
    <div class="examples">
        <button data-keyword="handmade jewelry">handmade jewelry</button>
        <button data-keyword="custom portrait">custom portrait</button>
        <button data-keyword="wedding gift">wedding gift</button>
        <button data-keyword="boho wall decor">boho wall decor</button>
    </div>

    <div class="error" id="error"></div>

    <div class="results" id="results">
        <div class="metric">Search volume<div class="value" id="volume"></div></div>
        <div class="metric">Difficulty<div class="value" id="difficulty"></div></div>
        <div class="metric">Estimated monthly earnings<div class="value" id="earnings"></div></div>
        <div class="metric">Related keywords<div id="related"></div></div>
    </div>

    <script>
        const input = document.getElementById('keyword');
        const results = document.getElementById('results');
        const errorBox = document.getElementById('error');

        async function analyze() {
            const keyword = input.value.trim();
            errorBox.style.display = 'none';
            results.style.display = 'none';

            try {
                const response = await fetch('/api/analyze', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ keyword: keyword })
                });
                const data = await response.json();

                if (!response.ok) {
                    showError(data.error || 'Analysis failed');
                    return;
                }

                document.getElementById('volume').textContent = data.search_volume.toLocaleString() + ' / month';
                document.getElementById('difficulty').textContent = data.difficulty + ' / 100';
                document.getElementById('earnings').textContent = '$' + data.estimated_earnings.toFixed(2);
                document.getElementById('related').innerHTML = data.related_keywords
                    .map(k => '<span class="chip">' + k + '</span>')
                    .join('');
                results.style.display = 'block';
            } catch (err) {
                showError('Failed to reach the server');
            }
        }

        function showError(message) {
            errorBox.textContent = message;
            errorBox.style.display = 'block';
        }

        document.getElementById('analyze').addEventListener('click', analyze);
        input.addEventListener('keypress', e => {
            if (e.key === 'Enter') analyze();
        });
        document.querySelectorAll('.examples button').forEach(btn => {
            btn.addEventListener('click', () => {
                input.value = btn.getAttribute('data-keyword');
                analyze();
            });
        });
    </script>
</body>
</html>
    "#)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
