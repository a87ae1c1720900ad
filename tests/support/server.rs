//! Serve the router on an ephemeral port for end-to-end tests.

use std::sync::Arc;

use notez::adapter::inbound::http::router::create_router;
use notez::adapter::outbound::cipher::chacha::ChaChaCipher;
use notez::infrastructure::bootstrap::assemble;
use notez::infrastructure::config::settings::Config;
use notez::port::outbound::cipher::Cipher;
use notez::port::outbound::llm::Llm;
use notez::testkit::config::fast_retry;
use tokio::net::TcpListener;

/// Default configuration with zero-delay retries.
pub fn test_config() -> Config {
    Config {
        retry: fast_retry(),
        ..Config::default()
    }
}

pub fn test_cipher() -> Option<Arc<dyn Cipher>> {
    Some(Arc::new(ChaChaCipher::generate()))
}

/// Start the service and return its base URL.
pub async fn spawn_app(
    config: &Config,
    llm: Arc<dyn Llm>,
    cipher: Option<Arc<dyn Cipher>>,
) -> String {
    let state = assemble(config, llm, cipher);
    let app = create_router(state, config.server.cors_layer().expect("cors layer"));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    format!("http://{addr}")
}
