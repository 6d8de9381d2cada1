use std::sync::Once;

use mock_server::{Dataset, Faults, Shape};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test subscriber once; `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Start the mock server on a random port and return its base URL.
pub async fn serve(faults: &[&str]) -> String {
    init_tracing();
    let faults: Faults = faults.iter().map(|path| path.to_string()).collect();
    let router = mock_server::app_with(Dataset::generate(Shape::default()), faults);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run_with(listener, router));
    format!("http://{addr}")
}
