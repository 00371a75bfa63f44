use std::sync::Arc;

use jobs_app::config::load_config;
use jobs_app::startup::run;
use jobs_app::utils::logger::init_logging;

#[tokio::main]
async fn main() {
    let config = load_config();

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(Arc::new(config)).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
