use lambda_http::{run, Error};
use bookstore::catalog::controller::router;
use bookstore::catalog::factory::create_catalog_service;
use bookstore::core::controller::AppState;
use bookstore::core::domain::Configuration;
use bookstore::utils::logging::setup_tracing;

const DEV_MODE: bool = true;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = if DEV_MODE {
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096");
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
        Configuration::from_env("dev")
    } else {
        Configuration::from_env("prod")
    };

    let svc = create_catalog_service(&config)?;
    tracing::info!(store = %config.store_name, toggle_delay_ms = config.toggle_delay_ms,
        strict_favorites = config.strict_favorites, "catalog store ready");

    let app = router(AppState::new(svc));

    run(app).await
}
