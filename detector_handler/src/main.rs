pub mod config;
pub mod error;
pub mod handlers;
pub mod router;

use config::ServerConfig;
use lambda_http::{run, tracing, Error};
use lib::env_keys::AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH;
use lib::service::CommonService;
use router::create_router;
use std::env::set_var;


#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = ServerConfig::from_env()?;
    tracing::info!(?config, "starting emotion detector");

    let service = CommonService::new(config.backend).await;
    let app = create_router(service);

    if config.lambda {
        set_var(AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH, "true");
        return run(app).await;
    }

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
