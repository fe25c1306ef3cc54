//! # Swap Actions Server
//!
//! Thin entry point that delegates to lib-web for configuration, logging and
//! server setup. See `lib_core::Config` for the environment variables.

use lib_web::start_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    start_server().await
}
