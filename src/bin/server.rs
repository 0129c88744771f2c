use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;
use clap::Parser;
use library_api::{
    cli_args::CliArgs,
    server::{Server, ServerConfig},
};

fn init_tracing() -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .finish(),
    )
    .context("Failed to set global tracing subscriber")?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "server=trace,library_api=trace,tower_http=trace");
    }

    init_tracing()?;

    tracing::info!("Starting ...");

    let args = CliArgs::parse();
    let database_url = args.database_url();

    // Listening port is fixed, only the database and route are configurable.
    let socket_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);

    let server_config = ServerConfig::new(
        socket_address,
        args.api_path,
        database_url,
        args.db_pool_size,
        args.error_verbosity,
    );
    let server = Server::new(server_config);

    server.run().await?;

    Ok(())
}
