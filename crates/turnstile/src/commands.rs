//! CLI command implementations.

use color_eyre::eyre::Result;

use turnstile_server::{Server, ServerConfig};

/// Start the queue service.
pub async fn serve(host: String, port: u16, cors: bool) -> Result<()> {
    tracing::info!("Starting Turnstile server...");

    let addr = format!("{}:{}", host, port).parse()?;
    let config = ServerConfig::builder().addr(addr).cors(cors).build();

    let server = Server::new(config);
    server.run().await?;

    Ok(())
}

/// Print version and component information.
pub fn version() {
    println!("Turnstile {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Components:");
    println!("  turnstile-core    - Queue domain and ordering rules");
    println!("  turnstile-server  - HTTP API server");
    println!("  turnstile         - Command-line interface");
}
