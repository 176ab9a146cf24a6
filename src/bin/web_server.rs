use clap::Parser;
use network_routing::web::server::{start_server, ServerConfig};

#[derive(Parser)]
#[clap(author, version, about = "Serve shortest path queries over generated networks", long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 3005)]
    port: u16,

    /// Disable the permissive CORS layer
    #[arg(long)]
    no_cors: bool,

    /// Largest network a client may generate
    #[arg(long, default_value_t = 20_000)]
    max_nodes: usize,

    /// Largest out-degree a client may ask for
    #[arg(long, default_value_t = 16)]
    max_out_degree: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = ServerConfig {
        port: args.port,
        enable_cors: !args.no_cors,
        max_nodes: args.max_nodes,
        max_out_degree: args.max_out_degree,
    };

    start_server(config).await?;

    Ok(())
}
