use clap::Parser;
use ferrous_rdns_domain::{CliOverrides, TransportProtocol};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "ferrous-rdns")]
#[command(version)]
#[command(about = "Ferrous rDNS - Bulk reverse DNS (PTR) lookups from stdin")]
struct Cli {
    /// Number of concurrent resolver workers
    #[arg(short = 't', long, value_name = "N")]
    threads: Option<usize>,

    /// Single resolver IP to query
    #[arg(short = 'r', long, value_name = "IP")]
    resolver: Option<String>,

    /// Port paired with --resolver
    #[arg(short = 'p', long, value_name = "PORT")]
    port: Option<u16>,

    /// Transport protocol (udp, tcp)
    #[arg(short = 'P', long, value_name = "PROTO")]
    protocol: Option<TransportProtocol>,

    /// Print only resolved domains, without the source IP
    #[arg(short = 'd', long)]
    domain: bool,

    /// File with one resolver `host:port` per line
    #[arg(short = 'f', long, value_name = "PATH")]
    resolvers_file: Option<String>,

    /// Per-lookup timeout in milliseconds (0 disables it)
    #[arg(long, value_name = "MS")]
    timeout: Option<u64>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        threads: cli.threads,
        resolver: cli.resolver,
        port: cli.port,
        protocol: cli.protocol,
        domain_only: cli.domain,
        resolvers_file: cli.resolvers_file,
        timeout_ms: cli.timeout,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let run_config = config.run_config()?;

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        workers = run_config.workers,
        protocol = %run_config.protocol,
        "Configuration loaded"
    );

    let shutdown = CancellationToken::new();
    let interrupt = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, stopping in-flight lookups");
            interrupt.cancel();
        }
    });

    let services = di::ResolutionServices::new(&run_config);
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let stats = services.pipeline(shutdown.clone()).run(input).await;

    if shutdown.is_cancelled() {
        // A blocked stdin read would otherwise keep the runtime alive.
        std::process::exit(130);
    }

    info!(
        resolvers = services.resolvers.len(),
        addresses = stats.queued,
        lines = stats.lines_emitted,
        "Done"
    );

    Ok(())
}
