#![cfg_attr(
    test,
    allow(clippy::panic, clippy::unwrap_used, clippy::expect_used)
)]

use clap::Parser;
use color_eyre::eyre::Result;
use nodenest_daemon::assist::{ContentAssistant, HttpGenerator};
use nodenest_daemon::config::{load_config, load_config_from, DaemonConfig, StoreBackend};
use nodenest_daemon::cors::{build_cors_layer, DEFAULT_CORS_ORIGINS};
use nodenest_daemon::grpc_logging::GrpcLoggingLayer;
use nodenest_daemon::logging::{default_log_dir, init_logging, parse_rotation, LogConfig};
use nodenest_daemon::server::proto::content_service_server::ContentServiceServer;
use nodenest_daemon::server::ContentDaemonService;
use nodenest_daemon::services::ContentServices;
use nodenest_daemon::store::{DocumentStore, FsStore, MemoryStore};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tonic::transport::Server;
use tracing::{info, warn};

const DEFAULT_ADDR: &str = "127.0.0.1:50061";

/// NodeNest Daemon - content backend for the agency site and its admin panel
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, env = "NODENEST_ADDR", default_value = DEFAULT_ADDR)]
    addr: String,

    /// Comma-separated list of allowed CORS origins.
    /// "*" allows all origins; "*.example.com" allows its subdomains.
    #[arg(
        long,
        env = "NODENEST_CORS_ORIGINS",
        default_value = DEFAULT_CORS_ORIGINS,
        value_delimiter = ','
    )]
    cors_origins: Vec<String>,

    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "NODENEST_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, minutely or never
    #[arg(long, env = "NODENEST_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: ~/.nodenest/logs)
    #[arg(long, env = "NODENEST_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Config file (default: ~/.nodenest/config.toml)
    #[arg(long, env = "NODENEST_CONFIG")]
    config: Option<PathBuf>,

    /// Document store backend: memory or fs (overrides the config file)
    #[arg(long, env = "NODENEST_STORE")]
    store: Option<StoreBackend>,

    /// Directory for the fs store (overrides the config file)
    #[arg(long, env = "NODENEST_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Maximum number of items per listing (overrides the config file)
    #[arg(long, env = "NODENEST_LIMIT")]
    limit: Option<usize>,

    /// AI generation endpoint (overrides the config file)
    #[arg(long, env = "NODENEST_ASSIST_ENDPOINT")]
    assist_endpoint: Option<String>,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    fn apply_to(&self, config: &mut DaemonConfig) {
        if let Some(backend) = self.store {
            config.store.backend = backend;
        }
        if let Some(dir) = &self.data_dir {
            config.store.data_dir = Some(dir.clone());
        }
        if let Some(limit) = self.limit {
            config.content.limit = limit;
        }
        if let Some(endpoint) = &self.assist_endpoint {
            config.assist.endpoint = Some(endpoint.clone());
        }
    }
}

// Include the file descriptor set for gRPC reflection
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("nodenest_descriptor");

fn build_store(config: &DaemonConfig) -> Arc<dyn DocumentStore> {
    match config.store.backend {
        StoreBackend::Memory => {
            warn!("Using in-memory store; content is lost when the daemon stops");
            Arc::new(MemoryStore::new())
        }
        StoreBackend::Fs => {
            let dir = config.store.resolved_data_dir();
            info!("Using file store at {}", dir.display());
            Arc::new(FsStore::new(dir))
        }
    }
}

fn build_assistant(config: &DaemonConfig) -> Result<Option<ContentAssistant>> {
    let Some(endpoint) = &config.assist.endpoint else {
        info!("Content generation disabled (no assist endpoint configured)");
        return Ok(None);
    };
    let generator = HttpGenerator::new(
        endpoint.clone(),
        Duration::from_secs(config.assist.timeout_secs),
    );
    info!("Content generation via {}", generator.endpoint());
    Ok(Some(ContentAssistant::new(Arc::new(generator))?))
}

fn report_server_error(addr: std::net::SocketAddr, log_file: &std::path::Path, e: &tonic::transport::Error) {
    let err_string = format!("{e:?}");
    eprintln!();
    if err_string.contains("AddrInUse") {
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another nodenest-daemon may already be running.");
        eprintln!("  Use a different port:        nodenest-daemon --addr 127.0.0.1:50062");
        eprintln!("  Check what's using the port: lsof -i :{}", addr.port());
    } else {
        eprintln!("Error: Failed to start server: {e}");
    }
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let log_config = LogConfig {
        log_dir: args.log_dir.clone().unwrap_or_else(default_log_dir),
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };
    let log_file = log_config.log_file();

    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    let mut config = match &args.config {
        Some(path) => load_config_from(path).await?,
        None => load_config().await?,
    };
    args.apply_to(&mut config);
    config
        .validate()
        .map_err(|msg| color_eyre::eyre::eyre!("Invalid configuration: {msg}"))?;

    let addr = args.addr.parse()?;

    let cors_origins: Vec<String> = args
        .cors_origins
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    info!("CORS origins: {}", cors_origins.join(", "));
    let cors = build_cors_layer(cors_origins);

    let services = ContentServices::new(build_store(&config), config.content.limit);
    let service = ContentDaemonService::new(services, build_assistant(&config)?);

    let reflection_service = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    info!("Starting NodeNest daemon on {} (gRPC + gRPC-Web)", addr);

    let server_result = Server::builder()
        .accept_http1(true) // Required for gRPC-Web
        .layer(cors)
        .layer(GrpcLoggingLayer)
        .layer(tonic_web::GrpcWebLayer::new())
        .add_service(reflection_service)
        .add_service(ContentServiceServer::new(service))
        .serve_with_shutdown(addr, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for shutdown signal: {e}");
                std::future::pending::<()>().await;
            }
            info!("Received shutdown signal, stopping server...");
        })
        .await;

    if let Err(e) = server_result {
        report_server_error(addr, &log_file, &e);
        return Err(e.into());
    }

    info!("NodeNest daemon stopped");
    Ok(())
}
