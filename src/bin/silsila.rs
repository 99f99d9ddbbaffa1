// ─────────────────────────────────────────────────────────────────────────────
//  Silsila — Transaction Lineage Tracer
//
//  Silsila (سلسلة): "The Chain" — traces the coins received by a Bitcoin
//  address backward through the public ledger, showing where funds came from,
//  hop by hop, until their minting.
//
//  An educational tool for understanding blockchain transparency. Not for
//  compliance, financial advice, or determining transaction legitimacy.
// ─────────────────────────────────────────────────────────────────────────────

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware;
use actix_web::web;
use clap::Parser;
use tracing::info;

use silsila::api::EsploraClient;
use silsila::api::LedgerDataSource;
use silsila::config::Config;
use silsila::config::load_config;
use silsila::error::Result;
use silsila::error::setup_tracing;
use silsila::server::AppState;
use silsila::server::trace_routes;

#[derive(Parser, Debug)]
#[command(name = "silsila", about = "Backward provenance tracer for Bitcoin addresses")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "Config.toml")]
    config: String,

    /// Override the configured bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the configured bind port
    #[arg(long)]
    port: Option<u16>,
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    setup_tracing("silsila");

    let args = Args::parse();

    let mut config = match load_config(&args.config) {
        Ok(config) => config,
        Err(e) => {
            info!("config_not_loaded::path::{}::using_defaults::{}", args.config, e);
            Config::default()
        },
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let source: Arc<dyn LedgerDataSource> = Arc::new(EsploraClient::new(&config.api)?);
    let state = web::Data::new(AppState {
        source,
        tracer: config.tracer.clone(),
        api: config.api.clone(),
    });

    info!("silsila_listening::host::{}::port::{}", config.server.host, config.server.port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(state.clone())
            .service(trace_routes())
    })
    .bind((config.server.host.clone(), config.server.port))?
    .run()
    .await?;

    Ok(())
}
