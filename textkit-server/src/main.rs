use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};

use config::ServerConfig;

mod config;
mod error;
mod models;
mod routes;

/// Main entry point for the server.
///
/// Loads the configuration, builds the shared word lists once,
/// and starts an Actix-web HTTP server exposing the analysis endpoints.
///
/// # Notes
/// - Binds to `host:port` from the configuration (127.0.0.1:5000 by default).
/// - `RUST_LOG` controls verbosity, `info` by default.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	dotenv::dotenv().ok();
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = ServerConfig::load().map_err(std::io::Error::other)?;

	let (positive, negative, stopwords) = textkit_core::analysis::warm_up();
	log::info!("lexicon loaded: {positive} positive, {negative} negative words, {stopwords} stopwords");

	let bind = (config.host.clone(), config.port);
	let workers = config.workers;
	let json_limit = config.max_json_bytes;
	let shared_config = web::Data::new(config);

	log::info!("listening on {}:{} with {} workers", bind.0, bind.1, workers);

	HttpServer::new(move || {
		App::new()
			.app_data(shared_config.clone())
			.app_data(routes::json_config(json_limit))
			.app_data(routes::query_config())
			.wrap(Cors::permissive())
			.wrap(Logger::default())
			.configure(routes::configure)
	})
		.workers(workers)
		.bind(bind)?
		.run()
		.await
}
