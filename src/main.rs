mod docs;
mod health;
mod helpers;
mod rides;
mod shared;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use docs::api_docs;
use health::health;
use log::info;
use rides::repository::ride_repository::{RideRepository, RideRepositoryImpl};
use rides::{create_ride, get_ride, json_config, list_rides};
use shared::config::Config;
use shared::database::Database;
use shared::logger::init_logger;

// This struct represents state
pub struct AppState<RR: RideRepository> {
  pub ride_repository: RR,
  pub config: Config,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  let app_config = Config::default();
  init_logger(&app_config)?;

  let database = Database::new(&app_config)
    .await
    .map_err(std::io::Error::other)?;
  let database = Arc::new(database);

  let server_address = app_config.server_address();
  let workers = app_config.workers;
  info!("Listening on http://{}", server_address);

  HttpServer::new(move || {
    let app_config = app_config.clone();
    let database = database.clone();
    App::new().wrap(Logger::default()).configure(move |cfg| {
      let ride_repository = RideRepositoryImpl::new(database);
      config(cfg, ride_repository, app_config)
    })
  })
  .workers(workers)
  .bind(server_address)?
  .run()
  .await
}

// Function to initialize the App
fn config<RR: RideRepository + 'static>(
  cfg: &mut web::ServiceConfig,
  ride_repository: RR,
  app_config: Config,
) {
  cfg
    .app_data(web::Data::new(AppState {
      ride_repository,
      config: app_config,
    }))
    .app_data(json_config())
    .route("/health", web::get().to(health))
    .route("/api-docs", web::get().to(api_docs))
    .service(
      web::scope("/rides")
        .route("", web::get().to(list_rides::<RR>))
        .route("", web::post().to(create_ride::<RR>))
        .route("/{id}", web::get().to(get_ride::<RR>)),
    );
}
