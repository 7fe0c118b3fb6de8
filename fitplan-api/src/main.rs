use std::{env, error::Error};

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use fitplan_api::{config::Settings, routes, state::AppState};
use log::info;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    let log_config = env::var("LOG_CONFIG").unwrap_or_else(|_| "log4rs.yml".to_owned());
    log4rs::init_file(log_config, Default::default())?;

    let settings = Settings::from_env()?;
    let state = web::Data::new(AppState::initialize(&settings).await?);
    let allowed_origins = settings.cors_allowed_origins.clone();

    info!("Listening on {}:{}", settings.bind_address, settings.port);
    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors(&allowed_origins))
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind((settings.bind_address.as_str(), settings.port))?
    .run()
    .await?;

    Ok(())
}
