use actix_files as fs;
use actix_web::{web::Data, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use legal_advisor_web::config::AppConfig;
use legal_advisor_web::model::LegalAdvisor;
use legal_advisor_web::web::{self as advisor_web, routes, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting legal advisor web application");

    let config = AppConfig::from_env();

    let advisor = match LegalAdvisor::new(&config.openai) {
        Ok(advisor) => {
            info!("Answer provider: {}", advisor.provider());
            advisor
        }
        Err(e) => {
            error!("Failed to initialize answer provider: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = match AppState::new(advisor) {
        Ok(state) => Data::new(state),
        Err(e) => {
            error!("Template parsing error: {}", e);
            std::process::exit(1);
        }
    };

    let static_dir = config.static_dir.clone();
    info!("Listening on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(advisor_web::cors())
            .app_data(app_state.clone())
            .configure(routes::configure)
            .service(fs::Files::new("/static", &static_dir))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
