use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use kidquiz_server::{
    app_state::AppState,
    auth::{AuthMiddleware, JwtService},
    config::Config,
    handlers::{admin_handler, health_handler, quiz_handler},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = match AppState::new(config).await {
        Ok(state) => state,
        Err(err) => {
            log::error!("Failed to initialize application state: {}", err);
            std::process::exit(1);
        }
    };

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(jwt_service.clone()))
            .service(health_handler::health)
            .service(
                web::scope("/api")
                    .wrap(AuthMiddleware)
                    .service(quiz_handler::list_quizzes)
                    .service(quiz_handler::start_quiz)
                    .service(quiz_handler::submit_attempt)
                    .service(quiz_handler::get_progress)
                    .service(admin_handler::create_quiz)
                    .service(admin_handler::list_all_quizzes)
                    .service(admin_handler::attempt_history),
            )
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
