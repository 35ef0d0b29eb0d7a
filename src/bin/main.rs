use actix_web::{middleware::Logger, web, App, HttpServer};
use roster_server::http;
use roster_server::roster::store::PlayerStore;
use roster_server::view::{DebugRenderer, ViewRenderer};
use std::env;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Configuration
    let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into());

    // One store and one renderer for the whole process; every handler gets
    // them through app data.
    let store = web::Data::new(PlayerStore::new());
    let renderer: web::Data<dyn ViewRenderer> =
        web::Data::from(Arc::new(DebugRenderer) as Arc<dyn ViewRenderer>);

    log::info!("roster server listening on {server_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .app_data(renderer.clone())
            .configure(http::routes::init_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
