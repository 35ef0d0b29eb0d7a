//! Player listing page.

use actix_web::{get, web, Responder};

use crate::roster::store::PlayerStore;
use crate::view::{Page, ViewRenderer};

/// GET /players
#[get("/players")]
pub async fn list_players(
    store: web::Data<PlayerStore>,
    renderer: web::Data<dyn ViewRenderer>,
) -> impl Responder {
    let players = store.list_all();

    Page::render("Players")
        .value("total", players.len())
        .value("players", players)
        .respond(renderer.get_ref())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_players);
}
