//! Two-step create-player form: blank form on GET, validated submit on POST.

use actix_web::{get, post, web, Responder};

use crate::roster::player::{NewPlayer, Player};
use crate::roster::store::PlayerStore;
use crate::view::{Page, ViewRenderer};

/// GET /create-player
#[get("/create-player")]
pub async fn show_form(renderer: web::Data<dyn ViewRenderer>) -> impl Responder {
    Page::render("CreatePlayer")
        .value("player", Player::default())
        .respond(renderer.get_ref())
}

/// POST /create-player — validate; re-show the form with messages, or store
/// the player and bounce the client over to the listing.
#[post("/create-player")]
pub async fn create(
    form: web::Form<NewPlayer>,
    store: web::Data<PlayerStore>,
    renderer: web::Data<dyn ViewRenderer>,
) -> impl Responder {
    let draft = form.into_inner();

    let errors = draft.validate();
    if !errors.is_empty() {
        log::debug!("create-player rejected with {} field error(s)", errors.len());
        let NewPlayer { name, email } = draft;
        return Page::render("CreatePlayer")
            .value("player", Player { id: 0, name, email })
            .value("errors", errors)
            .respond(renderer.get_ref());
    }

    let stored = store.add(draft);
    log::info!("player {} ({}) created", stored.id, stored.name);

    // True redirect: refreshing the listing must not resubmit the form.
    Page::redirect("/players").respond(renderer.get_ref())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(show_form).service(create);
}
