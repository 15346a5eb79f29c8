use actix_web::web;

pub mod documents;
pub mod health;
pub mod login;
pub mod register;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health::root);
    cfg.service(register::register);
    cfg.service(login::login);
    cfg.service(
        web::scope("/documents")
            .service(documents::list::list)
            .service(documents::create::create)
            .service(documents::get::get)
            .service(documents::update::update)
            .service(documents::delete::delete),
    );
    // Single-document API kept for pre-multi-document clients.
    cfg.service(
        web::scope("/document")
            .service(documents::legacy::fetch_latest)
            .service(documents::legacy::save_latest),
    );
}
