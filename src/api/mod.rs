use actix_web::web;
mod handlers;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::index);
}
