use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;

mod api;
mod config;
mod errors;
mod models;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = config::Config::from_env();
    let port = config.port;
    let config = web::Data::new(config);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .configure(api::config)
    })
    .bind(("0.0.0.0", port))?;

    info!("Server running on http://localhost:{}", port);

    server.run().await
}

#[cfg(test)]
mod tests {
    use actix_web::{App, HttpServer};
    use std::net::TcpListener;

    #[actix_web::test]
    async fn bind_conflict_is_an_error() {
        let held = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = held.local_addr().unwrap().port();

        let result = HttpServer::new(App::new).bind(("127.0.0.1", port));
        assert!(result.is_err());
    }
}
