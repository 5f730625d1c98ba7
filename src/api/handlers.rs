use actix_files::NamedFile;
use actix_web::{get, web};

use crate::config::Config;
use crate::errors::ServeError;

#[get("/")]
async fn index(config: web::Data<Config>) -> Result<NamedFile, ServeError> {
    let path = config.public_dir.join("index.html");

    NamedFile::open(&path)
        .map_err(|e| ServeError::AssetUnavailable(format!("{}: {}", path.display(), e)))
}
