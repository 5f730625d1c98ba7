use std::path::PathBuf;

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub public_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("Failed to parse PORT"),
            public_dir: std::env::var("PUBLIC_DIR")
                .unwrap_or_else(|_| "public".to_string())
                .into(),
        }
    }
}
