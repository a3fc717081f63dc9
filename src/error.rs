use std::error::Error as _;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Template error: {}", template_detail(.0))]
    Template(#[from] tera::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

// tera keeps the useful part (line, column, parser message) in the source chain
fn template_detail(err: &tera::Error) -> String {
    let mut detail = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        detail.push_str(": ");
        detail.push_str(&inner.to_string());
        cause = inner.source();
    }
    detail
}

pub type Result<T> = std::result::Result<T, Error>;
