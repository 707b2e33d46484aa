use miette::Diagnostic;
use thiserror::Error;

/// Main error type for seal operations
#[derive(Error, Diagnostic, Debug)]
pub enum SealError {
    #[error("IO error: {0}")]
    #[diagnostic(code(seal::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(seal::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Cannot decode {path}: {message}")]
    #[diagnostic(
        code(seal::decode),
        help("Check that the file exists and is a readable PNG, JPEG or WebP image")
    )]
    Decode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(seal::config))]
    InvalidConfiguration {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid raster: {message}")]
    #[diagnostic(code(seal::raster))]
    InvalidRaster { message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(seal::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(seal::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SealError>;
