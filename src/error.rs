use miette::Diagnostic;
use thiserror::Error;

/// Main error type for darkicon operations
#[derive(Error, Diagnostic, Debug)]
pub enum DarkError {
    #[error("invalid color format: '{text}'")]
    #[diagnostic(
        code(darkicon::colour),
        help("Use a colour name (navy), a hex literal (#1a1a1a), or an R,G,B triple (26,26,26)")
    )]
    ColourParse { text: String },

    #[error("Failed to decode {path}: {message}")]
    #[diagnostic(code(darkicon::decode))]
    Decode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to encode {path}: {message}")]
    #[diagnostic(code(darkicon::encode))]
    Encode {
        path: std::path::PathBuf,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("IO error: {0}")]
    #[diagnostic(code(darkicon::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(darkicon::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(darkicon::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{} already exists", .path.display())]
    #[diagnostic(code(darkicon::exists), help("Use --force to overwrite"))]
    Exists { path: std::path::PathBuf },

    #[error("Watch error: {message}")]
    #[diagnostic(code(darkicon::watch))]
    Watch { message: String },
}

pub type Result<T> = std::result::Result<T, DarkError>;
