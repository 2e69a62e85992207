use std::path::PathBuf;

/// Errors that can occur while reading the local resource registry
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("cannot read registry file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed registry file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}
