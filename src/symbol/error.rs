// Mon Aug 24 2026

use crate::loader::LoaderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("Module not found: {0}")]
    ModuleNotFound(String),
    #[error("Failed to load module {module}: {source}")]
    Load {
        module: String,
        #[source]
        source: LoaderError,
    },
}
