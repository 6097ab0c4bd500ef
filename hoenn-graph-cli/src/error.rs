use hoenn_graph_catalog::CatalogError;
use hoenn_graph_import::PipelineError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Reading input or writing output files failed
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// A pipeline stage failed
    #[error("{0}")]
    Pipeline(#[from] PipelineError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
