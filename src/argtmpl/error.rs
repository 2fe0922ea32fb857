use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArgtmplError {
    #[error("invalid argument {0:?}: argument should be formed foo=bar")]
    InvalidArgument(String),

    #[error("argument {0} is already defined")]
    DuplicateArgument(String),

    #[error("parsing template file {}: {source}", .path.display())]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing template file: {0}")]
    ParseTemplate(#[source] minijinja::Error),

    #[error("executing template: {0}")]
    ExecuteTemplate(#[source] minijinja::Error),

    #[error("writing to stdout: {0}")]
    WriteOutput(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ArgtmplError>;
