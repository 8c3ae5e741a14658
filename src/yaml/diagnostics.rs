//! Rich YAML error diagnostics with source spans

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors from loading a YAML file
#[derive(Debug, Error, Diagnostic)]
pub enum YamlError {
    #[error("failed to read file")]
    #[diagnostic(code(rfcas::yaml::io))]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] YamlSyntaxError),
}

/// A YAML syntax or shape error, pointing at the offending location
#[derive(Debug, Error, Diagnostic)]
#[error("invalid YAML in {filename}")]
#[diagnostic(code(rfcas::yaml::syntax))]
pub struct YamlSyntaxError {
    pub filename: String,
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("{message}")]
    pub span: SourceSpan,
}

impl YamlSyntaxError {
    pub fn from_serde_error(err: &serde_yml::Error, content: &str, filename: &str) -> Self {
        let offset = err
            .location()
            .map(|loc| loc.index())
            .unwrap_or(0)
            .min(content.len());

        Self {
            filename: filename.to_string(),
            message: err.to_string(),
            src: NamedSource::new(filename, content.to_string()),
            span: (offset, 0).into(),
        }
    }
}
