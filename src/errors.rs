use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum FileOperation {
    #[error("reading a file")]
    Read,
    #[error("writing a file")]
    Write,
    #[error("copying a file")]
    Copy,
    #[error("removing a file")]
    Remove,
    #[error("removing a directory")]
    RemoveDir,
    #[error("walking a directory")]
    Walk,
}
#[derive(Debug, Error, Diagnostic)]
#[error("I/O error: {operation} on path '{path}'")]
#[diagnostic(
    code(fitout::io),
    help("Check file permissions, disk space, or that the path is correct.")
)]
pub struct IoError {
    pub operation: FileOperation,
    pub path: std::path::PathBuf,
    #[source]
    pub source: std::io::Error,
}
impl IoError {
    pub fn new(operation: FileOperation, path: std::path::PathBuf, error: std::io::Error) -> Self {
        Self {
            operation,
            path,
            source: error,
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum FileFormat {
    #[error("json")]
    Json,
}
#[derive(Debug, Error, Diagnostic)]
#[error("Parsing error: {file_format} on '{path}'")]
#[diagnostic(code(fitout::parse), help("Review file"))]
pub struct ParseError {
    pub file_format: FileFormat,
    pub path: std::path::PathBuf,
    #[source]
    pub source: serde_json::Error,
}
impl ParseError {
    pub fn new(
        file_format: FileFormat,
        path: std::path::PathBuf,
        error: serde_json::Error,
    ) -> Self {
        Self {
            file_format,
            path,
            source: error,
        }
    }
}
