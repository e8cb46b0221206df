use miette::Diagnostic;
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
#[error("unknown project type: '{value}'")]
#[diagnostic(
    code(fitout::project::unknown_type),
    help("Valid project types are: ['doc', 'xwalk', 'da']")
)]
pub struct UnknownProjectType {
    pub value: String,
}

/// The flavor a freshly cloned template checkout is tailored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Doc,
    Xwalk,
    Da,
}
impl ProjectType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Doc => "doc",
            Self::Xwalk => "xwalk",
            Self::Da => "da",
        }
    }
}
impl FromStr for ProjectType {
    type Err = UnknownProjectType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "doc" => Ok(Self::Doc),
            "xwalk" => Ok(Self::Xwalk),
            "da" => Ok(Self::Da),
            other => Err(UnknownProjectType {
                value: other.to_string(),
            }),
        }
    }
}
impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
