use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestKind {
    #[default]
    Program,
    Subscription,
}

impl RequestKind {
    /// Maps the page's `type` parameter. Anything but `subscription` selects the program endpoint.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("subscription") => Self::Subscription,
            _ => Self::Program,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Program => "/webapp/api/program/",
            Self::Subscription => "/webapp/api/subscription/",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgramResponse {
    #[serde(default)]
    pub program: Option<String>,
}

impl ProgramResponse {
    pub fn into_text(self) -> String {
        self.program.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub entry: String,
    pub files: Vec<String>,
    pub public_base: String,
    pub generated_at: String,
}
