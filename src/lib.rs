pub mod config;
pub mod context;
pub mod errors;
pub mod loader;
pub mod models;
pub mod render;
pub mod storage;
pub mod transport;
pub mod ui;

pub use config::{LoaderConfig, TokenPolicy};
pub use context::{AuthToken, HostContext, PageQuery};
pub use errors::LoadError;
pub use loader::{Outcome, ProgramLoader};
pub use render::{RenderTarget, StdoutTarget, TextSlot};
pub use transport::{ReqwestTransport, Transport};
