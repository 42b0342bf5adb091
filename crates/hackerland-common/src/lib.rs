pub mod errors;
pub mod types;

pub use errors::{ConfigError, HackerlandError, HostError, IpcError};
pub use types::{Rect, WindowHandle, WindowType};

pub type Result<T> = std::result::Result<T, HackerlandError>;
