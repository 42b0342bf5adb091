//! Tiling policy core: window sets, layout, animation, pointer drags, and
//! the shared-state [`Engine`] that drives them from host callbacks, the
//! animation thread, and the IPC feed.

pub mod animation;
pub mod commands;
pub mod drag;
pub mod engine;
pub mod host;
pub mod layout;
pub mod manager;
pub mod workspace;

pub use animation::{AnimatedWindow, AnimationEngine, WindowFrame};
pub use commands::TilingCommand;
pub use drag::{Modifiers, PointerButton, PointerEvent, PointerOutcome};
pub use engine::{Engine, EngineHandle};
pub use host::{Host, NoopHost, RecordingHost};
pub use layout::LayoutEngine;
pub use manager::{Admission, TilingManager};
pub use workspace::{WindowClass, WindowId, WindowSet};
