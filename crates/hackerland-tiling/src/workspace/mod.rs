//! Window-set bookkeeping: which windows exist and which exclusive set
//! (workspace, floating, scratchpad, sticky) each belongs to.

mod set;
mod types;


pub use set::WindowSet;
pub use types::{Placement, WindowClass, WindowId, WindowRecord};
