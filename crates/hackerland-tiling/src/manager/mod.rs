//! The TilingManager ties window sets, layout, animation and pointer drags
//! together. Every operation that changes what subscribers see marks a
//! pending status snapshot.

mod animate;
mod layout_compute;
mod operations;
mod pointer;
mod status;
mod types;


pub use types::*;
