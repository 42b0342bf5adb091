//! Status feed and command channel over a Unix-domain socket.
//!
//! The server side streams [`StatusSnapshot`]s to every connected
//! subscriber and relays inbound command lines to a [`StatusSource`].
//! The client side is used by the CLI and by bar implementations.

pub mod broadcast;
pub mod client;
pub mod protocol;
pub mod server;

pub use broadcast::StatusBroadcaster;
pub use client::IpcClient;
pub use protocol::{IpcCommand, StatusSnapshot};
pub use server::{IpcServer, StatusSource};
