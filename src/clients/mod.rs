//! Type-safe handles to running actors.

pub mod desk_client;

pub use desk_client::*;
