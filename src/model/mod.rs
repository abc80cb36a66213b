//! Pure data structures shared by the desk, the registry and the sites.

pub mod location;
pub mod order;

pub use location::*;
pub use order::*;
