//! Pure data structures: orders, temperature classes and status snapshots.

pub mod error;
pub mod order;
pub mod status;
pub mod temperature;

pub use error::*;
pub use order::*;
pub use status::*;
pub use temperature::*;
