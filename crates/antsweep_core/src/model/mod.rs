//! Data types shared by the loader, the reporters and the generator.

mod summary;
mod sweep;
mod table;

pub use summary::*;
pub use sweep::*;
pub use table::*;
