//! Windows-specific type definitions

mod handle;

pub use handle::Handle;
