//! Per-folder file enumeration.

pub mod enumerator;

pub use enumerator::FileEnumerator;
