//! Infrastructure layer: file-system adapters around the `bottle-core` domain.
//!
//! **Dependency rule**: this layer depends on `bottle_core`; the domain crate
//! never depends on it.

pub mod storage;
