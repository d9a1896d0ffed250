//! Adapters layer
//!
//! Implementations of port traits, plus seed data loading.

pub mod memory;
pub mod seed;

pub use memory::InMemoryBusinessRepository;
pub use seed::load_seed;
