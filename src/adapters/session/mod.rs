//! Session adapters - implementations of the SessionRegistry port.

mod in_memory;

pub use in_memory::InMemorySessionRegistry;
