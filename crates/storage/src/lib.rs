//! Data access layer for the studio site.
//!
//! [`Storage`] is the contract the HTTP modules program against;
//! [`MemStorage`] keeps everything in process memory for the lifetime of the
//! server.

pub mod error;
pub mod memory;
pub mod models;
pub mod seed;
pub mod store;

pub use error::StorageError;
pub use memory::MemStorage;
pub use store::{CollectionSizes, Storage};
