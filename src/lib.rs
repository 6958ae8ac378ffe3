//! Generational handle tables for GPU-side resources.
//!
//! A [`HandleStorage`] owns values and hands out small, copyable, category-typed
//! [`Handle`]s. Removing a value bumps its slot's generation, so stale copies of
//! the handle are rejected instead of silently reaching a recycled slot.
//!
//! ```
//! use handlestore::{Framebuffer, HandleStorage, StorageInfo};
//!
//! let mut framebuffers: HandleStorage<Framebuffer, u64> = HandleStorage::new(&StorageInfo {
//!     debug_name: "framebuffers",
//!     ..Default::default()
//! });
//! let h = framebuffers.insert_element(0xF00).unwrap();
//! assert_eq!(*framebuffers.get_element(h).unwrap(), 0xF00);
//! assert_eq!(framebuffers.pop_element(h).unwrap(), 0xF00);
//! assert!(framebuffers.get_element(h).is_err());
//! ```
//!
//! The ash-backed tables in [`gpu`] sit behind the `vulkan` feature, and so do
//! their tests: run `cargo test --features vulkan` to cover them.

pub mod error;
pub mod gpu;
pub mod utils;

pub use error::{Result, StorageError};
pub use utils::*;
