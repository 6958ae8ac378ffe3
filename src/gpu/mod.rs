//! Resource-producing side of the handle contract.
//!
//! The allocator in [`crate::utils`] never calls into a graphics API. Code here
//! adopts raw objects created elsewhere, and destroys them when their handles
//! are released or when the owning backend shuts down.

#[cfg(feature = "vulkan")]
pub mod vulkan;

#[cfg(feature = "vulkan")]
pub use vulkan::*;
