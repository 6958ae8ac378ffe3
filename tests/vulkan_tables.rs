//! Device-free checks of the Vulkan tables. Run with `cargo test --features vulkan`.
#![cfg(feature = "vulkan")]

mod common;

use ash::vk::{self, Handle as _};
use handlestore::gpu::vulkan::{VulkanObject, VulkanResourceTables};

#[test]
fn released_objects_are_not_drained_again() {
    common::init_logging();
    let mut tables = VulkanResourceTables::new(2, 2);
    let first = tables
        .register_framebuffer(vk::Framebuffer::from_raw(1))
        .unwrap();
    tables
        .register_framebuffer(vk::Framebuffer::from_raw(2))
        .unwrap();
    tables.register_image(vk::Image::from_raw(3)).unwrap();

    // Owner released one framebuffer itself.
    assert_eq!(tables.framebuffers.pop_element(first).unwrap().as_raw(), 1);

    let mut drained = Vec::new();
    assert_eq!(tables.drain_all(|object| drained.push(object)), 2);
    assert_eq!(
        drained,
        vec![
            VulkanObject::Framebuffer(vk::Framebuffer::from_raw(2)),
            VulkanObject::Image(vk::Image::from_raw(3)),
        ]
    );

    assert_eq!(tables.drain_all(|_| panic!("tables should be empty")), 0);
    let fresh = tables
        .register_framebuffer(vk::Framebuffer::from_raw(4))
        .unwrap();
    assert_eq!(fresh.id(), 0);
}
