use ash::vk;

use crate::{
    Buffer, BufferView, Framebuffer, Handle, HandleCategory, HandleStorage, Image, ImageView,
    Pipeline, Result, StorageInfo,
};

pub type PipelineStorage = HandleStorage<Pipeline, vk::Pipeline>;
pub type FramebufferStorage = HandleStorage<Framebuffer, vk::Framebuffer>;
pub type ImageStorage = HandleStorage<Image, vk::Image>;
pub type ImageViewStorage = HandleStorage<ImageView, vk::ImageView>;
pub type BufferStorage = HandleStorage<Buffer, vk::Buffer>;
pub type BufferViewStorage = HandleStorage<BufferView, vk::BufferView>;

/// A raw Vulkan object the device can destroy on its own.
pub trait DeviceObject: Copy {
    /// # Safety
    /// - The object must have been created from `device`.
    /// - No pending GPU work may reference it.
    unsafe fn destroy(self, device: &ash::Device);
}

impl DeviceObject for vk::Pipeline {
    unsafe fn destroy(self, device: &ash::Device) {
        device.destroy_pipeline(self, None);
    }
}

impl DeviceObject for vk::Framebuffer {
    unsafe fn destroy(self, device: &ash::Device) {
        device.destroy_framebuffer(self, None);
    }
}

impl DeviceObject for vk::Image {
    unsafe fn destroy(self, device: &ash::Device) {
        device.destroy_image(self, None);
    }
}

impl DeviceObject for vk::ImageView {
    unsafe fn destroy(self, device: &ash::Device) {
        device.destroy_image_view(self, None);
    }
}

impl DeviceObject for vk::Buffer {
    unsafe fn destroy(self, device: &ash::Device) {
        device.destroy_buffer(self, None);
    }
}

impl DeviceObject for vk::BufferView {
    unsafe fn destroy(self, device: &ash::Device) {
        device.destroy_buffer_view(self, None);
    }
}

/// Pops `handle` and destroys the object behind it.
///
/// # Safety
/// See [`DeviceObject::destroy`].
pub unsafe fn destroy_element<C, T>(
    device: &ash::Device,
    storage: &mut HandleStorage<C, T>,
    handle: Handle<C>,
) -> Result<()>
where
    C: HandleCategory,
    T: DeviceObject,
{
    let raw = storage.pop_element(handle)?;
    unsafe { raw.destroy(device) };
    Ok(())
}

/// A raw object drained out of [`VulkanResourceTables`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VulkanObject {
    Pipeline(vk::Pipeline),
    Framebuffer(vk::Framebuffer),
    ImageView(vk::ImageView),
    Image(vk::Image),
    BufferView(vk::BufferView),
    Buffer(vk::Buffer),
}

impl DeviceObject for VulkanObject {
    unsafe fn destroy(self, device: &ash::Device) {
        match self {
            VulkanObject::Pipeline(raw) => raw.destroy(device),
            VulkanObject::Framebuffer(raw) => raw.destroy(device),
            VulkanObject::ImageView(raw) => raw.destroy(device),
            VulkanObject::Image(raw) => raw.destroy(device),
            VulkanObject::BufferView(raw) => raw.destroy(device),
            VulkanObject::Buffer(raw) => raw.destroy(device),
        }
    }
}

/// One handle table per Vulkan object kind a backend hands out.
pub struct VulkanResourceTables {
    pub pipelines: PipelineStorage,
    pub framebuffers: FramebufferStorage,
    pub image_views: ImageViewStorage,
    pub images: ImageStorage,
    pub buffer_views: BufferViewStorage,
    pub buffers: BufferStorage,
}

impl Default for VulkanResourceTables {
    fn default() -> Self {
        Self::new(10, 10)
    }
}

impl VulkanResourceTables {
    pub fn new(initial_capacity: usize, bump_size: usize) -> Self {
        let info = |debug_name: &'static str| StorageInfo {
            debug_name,
            initial_capacity,
            bump_size,
        };
        Self {
            pipelines: HandleStorage::new(&info("pipelines")),
            framebuffers: HandleStorage::new(&info("framebuffers")),
            image_views: HandleStorage::new(&info("image views")),
            images: HandleStorage::new(&info("images")),
            buffer_views: HandleStorage::new(&info("buffer views")),
            buffers: HandleStorage::new(&info("buffers")),
        }
    }

    /// Adopts a framebuffer created by the caller.
    pub fn register_framebuffer(&mut self, raw: vk::Framebuffer) -> Result<Handle<Framebuffer>> {
        self.framebuffers.insert_element(raw)
    }

    /// Destroys a framebuffer.
    ///
    /// # Safety
    /// - Ensure no command buffer still references the framebuffer.
    /// - The device must still be alive.
    pub unsafe fn destroy_framebuffer(
        &mut self,
        device: &ash::Device,
        handle: Handle<Framebuffer>,
    ) -> Result<()> {
        unsafe { destroy_element(device, &mut self.framebuffers, handle) }
    }

    pub fn register_pipeline(&mut self, raw: vk::Pipeline) -> Result<Handle<Pipeline>> {
        self.pipelines.insert_element(raw)
    }

    /// # Safety
    /// The pipeline must not be bound in any pending command buffer.
    pub unsafe fn destroy_pipeline(
        &mut self,
        device: &ash::Device,
        handle: Handle<Pipeline>,
    ) -> Result<()> {
        unsafe { destroy_element(device, &mut self.pipelines, handle) }
    }

    pub fn register_image(&mut self, raw: vk::Image) -> Result<Handle<Image>> {
        self.images.insert_element(raw)
    }

    /// Destroys an image. Memory bound to it stays with whoever allocated it.
    ///
    /// # Safety
    /// - Views created from the image must be destroyed first.
    /// - Swapchain images are owned by the swapchain and must never be
    ///   registered here.
    pub unsafe fn destroy_image(&mut self, device: &ash::Device, handle: Handle<Image>) -> Result<()> {
        unsafe { destroy_element(device, &mut self.images, handle) }
    }

    pub fn register_image_view(&mut self, raw: vk::ImageView) -> Result<Handle<ImageView>> {
        self.image_views.insert_element(raw)
    }

    /// # Safety
    /// Framebuffers using the view must be destroyed first.
    pub unsafe fn destroy_image_view(
        &mut self,
        device: &ash::Device,
        handle: Handle<ImageView>,
    ) -> Result<()> {
        unsafe { destroy_element(device, &mut self.image_views, handle) }
    }

    pub fn register_buffer(&mut self, raw: vk::Buffer) -> Result<Handle<Buffer>> {
        self.buffers.insert_element(raw)
    }

    /// # Safety
    /// Views created from the buffer must be destroyed first.
    pub unsafe fn destroy_buffer(&mut self, device: &ash::Device, handle: Handle<Buffer>) -> Result<()> {
        unsafe { destroy_element(device, &mut self.buffers, handle) }
    }

    pub fn register_buffer_view(&mut self, raw: vk::BufferView) -> Result<Handle<BufferView>> {
        self.buffer_views.insert_element(raw)
    }

    /// # Safety
    /// The view must not be referenced by a pending descriptor update.
    pub unsafe fn destroy_buffer_view(
        &mut self,
        device: &ash::Device,
        handle: Handle<BufferView>,
    ) -> Result<()> {
        unsafe { destroy_element(device, &mut self.buffer_views, handle) }
    }

    /// Number of objects still alive across all tables.
    pub fn alive_count(&self) -> usize {
        self.pipelines.len()
            + self.framebuffers.len()
            + self.image_views.len()
            + self.images.len()
            + self.buffer_views.len()
            + self.buffers.len()
    }

    /// Hands every object still alive to `func`, dependents first
    /// (pipelines, framebuffers, image views, images, buffer views, buffers),
    /// and leaves every table empty. Returns how many objects were drained.
    pub fn drain_all<F>(&mut self, mut func: F) -> usize
    where
        F: FnMut(VulkanObject),
    {
        let leftover = self.alive_count();
        if leftover > 0 {
            log::warn!("{} Vulkan objects were never released, draining them now", leftover);
        }

        self.pipelines
            .drain_alive(|_, raw| func(VulkanObject::Pipeline(raw)));
        self.framebuffers
            .drain_alive(|_, raw| func(VulkanObject::Framebuffer(raw)));
        self.image_views
            .drain_alive(|_, raw| func(VulkanObject::ImageView(raw)));
        self.images
            .drain_alive(|_, raw| func(VulkanObject::Image(raw)));
        self.buffer_views
            .drain_alive(|_, raw| func(VulkanObject::BufferView(raw)));
        self.buffers
            .drain_alive(|_, raw| func(VulkanObject::Buffer(raw)));

        leftover
    }

    /// Destroys whatever the owner did not release, in [`drain_all`] order.
    ///
    /// # Safety
    /// - Wait for the device to go idle before calling this.
    /// - The device must still be alive.
    ///
    /// [`drain_all`]: VulkanResourceTables::drain_all
    pub unsafe fn destroy_all(&mut self, device: &ash::Device) -> usize {
        self.drain_all(|object| unsafe { object.destroy(device) })
    }
}

impl Drop for VulkanResourceTables {
    fn drop(&mut self) {
        let leaked = self.alive_count();
        if leaked > 0 {
            log::warn!(
                "dropping Vulkan resource tables with {} live objects, call destroy_all first",
                leaked
            );
        }
    }
}
