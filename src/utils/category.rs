/// Marker trait naming a handle namespace.
///
/// Implementors are zero-sized tags. A `Handle<Image>` can never be handed to a
/// `HandleStorage<Buffer, _>`, the compiler rejects it:
///
/// ```compile_fail
/// use handlestore::{Buffer, Handle, HandleStorage, Image};
///
/// let buffers: HandleStorage<Buffer, u32> = Default::default();
/// let _ = buffers.get_element(Handle::<Image>::new(0, 0));
/// ```
///
/// Handles of different categories cannot be compared either:
///
/// ```compile_fail
/// use handlestore::{Buffer, Handle, Image};
///
/// let _ = Handle::<Image>::new(0, 0) == Handle::<Buffer>::new(0, 0);
/// ```
///
/// The same calls with matching categories are fine:
///
/// ```
/// use handlestore::{Buffer, Handle, HandleStorage};
///
/// let buffers: HandleStorage<Buffer, u32> = Default::default();
/// assert!(buffers.get_element(Handle::<Buffer>::new(0, 0)).is_err());
/// assert!(Handle::<Buffer>::new(0, 0) == Handle::<Buffer>::new(0, 0));
/// ```
pub trait HandleCategory: 'static {
    /// Name used in `Debug` output and log lines.
    const NAME: &'static str;
}

/// Declares zero-sized category markers.
///
/// ```
/// handlestore::handle_category!(Mesh, Material);
/// let _h = handlestore::Handle::<Mesh>::new(0, 0);
/// ```
#[macro_export]
macro_rules! handle_category {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $name;

            impl $crate::HandleCategory for $name {
                const NAME: &'static str = stringify!($name);
            }
        )+
    };
}

handle_category!(
    /// Graphics or compute pipeline objects.
    Pipeline,
    /// Framebuffers created against a render pass.
    Framebuffer,
    /// Images, including swapchain images.
    Image,
    ImageView,
    Buffer,
    BufferView,
    /// Sampled textures (image + view + sampler bundles).
    Texture,
);
