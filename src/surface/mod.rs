//! Drawing-surface collaborator.
//!
//! The core never draws. It sequences these calls and keeps the handle for
//! each layer as an opaque association; domain data never rides on the
//! surface's objects.

pub(crate) mod recording;

use crate::foundation::core::Transform;

/// Opaque drawable handle issued by a [`DrawingSurface`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SurfaceHandle(pub u64);

/// Canvas the layer store drives.
///
/// `reorder` receives every live handle, bottom of the stack first.
pub trait DrawingSurface {
    fn add_drawable(&mut self, image_ref: &str, transform: &Transform) -> SurfaceHandle;
    fn remove_drawable(&mut self, handle: SurfaceHandle);
    fn reorder(&mut self, bottom_to_top: &[SurfaceHandle]);
    fn set_interactive(&mut self, handle: SurfaceHandle, interactive: bool);
    fn set_visible(&mut self, handle: SurfaceHandle, visible: bool);
    fn set_transform(&mut self, handle: SurfaceHandle, transform: &Transform);
    fn render(&mut self);
}
