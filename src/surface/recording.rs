use std::collections::BTreeMap;

use crate::{
    foundation::core::Transform,
    surface::{DrawingSurface, SurfaceHandle},
};

/// One call received by a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum SurfaceCall {
    Add {
        handle: SurfaceHandle,
        image_ref: String,
    },
    Remove {
        handle: SurfaceHandle,
    },
    Reorder {
        bottom_to_top: Vec<SurfaceHandle>,
    },
    SetInteractive {
        handle: SurfaceHandle,
        interactive: bool,
    },
    SetVisible {
        handle: SurfaceHandle,
        visible: bool,
    },
    SetTransform {
        handle: SurfaceHandle,
    },
    Render,
}

/// Drawable state as the surface sees it.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Drawable {
    pub image_ref: String,
    pub transform: Transform,
    pub interactive: bool,
    pub visible: bool,
}

/// In-memory surface that keeps a stack and a call log.
///
/// Headless stand-in for a real canvas: the CLI prints from it and tests
/// assert against it.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    next_handle: u64,
    drawables: BTreeMap<SurfaceHandle, Drawable>,
    stack: Vec<SurfaceHandle>,
    calls: Vec<SurfaceCall>,
    renders: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live handles, bottom of the stack first.
    pub fn stack(&self) -> &[SurfaceHandle] {
        &self.stack
    }

    pub fn drawable(&self, handle: SurfaceHandle) -> Option<&Drawable> {
        self.drawables.get(&handle)
    }

    /// Image refs in stacking order, bottom first.
    pub fn stacked_images(&self) -> Vec<&str> {
        self.stack
            .iter()
            .filter_map(|h| self.drawables.get(h))
            .map(|d| d.image_ref.as_str())
            .collect()
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn render_count(&self) -> usize {
        self.renders
    }
}

impl DrawingSurface for RecordingSurface {
    fn add_drawable(&mut self, image_ref: &str, transform: &Transform) -> SurfaceHandle {
        let handle = SurfaceHandle(self.next_handle);
        self.next_handle += 1;
        self.drawables.insert(
            handle,
            Drawable {
                image_ref: image_ref.to_string(),
                transform: *transform,
                interactive: true,
                visible: true,
            },
        );
        self.stack.push(handle);
        self.calls.push(SurfaceCall::Add {
            handle,
            image_ref: image_ref.to_string(),
        });
        handle
    }

    fn remove_drawable(&mut self, handle: SurfaceHandle) {
        self.drawables.remove(&handle);
        self.stack.retain(|h| *h != handle);
        self.calls.push(SurfaceCall::Remove { handle });
    }

    fn reorder(&mut self, bottom_to_top: &[SurfaceHandle]) {
        // Unknown handles are ignored; live handles missing from the list
        // keep their relative order underneath the listed ones.
        let listed: Vec<_> = bottom_to_top
            .iter()
            .copied()
            .filter(|h| self.drawables.contains_key(h))
            .collect();
        let mut rest: Vec<_> = self
            .stack
            .iter()
            .copied()
            .filter(|h| !listed.contains(h))
            .collect();
        rest.extend(listed);
        self.stack = rest;
        self.calls.push(SurfaceCall::Reorder {
            bottom_to_top: bottom_to_top.to_vec(),
        });
    }

    fn set_interactive(&mut self, handle: SurfaceHandle, interactive: bool) {
        if let Some(d) = self.drawables.get_mut(&handle) {
            d.interactive = interactive;
        }
        self.calls.push(SurfaceCall::SetInteractive {
            handle,
            interactive,
        });
    }

    fn set_visible(&mut self, handle: SurfaceHandle, visible: bool) {
        if let Some(d) = self.drawables.get_mut(&handle) {
            d.visible = visible;
        }
        self.calls.push(SurfaceCall::SetVisible { handle, visible });
    }

    fn set_transform(&mut self, handle: SurfaceHandle, transform: &Transform) {
        if let Some(d) = self.drawables.get_mut(&handle) {
            d.transform = *transform;
        }
        self.calls.push(SurfaceCall::SetTransform { handle });
    }

    fn render(&mut self) {
        self.renders += 1;
        self.calls.push(SurfaceCall::Render);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/recording.rs"]
mod tests;
