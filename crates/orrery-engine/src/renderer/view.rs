use glam::DVec2;

use crate::renderer::traits::DrawContext;

/// Wheel delta to zoom exponent.
pub const DEFAULT_ZOOM_SENSITIVITY: f64 = 0.001;

/// Pan/zoom transform applied to everything drawn in a frame.
/// Screen = offset + world · scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Uniform zoom factor (1.0 = unzoomed).
    pub scale: f64,
    /// Pan offset in screen pixels.
    pub offset: DVec2,
}

impl ViewTransform {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            offset: DVec2::ZERO,
        }
    }

    /// Map a world point to the screen.
    pub fn world_to_screen(&self, world: DVec2) -> DVec2 {
        self.offset + world * self.scale
    }

    /// Map a screen point back to the world.
    pub fn screen_to_world(&self, screen: DVec2) -> DVec2 {
        (screen - self.offset) / self.scale
    }

    /// Zoom by `exp(-sensitivity · delta_y)`, keeping the world point under
    /// `pointer` fixed on screen.
    pub fn zoom_at(&mut self, pointer: DVec2, delta_y: f64, sensitivity: f64) {
        let zoom = (-sensitivity * delta_y).exp();
        self.offset -= (pointer - self.offset) * (zoom - 1.0);
        self.scale *= zoom;
    }

    /// Back to unit scale and no pan.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Run `draw` with this transform applied, inside a save/restore pair so
    /// nothing leaks into later draw calls.
    pub fn scoped<D, F>(&self, ctx: &mut D, draw: F)
    where
        D: DrawContext + ?Sized,
        F: FnOnce(&mut D),
    {
        ctx.save();
        ctx.translate(self.offset.x, self.offset.y);
        ctx.scale(self.scale, self.scale);
        draw(ctx);
        ctx.restore();
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

/// Drag-to-pan tracking.
/// While a drag is active the view offset follows the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanState {
    /// Pointer position minus view offset at pointer-down.
    anchor: Option<DVec2>,
}

impl PanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer pressed: remember where the view was grabbed.
    pub fn begin(&mut self, pointer: DVec2, view: &ViewTransform) {
        self.anchor = Some(pointer - view.offset);
    }

    /// Pointer moved: pan if a drag is active. Returns whether the view changed.
    pub fn drag(&self, pointer: DVec2, view: &mut ViewTransform) -> bool {
        match self.anchor {
            Some(anchor) => {
                view.offset = pointer - anchor;
                true
            }
            None => false,
        }
    }

    /// Pointer released or left the surface.
    pub fn end(&mut self) {
        self.anchor = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }
}
