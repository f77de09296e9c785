//! Lyon-backed drawing surface.
//!
//! `TessellatedSurface` implements [`DrawContext`] on the CPU: path points are
//! transformed as they are added, fills and strokes are tessellated with lyon
//! into a flat triangle-list vertex buffer, and text is kept as positioned
//! labels for a glyph renderer to pick up.
//!
//! # Usage
//!
//! ```ignore
//! let mut surface = TessellatedSurface::new();
//! orrery.frame(&mut surface);
//! upload(surface.as_floats(), surface.vertex_count());
//! for label in surface.labels() { draw_text(label); }
//! ```

use std::f64::consts::TAU;

use bytemuck::{Pod, Zeroable};
use glam::{DAffine2, DVec2, Vec2};
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

use crate::renderer::traits::DrawContext;
use crate::systems::color::{parse_css_color, VectorColor};

/// Arc segments per full turn.
const ARC_SEGMENTS_PER_TURN: f64 = 64.0;
const MIN_ARC_SEGMENTS: usize = 8;
const TOLERANCE: f32 = 0.5;

/// Per-vertex data for vector/polygon rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 24
}

/// Vertex constructor for lyon fill tessellation.
struct FillVertexCtor {
    color: VectorColor,
}

impl FillVertexConstructor<VectorVertex> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        VectorVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// Vertex constructor for lyon stroke tessellation.
struct StrokeVertexCtor {
    color: VectorColor,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        VectorVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// Text drawn onto the surface, in surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub position: Vec2,
    pub color: VectorColor,
    /// Uniform scale of the transform the text was drawn under.
    pub scale: f32,
}

/// State pushed by `save` and popped by `restore`.
#[derive(Debug, Clone, Copy)]
struct DrawState {
    transform: DAffine2,
    fill: VectorColor,
    stroke: VectorColor,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: DAffine2::IDENTITY,
            fill: VectorColor::BLACK,
            stroke: VectorColor::BLACK,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct SubPath {
    points: Vec<Vec2>,
    closed: bool,
}

/// CPU canvas producing tessellated geometry.
pub struct TessellatedSurface {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    vertices: Vec<VectorVertex>,
    labels: Vec<TextLabel>,
    state: DrawState,
    stack: Vec<DrawState>,
    path: Vec<SubPath>,
    /// Stroke width in local units (canvas default: 1).
    pub line_width: f32,
}

impl TessellatedSurface {
    pub fn new() -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            vertices: Vec::with_capacity(16384),
            labels: Vec::new(),
            state: DrawState::default(),
            stack: Vec::new(),
            path: Vec::new(),
            line_width: 1.0,
        }
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[VectorVertex] {
        &self.vertices
    }

    /// The vertex buffer as flat `[x, y, r, g, b, a]` floats.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw pointer to the flat float buffer, for GPU upload.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.as_floats().as_ptr()
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    fn device_point(&self, x: f64, y: f64) -> Vec2 {
        self.state.transform.transform_point2(DVec2::new(x, y)).as_vec2()
    }

    /// Uniform scale factor of the current transform.
    fn device_scale(&self) -> f32 {
        self.state.transform.matrix2.determinant().abs().sqrt() as f32
    }

    fn current_open_subpath(&mut self) -> Option<&mut SubPath> {
        self.path.last_mut().filter(|sub| !sub.closed && !sub.points.is_empty())
    }

    fn push_point(&mut self, p: Vec2) {
        match self.current_open_subpath() {
            Some(sub) => sub.points.push(p),
            None => self.path.push(SubPath { points: vec![p], closed: false }),
        }
    }

    fn build_path(&self, min_points: usize, force_close: bool) -> Option<Path> {
        let mut builder = Path::builder();
        let mut any = false;
        for sub in self.path.iter().filter(|sub| sub.points.len() >= min_points) {
            builder.begin(point(sub.points[0].x, sub.points[0].y));
            for p in &sub.points[1..] {
                builder.line_to(point(p.x, p.y));
            }
            builder.end(force_close || sub.closed);
            any = true;
        }
        any.then(|| builder.build())
    }

    /// Flush indexed geometry to the vertex list as a triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            self.vertices.push(self.geometry.vertices[*idx as usize]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }
}

impl Default for TessellatedSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawContext for TessellatedSurface {
    /// Discards everything drawn so far. The triangle buffer has no notion
    /// of a partial clear, so the rectangle is not consulted.
    fn clear_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {
        self.vertices.clear();
        self.labels.clear();
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.device_point(x, y);
        self.path.push(SubPath { points: vec![p], closed: false });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = self.device_point(x, y);
        self.push_point(p);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        if radius < 0.0 {
            return;
        }
        let sweep = if end - start >= TAU {
            TAU
        } else {
            (end - start).rem_euclid(TAU)
        };
        let segments = ((sweep / TAU * ARC_SEGMENTS_PER_TURN).ceil() as usize).max(MIN_ARC_SEGMENTS);
        let center = DVec2::new(x, y);
        for i in 0..=segments {
            let angle = start + sweep * (i as f64 / segments as f64);
            let local = center + DVec2::new(angle.cos(), angle.sin()) * radius;
            let p = self.device_point(local.x, local.y);
            self.push_point(p);
        }
    }

    fn close_path(&mut self) {
        let first = match self.path.last_mut() {
            Some(sub) if !sub.closed && !sub.points.is_empty() => {
                sub.closed = true;
                sub.points[0]
            }
            _ => return,
        };
        // The next segment starts from where the closed subpath began
        self.path.push(SubPath { points: vec![first], closed: false });
    }

    fn set_fill_style(&mut self, color: &str) {
        match parse_css_color(color) {
            Some(c) => self.state.fill = c,
            None => log::debug!("vector: ignoring unknown fill color {color:?}"),
        }
    }

    fn set_stroke_style(&mut self, color: &str) {
        match parse_css_color(color) {
            Some(c) => self.state.stroke = c,
            None => log::debug!("vector: ignoring unknown stroke color {color:?}"),
        }
    }

    fn fill(&mut self) {
        let Some(path) = self.build_path(3, true) else {
            return;
        };
        let result = self.fill_tess.tessellate_path(
            &path,
            &FillOptions::tolerance(TOLERANCE),
            &mut BuffersBuilder::new(&mut self.geometry, FillVertexCtor { color: self.state.fill }),
        );

        match result {
            Ok(()) => self.flush_geometry(),
            Err(err) => log::debug!("vector: fill tessellation failed: {err:?}"),
        }
    }

    fn stroke(&mut self) {
        let Some(path) = self.build_path(2, false) else {
            return;
        };
        let width = self.line_width * self.device_scale();
        let result = self.stroke_tess.tessellate_path(
            &path,
            &StrokeOptions::tolerance(TOLERANCE).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, StrokeVertexCtor { color: self.state.stroke }),
        );

        match result {
            Ok(()) => self.flush_geometry(),
            Err(err) => log::debug!("vector: stroke tessellation failed: {err:?}"),
        }
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.labels.push(TextLabel {
            text: text.to_string(),
            position: self.device_point(x, y),
            color: self.state.fill,
            scale: self.device_scale(),
        });
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.state.transform = self.state.transform * DAffine2::from_translation(DVec2::new(x, y));
    }

    fn scale(&mut self, x: f64, y: f64) {
        self.state.transform = self.state.transform * DAffine2::from_scale(DVec2::new(x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::orrery::Orrery;
    use std::mem::size_of;

    fn unit_square(surface: &mut TessellatedSurface) {
        surface.begin_path();
        surface.move_to(0.0, 0.0);
        surface.line_to(10.0, 0.0);
        surface.line_to(10.0, 10.0);
        surface.line_to(0.0, 10.0);
        surface.close_path();
    }

    #[test]
    fn vector_vertex_is_24_bytes() {
        assert_eq!(size_of::<VectorVertex>(), 24);
        assert_eq!(VectorVertex::FLOATS, 6);
        assert_eq!(VectorVertex::STRIDE_BYTES, 24);
    }

    #[test]
    fn fill_square_produces_two_triangles() {
        let mut surface = TessellatedSurface::new();
        surface.set_fill_style("red");
        unit_square(&mut surface);
        surface.fill();

        assert_eq!(surface.vertex_count(), 6);
        let floats = surface.as_floats();
        assert_eq!(floats.len(), 6 * VectorVertex::FLOATS);
        assert_eq!(&floats[2..6], &[1.0, 0.0, 0.0, 1.0]);
        assert_eq!(surface.buffer_ptr(), floats.as_ptr());
    }

    #[test]
    fn transform_applies_to_path_points() {
        let mut surface = TessellatedSurface::new();
        surface.translate(100.0, 50.0);
        surface.scale(2.0, 2.0);
        unit_square(&mut surface);
        surface.fill();

        for v in surface.vertices() {
            assert!(v.x >= 100.0 - 1e-3 && v.x <= 120.0 + 1e-3, "x = {}", v.x);
            assert!(v.y >= 50.0 - 1e-3 && v.y <= 70.0 + 1e-3, "y = {}", v.y);
        }
    }

    #[test]
    fn restore_pops_transform_and_styles() {
        let mut surface = TessellatedSurface::new();
        surface.set_fill_style("white");
        surface.save();
        surface.translate(30.0, 40.0);
        surface.set_fill_style("blue");
        surface.fill_text("inside", 0.0, 0.0);
        surface.restore();
        surface.fill_text("outside", 0.0, 0.0);

        let labels = surface.labels();
        assert_eq!(labels[0].position, Vec2::new(30.0, 40.0));
        assert_eq!(labels[0].color, VectorColor::rgb(0.0, 0.0, 1.0));
        assert_eq!(labels[1].position, Vec2::ZERO);
        assert_eq!(labels[1].color, VectorColor::WHITE);
    }

    #[test]
    fn full_arc_fills_a_disc() {
        let mut surface = TessellatedSurface::new();
        surface.begin_path();
        surface.arc(50.0, 50.0, 25.0, 0.0, TAU);
        surface.fill();

        assert!(surface.vertex_count() > 0);
        for v in surface.vertices() {
            let d = Vec2::new(v.x - 50.0, v.y - 50.0).length();
            assert!(d <= 25.0 + 1e-3, "vertex outside circle: {d}");
        }
    }

    #[test]
    fn stroke_uses_stroke_color() {
        let mut surface = TessellatedSurface::new();
        surface.set_stroke_style("#00ff00");
        unit_square(&mut surface);
        surface.stroke();

        assert!(surface.vertex_count() > 0);
        assert!(surface.vertices().iter().all(|v| v.g == 1.0 && v.r == 0.0));
    }

    #[test]
    fn unknown_color_keeps_previous_style() {
        let mut surface = TessellatedSurface::new();
        surface.set_fill_style("orange");
        surface.set_fill_style("not-a-color");
        surface.fill_text("x", 0.0, 0.0);
        assert_eq!(surface.labels()[0].color, VectorColor::rgba8(255, 165, 0, 255));
    }

    #[test]
    fn empty_or_degenerate_paths_produce_nothing() {
        let mut surface = TessellatedSurface::new();
        surface.fill();
        surface.stroke();
        surface.begin_path();
        surface.move_to(0.0, 0.0);
        surface.line_to(1.0, 1.0);
        surface.fill();
        assert_eq!(surface.vertex_count(), 0);
    }

    #[test]
    fn clear_resets_buffer_and_labels() {
        let mut surface = TessellatedSurface::new();
        unit_square(&mut surface);
        surface.fill();
        surface.fill_text("x", 0.0, 0.0);
        surface.clear_rect(0.0, 0.0, 800.0, 600.0);
        assert_eq!(surface.vertex_count(), 0);
        assert!(surface.labels().is_empty());
    }

    #[test]
    fn orrery_frame_tessellates_every_body() {
        let mut orrery = Orrery::default();
        let mut surface = TessellatedSurface::new();
        orrery.frame(&mut surface);

        assert!(surface.vertex_count() > 0);
        assert_eq!(surface.labels().len(), 2 * orrery.roster().len());
        assert_eq!(surface.labels()[0].text, "Mercury");
        assert!(surface.labels().iter().all(|l| l.color == VectorColor::WHITE));
    }
}
