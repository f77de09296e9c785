//! Drawing-surface trait.
//!
//! The engine paints through a small immediate-mode API modelled on the
//! browser's `CanvasRenderingContext2d`. The web crate forwards it to a real
//! canvas; `RecordingSurface` and `TessellatedSurface` implement it natively.
//!
//! Path coordinates are transformed by the current transform at the time
//! they are added, and `save`/`restore` push and pop the transform together
//! with the fill and stroke styles, as on a canvas.

/// Immediate-mode 2D drawing context.
///
/// # Example Implementation
///
/// ```ignore
/// struct SvgSurface {
///     out: String,
///     // ...
/// }
///
/// impl DrawContext for SvgSurface {
///     fn begin_path(&mut self) { /* start a new <path d="..."> */ }
///     fn line_to(&mut self, x: f64, y: f64) { /* append "L x y" */ }
///     // ...
/// }
/// ```
pub trait DrawContext {
    /// Clear a rectangle in untransformed surface coordinates.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Discard the current path and start an empty one.
    fn begin_path(&mut self);

    /// Start a new subpath at (x, y).
    fn move_to(&mut self, x: f64, y: f64);

    /// Add a straight segment to (x, y).
    fn line_to(&mut self, x: f64, y: f64);

    /// Add a clockwise circular arc. Joins the current point to the arc start
    /// with a straight segment if a subpath is open.
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);

    /// Close the current subpath back to its first point.
    fn close_path(&mut self);

    /// Set the fill color (any CSS color string).
    fn set_fill_style(&mut self, color: &str);

    /// Set the stroke color (any CSS color string).
    fn set_stroke_style(&mut self, color: &str);

    /// Fill the current path with the fill style.
    fn fill(&mut self);

    /// Stroke the current path with the stroke style.
    fn stroke(&mut self);

    /// Draw `text` with its baseline-left at (x, y) in the fill style.
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    /// Push the transform and styles.
    fn save(&mut self);

    /// Pop the transform and styles pushed by the matching `save`.
    fn restore(&mut self);

    /// Prepend a translation to the current transform.
    fn translate(&mut self, x: f64, y: f64);

    /// Prepend a scale to the current transform.
    fn scale(&mut self, x: f64, y: f64);
}

/// Host hook that invokes the next frame callback.
/// Called once at the end of every frame; the loop never stops on its own.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Scheduler that only counts requests. Useful when the caller drives
/// frames itself (tests, headless captures).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ManualScheduler {
    pub requests: u64,
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.requests += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_scheduler_counts_requests() {
        let mut scheduler = ManualScheduler::default();
        scheduler.request_frame();
        scheduler.request_frame();
        assert_eq!(scheduler.requests, 2);
    }
}
