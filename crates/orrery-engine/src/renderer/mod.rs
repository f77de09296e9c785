pub mod traits;
pub mod view;
pub mod recording;

// Re-export key types for convenient access
pub use traits::{DrawContext, FrameScheduler, ManualScheduler};
pub use view::{PanState, ViewTransform};
pub use recording::{DrawOp, RecordingSurface};
