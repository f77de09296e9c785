pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::orrery::{Orrery, OrreryConfig};
pub use api::types::{DisplayEvent, DisplaySink, DisplayState};
pub use core::body::{default_bodies, OrbitalBody};
pub use core::clock::{format_speed, format_time, SimClock};
pub use core::params::{parse_number, ParamError};
pub use core::roster::BodyRoster;
pub use renderer::traits::{DrawContext, FrameScheduler, ManualScheduler};
pub use renderer::view::{PanState, ViewTransform};
pub use renderer::recording::{DrawOp, RecordingSurface};
pub use input::command::{Command, EditCommand, PanCommand};
pub use input::queue::{CommandQueue, InputEvent};
pub use assets::catalog::{BodyCatalog, CatalogError};
pub use systems::color::{parse_css_color, VectorColor};

#[cfg(feature = "vectors")]
pub use systems::vector::{TessellatedSurface, TextLabel, VectorVertex};
