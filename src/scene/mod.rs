//! Scene assembly: layout, generation, instance buffers and animation

pub mod config;
pub mod layout;
pub mod manager;
pub mod node;
pub mod preview;

pub use config::SceneConfig;
pub use layout::layout;
pub use manager::{DrawItem, RefreshReport, Scene, SceneStats};
pub use node::{BufferSlot, EntityInstance, Stream};
pub use preview::{render_top_down, save_png};
