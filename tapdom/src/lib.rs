pub mod color;
pub mod event;
pub mod geometry;
pub mod hit;
pub mod scene;
pub mod text;
pub mod view;
pub mod window;

pub use color::Color;
pub use event::{Event, EventResult};
pub use geometry::{Point, Rect, Size};
pub use hit::hit_test;
pub use scene::{DrawCommand, Scene};
pub use text::TextAlign;
pub use view::{shared, Button, Label, RowFactory, RowList, SharedView, View, ViewId, ROW_HEIGHT};
pub use window::Window;
