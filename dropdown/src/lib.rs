//! Dropdown widget - a tappable header that folds out a floating option list.
//!
//! Built on [`tapdom`]: the widget's header lives in the host's view tree,
//! while the open overlay is attached to the [`tapdom::Window`] itself so
//! it floats above every other layer. Hosts own the window and forward
//! events; the widget keeps its open state and the window's layer set in
//! lockstep.

mod events;
mod render;
mod state;

pub use state::{
    Dropdown, HeaderConfigurator, RowConfigurator, DEFAULT_PLACEHOLDER, HEADER_HEIGHT,
    MAX_VISIBLE_ROWS,
};
