//! Dropdown widget state.

use std::cell::RefCell;
use std::rc::Rc;

use tapdom::{shared, Button, Color, Label, Rect, RowFactory, RowList, SharedView, View, ViewId};

/// Header text shown before any selection is made.
pub const DEFAULT_PLACEHOLDER: &str = "Click to select";

/// Fixed height of the header region, in points.
pub const HEADER_HEIGHT: f32 = 44.0;

/// Rows shown before the derived overlay height stops growing.
pub const MAX_VISIBLE_ROWS: usize = 5;

pub(crate) const DEFAULT_ROW_IDENTIFIER: &str = "dropdown-row";

/// Called with the header view and the new current option after every
/// selection change.
pub type HeaderConfigurator = Box<dyn FnMut(&mut dyn View, &str)>;

/// Called with a row view and the option it should display.
pub type RowConfigurator = Box<dyn FnMut(&mut dyn View, &str)>;

/// A tappable header that folds out a floating list of options.
///
/// Closed, the dropdown is just its header: the built-in button, or a
/// caller-supplied view. A tap on the header opens a row list overlay
/// attached directly to the window, floating above everything else; a tap
/// on a row makes it the current option and closes the overlay again.
///
/// # Example
///
/// ```ignore
/// let mut picker = Dropdown::new(vec!["Low".into(), "Medium".into(), "High".into()]);
/// picker.set_frame(Rect::new(16.0, 60.0, 200.0, 44.0));
///
/// // Host event loop:
/// picker.handle_event(&Event::Tap(point), &mut window);
/// ```
pub struct Dropdown {
    pub(crate) id: ViewId,
    pub(crate) frame: Rect,
    pub(crate) options: Vec<String>,
    pub(crate) placeholder: String,
    pub(crate) current_option: String,
    pub(crate) is_open: bool,
    pub(crate) overlay_height: Option<f32>,
    pub(crate) row_identifier: String,
    pub(crate) button: Rc<RefCell<Button>>,
    pub(crate) custom_header: Option<SharedView>,
    pub(crate) row_list: Rc<RefCell<RowList>>,
    pub(crate) header_configurator: Option<HeaderConfigurator>,
    pub(crate) row_configurator: Option<RowConfigurator>,
    pub(crate) hidden: bool,
}

impl Dropdown {
    /// Create a dropdown over the given options, headed by the default
    /// button showing [`DEFAULT_PLACEHOLDER`].
    pub fn new(options: Vec<String>) -> Self {
        let button = shared(Button::new(DEFAULT_PLACEHOLDER));
        let mut rows = RowList::new().border(Color::LIGHT_GRAY, 1.0);
        rows.register(DEFAULT_ROW_IDENTIFIER, Box::new(|| shared(Label::new(""))));
        rows.set_hidden(true);

        Self {
            id: ViewId::next(),
            frame: Rect::default(),
            options,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            current_option: DEFAULT_PLACEHOLDER.to_string(),
            is_open: false,
            overlay_height: None,
            row_identifier: DEFAULT_ROW_IDENTIFIER.to_string(),
            button,
            custom_header: None,
            row_list: shared(rows),
            header_configurator: None,
            row_configurator: None,
            hidden: false,
        }
    }

    /// Replace the construction-time placeholder.
    ///
    /// Resets the current option and the default header title, so this
    /// belongs before any selection is made.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.button.borrow_mut().set_title(text.clone());
        self.current_option.clone_from(&text);
        self.placeholder = text;
        self
    }

    /// Fix the overlay height instead of deriving it from the option count.
    pub fn overlay_height(mut self, height: f32) -> Self {
        if height > 0.0 {
            self.overlay_height = Some(height);
        } else {
            log::warn!("[dropdown] ignoring non-positive overlay height {height}");
        }
        self
    }

    /// Build overlay rows with a custom factory registered under
    /// `identifier` instead of the default label rows.
    ///
    /// Pair this with a row configurator; without one, only rows that turn
    /// out to be [`Label`]s get their text set.
    pub fn row_source(mut self, identifier: impl Into<String>, factory: RowFactory) -> Self {
        let identifier = identifier.into();
        self.row_list.borrow_mut().register(identifier.clone(), factory);
        self.row_identifier = identifier;
        self
    }

    /// Replace the default button header with a caller-supplied view.
    ///
    /// The widget sizes the view over the header region but never touches
    /// its content; pair it with a header configurator so selections become
    /// visible.
    pub fn header_view(mut self, view: SharedView) -> Self {
        self.custom_header = Some(view);
        self
    }

    pub fn set_header_configurator<F>(&mut self, configurator: F)
    where
        F: FnMut(&mut dyn View, &str) + 'static,
    {
        self.header_configurator = Some(Box::new(configurator));
    }

    pub fn set_row_configurator<F>(&mut self, configurator: F)
    where
        F: FnMut(&mut dyn View, &str) + 'static,
    {
        self.row_configurator = Some(Box::new(configurator));
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn current_option(&self) -> &str {
        &self.current_option
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Identity of the overlay layer, for attach checks.
    pub fn overlay_id(&self) -> ViewId {
        self.row_list.borrow().id()
    }

    /// Rows currently built for the overlay. Zero until the first open.
    pub fn row_count(&self) -> usize {
        self.row_list.borrow().row_count()
    }

    /// The tappable strip at the top of the widget frame.
    pub fn header_frame(&self) -> Rect {
        Rect::new(self.frame.x, self.frame.y, self.frame.width, HEADER_HEIGHT)
    }

    /// Set the current option and notify the header configurator.
    ///
    /// The value is not validated against `options` and the overlay is left
    /// alone. Without a configurator the default header keeps its title;
    /// only row selection rewrites it.
    pub fn set_current_option(&mut self, option: impl Into<String>) {
        self.current_option = option.into();
        log::debug!("[dropdown] current option {:?}", self.current_option);
        self.notify_header();
    }

    pub(crate) fn notify_header(&mut self) {
        let Some(configurator) = self.header_configurator.as_mut() else {
            return;
        };
        let header = self
            .custom_header
            .clone()
            .unwrap_or_else(|| self.button.clone());
        configurator(&mut *header.borrow_mut(), &self.current_option);
    }

    /// Make `options[index]` current. Out-of-range indices are dropped.
    pub(crate) fn apply_selection(&mut self, index: usize) {
        let Some(option) = self.options.get(index).cloned() else {
            log::warn!("[dropdown] selection index {index} out of range");
            return;
        };
        log::debug!("[dropdown] selected row {index}");
        if self.header_configurator.is_none() {
            self.button.borrow_mut().set_title(option.clone());
        }
        self.set_current_option(option);
    }

    /// Refill the overlay rows from `options`, through the row
    /// configurator when one is set.
    pub(crate) fn reload_rows(&mut self) {
        let identifier = self.row_identifier.clone();
        let options = &self.options;
        let configurator = &mut self.row_configurator;
        self.row_list
            .borrow_mut()
            .reload(&identifier, options.len(), |index, row| {
                let option = options[index].as_str();
                match configurator.as_mut() {
                    Some(configure) => configure(row, option),
                    None => {
                        if let Some(label) = row.as_any_mut().downcast_mut::<Label>() {
                            label.set_text(option);
                        }
                    }
                }
            });
    }
}
