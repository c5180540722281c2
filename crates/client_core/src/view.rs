use crate::options::OptionList;

/// Which presentation marker the result element carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateMarker {
    Loading,
    Error,
    Success,
}

/// The shared result element. Hosts own the real surface; the status panel
/// only ever talks through this seam.
pub trait StatusView: Send + Sync {
    fn reveal(&self);
    fn set_marker(&self, marker: StateMarker);
    fn clear_marker(&self, marker: StateMarker);
    fn set_message(&self, message: &str);
}

/// One dependent selection widget.
pub trait SelectorView: Send + Sync {
    /// Current selected value; the empty string means the placeholder.
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
    fn reveal(&self);
    fn hide(&self);
    fn replace_options(&self, options: &OptionList);
}

/// Client-side navigation sink.
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: &str);
}

/// Swallows navigation requests; for hosts that must stay on the page.
pub struct NullNavigator;

impl Navigator for NullNavigator {
    fn navigate(&self, _target: &str) {}
}
