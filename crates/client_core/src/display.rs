use std::sync::{Arc, Mutex};

use shared::error::{FailureCode, SUCCESS_FILE_READY};

use crate::view::{Navigator, StateMarker, StatusView};

pub const SEARCHING_MESSAGE: &str = "Searching for athletes...";
pub const FILE_READY_MESSAGE: &str = "Excel file generated!";
pub const DOWNLOAD_TARGET: &str = "/download";

/// Presentation state of the shared result element. Starts `Idle`; never
/// returns to `Idle` for the lifetime of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayState {
    #[default]
    Idle,
    Loading,
    Error,
    Success,
}

/// Owns the result element's three-state presentation.
pub struct StatusPanel {
    view: Arc<dyn StatusView>,
    navigator: Arc<dyn Navigator>,
    state: Mutex<DisplayState>,
}

impl StatusPanel {
    pub fn new(view: Arc<dyn StatusView>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            view,
            navigator,
            state: Mutex::new(DisplayState::Idle),
        }
    }

    pub fn state(&self) -> DisplayState {
        *self.state.lock().unwrap()
    }

    /// Idempotent; safe to call on every submission attempt.
    pub fn show_loading(&self) {
        self.view.clear_marker(StateMarker::Error);
        self.view.clear_marker(StateMarker::Success);
        self.view.set_marker(StateMarker::Loading);
        self.view.reveal();
        self.view.set_message(SEARCHING_MESSAGE);
        *self.state.lock().unwrap() = DisplayState::Loading;
    }

    /// Codes without a fixed message leave the element untouched.
    pub fn show_error(&self, code: i64) {
        let Some(message) = FailureCode::from_code(code).message() else {
            return;
        };
        self.view.clear_marker(StateMarker::Loading);
        self.view.set_marker(StateMarker::Error);
        self.view.reveal();
        self.view.set_message(message);
        *self.state.lock().unwrap() = DisplayState::Error;
    }

    /// Navigates to the download endpoint strictly after the success marker
    /// and message are committed to the element.
    pub fn show_success(&self, code: i64) {
        if code != SUCCESS_FILE_READY {
            return;
        }
        self.view.clear_marker(StateMarker::Loading);
        self.view.set_marker(StateMarker::Success);
        self.view.reveal();
        self.view.set_message(FILE_READY_MESSAGE);
        *self.state.lock().unwrap() = DisplayState::Success;
        self.navigator.navigate(DOWNLOAD_TARGET);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum ViewOp {
        Reveal,
        Set(StateMarker),
        Clear(StateMarker),
        Message(String),
        Navigate(String),
    }

    struct RecordingView {
        ops: Arc<Mutex<Vec<ViewOp>>>,
    }

    impl StatusView for RecordingView {
        fn reveal(&self) {
            self.ops.lock().unwrap().push(ViewOp::Reveal);
        }

        fn set_marker(&self, marker: StateMarker) {
            self.ops.lock().unwrap().push(ViewOp::Set(marker));
        }

        fn clear_marker(&self, marker: StateMarker) {
            self.ops.lock().unwrap().push(ViewOp::Clear(marker));
        }

        fn set_message(&self, message: &str) {
            self.ops
                .lock()
                .unwrap()
                .push(ViewOp::Message(message.to_string()));
        }
    }

    struct RecordingNavigator {
        ops: Arc<Mutex<Vec<ViewOp>>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, target: &str) {
            self.ops
                .lock()
                .unwrap()
                .push(ViewOp::Navigate(target.to_string()));
        }
    }

    fn panel() -> (StatusPanel, Arc<Mutex<Vec<ViewOp>>>) {
        let ops = Arc::new(Mutex::new(Vec::new()));
        let panel = StatusPanel::new(
            Arc::new(RecordingView {
                ops: Arc::clone(&ops),
            }),
            Arc::new(RecordingNavigator {
                ops: Arc::clone(&ops),
            }),
        );
        (panel, ops)
    }

    #[test]
    fn each_recognized_code_writes_its_fixed_message() {
        let expected = [
            (1, "Qualification is required"),
            (2, "File name is required"),
            (3, "Invalid minimum match count"),
            (4, "Invalid maximum match count"),
            (5, "Minimum cannot exceed maximum"),
            (6, "No athletes found"),
            (7, "Server error"),
            (8, "File not found"),
            (9, "Error loading data"),
        ];
        for (code, message) in expected {
            let (panel, ops) = panel();
            panel.show_error(code);
            assert_eq!(
                ops.lock().unwrap().as_slice(),
                [
                    ViewOp::Clear(StateMarker::Loading),
                    ViewOp::Set(StateMarker::Error),
                    ViewOp::Reveal,
                    ViewOp::Message(message.to_string()),
                ],
                "unexpected op sequence for code {code}"
            );
            assert_eq!(panel.state(), DisplayState::Error);
        }
    }

    #[test]
    fn unrecognized_error_codes_leave_the_element_untouched() {
        let (panel, ops) = panel();
        for code in [0, -1, 10, 42] {
            panel.show_error(code);
        }
        assert!(ops.lock().unwrap().is_empty());
        assert_eq!(panel.state(), DisplayState::Idle);
    }

    #[test]
    fn loading_clears_prior_outcome_markers() {
        let (panel, ops) = panel();
        panel.show_loading();
        assert_eq!(
            ops.lock().unwrap().as_slice(),
            [
                ViewOp::Clear(StateMarker::Error),
                ViewOp::Clear(StateMarker::Success),
                ViewOp::Set(StateMarker::Loading),
                ViewOp::Reveal,
                ViewOp::Message(SEARCHING_MESSAGE.to_string()),
            ]
        );
        assert_eq!(panel.state(), DisplayState::Loading);
    }

    #[test]
    fn loading_is_idempotent() {
        let (panel, ops) = panel();
        panel.show_loading();
        let first = ops.lock().unwrap().clone();
        panel.show_loading();
        assert_eq!(ops.lock().unwrap().len(), first.len() * 2);
        assert_eq!(panel.state(), DisplayState::Loading);
    }

    #[test]
    fn success_navigates_only_after_the_element_is_committed() {
        let (panel, ops) = panel();
        panel.show_success(1);
        assert_eq!(
            ops.lock().unwrap().as_slice(),
            [
                ViewOp::Clear(StateMarker::Loading),
                ViewOp::Set(StateMarker::Success),
                ViewOp::Reveal,
                ViewOp::Message(FILE_READY_MESSAGE.to_string()),
                ViewOp::Navigate(DOWNLOAD_TARGET.to_string()),
            ]
        );
        assert_eq!(panel.state(), DisplayState::Success);
    }

    #[test]
    fn success_with_a_null_navigator_still_commits_the_element() {
        let ops = Arc::new(Mutex::new(Vec::new()));
        let panel = StatusPanel::new(
            Arc::new(RecordingView {
                ops: Arc::clone(&ops),
            }),
            Arc::new(crate::view::NullNavigator),
        );
        panel.show_success(1);
        assert_eq!(panel.state(), DisplayState::Success);
        assert_eq!(
            ops.lock().unwrap().last(),
            Some(&ViewOp::Message(FILE_READY_MESSAGE.to_string()))
        );
    }

    #[test]
    fn success_with_any_other_code_is_a_no_op() {
        let (panel, ops) = panel();
        for code in [0, -1, 2, 9] {
            panel.show_success(code);
        }
        assert!(ops.lock().unwrap().is_empty());
        assert_eq!(panel.state(), DisplayState::Idle);
    }

    #[test]
    fn loading_then_error_replaces_the_loading_marker() {
        let (panel, ops) = panel();
        panel.show_loading();
        panel.show_error(6);
        let ops = ops.lock().unwrap();
        assert_eq!(
            ops.last(),
            Some(&ViewOp::Message("No athletes found".to_string()))
        );
        assert!(ops.contains(&ViewOp::Clear(StateMarker::Loading)));
        assert_eq!(panel.state(), DisplayState::Error);
    }
}
