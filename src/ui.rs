//! Host UI seam
//!
//! The client core never touches a terminal or a DOM directly. Whatever
//! hosts it (browser page, CLI) implements [`UserInterface`] to show
//! notifications, ask for confirmation and toggle the loading indicator.

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// User-facing side effects requested by the client core
pub trait UserInterface {
    /// Show a blocking notification
    fn notify(&self, level: NotificationLevel, message: &str);

    /// Ask the user to confirm a destructive action
    fn confirm(&self, prompt: &str) -> bool;

    /// Show or hide the loading indicator
    fn set_loading(&self, loading: bool);
}

impl<U: UserInterface + ?Sized> UserInterface for &U {
    fn notify(&self, level: NotificationLevel, message: &str) {
        (**self).notify(level, message)
    }

    fn confirm(&self, prompt: &str) -> bool {
        (**self).confirm(prompt)
    }

    fn set_loading(&self, loading: bool) {
        (**self).set_loading(loading)
    }
}

/// Shows the loading indicator for as long as it lives
///
/// Dropping the guard hides the indicator on every exit path, including
/// early returns through `?`.
#[must_use = "the loading indicator is hidden as soon as the guard is dropped"]
pub struct LoadingGuard<'a, U: UserInterface + ?Sized> {
    ui: &'a U,
}

impl<'a, U: UserInterface + ?Sized> LoadingGuard<'a, U> {
    pub fn new(ui: &'a U) -> Self {
        ui.set_loading(true);
        Self { ui }
    }
}

impl<U: UserInterface + ?Sized> Drop for LoadingGuard<'_, U> {
    fn drop(&mut self) {
        self.ui.set_loading(false);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};

    use super::*;

    /// Records every interaction for assertions
    #[derive(Default)]
    pub struct RecordingUi {
        pub notifications: RefCell<Vec<(NotificationLevel, String)>>,
        pub loading_events: RefCell<Vec<bool>>,
        pub confirm_answer: Cell<bool>,
        pub prompts: RefCell<Vec<String>>,
    }

    impl RecordingUi {
        pub fn confirming(answer: bool) -> Self {
            let ui = Self::default();
            ui.confirm_answer.set(answer);
            ui
        }

        pub fn errors(&self) -> Vec<String> {
            self.notifications
                .borrow()
                .iter()
                .filter(|(level, _)| *level == NotificationLevel::Error)
                .map(|(_, msg)| msg.clone())
                .collect()
        }

        pub fn successes(&self) -> Vec<String> {
            self.notifications
                .borrow()
                .iter()
                .filter(|(level, _)| *level == NotificationLevel::Success)
                .map(|(_, msg)| msg.clone())
                .collect()
        }

        pub fn is_loading(&self) -> bool {
            self.loading_events.borrow().last().copied().unwrap_or(false)
        }
    }

    impl UserInterface for RecordingUi {
        fn notify(&self, level: NotificationLevel, message: &str) {
            self.notifications
                .borrow_mut()
                .push((level, message.to_string()));
        }

        fn confirm(&self, prompt: &str) -> bool {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.confirm_answer.get()
        }

        fn set_loading(&self, loading: bool) {
            self.loading_events.borrow_mut().push(loading);
        }
    }
}
