use crate::pagination::{PageControl, PaginationState};

use super::Theme;

pub struct PaginationBar<'a> {
    state: &'a PaginationState,
    theme: &'a Theme,
}

impl<'a> PaginationBar<'a> {
    pub fn new(state: &'a PaginationState, theme: &'a Theme) -> Self {
        PaginationBar { state, theme }
    }

    fn control(&self, control: &PageControl) -> String {
        if control.is_current() {
            self.theme.paint(
                &self.theme.active_page_style,
                &format!("[{}]", control.label()),
            )
        } else if control.is_disabled() {
            self.theme
                .paint(&self.theme.disabled_page_style, control.label())
        } else {
            control.label().to_owned()
        }
    }

    pub fn line(&self) -> String {
        self.state
            .controls()
            .iter()
            .map(|control| self.control(control))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
