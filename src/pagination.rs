//! Page navigation over a snapshot of pagination controls.
//!
//! A control set is an ordered list of labelled controls such as
//! `["prev", "1", "2", "3", "next"]`. Only labels that are plain integers
//! count as numeric pages; `prev`/`next` (also `previous`, `‹`/`›`, `«`/`»`,
//! any case) step through them and anything else is left alone. Navigation never fails: requests outside the page range
//! are clamped.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageIntent {
    Prev,
    Next,
    /// One-based page number.
    Page(u64),
}

impl FromStr for PageIntent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match ControlRole::classify(s) {
            ControlRole::Prev => Ok(PageIntent::Prev),
            ControlRole::Next => Ok(PageIntent::Next),
            ControlRole::Page(n) => Ok(PageIntent::Page(n)),
            ControlRole::Text => Err(Error::new(
                ErrorKind::PageIntentParse,
                &format!("'{}' is neither prev, next nor a page number", s.trim()),
            )),
        }
    }
}

impl fmt::Display for PageIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageIntent::Prev => write!(f, "prev"),
            PageIntent::Next => write!(f, "next"),
            PageIntent::Page(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRole {
    Prev,
    Next,
    Page(u64),
    /// Non-numeric label, never part of the numeric pages.
    Text,
}

impl ControlRole {
    pub fn classify(label: &str) -> Self {
        let label = label.trim();

        match label.to_lowercase().as_str() {
            "prev" | "previous" | "‹" | "«" => return ControlRole::Prev,
            "next" | "›" | "»" => return ControlRole::Next,
            _ => {}
        }

        if !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = label.parse::<u64>() {
                return ControlRole::Page(n);
            }
        }

        ControlRole::Text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControl {
    label: String,
    role: ControlRole,
    active: bool,
    current: bool,
    disabled: bool,
}

impl PageControl {
    pub fn new(label: &str) -> Self {
        PageControl {
            label: label.to_owned(),
            role: ControlRole::classify(label),
            active: false,
            current: false,
            disabled: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn role(&self) -> ControlRole {
        self.role
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the control carries the "current page" marker.
    pub fn is_current(&self) -> bool {
        self.current
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// How a navigation target was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// `prev` or `next`.
    Step,
    /// A control label equal to the requested number.
    Label,
    /// No label matched; the number was clamped into the page range.
    Clamped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTarget {
    pub index: usize,
    pub resolution: Resolution,
}

/// Target page index for `intent`, clamped into `0..page_count`.
///
/// An absent `current` counts as the first page. Explicit page numbers are
/// one-based and resolved positionally.
pub fn resolve_target(current: Option<usize>, intent: PageIntent, page_count: usize) -> usize {
    let last = page_count.saturating_sub(1);
    let current = current.unwrap_or(0).min(last);

    match intent {
        PageIntent::Prev => current.saturating_sub(1),
        PageIntent::Next => (current + 1).min(last),
        PageIntent::Page(n) => n.saturating_sub(1).min(last as u64) as usize,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    controls: Vec<PageControl>,
}

impl PaginationState {
    pub fn new(controls: Vec<PageControl>) -> Self {
        PaginationState { controls }
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        PaginationState::new(
            labels
                .into_iter()
                .map(|label| PageControl::new(label.as_ref()))
                .collect(),
        )
    }

    /// Activates the first numeric page.
    pub fn with_first_page(mut self) -> Self {
        self.apply_target(0);
        self
    }

    pub fn controls(&self) -> &[PageControl] {
        &self.controls
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Without any numeric label every control is treated as a page.
    fn has_numeric_pages(&self) -> bool {
        self.controls
            .iter()
            .any(|c| matches!(c.role, ControlRole::Page(_)))
    }

    /// Positions in `controls` of the numeric pages, in order.
    fn pages(&self) -> Vec<usize> {
        if self.has_numeric_pages() {
            self.controls
                .iter()
                .enumerate()
                .filter(|(_, c)| matches!(c.role, ControlRole::Page(_)))
                .map(|(pos, _)| pos)
                .collect()
        } else {
            (0..self.controls.len()).collect()
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages().len()
    }

    /// Index among the numeric pages of the first active one.
    pub fn active_index(&self) -> Option<usize> {
        self.pages()
            .iter()
            .position(|&pos| self.controls[pos].active)
    }

    pub fn active_page(&self) -> Option<&PageControl> {
        let pages = self.pages();
        self.active_index().map(|idx| &self.controls[pages[idx]])
    }

    pub fn resolve(&self, intent: PageIntent) -> Option<PageTarget> {
        let page_count = self.page_count();
        if page_count == 0 {
            return None;
        }

        if let PageIntent::Page(n) = intent {
            let matched = self
                .pages()
                .iter()
                .position(|&pos| self.controls[pos].role == ControlRole::Page(n));

            if let Some(index) = matched {
                return Some(PageTarget {
                    index,
                    resolution: Resolution::Label,
                });
            }
        }

        let resolution = match intent {
            PageIntent::Page(_) => Resolution::Clamped,
            _ => Resolution::Step,
        };

        Some(PageTarget {
            index: resolve_target(self.active_index(), intent, page_count),
            resolution,
        })
    }

    /// Makes the numeric page at `target` the only active one and updates
    /// the disabled state of the `prev`/`next` controls.
    pub fn apply_target(&mut self, target: usize) {
        let pages = self.pages();
        if pages.is_empty() {
            return;
        }

        let last = pages.len() - 1;
        let target = target.min(last);
        let steps_are_pages = !self.has_numeric_pages();

        for control in self.controls.iter_mut() {
            control.active = false;
            control.current = false;

            if steps_are_pages {
                continue;
            }

            match control.role {
                ControlRole::Prev => control.disabled = target == 0,
                ControlRole::Next => control.disabled = target == last,
                _ => {}
            }
        }

        let control = &mut self.controls[pages[target]];
        control.active = true;
        control.current = true;
    }

    pub fn navigate(&mut self, intent: PageIntent) -> Option<PageTarget> {
        let target = self.resolve(intent)?;
        self.apply_target(target.index);

        log::debug!(
            "pagination: {} -> page index {} ({:?})",
            intent,
            target.index,
            target.resolution
        );

        Some(target)
    }
}
