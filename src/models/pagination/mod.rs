//! Pagination model for the dot indicator.
//!
//! The parent owns the slide position; the indicator only reads it.

use serde::{Deserialize, Serialize};

/// Number of pages and the page currently shown.
///
/// `current_index` is signed so a parent can hand over whatever it holds
/// without clamping first. An index outside `0..total` highlights nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PaginationState {
    pub total: usize,
    pub current_index: isize,
}

impl PaginationState {
    pub fn new(total: usize, current_index: isize) -> Self {
        Self {
            total,
            current_index,
        }
    }

    /// Whether the dot at `index` is the highlighted one
    pub fn is_active(&self, index: usize) -> bool {
        index < self.total && usize::try_from(self.current_index).map_or(false, |c| c == index)
    }

    /// Index of the highlighted dot, if any
    pub fn active_index(&self) -> Option<usize> {
        usize::try_from(self.current_index)
            .ok()
            .filter(|&idx| idx < self.total)
    }

    /// Whether a page exists before the current one
    pub fn has_previous(&self) -> bool {
        self.active_index().map_or(false, |idx| idx > 0)
    }

    /// Whether a page exists after the current one
    pub fn has_next(&self) -> bool {
        self.active_index()
            .map_or(false, |idx| idx + 1 < self.total)
    }

    /// State moved one page back, staying on the first page
    pub fn previous(self) -> Self {
        match self.active_index() {
            Some(idx) if idx > 0 => Self::new(self.total, idx as isize - 1),
            _ => self,
        }
    }

    /// State moved one page forward, staying on the last page
    pub fn next(self) -> Self {
        match self.active_index() {
            Some(idx) if idx + 1 < self.total => Self::new(self.total, idx as isize + 1),
            _ => self,
        }
    }
}
