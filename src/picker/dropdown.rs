use std::cell::Cell;

use ratatui::layout::Rect;

/// Open/closed state of a picker list.
///
/// Closes on item choice, on a pointer press outside the area it was last
/// drawn in, or on an explicit `close`. Nothing else closes it.
#[derive(Debug, Default)]
pub struct Dropdown {
    open: bool,
    highlighted: usize,
    area: Cell<Option<Rect>>,
}

impl Dropdown {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Flips the list. With no items the trigger is disabled and the list
    /// stays closed. Opening highlights `current` when given.
    pub fn toggle(&mut self, item_count: usize, current: Option<usize>) {
        if item_count == 0 {
            self.open = false;
            return;
        }
        self.open = !self.open;
        if self.open {
            self.highlighted = current.unwrap_or(0).min(item_count - 1);
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn move_down(&mut self, item_count: usize) {
        if item_count == 0 {
            self.highlighted = 0;
            return;
        }
        self.highlighted = (self.highlighted + 1).min(item_count - 1);
    }

    /// Picks the highlighted item and closes the list.
    pub fn choose(&mut self, item_count: usize) -> Option<usize> {
        if !self.open || item_count == 0 {
            return None;
        }
        self.open = false;
        Some(self.highlighted.min(item_count - 1))
    }

    /// Records where the picker (trigger plus list) was drawn.
    pub fn set_area(&self, area: Rect) {
        self.area.set(Some(area));
    }

    pub fn area(&self) -> Option<Rect> {
        self.area.get()
    }

    /// Pointer press at a terminal cell. Returns true if it closed the list.
    pub fn pointer_down(&mut self, column: u16, row: u16) -> bool {
        if !self.open {
            return false;
        }
        let inside = self.area.get().is_some_and(|a| {
            column >= a.x
                && column < a.x.saturating_add(a.width)
                && row >= a.y
                && row < a.y.saturating_add(a.height)
        });
        if inside {
            return false;
        }
        self.open = false;
        true
    }
}

#[cfg(test)]
#[path = "../tests/picker/dropdown_tests.rs"]
mod tests;
