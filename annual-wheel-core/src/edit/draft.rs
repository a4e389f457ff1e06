//! In-progress edits of a wheel.
//!
//! Rows added during an edit get temporary negative ids from a [`DraftIds`] owned by the draft
//! itself, so two concurrent drafts never hand out ids from a shared counter. Storage replaces
//! the temporary ids on save (see [`crate::Wheel::pending_ids`]).

use crate::{
    foundation::core::{Month, Rgba8},
    foundation::error::{WheelError, WheelResult},
    model::theme::Theme,
    model::wheel::{Category, MonthSpec, Wheel, WheelEvent},
};

/// Default name for a freshly added category.
pub const NEW_CATEGORY_NAME: &str = "New category";
/// Default name for a freshly added event.
pub const NEW_EVENT_NAME: &str = "New event";

/// Monotonically decreasing source of temporary ids: `-1, -2, -3, ...`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftIds {
    next: i64,
}

impl Default for DraftIds {
    fn default() -> Self {
        Self { next: -1 }
    }
}

impl DraftIds {
    /// Fresh generator starting at `-1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator whose first id is strictly below both `floor` and 0.
    ///
    /// Used when reopening a wheel that still carries temporary ids.
    pub fn below(floor: i64) -> Self {
        Self {
            next: floor.min(0) - 1,
        }
    }

    /// Next temporary id.
    pub fn next_id(&mut self) -> i64 {
        let id = self.next;
        self.next -= 1;
        id
    }
}

/// Editable copy of a wheel.
#[derive(Clone, Debug)]
pub struct WheelDraft {
    wheel: Wheel,
    ids: DraftIds,
}

impl WheelDraft {
    /// Start editing an existing wheel.
    pub fn new(wheel: Wheel) -> Self {
        let lowest = wheel
            .categories
            .iter()
            .flat_map(|c| std::iter::once(c.id).chain(c.events.iter().map(|e| e.id)))
            .min()
            .unwrap_or(0);
        Self {
            wheel,
            ids: DraftIds::below(lowest),
        }
    }

    /// Start a new, empty wheel for `year`.
    pub fn blank(year: i32) -> Self {
        Self::new(Wheel {
            id: 0,
            name: String::new(),
            description: None,
            year,
            categories: Vec::new(),
            theme: Theme::default(),
        })
    }

    /// Current state of the draft (not validated).
    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    /// Set the wheel name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.wheel.name = name.into();
    }

    /// Set or clear the description. Blank text clears it.
    pub fn set_description(&mut self, description: impl Into<String>) {
        let d = description.into();
        self.wheel.description = if d.trim().is_empty() { None } else { Some(d) };
    }

    /// Set the planned year.
    pub fn set_year(&mut self, year: i32) {
        self.wheel.year = year;
    }

    /// Replace the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.wheel.theme = theme;
    }

    /// Append a category and return its temporary id.
    pub fn add_category(&mut self, name: Option<&str>, color: Option<Rgba8>) -> i64 {
        let id = self.ids.next_id();
        self.wheel.categories.push(Category {
            id,
            name: name.unwrap_or(NEW_CATEGORY_NAME).to_string(),
            color: Some(color.unwrap_or(Rgba8::BLACK)),
            events: Vec::new(),
        });
        tracing::debug!(category_id = id, "draft category added");
        id
    }

    /// Remove a category together with its events.
    pub fn remove_category(&mut self, id: i64) -> WheelResult<Category> {
        let pos = self.category_pos(id)?;
        Ok(self.wheel.categories.remove(pos))
    }

    /// Rename a category.
    pub fn rename_category(&mut self, id: i64, name: impl Into<String>) -> WheelResult<()> {
        self.category_mut(id)?.name = name.into();
        Ok(())
    }

    /// Change a category color.
    pub fn recolor_category(&mut self, id: i64, color: Rgba8) -> WheelResult<()> {
        self.category_mut(id)?.color = Some(color);
        Ok(())
    }

    /// Append an event to a category and return its temporary id.
    pub fn add_event(
        &mut self,
        category_id: i64,
        name: Option<&str>,
        month: Month,
    ) -> WheelResult<i64> {
        let pos = self.category_pos(category_id)?;
        let id = self.ids.next_id();
        self.wheel.categories[pos].events.push(WheelEvent {
            id,
            name: name.unwrap_or(NEW_EVENT_NAME).to_string(),
            month: MonthSpec::from(month),
        });
        tracing::debug!(category_id, event_id = id, month = %month, "draft event added");
        Ok(id)
    }

    /// Remove an event from a category.
    pub fn remove_event(&mut self, category_id: i64, event_id: i64) -> WheelResult<WheelEvent> {
        let cat = self.category_mut(category_id)?;
        let pos = cat
            .events
            .iter()
            .position(|e| e.id == event_id)
            .ok_or_else(|| unknown_event(category_id, event_id))?;
        Ok(cat.events.remove(pos))
    }

    /// Rename an event.
    pub fn rename_event(
        &mut self,
        category_id: i64,
        event_id: i64,
        name: impl Into<String>,
    ) -> WheelResult<()> {
        self.event_mut(category_id, event_id)?.name = name.into();
        Ok(())
    }

    /// Move an event to another month.
    pub fn move_event(&mut self, category_id: i64, event_id: i64, month: Month) -> WheelResult<()> {
        self.event_mut(category_id, event_id)?.month = MonthSpec::from(month);
        Ok(())
    }

    /// Validate and return the edited wheel.
    pub fn finish(self) -> WheelResult<Wheel> {
        self.wheel.validate()?;
        Ok(self.wheel)
    }

    fn category_pos(&self, id: i64) -> WheelResult<usize> {
        self.wheel
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| WheelError::validation(format!("unknown category id {id}")))
    }

    fn category_mut(&mut self, id: i64) -> WheelResult<&mut Category> {
        let pos = self.category_pos(id)?;
        Ok(&mut self.wheel.categories[pos])
    }

    fn event_mut(&mut self, category_id: i64, event_id: i64) -> WheelResult<&mut WheelEvent> {
        self.category_mut(category_id)?
            .events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or_else(|| unknown_event(category_id, event_id))
    }
}

fn unknown_event(category_id: i64, event_id: i64) -> WheelError {
    WheelError::validation(format!(
        "unknown event id {event_id} in category {category_id}"
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/edit/draft.rs"]
mod tests;
