/// Token for one scheduled "hide suggestions" action.
///
/// Only the most recently issued ticket can hide the list; any later focus
/// change supersedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HideTicket(u64);

/// Visibility of one autocomplete dropdown.
///
/// Focus loss does not hide the list at once: the caller schedules the
/// returned ticket after a short delay so that a pointer-down on a
/// suggestion is handled before the list disappears.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionVisibility {
    visible: bool,
    focused: bool,
    pending: Option<HideTicket>,
    generation: u64,
}

impl SuggestionVisibility {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    fn has_pending_hide(&self) -> bool {
        self.pending.is_some()
    }

    pub fn focus_gained(&mut self) {
        self.focused = true;
        self.visible = true;
        self.pending = None;
    }

    /// Typing reopens a list closed by a pick while the field kept focus.
    pub fn input_changed(&mut self) {
        if self.focused {
            self.visible = true;
            self.pending = None;
        }
    }

    /// Returns the ticket to deliver to [`Self::timer_elapsed`] once the delay passes.
    pub fn focus_lost(&mut self) -> HideTicket {
        self.focused = false;
        self.generation = self.generation.wrapping_add(1);
        let ticket = HideTicket(self.generation);
        self.pending = Some(ticket);
        ticket
    }

    /// Returns `true` when this ticket actually hid the list.
    pub fn timer_elapsed(&mut self, ticket: HideTicket) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.visible = false;
        true
    }

    pub fn hide_now(&mut self) {
        self.pending = None;
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_by_default() {
        let v = SuggestionVisibility::default();
        assert!(!v.is_visible());
        assert!(!v.has_pending_hide());
    }

    #[test]
    fn test_blur_hides_after_timer() {
        let mut v = SuggestionVisibility::default();
        v.focus_gained();
        assert!(v.is_visible());

        let ticket = v.focus_lost();
        // still visible until the delay elapses
        assert!(v.is_visible());
        assert!(v.timer_elapsed(ticket));
        assert!(!v.is_visible());
    }

    #[test]
    fn test_refocus_supersedes_pending_hide() {
        let mut v = SuggestionVisibility::default();
        v.focus_gained();
        let ticket = v.focus_lost();
        v.focus_gained();

        assert!(!v.timer_elapsed(ticket));
        assert!(v.is_visible());
    }

    #[test]
    fn test_only_latest_ticket_counts() {
        let mut v = SuggestionVisibility::default();
        v.focus_gained();
        let first = v.focus_lost();
        v.focus_gained();
        let second = v.focus_lost();

        assert_ne!(first, second);
        assert!(!v.timer_elapsed(first));
        assert!(v.is_visible());
        assert!(v.timer_elapsed(second));
        assert!(!v.is_visible());
    }

    #[test]
    fn test_hide_now_cancels_pending() {
        let mut v = SuggestionVisibility::default();
        v.focus_gained();
        let ticket = v.focus_lost();
        v.hide_now();

        assert!(!v.is_visible());
        assert!(!v.timer_elapsed(ticket));
    }

    #[test]
    fn test_typing_reopens_list_while_focused() {
        let mut v = SuggestionVisibility::default();
        v.focus_gained();
        v.hide_now();
        assert!(!v.is_visible());

        v.input_changed();
        assert!(v.is_visible());
    }

    #[test]
    fn test_typing_without_focus_keeps_list_hidden() {
        let mut v = SuggestionVisibility::default();
        v.input_changed();
        assert!(!v.is_visible());

        v.focus_gained();
        let ticket = v.focus_lost();
        assert!(v.timer_elapsed(ticket));
        v.input_changed();
        assert!(!v.is_visible());
    }
}
