//! Accessible dropdown navigation state machine.
//!
//! Models the header's dropdown menu: a labeled trigger revealing a list of
//! links, usable by pointer (hover-intent with a cancelable close delay),
//! click, and keyboard (roving focus with ArrowDown/ArrowUp/Home/End,
//! Escape-to-close-and-return-focus, Tab-to-close).
//!
//! The machine is synchronous and side-effect free: every event returns the
//! [`MenuEffect`] the host must perform (move DOM focus, arm or cancel the
//! close timer). Timer scheduling itself stays in the host; the machine only
//! tracks whether a scheduled close is still pending, so a timer that fires
//! after being canceled is ignored.

use serde::Serialize;

/// Delay before a hover-leave actually closes the menu.
pub const CLOSE_DELAY_MS: u64 = 150;

/// Input events, one per user interaction the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Pointer entered the trigger or the open menu.
    PointerEnter,
    /// Pointer left the widget.
    PointerLeave,
    /// The host's close timer fired.
    CloseTimerFired,
    /// Click on the trigger (toggles).
    TriggerClick,
    /// ArrowDown / Enter / Space on the focused trigger.
    TriggerArrowDown,
    /// ArrowDown inside the open menu.
    ArrowDown,
    /// ArrowUp inside the open menu.
    ArrowUp,
    /// Home key inside the open menu.
    Home,
    /// End key inside the open menu.
    End,
    Escape,
    Tab,
    /// Click anywhere outside the widget.
    OutsideClick,
    /// A menu item was activated (navigation happens in the host).
    ItemSelected,
}

/// Side effect the host must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuEffect {
    None,
    /// Move DOM focus to the menu item at this index.
    FocusItem(usize),
    /// Return DOM focus to the trigger button.
    FocusTrigger,
    /// Arm the close timer for [`CLOSE_DELAY_MS`].
    ScheduleClose,
    /// Cancel a previously armed close timer.
    CancelClose,
}

/// One dropdown menu instance. Menus never share state; each owns its own
/// open flag and focus position.
#[derive(Debug, Clone)]
pub struct DropdownMenu {
    item_count: usize,
    open: bool,
    /// Index of the menu item holding focus, if keyboard navigation moved it.
    focused: Option<usize>,
    /// A hover-leave close is armed and has not fired or been canceled.
    close_pending: bool,
}

impl DropdownMenu {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            open: false,
            focused: None,
            close_pending: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn focused_item(&self) -> Option<usize> {
        self.focused
    }

    /// Apply one event and return the effect the host must perform.
    pub fn handle(&mut self, event: MenuEvent) -> MenuEffect {
        match event {
            MenuEvent::PointerEnter => self.pointer_enter(),
            MenuEvent::PointerLeave => self.pointer_leave(),
            MenuEvent::CloseTimerFired => self.close_timer_fired(),
            MenuEvent::TriggerClick => self.trigger_click(),
            MenuEvent::TriggerArrowDown => self.trigger_arrow_down(),
            MenuEvent::ArrowDown => self.arrow_down(),
            MenuEvent::ArrowUp => self.arrow_up(),
            MenuEvent::Home => self.jump_to(0),
            MenuEvent::End => self.jump_to(self.item_count.saturating_sub(1)),
            MenuEvent::Escape => self.escape(),
            MenuEvent::Tab => {
                // Close and let the browser's default focus flow continue.
                self.close();
                MenuEffect::None
            }
            MenuEvent::OutsideClick => {
                // Closing on an outside click must not steal focus.
                self.close();
                MenuEffect::None
            }
            MenuEvent::ItemSelected => {
                self.close();
                MenuEffect::None
            }
        }
    }

    fn pointer_enter(&mut self) -> MenuEffect {
        let was_pending = self.close_pending;
        self.close_pending = false;
        self.open = true;
        if was_pending {
            MenuEffect::CancelClose
        } else {
            // Hover open never moves focus.
            MenuEffect::None
        }
    }

    fn pointer_leave(&mut self) -> MenuEffect {
        if self.open && !self.close_pending {
            self.close_pending = true;
            MenuEffect::ScheduleClose
        } else {
            MenuEffect::None
        }
    }

    fn close_timer_fired(&mut self) -> MenuEffect {
        // A fire after cancellation (pointer re-entered) is stale.
        if self.close_pending {
            self.close();
        }
        MenuEffect::None
    }

    fn trigger_click(&mut self) -> MenuEffect {
        if self.open {
            self.close();
        } else {
            self.open = true;
        }
        MenuEffect::None
    }

    fn trigger_arrow_down(&mut self) -> MenuEffect {
        if self.open {
            return MenuEffect::None;
        }
        self.open = true;
        if self.item_count == 0 {
            return MenuEffect::None;
        }
        // Keyboard-driven open lands focus on the first item.
        self.focused = Some(0);
        MenuEffect::FocusItem(0)
    }

    fn arrow_down(&mut self) -> MenuEffect {
        if !self.open || self.item_count == 0 {
            return MenuEffect::None;
        }
        let next = match self.focused {
            // Focus is still on the trigger (pointer-opened menu).
            None => 0,
            // No wrapping past the last item.
            Some(i) => (i + 1).min(self.item_count - 1),
        };
        self.focused = Some(next);
        MenuEffect::FocusItem(next)
    }

    fn arrow_up(&mut self) -> MenuEffect {
        if !self.open || self.item_count == 0 {
            return MenuEffect::None;
        }
        match self.focused {
            // At the first item (or still on the trigger): close and hand
            // focus back to the trigger.
            None | Some(0) => {
                self.close();
                MenuEffect::FocusTrigger
            }
            Some(i) => {
                let prev = i - 1;
                self.focused = Some(prev);
                MenuEffect::FocusItem(prev)
            }
        }
    }

    fn jump_to(&mut self, index: usize) -> MenuEffect {
        if !self.open || self.item_count == 0 {
            return MenuEffect::None;
        }
        self.focused = Some(index);
        MenuEffect::FocusItem(index)
    }

    fn escape(&mut self) -> MenuEffect {
        if !self.open {
            return MenuEffect::None;
        }
        self.close();
        MenuEffect::FocusTrigger
    }

    fn close(&mut self) {
        self.open = false;
        self.focused = None;
        self.close_pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_with_keyboard(menu: &mut DropdownMenu) {
        assert_eq!(menu.handle(MenuEvent::TriggerArrowDown), MenuEffect::FocusItem(0));
        assert!(menu.is_open());
    }

    #[test]
    fn keyboard_open_focuses_first_item() {
        let mut menu = DropdownMenu::new(4);
        assert_eq!(
            menu.handle(MenuEvent::TriggerArrowDown),
            MenuEffect::FocusItem(0)
        );
        assert!(menu.is_open());
        assert_eq!(menu.focused_item(), Some(0));
    }

    #[test]
    fn pointer_open_does_not_move_focus() {
        let mut menu = DropdownMenu::new(4);
        assert_eq!(menu.handle(MenuEvent::PointerEnter), MenuEffect::None);
        assert!(menu.is_open());
        assert_eq!(menu.focused_item(), None);

        let mut clicked = DropdownMenu::new(4);
        assert_eq!(clicked.handle(MenuEvent::TriggerClick), MenuEffect::None);
        assert!(clicked.is_open());
        assert_eq!(clicked.focused_item(), None);
    }

    #[test]
    fn escape_closes_and_returns_focus_to_trigger() {
        let mut menu = DropdownMenu::new(4);
        open_with_keyboard(&mut menu);
        assert_eq!(menu.handle(MenuEvent::Escape), MenuEffect::FocusTrigger);
        assert!(!menu.is_open());
        assert_eq!(menu.focused_item(), None);
    }

    #[test]
    fn escape_on_closed_menu_is_a_no_op() {
        let mut menu = DropdownMenu::new(4);
        assert_eq!(menu.handle(MenuEvent::Escape), MenuEffect::None);
        assert!(!menu.is_open());
    }

    #[test]
    fn outside_click_closes_without_focus_effect() {
        let mut menu = DropdownMenu::new(4);
        open_with_keyboard(&mut menu);
        assert_eq!(menu.handle(MenuEvent::OutsideClick), MenuEffect::None);
        assert!(!menu.is_open());
    }

    #[test]
    fn arrow_down_stops_at_last_item() {
        let mut menu = DropdownMenu::new(3);
        open_with_keyboard(&mut menu);
        assert_eq!(menu.handle(MenuEvent::ArrowDown), MenuEffect::FocusItem(1));
        assert_eq!(menu.handle(MenuEvent::ArrowDown), MenuEffect::FocusItem(2));
        // No wrap past the end.
        assert_eq!(menu.handle(MenuEvent::ArrowDown), MenuEffect::FocusItem(2));
        assert_eq!(menu.focused_item(), Some(2));
    }

    #[test]
    fn arrow_up_at_first_item_closes_and_focuses_trigger() {
        let mut menu = DropdownMenu::new(3);
        open_with_keyboard(&mut menu);
        assert_eq!(menu.handle(MenuEvent::ArrowDown), MenuEffect::FocusItem(1));
        assert_eq!(menu.handle(MenuEvent::ArrowUp), MenuEffect::FocusItem(0));
        assert_eq!(menu.handle(MenuEvent::ArrowUp), MenuEffect::FocusTrigger);
        assert!(!menu.is_open());
    }

    #[test]
    fn arrow_down_on_pointer_opened_menu_focuses_first_item() {
        let mut menu = DropdownMenu::new(3);
        menu.handle(MenuEvent::PointerEnter);
        assert_eq!(menu.handle(MenuEvent::ArrowDown), MenuEffect::FocusItem(0));
    }

    #[test]
    fn home_and_end_jump_to_extremes() {
        let mut menu = DropdownMenu::new(5);
        open_with_keyboard(&mut menu);
        assert_eq!(menu.handle(MenuEvent::End), MenuEffect::FocusItem(4));
        assert_eq!(menu.handle(MenuEvent::Home), MenuEffect::FocusItem(0));
    }

    #[test]
    fn hover_leave_schedules_close_and_timer_closes() {
        let mut menu = DropdownMenu::new(3);
        menu.handle(MenuEvent::PointerEnter);
        assert_eq!(menu.handle(MenuEvent::PointerLeave), MenuEffect::ScheduleClose);
        assert!(menu.is_open());
        assert_eq!(menu.handle(MenuEvent::CloseTimerFired), MenuEffect::None);
        assert!(!menu.is_open());
    }

    #[test]
    fn reenter_cancels_pending_close() {
        let mut menu = DropdownMenu::new(3);
        menu.handle(MenuEvent::PointerEnter);
        menu.handle(MenuEvent::PointerLeave);
        assert_eq!(menu.handle(MenuEvent::PointerEnter), MenuEffect::CancelClose);
        // A stale fire after cancellation must not close the menu.
        assert_eq!(menu.handle(MenuEvent::CloseTimerFired), MenuEffect::None);
        assert!(menu.is_open());
    }

    #[test]
    fn tab_closes_without_focus_effect() {
        let mut menu = DropdownMenu::new(3);
        open_with_keyboard(&mut menu);
        assert_eq!(menu.handle(MenuEvent::Tab), MenuEffect::None);
        assert!(!menu.is_open());
    }

    #[test]
    fn selecting_an_item_closes() {
        let mut menu = DropdownMenu::new(3);
        open_with_keyboard(&mut menu);
        assert_eq!(menu.handle(MenuEvent::ItemSelected), MenuEffect::None);
        assert!(!menu.is_open());
    }

    #[test]
    fn trigger_click_toggles() {
        let mut menu = DropdownMenu::new(3);
        menu.handle(MenuEvent::TriggerClick);
        assert!(menu.is_open());
        menu.handle(MenuEvent::TriggerClick);
        assert!(!menu.is_open());
    }

    #[test]
    fn empty_menu_opens_without_focus() {
        let mut menu = DropdownMenu::new(0);
        assert_eq!(menu.handle(MenuEvent::TriggerArrowDown), MenuEffect::None);
        assert!(menu.is_open());
        assert_eq!(menu.handle(MenuEvent::ArrowDown), MenuEffect::None);
        assert_eq!(menu.handle(MenuEvent::Escape), MenuEffect::FocusTrigger);
    }

    #[test]
    fn instances_do_not_interfere() {
        let mut a = DropdownMenu::new(3);
        let mut b = DropdownMenu::new(3);
        a.handle(MenuEvent::TriggerArrowDown);
        assert!(a.is_open());
        assert!(!b.is_open());
        b.handle(MenuEvent::PointerEnter);
        a.handle(MenuEvent::Escape);
        assert!(!a.is_open());
        assert!(b.is_open());
    }
}
