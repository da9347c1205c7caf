//! Top navigation bar: mobile menu toggle, scroll-dependent styling and
//! smooth anchor jumps.

use std::time::Duration;

use tracing::debug;

use crate::config::NavbarConfig;
use crate::engine::Animated;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Bars,
    Times,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuChange {
    pub open: bool,
    pub icon: MenuIcon,
    /// Body scrolling is locked while the mobile menu covers the page.
    pub lock_body_scroll: bool,
}

impl MenuChange {
    fn for_state(open: bool) -> Self {
        Self {
            open,
            icon: if open { MenuIcon::Times } else { MenuIcon::Bars },
            lock_body_scroll: open,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarStyle {
    pub padding_px: f32,
    pub background_alpha: f32,
    pub shadow: bool,
}

impl NavbarStyle {
    pub const COMPACT: NavbarStyle = NavbarStyle {
        padding_px: 12.0,
        background_alpha: 0.98,
        shadow: true,
    };

    pub const EXPANDED: NavbarStyle = NavbarStyle {
        padding_px: 18.0,
        background_alpha: 0.95,
        shadow: false,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollUpdate {
    pub style: NavbarStyle,
    pub menu: Option<MenuChange>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnchorJump {
    pub menu: Option<MenuChange>,
    /// Window scroll target, absent for a bare `#` link or a missing target.
    pub scroll_to: Option<f32>,
}

#[derive(Debug, Clone)]
struct PendingHash {
    hash: String,
    remaining: Duration,
}

#[derive(Debug, Clone)]
pub struct Navbar {
    config: NavbarConfig,
    menu_open: bool,
    last_scroll_y: f32,
    pending_hash: Option<PendingHash>,
}

impl Navbar {
    pub fn new(config: NavbarConfig, initial_scroll_y: f32) -> Self {
        Self {
            config,
            menu_open: false,
            last_scroll_y: initial_scroll_y,
            pending_hash: None,
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) -> MenuChange {
        self.menu_open = !self.menu_open;
        debug!(open = self.menu_open, "mobile menu toggled");
        MenuChange::for_state(self.menu_open)
    }

    fn close_menu(&mut self) -> Option<MenuChange> {
        if self.menu_open {
            self.menu_open = false;
            Some(MenuChange::for_state(false))
        } else {
            None
        }
    }

    /// Applies a window scroll. Scrolling down on a mobile viewport folds
    /// the open menu away.
    pub fn on_scroll(&mut self, scroll_y: f32, viewport_width: f32) -> ScrollUpdate {
        let scrolling_up = scroll_y < self.last_scroll_y;
        let style = if scroll_y > self.config.compact_after {
            NavbarStyle::COMPACT
        } else {
            NavbarStyle::EXPANDED
        };

        let menu = if !scrolling_up && viewport_width < self.config.mobile_breakpoint {
            self.close_menu()
        } else {
            None
        };

        self.last_scroll_y = scroll_y;
        ScrollUpdate { style, menu }
    }

    /// Handles a click on an in-page link. `target_top` is the offset of the
    /// element named by `href`, if it exists.
    pub fn on_anchor_click(
        &mut self,
        href: &str,
        target_top: Option<f32>,
        navbar_height: f32,
    ) -> AnchorJump {
        let menu = self.close_menu();
        if href == "#" {
            return AnchorJump {
                menu,
                scroll_to: None,
            };
        }

        let scroll_to = target_top.map(|top| top - navbar_height - self.config.anchor_margin);
        if scroll_to.is_some() {
            self.pending_hash = Some(PendingHash {
                hash: href.to_string(),
                remaining: Duration::from_millis(self.config.hash_update_delay_ms),
            });
        }
        AnchorJump { menu, scroll_to }
    }

    /// Returns the hash to push to the history once the jump delay passed.
    pub fn take_due_hash(&mut self) -> Option<String> {
        let due = self
            .pending_hash
            .as_ref()
            .is_some_and(|pending| pending.remaining.is_zero());
        if due {
            self.pending_hash.take().map(|pending| pending.hash)
        } else {
            None
        }
    }
}

impl Animated for Navbar {
    fn update(&mut self, dt: Duration) -> bool {
        if let Some(pending) = &mut self.pending_hash {
            pending.remaining = pending.remaining.saturating_sub(dt);
        }
        self.pending_hash.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navbar() -> Navbar {
        Navbar::new(NavbarConfig::default(), 0.0)
    }

    #[test]
    fn toggle_switches_icon_and_scroll_lock() {
        let mut nav = navbar();
        let open = nav.toggle_menu();
        assert_eq!(open.icon, MenuIcon::Times);
        assert!(open.lock_body_scroll);
        let closed = nav.toggle_menu();
        assert_eq!(closed.icon, MenuIcon::Bars);
        assert!(!closed.lock_body_scroll);
    }

    #[test]
    fn style_turns_compact_past_threshold() {
        let mut nav = navbar();
        assert_eq!(nav.on_scroll(100.0, 1200.0).style, NavbarStyle::EXPANDED);
        assert_eq!(nav.on_scroll(101.0, 1200.0).style, NavbarStyle::COMPACT);
        assert_eq!(nav.on_scroll(20.0, 1200.0).style, NavbarStyle::EXPANDED);
    }

    #[test]
    fn scrolling_down_on_mobile_closes_menu() {
        let mut nav = navbar();
        nav.toggle_menu();
        let update = nav.on_scroll(50.0, 400.0);
        assert_eq!(update.menu.map(|m| m.open), Some(false));
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn menu_stays_open_on_desktop_or_when_scrolling_up() {
        let mut nav = Navbar::new(NavbarConfig::default(), 500.0);
        nav.toggle_menu();
        assert_eq!(nav.on_scroll(400.0, 400.0).menu, None);
        assert_eq!(nav.on_scroll(600.0, 1024.0).menu, None);
        assert!(nav.is_menu_open());
    }

    #[test]
    fn anchor_jump_clears_navbar_and_delays_hash() {
        let mut nav = navbar();
        nav.toggle_menu();
        let jump = nav.on_anchor_click("#features", Some(900.0), 80.0);
        assert_eq!(jump.scroll_to, Some(800.0));
        assert_eq!(jump.menu.map(|m| m.open), Some(false));

        assert!(nav.update(Duration::from_millis(999)));
        assert_eq!(nav.take_due_hash(), None);
        nav.update(Duration::from_millis(1));
        assert_eq!(nav.take_due_hash().as_deref(), Some("#features"));
        assert!(!nav.update(Duration::from_millis(16)));
    }

    #[test]
    fn bare_hash_and_missing_target_do_not_scroll() {
        let mut nav = navbar();
        assert_eq!(nav.on_anchor_click("#", Some(10.0), 80.0).scroll_to, None);
        assert_eq!(nav.on_anchor_click("#nowhere", None, 80.0).scroll_to, None);
        nav.update(Duration::from_secs(2));
        assert_eq!(nav.take_due_hash(), None);
    }
}
