// src/page/menu.rs

use crate::view::ClassList;
use tracing::debug;

const ACTIVE: &str = "active";
const MENU_OPEN: &str = "menu-open";

/// Where a document click landed relative to the menu.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickTarget {
    pub inside_menu: bool,
    pub inside_button: bool,
}

/// Mobile navigation: the menu button toggles the menu, and a click on a
/// menu link or anywhere outside closes it again.
#[derive(Debug)]
pub struct MobileMenu {
    pub button: ClassList,
    pub menu: ClassList,
    pub body: ClassList,
}

impl MobileMenu {
    /// Needs both the button and the menu; a page without them gets no menu.
    pub fn attach(has_button: bool, has_menu: bool) -> Option<Self> {
        if !has_button || !has_menu {
            return None;
        }
        Some(Self {
            button: ClassList::new().with("mobile-menu-btn"),
            menu: ClassList::new().with("nav-menu"),
            body: ClassList::new(),
        })
    }

    pub fn is_open(&self) -> bool {
        self.menu.contains(ACTIVE)
    }

    pub fn toggle(&mut self) {
        self.button.toggle(ACTIVE);
        let open = self.menu.toggle(ACTIVE);
        self.body.toggle(MENU_OPEN);
        debug!(open, "mobile menu toggled");
    }

    pub fn link_clicked(&mut self) {
        self.close();
    }

    pub fn document_clicked(&mut self, target: ClickTarget) {
        if !target.inside_menu && !target.inside_button {
            self.close();
        }
    }

    fn close(&mut self) {
        self.button.remove(ACTIVE);
        self.menu.remove(ACTIVE);
        self.body.remove(MENU_OPEN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> MobileMenu {
        MobileMenu::attach(true, true).unwrap()
    }

    #[test]
    fn requires_button_and_menu() {
        assert!(MobileMenu::attach(false, true).is_none());
        assert!(MobileMenu::attach(true, false).is_none());
    }

    #[test]
    fn toggle_opens_and_closes_all_three() {
        let mut menu = menu();
        menu.toggle();
        assert!(menu.is_open());
        assert!(menu.button.contains(ACTIVE));
        assert!(menu.body.contains(MENU_OPEN));

        menu.toggle();
        assert!(!menu.is_open());
        assert!(!menu.body.contains(MENU_OPEN));
    }

    #[test]
    fn link_click_closes() {
        let mut menu = menu();
        menu.toggle();
        menu.link_clicked();
        assert!(!menu.is_open());
        assert!(!menu.button.contains(ACTIVE));
    }

    #[test]
    fn outside_click_closes_but_inside_click_does_not() {
        let mut menu = menu();
        menu.toggle();

        menu.document_clicked(ClickTarget {
            inside_menu: true,
            inside_button: false,
        });
        assert!(menu.is_open());

        // the toggle click itself bubbles up from the button
        menu.document_clicked(ClickTarget {
            inside_menu: false,
            inside_button: true,
        });
        assert!(menu.is_open());

        menu.document_clicked(ClickTarget::default());
        assert!(!menu.is_open());
    }
}
