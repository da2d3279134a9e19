// src/page/scroll.rs

use crate::view::ClassList;

pub const SCROLLED: &str = "scrolled";
/// Offset past which the header gets its shadow.
pub const SHADOW_OFFSET: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollAction {
    /// Let the browser follow the link as usual.
    Ignore,
    /// Prevent the default jump and scroll smoothly to `top`.
    ScrollTo { top: f64 },
}

/// In-page anchor navigation that keeps the target clear of the fixed header.
#[derive(Clone, Copy, Debug, Default)]
pub struct SmoothScroll;

impl SmoothScroll {
    /// `locate` returns the target's top relative to the viewport.
    pub fn on_anchor_click(
        &self,
        href: &str,
        page_offset: f64,
        header_height: f64,
        locate: impl Fn(&str) -> Option<f64>,
    ) -> ScrollAction {
        if href == "#" || !href.starts_with('#') {
            return ScrollAction::Ignore;
        }

        match locate(href) {
            Some(target_top) => ScrollAction::ScrollTo {
                top: target_top + page_offset - header_height,
            },
            None => ScrollAction::Ignore,
        }
    }
}

#[derive(Debug)]
pub struct HeaderScroll {
    pub header: ClassList,
    last_scroll: f64,
}

impl HeaderScroll {
    pub fn attach(has_header: bool) -> Option<Self> {
        has_header.then(|| Self {
            header: ClassList::new().with("header"),
            last_scroll: 0.0,
        })
    }

    /// Returns whether the header shows its shadow.
    pub fn on_scroll(&mut self, page_offset: f64) -> bool {
        if page_offset > SHADOW_OFFSET {
            self.header.add(SCROLLED);
        } else {
            self.header.remove(SCROLLED);
        }
        self.last_scroll = page_offset;
        self.header.contains(SCROLLED)
    }

    pub fn last_scroll(&self) -> f64 {
        self.last_scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locate(href: &str) -> Option<f64> {
        (href == "#tjenester").then_some(400.0)
    }

    #[test]
    fn bare_hash_and_unknown_targets_are_ignored() {
        let scroll = SmoothScroll;
        assert_eq!(scroll.on_anchor_click("#", 0.0, 80.0, locate), ScrollAction::Ignore);
        assert_eq!(scroll.on_anchor_click("#kontakt", 0.0, 80.0, locate), ScrollAction::Ignore);
        assert_eq!(scroll.on_anchor_click("/om-oss", 0.0, 80.0, locate), ScrollAction::Ignore);
    }

    #[test]
    fn scrolls_below_the_header() {
        let scroll = SmoothScroll;
        assert_eq!(
            scroll.on_anchor_click("#tjenester", 120.0, 80.0, locate),
            ScrollAction::ScrollTo { top: 440.0 }
        );
    }

    #[test]
    fn header_shadow_follows_offset() {
        let mut header = HeaderScroll::attach(true).unwrap();
        assert!(!header.on_scroll(50.0));
        assert!(header.on_scroll(51.0));
        assert!(header.header.contains(SCROLLED));
        assert!(!header.on_scroll(10.0));
        assert_eq!(header.last_scroll(), 10.0);
        assert!(HeaderScroll::attach(false).is_none());
    }
}
