// src/page/mod.rs

pub mod analytics;
pub mod menu;
pub mod reveal;
pub mod scroll;
pub mod timing;

pub use analytics::{AnalyticsEvent, AnalyticsSink, ContactLinkTracker};
pub use menu::{ClickTarget, MobileMenu};
pub use reveal::{IntersectionEntry, RevealObserver, RevealOptions};
pub use scroll::{HeaderScroll, ScrollAction, SmoothScroll};
pub use timing::{Debounce, Throttle};

use crate::context::FormContext;
use crate::controller::{FormHandle, FormSubmissionController};
use crate::error::Result;
use crate::view::{ClassList, FormView};

/// What the host page provides.
#[derive(Debug, Default)]
pub struct PageLayout {
    pub has_menu_button: bool,
    pub has_nav_menu: bool,
    pub has_header: bool,
    pub supports_intersection: bool,
    /// Element ids and classes of candidate reveal targets.
    pub cards: Vec<(String, ClassList)>,
}

/// Every behavior attached to one page. Dropping it detaches them all.
pub struct Page {
    pub menu: Option<MobileMenu>,
    pub smooth_scroll: SmoothScroll,
    pub header: Option<HeaderScroll>,
    pub reveal: Option<RevealObserver>,
    pub links: ContactLinkTracker,
    pub form: Option<FormHandle>,
}

impl Page {
    /// Attaches each behavior whose elements exist. A page without a contact
    /// form is fine; a contact form missing one of its elements is an error.
    pub fn init<V: FormView + 'static>(
        layout: &PageLayout,
        form_view: Option<V>,
        context: FormContext,
    ) -> Result<Self> {
        let form = match form_view {
            Some(view) => Some(FormSubmissionController::attach(view, context)?),
            None => None,
        };

        let cards = layout
            .cards
            .iter()
            .map(|(id, classes)| (id.as_str(), classes.clone()));

        Ok(Self {
            menu: MobileMenu::attach(layout.has_menu_button, layout.has_nav_menu),
            smooth_scroll: SmoothScroll,
            header: HeaderScroll::attach(layout.has_header),
            reveal: RevealObserver::attach(
                layout.supports_intersection,
                RevealOptions::default(),
                cards,
            ),
            links: ContactLinkTracker::new(),
            form,
        })
    }

    pub fn with_analytics<S: AnalyticsSink + Send + Sync + 'static>(mut self, sink: S) -> Self {
        self.links = self.links.with_sink(sink);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;
    use crate::view::MemoryView;

    fn full_layout() -> PageLayout {
        PageLayout {
            has_menu_button: true,
            has_nav_menu: true,
            has_header: true,
            supports_intersection: true,
            cards: vec![("intro".into(), ClassList::new().with("feature"))],
        }
    }

    #[test]
    fn attaches_what_the_page_has() {
        let page = Page::init(&full_layout(), Some(MemoryView::contact_form()), FormContext::default())
            .unwrap();
        assert!(page.menu.is_some());
        assert!(page.header.is_some());
        assert!(page.reveal.as_ref().is_some_and(|r| r.is_observing("intro")));
        assert!(page.form.is_some());
    }

    #[test]
    fn bare_page_attaches_nothing() {
        let page = Page::init(&PageLayout::default(), None::<MemoryView>, FormContext::default())
            .unwrap();
        assert!(page.menu.is_none());
        assert!(page.header.is_none());
        assert!(page.reveal.is_none());
        assert!(page.form.is_none());
    }

    #[test]
    fn broken_form_fails_the_page() {
        let view = MemoryView::contact_form().without("submit");
        let result = Page::init(&full_layout(), Some(view), FormContext::default());
        assert!(matches!(result, Err(FormError::MissingElement(id)) if id == "submit"));
    }
}
