// src/page/reveal.rs

use crate::view::ClassList;
use std::collections::BTreeMap;
use tracing::debug;

pub const FADE_IN: &str = "fade-in";

/// Classes of the cards that fade in as they scroll into view.
pub const REVEAL_CLASSES: [&str; 6] = [
    "service-card",
    "feature",
    "popular-card",
    "value-card",
    "process-step",
    "product-card",
];

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RevealTarget {
    pub classes: ClassList,
    pub opacity: f32,
    pub translate_y: f32,
}

#[derive(Clone, Debug)]
pub struct IntersectionEntry {
    pub target: String,
    pub is_intersecting: bool,
}

/// Fades cards in the first time they intersect the viewport.
#[derive(Debug)]
pub struct RevealObserver {
    options: RevealOptions,
    targets: BTreeMap<String, RevealTarget>,
}

impl RevealObserver {
    /// Hosts without intersection support get no observer and the cards stay
    /// visible as authored.
    pub fn attach<'a>(
        supported: bool,
        options: RevealOptions,
        elements: impl IntoIterator<Item = (&'a str, ClassList)>,
    ) -> Option<Self> {
        if !supported {
            return None;
        }

        let targets = elements
            .into_iter()
            .filter(|(_, classes)| REVEAL_CLASSES.iter().any(|class| classes.contains(class)))
            .map(|(id, classes)| {
                (
                    id.to_string(),
                    RevealTarget {
                        classes,
                        opacity: 0.0,
                        translate_y: 20.0,
                    },
                )
            })
            .collect::<BTreeMap<_, _>>();

        debug!(observed = targets.len(), "reveal observer attached");
        Some(Self { options, targets })
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    pub fn is_observing(&self, id: &str) -> bool {
        self.targets.contains_key(id)
    }

    /// Reveals intersecting targets and stops observing them.
    pub fn on_intersection(&mut self, entries: &[IntersectionEntry]) -> Vec<(String, RevealTarget)> {
        let mut revealed = Vec::new();
        for entry in entries.iter().filter(|entry| entry.is_intersecting) {
            if let Some(mut target) = self.targets.remove(&entry.target) {
                target.classes.add(FADE_IN);
                revealed.push((entry.target.clone(), target));
            }
        }
        revealed
    }
}
