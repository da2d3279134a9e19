// src/view/class_list.rs

use std::collections::BTreeSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: BTreeSet<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, class: &str) -> Self {
        self.add(class);
        self
    }

    pub fn add(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Returns whether the class is present afterwards.
    pub fn toggle(&mut self, class: &str) -> bool {
        if self.classes.remove(class) {
            false
        } else {
            self.classes.insert(class.to_string());
            true
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}
