// src/memory/mod.rs

/// Records what happened to submissions: payloads handed to a transport,
/// cancelled sends, and so on.
pub trait Journal {
    fn record(&mut self, label: &str, content: &str);
    fn entries(&self) -> &[JournalEntry];
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JournalEntry {
    pub label: String,
    pub content: String,
}

#[derive(Default, Debug)]
pub struct InMemoryJournal {
    entries: Vec<JournalEntry>,
}

impl InMemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Journal for InMemoryJournal {
    fn record(&mut self, label: &str, content: &str) {
        self.entries.push(JournalEntry {
            label: label.to_string(),
            content: content.to_string(),
        });
    }

    fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }
}
