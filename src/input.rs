//! Widget state and the tag lifecycle

use crate::error::Result;
use crate::source::OptionSource;
use crate::types::Tag;
use tracing::{debug, warn};

/// Key events the widget understands while its text field is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character
    Char(char),
    Enter,
    Tab,
    Backspace,
    /// Anything else the host's field handles itself
    Other,
}

/// Whether the widget consumed a key event
///
/// `Handled` is the host's cue to suppress the default field behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyOutcome {
    Handled,
    #[default]
    Ignored,
}

/// Tag-style email recipient input with autocomplete
///
/// All state is local to one instance and updated synchronously in
/// response to discrete events. The suggestion list is derived state,
/// recomputed after every mutation of the text, the option pool, or the
/// tag list.
#[derive(Debug, Clone, Default)]
pub struct EmailInput {
    text: String,
    tags: Vec<Tag>,
    options: Vec<String>,
    suggestions: Vec<String>,
}

impl EmailInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current free-text entry
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Committed tags in insertion order
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// The full option pool, in source order
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Current autocomplete candidates
    ///
    /// Always a subset of the option pool: every entry starts with the
    /// current text (case-insensitive) and is not already tagged.
    #[must_use]
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Replace the free-text entry wholesale
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.recompute_suggestions();
    }

    /// One-shot fetch of the option pool at mount
    ///
    /// Replaces the pool wholesale on success. On failure the pool and
    /// everything else stay as they were.
    pub async fn load_options(&mut self, source: &impl OptionSource) -> Result<()> {
        match source.fetch_options().await {
            Ok(options) => {
                debug!("Loaded {} autocomplete options", options.len());
                self.options = options;
                self.recompute_suggestions();
                Ok(())
            }
            Err(e) => {
                warn!("Option pool load failed: {e}");
                Err(e)
            }
        }
    }

    /// Attempt to commit `raw` as a tag
    ///
    /// Trims whitespace first. Empty text and values identical to an
    /// existing tag are silently ignored. Anything else is appended with
    /// its syntax classification, and the text and suggestions clear.
    pub fn commit(&mut self, raw: &str) {
        let value = raw.trim();
        if value.is_empty() || self.tags.iter().any(|tag| tag.value == value) {
            return;
        }

        let tag = Tag::classify(value);
        debug!("Committed tag {} (valid={})", tag.value, tag.valid);
        self.tags.push(tag);
        self.text.clear();
        self.suggestions.clear();
    }

    /// Remove exactly the tag at `index`, keeping the rest in order
    ///
    /// Out-of-range indices are a no-op.
    pub fn remove(&mut self, index: usize) {
        if index < self.tags.len() {
            let tag = self.tags.remove(index);
            debug!("Removed tag {}", tag.value);
            self.recompute_suggestions();
        }
    }

    /// Commit path for a clicked suggestion
    pub fn choose_suggestion(&mut self, value: &str) {
        self.commit(value);
    }

    /// React to a key event while the text field is focused
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Enter | Key::Tab => {
                let text = self.text.clone();
                self.commit(&text);
                KeyOutcome::Handled
            }
            Key::Char(c) => {
                self.text.push(c);
                self.recompute_suggestions();
                KeyOutcome::Handled
            }
            Key::Backspace => {
                self.text.pop();
                self.recompute_suggestions();
                KeyOutcome::Handled
            }
            Key::Other => KeyOutcome::Ignored,
        }
    }

    fn recompute_suggestions(&mut self) {
        if self.text.trim().is_empty() {
            self.suggestions.clear();
            return;
        }

        let needle = self.text.to_lowercase();
        self.suggestions = self
            .options
            .iter()
            .filter(|option| {
                option.to_lowercase().starts_with(&needle)
                    && !self.tags.iter().any(|tag| tag.value == **option)
            })
            .cloned()
            .collect();
    }
}
