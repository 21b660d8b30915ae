//! Data-only view of the widget
//!
//! The widget never draws. Hosts ask for a [`View`] and map it onto
//! whatever surface they have; the shape below is the whole rendering
//! contract.

use crate::input::EmailInput;
use serde::{Deserialize, Serialize};

/// Everything a surface needs to draw one widget instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct View {
    /// Container label
    pub label: String,

    /// Committed tags, each with its removal index
    pub tags: Vec<TagView>,

    /// Current free-text entry
    pub text: String,

    /// Field placeholder, shown only while no tags exist
    pub placeholder: Option<String>,

    /// Suggestion dropdown, present only when there are candidates
    pub dropdown: Option<Dropdown>,
}

/// One rendered tag with an inline close control
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagView {
    pub value: String,
    pub valid: bool,

    /// Index to pass to [`EmailInput::remove`] when the close control fires
    pub remove_index: usize,
}

/// Clickable autocomplete candidates, in pool order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dropdown {
    pub items: Vec<String>,
}

const LABEL: &str = "Recipients";
const PLACEHOLDER: &str = "Enter recipients...";

impl EmailInput {
    /// Snapshot the widget state for a rendering surface
    #[must_use]
    pub fn view(&self) -> View {
        let tags: Vec<TagView> = self
            .tags()
            .iter()
            .enumerate()
            .map(|(remove_index, tag)| TagView {
                value: tag.value.clone(),
                valid: tag.valid,
                remove_index,
            })
            .collect();

        let placeholder = if tags.is_empty() {
            Some(PLACEHOLDER.to_string())
        } else {
            None
        };

        let dropdown = if self.suggestions().is_empty() {
            None
        } else {
            Some(Dropdown {
                items: self.suggestions().to_vec(),
            })
        };

        View {
            label: LABEL.to_string(),
            tags,
            text: self.text().to_string(),
            placeholder,
            dropdown,
        }
    }
}
