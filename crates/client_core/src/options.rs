use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref OPTION_TAG: Regex =
        Regex::new(r#"(?is)<option[^>]*\bvalue\s*=\s*"([^"]*)"[^>]*>\s*([^<]*?)\s*</option>"#)
            .unwrap();
}

/// One selectable entry: the submitted value and the user-visible label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionEntry {
    pub value: String,
    pub label: String,
}

/// Ordered option set for a selector; insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionList {
    entries: Vec<OptionEntry>,
}

impl OptionList {
    /// A list holding only the synthetic "none selected" entry.
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            entries: vec![OptionEntry {
                value: String::new(),
                label: label.into(),
            }],
        }
    }

    /// Parses a server-rendered `<option>` fragment behind the placeholder.
    /// Entries whose value attribute is empty are skipped.
    pub fn from_fragment(placeholder: impl Into<String>, fragment: &str) -> Self {
        let mut list = Self::placeholder(placeholder);
        for capture in OPTION_TAG.captures_iter(fragment) {
            let value = capture[1].trim().to_string();
            if value.is_empty() {
                continue;
            }
            list.entries.push(OptionEntry {
                value,
                label: capture[2].to_string(),
            });
        }
        list
    }

    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
