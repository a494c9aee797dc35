//! Text run descriptions handed to backends.
//!
//! Layout happens upstream; by the time a backend sees a span the text is
//! already positioned and measured. The span carries the resolved font
//! request and the horizontal anchoring of the run around its position.

use serde::{Deserialize, Serialize};

/// Horizontal anchoring of a text run around its layout position.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Justification {
    Left,
    Right,
    #[default]
    Center,
}

/// A font request resolved against the host's font tables.
///
/// When present, the alias replaces the raw font name with a concrete
/// family plus optional CSS-style weight, stretch, and style axes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FontAlias {
    pub family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stretch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl FontAlias {
    pub fn family(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            ..Default::default()
        }
    }
}

/// One run of text in a single font, ready to draw.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextSpan {
    pub text: String,
    pub font_name: String,
    pub font_size: f64,
    #[serde(default)]
    pub justification: Justification,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<FontAlias>,
}

impl TextSpan {
    pub fn new(text: impl Into<String>, font_name: impl Into<String>, font_size: f64) -> Self {
        Self {
            text: text.into(),
            font_name: font_name.into(),
            font_size,
            justification: Justification::default(),
            alias: None,
        }
    }

    pub fn justified(mut self, justification: Justification) -> Self {
        self.justification = justification;
        self
    }

    pub fn with_alias(mut self, alias: FontAlias) -> Self {
        self.alias = Some(alias);
        self
    }
}
