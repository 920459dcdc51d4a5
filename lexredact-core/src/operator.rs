use serde::{Deserialize, Serialize};

/// How a surviving span is rendered.
///
/// In config files the variant is selected by `type`:
///
/// ```toml
/// PERSON = { type = "replace", new_value = "<NOME>" }
/// PHONE = { type = "mask", masking_char = "*", chars_to_mask = 4, from_end = true }
/// ORGANIZATION = { type = "keep" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operator {
    /// Substitute the whole span with a fixed token.
    Replace { new_value: String },
    /// Overwrite `chars_to_mask` characters at one end of the span.
    Mask {
        masking_char: char,
        chars_to_mask: usize,
        from_end: bool,
    },
    /// Leave the original text untouched.
    Keep,
}

impl Operator {
    pub fn replace(new_value: impl Into<String>) -> Self {
        Self::Replace {
            new_value: new_value.into(),
        }
    }

    pub fn mask(masking_char: char, chars_to_mask: usize, from_end: bool) -> Self {
        Self::Mask {
            masking_char,
            chars_to_mask,
            from_end,
        }
    }

    /// Short name used in reports and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Replace { .. } => "replace",
            Self::Mask { .. } => "mask",
            Self::Keep => "keep",
        }
    }

    /// True when rendering changes the original text.
    pub fn alters_text(&self) -> bool {
        !matches!(self, Self::Keep)
    }
}
