use alloc::string::String;

use crate::FitMode;

/// Configuration for [`crate::ListAdapter`].
///
/// `Default` gives the stock header/footer texts and fits images centered.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AdapterOptions {
    pub header_label: String,
    /// Message shown when the header is clicked.
    pub header_message: String,
    pub footer_label: String,
    /// Message shown when the footer is clicked.
    pub footer_message: String,
    /// Scaling applied to item images.
    pub fit: FitMode,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            header_label: String::from("Header View"),
            header_message: String::from("You clicked at Header View!"),
            footer_label: String::from("Footer View"),
            footer_message: String::from("You clicked at Footer View"),
            fit: FitMode::FitCenter,
        }
    }
}

impl AdapterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, label: impl Into<String>, message: impl Into<String>) -> Self {
        self.header_label = label.into();
        self.header_message = message.into();
        self
    }

    pub fn with_footer(mut self, label: impl Into<String>, message: impl Into<String>) -> Self {
        self.footer_label = label.into();
        self.footer_message = message.into();
        self
    }

    pub fn with_fit(mut self, fit: FitMode) -> Self {
        self.fit = fit;
        self
    }
}
