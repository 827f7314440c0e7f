use serde::Deserialize;

/// Metadata written to the trailer `/Info` dictionary.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    /// The application that produced the source content (e.g. the converter name).
    pub creator: Option<String>,
}
