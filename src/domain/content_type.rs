//! Content type tags classifying template rows.

use std::fmt;

/// Classification of a template row, parsed from the "Content Type" column.
///
/// The tag decides whether the row is eligible for AI generation and which
/// char-limit defaults apply. Unrecognized labels are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentType {
    FunctionalDescription,
    Headline,
    MarketingText,
    FeatureName,
    FeatureDescription,
    FeatureGlossary,
    PackContents,
    Disclaimer,
    Other(String),
}

impl ContentType {
    /// Parse a trimmed content-type cell label.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Functional Description" => ContentType::FunctionalDescription,
            "Headline" => ContentType::Headline,
            "Marketing Text" => ContentType::MarketingText,
            "Feature Name" => ContentType::FeatureName,
            "Feature Description" => ContentType::FeatureDescription,
            "Feature Glossary" => ContentType::FeatureGlossary,
            "Pack Contents" => ContentType::PackContents,
            "Disclaimer" => ContentType::Disclaimer,
            other => ContentType::Other(other.to_string()),
        }
    }

    /// Canonical label as it appears in the template.
    pub fn as_str(&self) -> &str {
        match self {
            ContentType::FunctionalDescription => "Functional Description",
            ContentType::Headline => "Headline",
            ContentType::MarketingText => "Marketing Text",
            ContentType::FeatureName => "Feature Name",
            ContentType::FeatureDescription => "Feature Description",
            ContentType::FeatureGlossary => "Feature Glossary",
            ContentType::PackContents => "Pack Contents",
            ContentType::Disclaimer => "Disclaimer",
            ContentType::Other(label) => label,
        }
    }

    /// Whether rows of this type are filled by the completion call.
    ///
    /// Functional descriptions are user-entered and excluded; unknown types
    /// are never sent for generation.
    pub fn is_generated(&self) -> bool {
        matches!(
            self,
            ContentType::Headline
                | ContentType::MarketingText
                | ContentType::FeatureName
                | ContentType::FeatureDescription
                | ContentType::FeatureGlossary
                | ContentType::PackContents
                | ContentType::Disclaimer
        )
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
