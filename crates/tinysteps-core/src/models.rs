use serde::{Deserialize, Serialize};

/// The age filters offered everywhere an age can be picked, in display order
pub const AGE_FILTERS: [&str; 7] = [
    "All",
    "0-3 Months",
    "3-6 Months",
    "6-12 Months",
    "12-18 Months",
    "18-24 Months",
    "24+ Months",
];

/// Activity - one developmental exercise with its guidance and materials
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub category: Category,
    /// Age-range label, matched exactly when filtering
    pub filter_tag: String,
    /// One-sentence reassurance line for the parent
    pub reassurance: String,
    /// What the child is doing
    pub objective: String,
    /// What skill is being supported
    pub outcome: String,
    /// Short paragraph on developmental relevance
    pub why_matters: String,
    pub steps: Vec<ActivityStep>,
    pub when_to_pause: String,
    #[serde(default)]
    pub materials: Vec<String>,
    pub safety_notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<String>,
}

impl Activity {
    /// First material in upper case, or "NO ITEMS" - the card summary line
    pub fn material_summary(&self) -> String {
        self.materials
            .first()
            .map(|m| m.to_uppercase())
            .unwrap_or_else(|| "NO ITEMS".to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityStep {
    #[serde(default)]
    pub image_url: String,
    pub caption: String,
}

/// Developmental area an activity belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Physical,
    Cognitive,
    Social,
    Sensory,
    Language,
    #[serde(rename = "Practical Life")]
    PracticalLife,
    #[serde(other)]
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Physical => "Physical",
            Category::Cognitive => "Cognitive",
            Category::Social => "Social",
            Category::Sensory => "Sensory",
            Category::Language => "Language",
            Category::PracticalLife => "Practical Life",
            Category::Other => "Other",
        }
    }

    /// Display token standing in for the category illustration
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Physical => "🤸",
            Category::Cognitive => "🧠",
            Category::Social => "❤",
            Category::Sensory => "✨",
            Category::Language => "💬",
            Category::PracticalLife => "🔧",
            Category::Other => "◆",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Age selector: everything, or one exact `filter_tag`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AgeSelector {
    #[default]
    All,
    Tag(String),
}

impl AgeSelector {
    pub fn parse(value: &str) -> Self {
        if value == "All" {
            AgeSelector::All
        } else {
            AgeSelector::Tag(value.to_string())
        }
    }

    /// Exact, case-sensitive comparison against an age label
    pub fn matches(&self, tag: &str) -> bool {
        match self {
            AgeSelector::All => true,
            AgeSelector::Tag(t) => t == tag,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AgeSelector::All => "All",
            AgeSelector::Tag(t) => t,
        }
    }

    /// Label used on the age dropdown
    pub fn label(&self) -> &str {
        match self {
            AgeSelector::All => "All Ages",
            AgeSelector::Tag(t) => t,
        }
    }

    /// The canonical selectors, `All` first
    pub fn all_filters() -> Vec<AgeSelector> {
        AGE_FILTERS.iter().map(|a| AgeSelector::parse(a)).collect()
    }
}

impl std::fmt::Display for AgeSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AgeSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AgeSelector::parse(s))
    }
}

/// Badge colour bucket for an age label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    Newborn,
    Infant,
    Sitter,
    Crawler,
    Walker,
    Toddler,
    Unknown,
}

impl AgeBand {
    pub fn from_tag(tag: &str) -> Self {
        if tag.contains("0-3") {
            AgeBand::Newborn
        } else if tag.contains("3-6") {
            AgeBand::Infant
        } else if tag.contains("6-12") {
            AgeBand::Sitter
        } else if tag.contains("12-18") {
            AgeBand::Crawler
        } else if tag.contains("18-24") {
            AgeBand::Walker
        } else if tag.contains("24+") {
            AgeBand::Toddler
        } else {
            AgeBand::Unknown
        }
    }
}

/// A curated, ordered group of activities
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bundle {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub age_range: String,
    pub items: Vec<BundleItem>,
}

/// Reference from a bundle to an activity, with denormalised display fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BundleItem {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub line_1: String,
    #[serde(default)]
    pub line_2: String,
    #[serde(default)]
    pub link: String,
}

/// Reading recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub description: String,
    pub category: String,
    pub cover_image: String,
    /// Purchase link
    #[serde(alias = "amazon_link")]
    pub purchase_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<String>,
    #[serde(default, rename = "pros")]
    pub highlights: Vec<String>,
}

impl Book {
    /// Only http(s) covers are treated as real images
    pub fn has_cover(&self) -> bool {
        self.cover_image.starts_with("http")
    }

    /// Filled stars out of five, rounding the rating
    pub fn filled_stars(&self) -> Option<u8> {
        self.rating.map(|r| r.round().clamp(0.0, 5.0) as u8)
    }

    /// At most two highlights are shown on a card
    pub fn top_highlights(&self) -> &[String] {
        let end = self.highlights.len().min(2);
        &self.highlights[..end]
    }
}
