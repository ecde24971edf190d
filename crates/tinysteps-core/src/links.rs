use crate::models::Activity;

/// Default marketplace search endpoint
pub const DEFAULT_MARKETPLACE_URL: &str = "https://www.amazon.com/s";
/// Appended to every marketplace search
pub const DEFAULT_SEARCH_SUFFIX: &str = "montessori";
/// Base of the public activity links handed to the share sheet
pub const DEFAULT_SHARE_BASE_URL: &str = "https://tinysteps.app/activities";

/// Builds outbound links: marketplace searches and share payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBuilder {
    marketplace_url: String,
    search_suffix: String,
    share_base_url: String,
}

impl LinkBuilder {
    pub fn new(
        marketplace_url: impl Into<String>,
        search_suffix: impl Into<String>,
        share_base_url: impl Into<String>,
    ) -> Self {
        Self {
            marketplace_url: marketplace_url.into(),
            search_suffix: search_suffix.into(),
            share_base_url: share_base_url.into(),
        }
    }

    /// `<endpoint>?k=<encoded "item suffix">`
    pub fn marketplace_search_url(&self, item: &str) -> String {
        let query = if self.search_suffix.is_empty() {
            item.to_string()
        } else {
            format!("{} {}", item, self.search_suffix)
        };
        format!("{}?k={}", self.marketplace_url, urlencoding::encode(&query))
    }

    /// Search link behind the "Buy Item" button of an activity
    pub fn buy_url(&self, activity: &Activity) -> String {
        self.marketplace_search_url(buy_query(activity))
    }

    pub fn activity_url(&self, activity: &Activity) -> String {
        format!(
            "{}/{}",
            self.share_base_url.trim_end_matches('/'),
            urlencoding::encode(&activity.id)
        )
    }

    pub fn share_payload(&self, activity: &Activity) -> SharePayload {
        SharePayload {
            title: format!("TinySteps: {}", activity.title),
            text: format!(
                "Check out this developmental activity for your little one: {}",
                activity.title
            ),
            url: self.activity_url(activity),
        }
    }
}

impl Default for LinkBuilder {
    fn default() -> Self {
        Self::new(
            DEFAULT_MARKETPLACE_URL,
            DEFAULT_SEARCH_SUFFIX,
            DEFAULT_SHARE_BASE_URL,
        )
    }
}

/// What gets searched when buying for an activity: its first material,
/// or its title when it lists none
pub fn buy_query(activity: &Activity) -> &str {
    activity
        .materials
        .first()
        .map(String::as_str)
        .unwrap_or(&activity.title)
}

/// Title, text and URL handed to a share sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::activity;

    #[test]
    fn test_marketplace_url_encodes_item_and_suffix() {
        let links = LinkBuilder::default();
        assert_eq!(
            links.marketplace_search_url("Pink Tower"),
            "https://www.amazon.com/s?k=Pink%20Tower%20montessori"
        );
        assert_eq!(
            links.marketplace_search_url("Nuts & Bolts"),
            "https://www.amazon.com/s?k=Nuts%20%26%20Bolts%20montessori"
        );
    }

    #[test]
    fn test_empty_suffix_searches_item_only() {
        let links = LinkBuilder::new("https://shop.example/search", "", "https://x");
        assert_eq!(
            links.marketplace_search_url("Rattle"),
            "https://shop.example/search?k=Rattle"
        );
    }

    #[test]
    fn test_buy_query_prefers_first_material() {
        let with = activity("1", "Rattle Play", "0-3 Months", &["Wooden Rattle", "Mat"]);
        let without = activity("2", "Clapping Songs", "6-12 Months", &[]);
        assert_eq!(buy_query(&with), "Wooden Rattle");
        assert_eq!(buy_query(&without), "Clapping Songs");
        assert!(LinkBuilder::default()
            .buy_url(&without)
            .ends_with("Clapping%20Songs%20montessori"));
    }

    #[test]
    fn test_share_payload() {
        let links = LinkBuilder::default();
        let a = activity("11", "Building the Pink Tower", "12-18 Months", &[]);
        let payload = links.share_payload(&a);
        assert_eq!(payload.title, "TinySteps: Building the Pink Tower");
        assert!(payload.text.ends_with("little one: Building the Pink Tower"));
        assert_eq!(payload.url, "https://tinysteps.app/activities/11");
    }
}
