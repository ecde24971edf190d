use crate::models::{Activity, AgeSelector};
use std::collections::BTreeSet;

/// Canonical Montessori materials used by the "classic only" view
pub const CLASSIC_ITEMS: [&str; 16] = [
    "Munari Mobile",
    "Octahedron Mobile",
    "Gobbi Mobile",
    "Dancers Mobile",
    "Interlocking wooden rings",
    "Amish puzzle ball",
    "Object permanence box",
    "Wooden coin box",
    "Imbucare peg box",
    "Single shape knob puzzles",
    "Horizontal peg stacker",
    "Wooden nut and bolt set",
    "Padlock and key set",
    "Graduated ring stacker",
    "Pink Tower",
    "Brown Stair",
];

/// Deduplicated, sorted materials for every activity matching `age`
///
/// Deduplication is exact: "Wooden Rattle" and "wooden rattle" are two
/// separate entries. Sorting is plain byte-wise string order, so upper-case
/// names sort before lower-case ones.
pub fn shopping_items(activities: &[Activity], age: &AgeSelector) -> Vec<String> {
    let items: BTreeSet<&str> = activities
        .iter()
        .filter(|a| age.matches(&a.filter_tag))
        .flat_map(|a| a.materials.iter().map(String::as_str))
        .collect();

    items.into_iter().map(str::to_string).collect()
}

/// Reference list used to recognise classic items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassicList {
    // Stored lower-cased; matching is case-insensitive
    names: Vec<String>,
}

impl ClassicList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| n.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// True when the item's name contains any reference name
    pub fn is_classic(&self, item: &str) -> bool {
        let item = item.to_lowercase();
        self.names.iter().any(|classic| item.contains(classic.as_str()))
    }

    /// Keeps only classic items, order untouched
    pub fn retain_classics(&self, items: Vec<String>) -> Vec<String> {
        items.into_iter().filter(|i| self.is_classic(i)).collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ClassicList {
    fn default() -> Self {
        Self::new(CLASSIC_ITEMS)
    }
}

/// Shopping list for `age`, optionally restricted to classic items
pub fn shopping_list(
    activities: &[Activity],
    age: &AgeSelector,
    classic_only: bool,
    classics: &ClassicList,
) -> Vec<String> {
    let items = shopping_items(activities, age);
    if classic_only {
        classics.retain_classics(items)
    } else {
        items
    }
}

/// Short age label for the shopping filter chips: "0-3 Months" -> "0-3m"
pub fn compact_age_label(age: &AgeSelector) -> String {
    match age {
        AgeSelector::All => "All".to_string(),
        AgeSelector::Tag(tag) => tag.replacen(" Months", "m", 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::activity;

    fn sample() -> Vec<Activity> {
        vec![
            activity("1", "Rattle Grasp", "0-3 Months", &["Wooden Rattle", "Movement mat"]),
            activity("2", "Rattle Shake", "0-3 Months", &["Wooden Rattle"]),
            activity("3", "Ball Roll", "3-6 Months", &["Amish puzzle ball", "wooden rattle"]),
            activity("4", "Tower", "12-18 Months", &["Pink Tower (10 cubes)", "Work mat"]),
        ]
    }

    #[test]
    fn test_shared_material_listed_once() {
        let acts = sample();
        let items = shopping_items(&acts, &AgeSelector::parse("0-3 Months"));
        assert_eq!(items, vec!["Movement mat", "Wooden Rattle"]);
        assert_eq!(items.iter().filter(|i| *i == "Wooden Rattle").count(), 1);
    }

    #[test]
    fn test_case_variants_are_distinct() {
        let acts = sample();
        let items = shopping_items(&acts, &AgeSelector::All);
        assert!(items.contains(&"Wooden Rattle".to_string()));
        assert!(items.contains(&"wooden rattle".to_string()));
    }

    #[test]
    fn test_output_sorted_unique_and_from_matching_activities() {
        let acts = sample();
        let items = shopping_items(&acts, &AgeSelector::All);

        let mut sorted = items.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(items, sorted);

        for item in &items {
            assert!(acts.iter().any(|a| a.materials.contains(item)));
        }
    }

    #[test]
    fn test_unknown_age_gives_empty_list() {
        let acts = sample();
        assert!(shopping_items(&acts, &AgeSelector::parse("99 Months")).is_empty());
    }

    #[test]
    fn test_classic_filter_uses_substring_match() {
        let acts = sample();
        let classics = ClassicList::default();
        let items = shopping_list(&acts, &AgeSelector::All, true, &classics);
        assert_eq!(items, vec!["Amish puzzle ball", "Pink Tower (10 cubes)"]);
    }

    #[test]
    fn test_classic_match_ignores_case() {
        let classics = ClassicList::default();
        assert!(classics.is_classic("PINK TOWER"));
        assert!(classics.is_classic("Large munari mobile kit"));
        assert!(!classics.is_classic("Wooden Rattle"));
    }

    #[test]
    fn test_custom_classic_list() {
        let classics = ClassicList::new(["rattle"]);
        assert_eq!(classics.len(), 1);
        let acts = sample();
        let items = shopping_list(&acts, &AgeSelector::All, true, &classics);
        assert_eq!(items, vec!["Wooden Rattle", "wooden rattle"]);
    }

    #[test]
    fn test_compact_age_label() {
        assert_eq!(compact_age_label(&AgeSelector::All), "All");
        assert_eq!(compact_age_label(&AgeSelector::parse("0-3 Months")), "0-3m");
        assert_eq!(compact_age_label(&AgeSelector::parse("24+ Months")), "24+m");
    }
}
