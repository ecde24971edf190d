use crate::models::{Activity, AgeSelector};

/// Activities matching both the age selector and the free-text query
///
/// Text matching is a case-insensitive substring test against the title
/// and the objective. The query is not trimmed, so a lone space only
/// matches text containing a space. Dataset order is preserved and an
/// empty result is a normal outcome.
pub fn filtered_activities<'a>(
    activities: &'a [Activity],
    query: &str,
    age: &AgeSelector,
) -> Vec<&'a Activity> {
    let needle = query.to_lowercase();

    activities
        .iter()
        .filter(|a| age.matches(&a.filter_tag) && matches_query(a, &needle))
        .collect()
}

/// `needle` must already be lower-cased
fn matches_query(activity: &Activity, needle: &str) -> bool {
    needle.is_empty()
        || activity.title.to_lowercase().contains(needle)
        || activity.objective.to_lowercase().contains(needle)
}

/// The activity after `current_id` in dataset order, if there is one
pub fn next_activity<'a>(activities: &'a [Activity], current_id: &str) -> Option<&'a Activity> {
    let idx = activities.iter().position(|a| a.id == current_id)?;
    activities.get(idx + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::activity;

    fn sample() -> Vec<Activity> {
        vec![
            activity("1", "Watching the Munari Mobile", "0-3 Months", &["Munari Mobile"]),
            activity("2", "Building the Pink Tower", "12-18 Months", &["Pink Tower"]),
            activity("3", "Grasping the Wooden Rattle", "0-3 Months", &["Wooden Rattle"]),
            activity("4", "Object Permanence Box", "6-12 Months", &[]),
        ]
    }

    fn ids(result: &[&Activity]) -> Vec<String> {
        result.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn test_empty_query_all_ages_returns_everything() {
        let acts = sample();
        let result = filtered_activities(&acts, "", &AgeSelector::All);
        assert_eq!(ids(&result), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_age_filter_returns_exact_subset() {
        let acts = sample();
        let result = filtered_activities(&acts, "", &AgeSelector::parse("0-3 Months"));
        assert_eq!(ids(&result), vec!["1", "3"]);
        assert!(result.iter().all(|a| a.filter_tag == "0-3 Months"));
    }

    #[test]
    fn test_query_matches_title_case_insensitively() {
        let acts = sample();
        let result = filtered_activities(&acts, "TOWER", &AgeSelector::All);
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn test_query_matches_objective() {
        let mut acts = sample();
        acts[3].objective = "Baby drops a ball and watches it reappear".to_string();
        let result = filtered_activities(&acts, "reappear", &AgeSelector::All);
        assert_eq!(ids(&result), vec!["4"]);
    }

    #[test]
    fn test_query_and_age_must_both_hold() {
        let acts = sample();
        let result = filtered_activities(&acts, "tower", &AgeSelector::parse("0-3 Months"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let acts = sample();
        let result = filtered_activities(&acts, " tower ", &AgeSelector::All);
        assert!(result.is_empty());
    }

    #[test]
    fn test_age_match_is_case_sensitive() {
        let acts = sample();
        let result = filtered_activities(&acts, "", &AgeSelector::parse("0-3 months"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let acts = sample();
        let age = AgeSelector::parse("0-3 Months");
        let first = filtered_activities(&acts, "the", &age);
        let second = filtered_activities(&acts, "the", &age);
        assert_eq!(first, second);
    }

    #[test]
    fn test_excluded_items_fail_a_predicate() {
        let acts = sample();
        let age = AgeSelector::parse("0-3 Months");
        let result = filtered_activities(&acts, "rattle", &age);
        for a in &acts {
            let kept = result.iter().any(|r| r.id == a.id);
            let passes = age.matches(&a.filter_tag)
                && (a.title.to_lowercase().contains("rattle")
                    || a.objective.to_lowercase().contains("rattle"));
            assert_eq!(kept, passes, "activity {}", a.id);
        }
    }

    #[test]
    fn test_next_activity() {
        let acts = sample();
        assert_eq!(next_activity(&acts, "1").map(|a| a.id.as_str()), Some("2"));
        assert!(next_activity(&acts, "4").is_none());
        assert!(next_activity(&acts, "nope").is_none());
    }
}
