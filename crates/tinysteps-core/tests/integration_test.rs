use tinysteps_core::models::{Activity, ActivityStep, Bundle, BundleItem, Category};
use tinysteps_core::{
    filtered_activities, resolve_bundle_items, shopping_items, AgeSelector, Catalog, ViewController,
    ViewMode,
};

fn create_test_activity(id: &str, title: &str, filter_tag: &str, materials: &[&str]) -> Activity {
    Activity {
        id: id.to_string(),
        title: title.to_string(),
        category: Category::Physical,
        filter_tag: filter_tag.to_string(),
        reassurance: "Small steps count.".to_string(),
        objective: "Move with purpose".to_string(),
        outcome: "Coordination".to_string(),
        why_matters: "Movement builds the brain.".to_string(),
        steps: vec![ActivityStep {
            image_url: String::new(),
            caption: "Prepare the space.".to_string(),
        }],
        when_to_pause: "When interest fades.".to_string(),
        materials: materials.iter().map(|m| m.to_string()).collect(),
        safety_notes: "Stay close.".to_string(),
        image_prompt: None,
        thumbnail: None,
        hero: None,
    }
}

fn create_test_bundle(items: &[u32]) -> Bundle {
    Bundle {
        id: "starter".to_string(),
        name: "Starter Set".to_string(),
        tagline: "First steps".to_string(),
        age_range: "0-3 Months".to_string(),
        items: items
            .iter()
            .map(|&id| BundleItem {
                id,
                title: format!("Item {}", id),
                line_1: String::new(),
                line_2: String::new(),
                link: String::new(),
            })
            .collect(),
    }
}

#[test]
fn test_age_filter_scenario() {
    let activities = vec![
        create_test_activity("1", "Rattle Grasp", "0-3 Months", &[]),
        create_test_activity("2", "Coin Box", "6-12 Months", &[]),
        create_test_activity("3", "Mobile Watch", "0-3 Months", &[]),
    ];

    let result = filtered_activities(&activities, "", &AgeSelector::parse("0-3 Months"));
    let ids: Vec<&str> = result.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn test_shared_material_scenario() {
    let activities = vec![
        create_test_activity("1", "Rattle Grasp", "0-3 Months", &["Wooden Rattle"]),
        create_test_activity("2", "Rattle Track", "0-3 Months", &["Wooden Rattle", "Mat"]),
    ];

    let items = shopping_items(&activities, &AgeSelector::parse("0-3 Months"));
    assert_eq!(items.iter().filter(|i| *i == "Wooden Rattle").count(), 1);
}

#[test]
fn test_tower_query_scenario() {
    let activities = vec![
        create_test_activity("1", "Rattle Grasp", "0-3 Months", &[]),
        create_test_activity("2", "Building the Pink Tower", "12-18 Months", &[]),
    ];

    let result = filtered_activities(&activities, "tower", &AgeSelector::All);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "Building the Pink Tower");
}

#[test]
fn test_missing_bundle_reference_scenario() {
    let activities = vec![
        create_test_activity("1", "Rattle Grasp", "0-3 Months", &[]),
        create_test_activity("2", "Mobile Watch", "0-3 Months", &[]),
    ];
    let bundle = create_test_bundle(&[1, 42, 2]);

    let resolved = resolve_bundle_items(&bundle, &activities);
    let ids: Vec<&str> = resolved.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn test_embedded_catalog_end_to_end() {
    let catalog = Catalog::embedded().unwrap();
    let mut vc = ViewController::new(catalog);

    // Search across all ages
    vc.set_query("tower");
    let hits = vc.filtered_activities();
    assert!(hits.iter().any(|a| a.title == "Building the Pink Tower"));

    // Open it, then follow "Up Next"
    let id = hits[0].id.clone();
    assert!(vc.select_activity(&id));
    assert_eq!(vc.mode(), ViewMode::Detail);
    let next = vc.next_activity().map(|a| a.id.clone());
    if let Some(next) = next {
        assert!(vc.select_next());
        assert_eq!(vc.selected_activity().map(|a| a.id.clone()), Some(next));
    }

    // Shopping list for newborns contains the mobiles exactly once
    vc.go_back();
    vc.set_query("");
    vc.set_age(AgeSelector::parse("0-3 Months"));
    let items = vc.shopping_items(false);
    assert_eq!(items.iter().filter(|i| *i == "Movement mat").count(), 1);
    assert!(vc.shopping_items(true).iter().all(|i| vc.is_classic(i)));

    // Every bundle resolves fully
    for bundle in &vc.catalog().bundles {
        assert_eq!(vc.resolve_bundle_items(bundle).len(), bundle.items.len());
    }
}

#[test]
fn test_catalog_case_variants_stay_distinct() {
    let catalog = Catalog::embedded().unwrap();
    let items = shopping_items(&catalog.activities, &AgeSelector::All);
    assert!(items.contains(&"Wooden Rattle".to_string()));
    assert!(items.contains(&"wooden rattle".to_string()));
}
