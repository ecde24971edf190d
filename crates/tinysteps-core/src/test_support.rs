// Builders shared by the unit tests
use crate::models::{Activity, ActivityStep, Bundle, BundleItem, Category};

pub fn activity(id: &str, title: &str, filter_tag: &str, materials: &[&str]) -> Activity {
    Activity {
        id: id.to_string(),
        title: title.to_string(),
        category: Category::Sensory,
        filter_tag: filter_tag.to_string(),
        reassurance: "You are doing great.".to_string(),
        objective: format!("Practice {}", title.to_lowercase()),
        outcome: "Focus".to_string(),
        why_matters: "It helps.".to_string(),
        steps: vec![ActivityStep {
            image_url: String::new(),
            caption: "Set up the mat.".to_string(),
        }],
        when_to_pause: "When baby is tired.".to_string(),
        materials: materials.iter().map(|m| m.to_string()).collect(),
        safety_notes: "Supervise at all times.".to_string(),
        image_prompt: None,
        thumbnail: None,
        hero: None,
    }
}

pub fn bundle(id: &str, age_range: &str, item_ids: &[u32]) -> Bundle {
    Bundle {
        id: id.to_string(),
        name: format!("Bundle {}", id),
        tagline: "A sequence".to_string(),
        age_range: age_range.to_string(),
        items: item_ids
            .iter()
            .map(|&i| BundleItem {
                id: i,
                title: format!("Item {}", i),
                line_1: String::new(),
                line_2: String::new(),
                link: String::new(),
            })
            .collect(),
    }
}
