// Plain-text output for the non-interactive subcommands
use anyhow::{bail, Context};
use std::path::Path;
use tinysteps_core::bundles::{bundle_age_label, filter_bundles};
use tinysteps_core::science::{AFFILIATE_NOTE, SCIENCE, SHOPPING_NOTE};
use tinysteps_core::shopping::compact_age_label;
use tinysteps_core::{
    AgeSelector, Catalog, Config, Error, Exporter, LinkBuilder, ShoppingExport, ViewController,
};

pub fn list(mut controller: ViewController, age: AgeSelector, query: String) {
    controller.set_age(age);
    controller.set_query(query);

    let activities = controller.filtered_activities();
    if activities.is_empty() {
        println!("No activities found matching your criteria.");
        return;
    }

    for activity in &activities {
        println!(
            "{:>4}  {:<13} {} {}  [{}]",
            activity.id,
            activity.filter_tag,
            activity.category.icon(),
            activity.title,
            activity.material_summary()
        );
    }
    println!("\n{} activities", activities.len());
}

pub fn show(controller: &ViewController, links: &LinkBuilder, id: &str) -> anyhow::Result<()> {
    let activity = controller
        .catalog()
        .activity(id)
        .ok_or_else(|| Error::NotFound(format!("No activity with id {}", id)))?;

    println!("{}", activity.title);
    println!(
        "{} | {} {}",
        activity.filter_tag,
        activity.category.icon(),
        activity.category.label()
    );
    println!("\n{}", activity.reassurance);

    println!("\nOBJECTIVE\n{}", activity.objective);
    println!("\nOUTCOME\n{}", activity.outcome);
    println!("\nWHY IT MATTERS\n{}", activity.why_matters);

    println!("\nSTEP BY STEP");
    for (i, step) in activity.steps.iter().enumerate() {
        println!("{:>2}. {}", i + 1, step.caption);
    }

    println!("\nWHEN TO PAUSE\n{}", activity.when_to_pause);

    println!("\nMATERIALS");
    if activity.materials.is_empty() {
        println!("No special materials needed.");
    }
    for material in &activity.materials {
        let badge = if controller.is_classic(material) { "  ✨ Classic" } else { "" };
        println!("  • {}{}", material, badge);
    }

    println!("\nSAFETY\n{}", activity.safety_notes);

    println!("\nBuy: {}", links.buy_url(activity));
    println!("Share: {}", links.activity_url(activity));

    if let Some(next) = tinysteps_core::next_activity(&controller.catalog().activities, &activity.id)
    {
        println!("\nUp next: {} (tinysteps show {})", next.title, next.id);
    }

    Ok(())
}

pub fn shop(
    mut controller: ViewController,
    links: &LinkBuilder,
    age: AgeSelector,
    classic_only: bool,
    export: Option<&Path>,
) -> anyhow::Result<()> {
    controller.set_age(age.clone());
    let items = controller.shopping_items(classic_only);

    if let Some(path) = export {
        let list = ShoppingExport::build(&items, &age, classic_only, controller.classics(), links);
        Exporter::export_to_file(&list, path)?;
        tracing::info!("Exported shopping list to {}", path.display());
        println!("Exported {} items to {}", items.len(), path.display());
        return Ok(());
    }

    println!(
        "Buy Items ({}{})\n",
        compact_age_label(&age),
        if classic_only { ", classics only" } else { "" }
    );

    if items.is_empty() {
        println!("No matches found in this category.");
    }
    for item in &items {
        let badge = if controller.is_classic(item) { "  ✨ Classic" } else { "" };
        println!("  🛒 {}{}", item, badge);
        println!("     {}", links.marketplace_search_url(item));
    }

    println!("\n{}\n{}", SHOPPING_NOTE, AFFILIATE_NOTE);
    Ok(())
}

pub fn bundles(controller: &ViewController, age: AgeSelector) {
    let bundles = filter_bundles(&controller.catalog().bundles, &age);
    println!("Curated Bundles ({})\n", bundle_age_label(&age));

    if bundles.is_empty() {
        println!("No bundles for this age yet.");
    }
    for bundle in bundles {
        println!("{}  [{}]", bundle.name, bundle.age_range);
        println!("  {}", bundle.tagline);
        for activity in controller.resolve_bundle_items(bundle) {
            println!(
                "    {:>4}  {} {}",
                activity.id,
                activity.category.icon(),
                activity.title
            );
        }
        println!();
    }
}

pub fn books(catalog: &Catalog) {
    for book in &catalog.books {
        println!("{} by {}", book.title, book.author);
        if let Some(badge) = &book.badge {
            println!("  [{}]", badge);
        }
        if let Some(stars) = book.filled_stars() {
            let reviews = book.review_count.as_deref().unwrap_or("");
            println!(
                "  {}{} {}",
                "★".repeat(stars as usize),
                "☆".repeat(5 - stars as usize),
                reviews
            );
        }
        println!("  {}", book.description);
        for highlight in book.top_highlights() {
            println!("  + {}", highlight);
        }
        println!("  {}\n", book.purchase_link);
    }
}

pub fn science() {
    println!("{}\n{}\n", SCIENCE.heading, SCIENCE.title);
    println!("{}\n", SCIENCE.lede);

    println!("{}", SCIENCE.pillars_heading);
    for pillar in &SCIENCE.pillars {
        println!("\n* {}\n  {}", pillar.title, pillar.body);
    }

    println!("\n{}", SCIENCE.comparison_heading);
    for topic in &SCIENCE.comparison {
        println!("\n* {}\n  {}", topic.title, topic.body);
    }

    println!("\n{}: {}\n{}", SCIENCE.impact_kicker, SCIENCE.impact.title, SCIENCE.impact.body);
}

pub fn check(catalog: &Catalog) -> anyhow::Result<()> {
    let duplicates = catalog.duplicate_ids();
    let dangling = catalog.dangling_bundle_refs();

    println!(
        "{} activities, {} bundles, {} books",
        catalog.activities.len(),
        catalog.bundles.len(),
        catalog.books.len()
    );

    for id in &duplicates {
        println!("duplicate activity id: {}", id);
    }
    for r in &dangling {
        println!("bundle {} references missing activity {}", r.bundle_id, r.item_id);
    }

    if !duplicates.is_empty() || !dangling.is_empty() {
        bail!(
            "catalog has {} duplicate ids and {} unresolved bundle items",
            duplicates.len(),
            dangling.len()
        );
    }

    println!("OK");
    Ok(())
}

pub fn config(config: &Config, path: Option<&Path>, init: bool) -> anyhow::Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => Config::config_path()?,
    };

    if init {
        if path.exists() {
            bail!("Config already exists at {}", path.display());
        }
        Config::default().save_to(&path)?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    println!("Config file: {}", path.display());
    if path.exists() {
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        println!("\n{}", contents);
    } else {
        println!("(not found, using defaults; run `tinysteps config --init` to create it)");
    }
    println!("Theme: {}", config.ui.theme);
    match &config.data.path {
        Some(p) => println!("Dataset: {}", p.display()),
        None => println!("Dataset: built-in"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_passes_on_embedded_catalog() {
        let catalog = Catalog::embedded().unwrap();
        assert!(check(&catalog).is_ok());
    }

    #[test]
    fn test_show_unknown_id_fails() {
        let controller = ViewController::new(Catalog::embedded().unwrap());
        assert!(show(&controller, &LinkBuilder::default(), "999").is_err());
    }

    #[test]
    fn test_shop_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.md");
        let controller = ViewController::new(Catalog::embedded().unwrap());
        shop(
            controller,
            &LinkBuilder::default(),
            AgeSelector::parse("0-3 Months"),
            false,
            Some(&path),
        )
        .unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Buy Items"));
    }

    #[test]
    fn test_config_init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        config(&Config::default(), Some(&path), true).unwrap();
        assert!(path.exists());
        assert!(config(&Config::default(), Some(&path), true).is_err());
        assert!(config(&Config::default(), Some(&path), false).is_ok());
    }
}
