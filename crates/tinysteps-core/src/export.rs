use crate::links::LinkBuilder;
use crate::models::AgeSelector;
use crate::shopping::ClassicList;
use crate::{Error, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Markdown,
}

impl ExportFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "csv" => Some(ExportFormat::Csv),
            "md" | "markdown" => Some(ExportFormat::Markdown),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Markdown => "md",
        }
    }
}

/// One line of an exported shopping list
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ShoppingEntry {
    pub name: String,
    pub classic: bool,
    pub url: String,
}

/// A shopping list ready to be written out
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ShoppingExport {
    pub age: String,
    pub classic_only: bool,
    pub items: Vec<ShoppingEntry>,
}

impl ShoppingExport {
    /// Attach classic flags and marketplace links to aggregated items
    pub fn build(
        items: &[String],
        age: &AgeSelector,
        classic_only: bool,
        classics: &ClassicList,
        links: &LinkBuilder,
    ) -> Self {
        Self {
            age: age.to_string(),
            classic_only,
            items: items
                .iter()
                .map(|name| ShoppingEntry {
                    name: name.clone(),
                    classic: classics.is_classic(name),
                    url: links.marketplace_search_url(name),
                })
                .collect(),
        }
    }
}

/// Writes shopping lists to disk
pub struct Exporter;

impl Exporter {
    /// Export to a file, picking the format from its extension
    pub fn export_to_file<P: AsRef<Path>>(list: &ShoppingExport, path: P) -> Result<()> {
        let path = path.as_ref();

        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(ExportFormat::from_extension)
            .ok_or_else(|| {
                Error::ExportError(
                    "Could not determine export format from extension. Use .json, .csv, or .md"
                        .to_string(),
                )
            })?;

        Self::export_to_file_with_format(list, path, format)
    }

    pub fn export_to_file_with_format<P: AsRef<Path>>(
        list: &ShoppingExport,
        path: P,
        format: ExportFormat,
    ) -> Result<()> {
        let content = Self::render(list, format)?;

        let mut file = File::create(path)
            .map_err(|e| Error::ExportError(format!("Failed to create file: {}", e)))?;

        file.write_all(content.as_bytes())
            .map_err(|e| Error::ExportError(format!("Failed to write file: {}", e)))?;

        Ok(())
    }

    pub fn render(list: &ShoppingExport, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Json => Self::to_json(list),
            ExportFormat::Csv => Ok(Self::to_csv(list)),
            ExportFormat::Markdown => Ok(Self::to_markdown(list)),
        }
    }

    pub fn to_json(list: &ShoppingExport) -> Result<String> {
        Ok(serde_json::to_string_pretty(list)?)
    }

    pub fn to_csv(list: &ShoppingExport) -> String {
        let mut output = String::from("Item,Classic,Link\n");

        for entry in &list.items {
            output.push_str(&format!(
                "{},{},{}\n",
                Self::escape_csv(&entry.name),
                if entry.classic { "yes" } else { "no" },
                entry.url,
            ));
        }

        output
    }

    pub fn to_markdown(list: &ShoppingExport) -> String {
        let mut output = String::new();

        output.push_str("# Buy Items\n\n");
        output.push_str(&format!("**Age:** {}", list.age));
        if list.classic_only {
            output.push_str(" | **Montessori classics only**");
        }
        output.push_str(&format!("\n\nTotal items: {}\n\n", list.items.len()));

        if list.items.is_empty() {
            output.push_str("_No matches found in this category._\n");
            return output;
        }

        for entry in &list.items {
            let badge = if entry.classic { " ✨ Classic" } else { "" };
            output.push_str(&format!("- [ ] [{}]({}){}\n", entry.name, entry.url, badge));
        }

        output
    }

    /// Escape CSV special characters
    fn escape_csv(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}
