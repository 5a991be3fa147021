//! Project record model

use serde::{Deserialize, Deserializer};

/// Placeholder asset shown when a project carries no image of its own.
pub const PLACEHOLDER_IMAGE: &str = "assets/placeholder.png";

/// One portfolio project, as read from the projects JSON resource.
///
/// Unknown fields are ignored; every recognized field has a documented
/// default so a sparse record never fails to load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub description: String,

    /// Demo link
    #[serde(default)]
    pub url: Option<String>,

    /// Source link
    #[serde(default)]
    pub repo: Option<String>,

    /// Year, accepted as a number or a numeric string
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: Option<i32>,
}

fn default_title() -> String {
    "Untitled Project".to_string()
}

impl Default for Project {
    fn default() -> Self {
        Self {
            title: default_title(),
            image: None,
            description: String::new(),
            url: None,
            repo: None,
            year: None,
        }
    }
}

impl Project {
    /// Image path, falling back to the placeholder asset.
    pub fn image_path(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Case-insensitive substring match across all stringified fields.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let haystack = format!(
            "{}\n{}\n{}\n{}\n{}\n{}",
            self.title,
            self.description,
            self.image.as_deref().unwrap_or(""),
            self.url.as_deref().unwrap_or(""),
            self.repo.as_deref().unwrap_or(""),
            self.year.map(|y| y.to_string()).unwrap_or_default(),
        )
        .to_lowercase();
        haystack.contains(&query.to_lowercase())
    }
}

/// Accept `2024`, `"2024"` or nothing; anything else reads as no year.
fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_i64().map(|y| y as i32),
        Some(serde_json::Value::String(s)) => s.trim().parse::<i32>().ok(),
        _ => None,
    })
}

/// Sort projects newest-first; records without a year sink to the end.
///
/// The sort is stable, so equal years keep their input order.
pub fn sort_newest_first(projects: &mut [Project]) {
    projects.sort_by(|a, b| match (a.year, b.year) {
        (Some(ya), Some(yb)) => yb.cmp(&ya),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
