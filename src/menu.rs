// Restaurant menu shown next to the booking form
// Read-only fixture data filtered by the category tabs

use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUNDLED_MENU: &str = include_str!("../data/menu.json");

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Menu parse error: {0}")]
    ParseError(String),

    #[error("Menu has no items")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub category: String,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
}

// Selected category tab
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuFilter {
    #[default]
    All,
    Category(String),
}

impl MenuFilter {
    fn matches(&self, item: &MenuItem) -> bool {
        match self {
            MenuFilter::All => true,
            MenuFilter::Category(name) => item.category.eq_ignore_ascii_case(name),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        let items: Vec<MenuItem> =
            serde_json::from_str(json).map_err(|e| MenuError::ParseError(e.to_string()))?;
        if items.is_empty() {
            return Err(MenuError::Empty);
        }
        Ok(Self { items })
    }

    // Menu fixture shipped with the crate
    pub fn bundled() -> Result<Self, MenuError> {
        Self::from_json(BUNDLED_MENU)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    // Distinct categories in the order they first appear
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for item in &self.items {
            if !categories.contains(&item.category.as_str()) {
                categories.push(&item.category);
            }
        }
        categories
    }

    pub fn filter(&self, filter: &MenuFilter) -> Vec<&MenuItem> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }
}
