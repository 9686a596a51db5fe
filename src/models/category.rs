use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[sqlx(type_name = "varchar", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Electronics,
    Clothing,
    Food,
    Books,
    Home,
    Sports,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Electronics,
        Category::Clothing,
        Category::Food,
        Category::Books,
        Category::Home,
        Category::Sports,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "ELECTRONICS",
            Category::Clothing => "CLOTHING",
            Category::Food => "FOOD",
            Category::Books => "BOOKS",
            Category::Home => "HOME",
            Category::Sports => "SPORTS",
            Category::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    // Path segments arrive in whatever case the client sent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ELECTRONICS" => Ok(Category::Electronics),
            "CLOTHING" => Ok(Category::Clothing),
            "FOOD" => Ok(Category::Food),
            "BOOKS" => Ok(Category::Books),
            "HOME" => Ok(Category::Home),
            "SPORTS" => Ok(Category::Sports),
            "OTHER" => Ok(Category::Other),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}
