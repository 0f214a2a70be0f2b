//! Collection names and sortable field names shared by every layer.

use serde::{Deserialize, Serialize};

/// The document store collections backing the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    About,
    Services,
    Portfolio,
    Team,
    Blog,
    Settings,
    Contacts,
}

impl Collection {
    /// Every collection, in the order the admin panel lists them.
    pub const ALL: [Collection; 7] = [
        Collection::About,
        Collection::Services,
        Collection::Portfolio,
        Collection::Team,
        Collection::Blog,
        Collection::Settings,
        Collection::Contacts,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::About => "about",
            Collection::Services => "services",
            Collection::Portfolio => "portfolio",
            Collection::Team => "team",
            Collection::Blog => "blog",
            Collection::Settings => "settings",
            Collection::Contacts => "contacts",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| format!("Unknown collection: {s}"))
    }
}

/// Field names callers sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
    Order,
    Featured,
    Date,
}

impl SortField {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
            SortField::Order => "order",
            SortField::Featured => "featured",
            SortField::Date => "date",
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createdAt" => Ok(SortField::CreatedAt),
            "updatedAt" => Ok(SortField::UpdatedAt),
            "order" => Ok(SortField::Order),
            "featured" => Ok(SortField::Featured),
            "date" => Ok(SortField::Date),
            _ => Err(format!("Unknown sort field: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_names() {
        assert_eq!(Collection::Blog.as_str(), "blog");
        assert_eq!(Collection::Contacts.to_string(), "contacts");
    }

    #[test]
    fn test_collection_from_str() {
        assert_eq!("portfolio".parse::<Collection>(), Ok(Collection::Portfolio));
        assert_eq!(" Team ".parse::<Collection>(), Ok(Collection::Team));
        assert!("pages".parse::<Collection>().is_err());
    }

    #[test]
    fn test_every_collection_roundtrips() {
        for c in Collection::ALL {
            assert_eq!(c.as_str().parse::<Collection>(), Ok(c));
        }
    }

    #[test]
    fn test_sort_field_roundtrip() {
        for f in [
            SortField::CreatedAt,
            SortField::UpdatedAt,
            SortField::Order,
            SortField::Featured,
            SortField::Date,
        ] {
            assert_eq!(f.as_str().parse::<SortField>(), Ok(f));
        }
        assert!("title".parse::<SortField>().is_err());
    }
}
