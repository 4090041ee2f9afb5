//! Property listings and the in-memory catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::store::IdGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Townhouse,
    Land,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Land => "Land",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyStatus {
    Active,
    Pending,
    Sold,
    Draft,
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 4] = [
        PropertyStatus::Active,
        PropertyStatus::Pending,
        PropertyStatus::Sold,
        PropertyStatus::Draft,
    ];
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PropertyStatus::Active => "Active",
            PropertyStatus::Pending => "Pending",
            PropertyStatus::Sold => "Sold",
            PropertyStatus::Draft => "Draft",
        };
        f.write_str(label)
    }
}

/// A listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub address: String,
    pub price: f64,
    pub image: String,
    pub beds: u32,
    pub baths: f32,
    pub sqft: u32,
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub description: Option<String>,
}

impl Property {
    /// Case-insensitive match on title or address. An empty query matches.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query) || self.address.to_lowercase().contains(&query)
    }
}

/// Input for a new listing. Fields the form does not collect take the
/// catalog's defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProperty {
    pub title: String,
    pub address: String,
    pub price: f64,
    pub description: Option<String>,
}

/// In-memory listing catalog, newest first.
#[derive(Debug, Clone)]
pub struct PropertyCatalog {
    properties: Vec<Property>,
    generator: IdGenerator,
}

impl Default for PropertyCatalog {
    fn default() -> Self {
        Self::with_properties(Vec::new())
    }
}

impl PropertyCatalog {
    pub fn with_properties(properties: Vec<Property>) -> Self {
        Self {
            properties,
            generator: IdGenerator::new("prop"),
        }
    }

    /// Prepend a listing with mock defaults (3 bed, 2 bath, 1500 sqft,
    /// House, Active) and return its id.
    pub fn add(&mut self, new: NewProperty) -> String {
        let properties = &self.properties;
        let id = self
            .generator
            .next_unused(|c| properties.iter().any(|p| p.id == c));
        tracing::debug!(id = %id, title = %new.title, "listing added");
        self.properties.insert(
            0,
            Property {
                image: format!("https://picsum.photos/400/300?random={id}"),
                id: id.clone(),
                title: new.title,
                address: new.address,
                price: new.price,
                beds: 3,
                baths: 2.0,
                sqft: 1500,
                property_type: PropertyType::House,
                status: PropertyStatus::Active,
                description: new.description.filter(|d| !d.trim().is_empty()),
            },
        );
        id
    }

    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Listings whose title or address contains `query`, in catalog order.
    pub fn search(&self, query: &str) -> Vec<&Property> {
        self.properties.iter().filter(|p| p.matches(query)).collect()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn search_is_case_insensitive_on_title_and_address() {
        let catalog = seed::properties();
        let hits: Vec<_> = catalog.search("LOFT").iter().map(|p| p.title.clone()).collect();
        assert_eq!(hits, vec!["Modern Downtown Loft".to_string()]);

        let by_city = catalog.search("portland");
        assert_eq!(by_city.len(), 1);
        assert_eq!(catalog.search("").len(), catalog.len());
        assert!(catalog.search("nowhere").is_empty());
    }

    #[test]
    fn add_prepends_with_defaults() {
        let mut catalog = seed::properties();
        let before = catalog.len();
        let id = catalog.add(NewProperty {
            title: "Sunny Villa".into(),
            address: "1 Beach Rd".into(),
            price: 700_000.0,
            description: Some("Bright and airy.".into()),
        });
        assert_eq!(catalog.len(), before + 1);
        let first = &catalog.all()[0];
        assert_eq!(first.id, id);
        assert_eq!(first.beds, 3);
        assert_eq!(first.baths, 2.0);
        assert_eq!(first.sqft, 1500);
        assert_eq!(first.property_type, PropertyType::House);
        assert_eq!(first.status, PropertyStatus::Active);
        assert_eq!(first.description.as_deref(), Some("Bright and airy."));
    }

    #[test]
    fn blank_description_is_dropped() {
        let mut catalog = PropertyCatalog::default();
        let id = catalog.add(NewProperty {
            description: Some("  ".into()),
            ..Default::default()
        });
        assert!(catalog.get(&id).unwrap().description.is_none());
    }
}
