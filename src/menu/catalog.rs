//! Menu Catalog
//!
//! Holds the static list of menu items loaded once at startup and answers
//! every read-only catalog query. The catalog is never mutated after
//! construction, so it is shared between requests without synchronisation.

use super::models::{DietaryPreference, MenuItem, SearchCriteria};
use crate::error::CatalogError;
use std::{collections::BTreeSet, path::Path};

/// Read-only collection of menu items, kept in file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Parses a JSON array of menu items.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let items: Vec<MenuItem> = serde_json::from_str(raw)?;
        Ok(Self::new(items))
    }

    /// Reads and parses the menu file at `path`.
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json_str(&raw)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sorted, de-duplicated list of categories.
    pub fn categories(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|i| i.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Items whose category equals `category` exactly (case-sensitive).
    pub fn by_category(&self, category: &str) -> Vec<MenuItem> {
        self.items
            .iter()
            .filter(|i| i.category == category)
            .cloned()
            .collect()
    }

    /// Exact id lookup, used when adding to a cart.
    pub fn get_by_id(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Resolves `identifier` as an exact id or a case-insensitive name.
    pub fn lookup(&self, identifier: &str) -> Option<&MenuItem> {
        let lowered = identifier.to_lowercase();
        self.items
            .iter()
            .find(|i| i.id == identifier || i.name.to_lowercase() == lowered)
    }

    /// Applies every present criterion conjunctively: dietary preference,
    /// price ceiling, allergen exclusions, then category.
    ///
    /// An unrecognised dietary preference does not filter anything. Empty
    /// strings and empty allergen lists count as absent.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<MenuItem> {
        let preference = criteria
            .dietary_preference
            .as_deref()
            .filter(|p| !p.is_empty())
            .and_then(DietaryPreference::parse);
        let category = criteria
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(str::to_lowercase);
        let excluded = criteria.exclude_allergens.as_deref().unwrap_or_default();

        self.items
            .iter()
            .filter(|i| preference.map_or(true, |p| p.matches(i)))
            .filter(|i| criteria.max_price.map_or(true, |max| i.price <= max))
            .filter(|i| !excluded.iter().any(|a| i.contains_allergen(a)))
            .filter(|i| {
                category
                    .as_deref()
                    .map_or(true, |c| i.category.to_lowercase() == c)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, category: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            description: String::new(),
            is_vegetarian: false,
            is_vegan: false,
            is_gluten_free: false,
            allergens: Vec::new(),
        }
    }

    fn fixture() -> Catalog {
        let mut salad = item("i1", "Salad", "Salads", 8.0);
        salad.is_vegetarian = true;
        salad.is_vegan = true;
        salad.is_gluten_free = true;

        let mut pizza = item("i2", "Margherita Pizza", "Mains", 12.0);
        pizza.is_vegetarian = true;
        pizza.allergens = vec!["Gluten".into(), "dairy".into()];

        let mut bowl = item("i3", "Buddha Bowl", "Mains", 13.0);
        bowl.is_vegetarian = true;
        bowl.is_vegan = true;
        bowl.allergens = vec!["sesame".into()];

        let mut salmon = item("i4", "Grilled Salmon", "Mains", 18.5);
        salmon.is_gluten_free = true;
        salmon.allergens = vec!["fish".into()];

        Catalog::new(vec![salad, pizza, bowl, salmon])
    }

    fn ids(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn categories_are_sorted_and_unique() {
        assert_eq!(fixture().categories(), vec!["Mains", "Salads"]);
    }

    #[test]
    fn by_category_is_case_sensitive() {
        let catalog = fixture();
        assert_eq!(ids(&catalog.by_category("Mains")), vec!["i2", "i3", "i4"]);
        assert!(catalog.by_category("mains").is_empty());
        assert!(catalog.by_category("Soups").is_empty());
    }

    #[test]
    fn lookup_matches_id_then_name() {
        let catalog = fixture();
        assert_eq!(catalog.lookup("i4").map(|i| i.name.as_str()), Some("Grilled Salmon"));
        assert_eq!(catalog.lookup("grilled SALMON").map(|i| i.id.as_str()), Some("i4"));
        assert!(catalog.lookup("I4").is_none());
        assert!(catalog.lookup("nonexistent").is_none());
    }

    #[test]
    fn search_without_criteria_returns_everything() {
        let catalog = fixture();
        assert_eq!(catalog.search(&SearchCriteria::default()).len(), catalog.len());
    }

    #[test]
    fn search_vegan_under_price() {
        let criteria = SearchCriteria {
            dietary_preference: Some("VEGAN".into()),
            max_price: Some(12.0),
            ..Default::default()
        };
        assert_eq!(ids(&fixture().search(&criteria)), vec!["i1"]);
    }

    #[test]
    fn search_price_bound_is_inclusive() {
        let criteria = SearchCriteria {
            max_price: Some(12.0),
            ..Default::default()
        };
        assert_eq!(ids(&fixture().search(&criteria)), vec!["i1", "i2"]);
    }

    #[test]
    fn search_excludes_any_listed_allergen() {
        let criteria = SearchCriteria {
            exclude_allergens: Some(vec!["gluten".into(), "FISH".into()]),
            ..Default::default()
        };
        assert_eq!(ids(&fixture().search(&criteria)), vec!["i1", "i3"]);
    }

    #[test]
    fn search_unknown_preference_passes_through() {
        let criteria = SearchCriteria {
            dietary_preference: Some("pescatarian".into()),
            category: Some("mains".into()),
            ..Default::default()
        };
        assert_eq!(ids(&fixture().search(&criteria)), vec!["i2", "i3", "i4"]);
    }

    #[test]
    fn bundled_menu_parses() {
        let raw = include_str!("../../assets/menu_items.json");
        let catalog = Catalog::from_json_str(raw).expect("bundled menu should parse");
        assert!(!catalog.is_empty());
        assert!(catalog.categories().contains(&"Mains".to_string()));
    }

    #[test]
    fn malformed_menu_is_a_parse_error() {
        let err = Catalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
