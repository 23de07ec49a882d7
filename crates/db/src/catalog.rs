//! Nested read model for the catalog endpoint.
//!
//! Three flat row sets are folded into one tree:
//!
//! ```text
//! [ { id, name, subCategory: [ { id, name, items: [ { id, subcategory, name, description, price, image } ] } ] } ]
//! ```
//!
//! Categories and subcategories carry only `id`, `name` and their children,
//! while items carry their full field set including the `subcategory`
//! back-reference. Clients depend on this exact shape.

use std::collections::HashMap;

use carte_core::media::resolve_image_url;
use carte_core::types::DbId;
use serde::Serialize;

use crate::models::category::Category;
use crate::models::item::Item;
use crate::models::subcategory::SubCategory;

/// The full current contents of the three catalog tables.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub categories: Vec<Category>,
    pub subcategories: Vec<SubCategory>,
    pub items: Vec<Item>,
}

/// A category with its subcategories embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDocument {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "subCategory")]
    pub sub_category: Vec<SubCategoryDocument>,
}

/// A subcategory with its items embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubCategoryDocument {
    pub id: DbId,
    pub name: String,
    pub items: Vec<ItemDocument>,
}

/// An item with every client-visible field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDocument {
    pub id: DbId,
    pub subcategory: DbId,
    pub name: String,
    pub description: String,
    pub price: i32,
    pub image: Option<String>,
}

/// Build the nested catalog from a snapshot.
///
/// Output order follows input order at every level; the repositories load
/// rows in primary-key order. Rows whose parent is absent from the snapshot
/// are not reachable from any category and are left out.
pub fn assemble(snapshot: &CatalogSnapshot, media_base_url: Option<&str>) -> Vec<CategoryDocument> {
    let subcategories_by_category = group_by_parent(&snapshot.subcategories, |s| s.category_id);
    let items_by_subcategory = group_by_parent(&snapshot.items, |i| i.subcategory_id);

    snapshot
        .categories
        .iter()
        .map(|category| {
            let subcategories = subcategories_by_category
                .get(&category.id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            category_document(category, subcategories, &items_by_subcategory, media_base_url)
        })
        .collect()
}

fn category_document(
    category: &Category,
    subcategories: &[&SubCategory],
    items_by_subcategory: &HashMap<DbId, Vec<&Item>>,
    media_base_url: Option<&str>,
) -> CategoryDocument {
    CategoryDocument {
        id: category.id,
        name: category.name.clone(),
        sub_category: subcategories
            .iter()
            .map(|subcategory| {
                let items = items_by_subcategory
                    .get(&subcategory.id)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                subcategory_document(subcategory, items, media_base_url)
            })
            .collect(),
    }
}

fn subcategory_document(
    subcategory: &SubCategory,
    items: &[&Item],
    media_base_url: Option<&str>,
) -> SubCategoryDocument {
    SubCategoryDocument {
        id: subcategory.id,
        name: subcategory.name.clone(),
        items: items
            .iter()
            .map(|item| item_document(item, media_base_url))
            .collect(),
    }
}

fn item_document(item: &Item, media_base_url: Option<&str>) -> ItemDocument {
    ItemDocument {
        id: item.id,
        subcategory: item.subcategory_id,
        name: item.name.clone(),
        description: item.description.clone(),
        price: item.price,
        image: resolve_image_url(item.image.as_deref(), media_base_url),
    }
}

/// Group child rows by parent id, keeping their relative order.
fn group_by_parent<'a, T>(
    rows: &'a [T],
    parent_id: impl Fn(&T) -> DbId,
) -> HashMap<DbId, Vec<&'a T>> {
    let mut groups: HashMap<DbId, Vec<&'a T>> = HashMap::new();
    for row in rows {
        groups.entry(parent_id(row)).or_default().push(row);
    }
    groups
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn category(id: DbId, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            description: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn subcategory(id: DbId, category_id: DbId, name: &str) -> SubCategory {
        SubCategory {
            id,
            category_id,
            name: name.to_string(),
            description: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn item(id: DbId, subcategory_id: DbId, name: &str, price: i32) -> Item {
        Item {
            id,
            subcategory_id,
            name: name.to_string(),
            description: String::new(),
            price,
            image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn empty_snapshot_yields_empty_catalog() {
        let docs = assemble(&CatalogSnapshot::default(), None);
        assert!(docs.is_empty());
        assert_eq!(serde_json::to_string(&docs).unwrap(), "[]");
    }

    #[test]
    fn category_without_children_has_empty_sub_category() {
        let snapshot = CatalogSnapshot {
            categories: vec![category(1, "Desserts")],
            ..Default::default()
        };
        let json = serde_json::to_value(assemble(&snapshot, None)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "id": 1, "name": "Desserts", "subCategory": [] }])
        );
    }

    #[test]
    fn subcategory_without_items_has_empty_items() {
        let snapshot = CatalogSnapshot {
            categories: vec![category(1, "Drinks")],
            subcategories: vec![subcategory(10, 1, "Cold")],
            items: vec![],
        };
        let docs = assemble(&snapshot, None);
        assert_eq!(docs[0].sub_category.len(), 1);
        assert!(docs[0].sub_category[0].items.is_empty());
    }

    #[test]
    fn serializes_the_exact_nested_shape() {
        let snapshot = CatalogSnapshot {
            categories: vec![category(1, "Drinks")],
            subcategories: vec![subcategory(10, 1, "Hot")],
            items: vec![item(100, 10, "Coffee", 300)],
        };

        let json = serde_json::to_string(&assemble(&snapshot, None)).unwrap();

        assert_eq!(
            json,
            r#"[{"id":1,"name":"Drinks","subCategory":[{"id":10,"name":"Hot","items":[{"id":100,"subcategory":10,"name":"Coffee","description":"","price":300,"image":null}]}]}]"#
        );
    }

    #[test]
    fn children_are_grouped_under_their_own_parent() {
        let snapshot = CatalogSnapshot {
            categories: vec![category(1, "Drinks"), category(2, "Food")],
            subcategories: vec![
                subcategory(10, 1, "Hot"),
                subcategory(11, 2, "Mains"),
                subcategory(12, 1, "Cold"),
            ],
            items: vec![
                item(100, 10, "Coffee", 300),
                item(101, 12, "Lemonade", 250),
                item(102, 11, "Burger", 900),
                item(103, 10, "Tea", 200),
            ],
        };

        let docs = assemble(&snapshot, None);

        assert_eq!(docs.len(), snapshot.categories.len());
        for doc in &docs {
            let expected_subs = snapshot
                .subcategories
                .iter()
                .filter(|s| s.category_id == doc.id)
                .count();
            assert_eq!(doc.sub_category.len(), expected_subs);
            for sub in &doc.sub_category {
                let expected_items = snapshot
                    .items
                    .iter()
                    .filter(|i| i.subcategory_id == sub.id)
                    .count();
                assert_eq!(sub.items.len(), expected_items);
                assert!(sub.items.iter().all(|i| i.subcategory == sub.id));
            }
        }

        let drinks: Vec<_> = docs[0].sub_category.iter().map(|s| s.id).collect();
        assert_eq!(drinks, vec![10, 12]);
        let hot: Vec<_> = docs[0].sub_category[0].items.iter().map(|i| i.id).collect();
        assert_eq!(hot, vec![100, 103]);
    }

    #[test]
    fn preserves_input_order() {
        let snapshot = CatalogSnapshot {
            categories: vec![category(3, "C"), category(1, "A"), category(2, "B")],
            ..Default::default()
        };
        let ids: Vec<_> = assemble(&snapshot, None).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn rows_with_missing_parent_are_unreachable() {
        let snapshot = CatalogSnapshot {
            categories: vec![category(1, "Drinks")],
            subcategories: vec![subcategory(10, 99, "Orphan")],
            items: vec![item(100, 77, "Lost", 1)],
        };
        let docs = assemble(&snapshot, None);
        assert_eq!(docs.len(), 1);
        assert!(docs[0].sub_category.is_empty());
    }

    #[test]
    fn assembling_twice_is_identical() {
        let snapshot = CatalogSnapshot {
            categories: vec![category(1, "Drinks")],
            subcategories: vec![subcategory(10, 1, "Hot")],
            items: vec![item(100, 10, "Coffee", 300)],
        };
        assert_eq!(assemble(&snapshot, None), assemble(&snapshot, None));
    }

    #[test]
    fn blank_image_reference_serializes_as_null() {
        let mut coffee = item(100, 10, "Coffee", 300);
        coffee.image = Some(String::new());
        let snapshot = CatalogSnapshot {
            categories: vec![category(1, "Drinks")],
            subcategories: vec![subcategory(10, 1, "Hot")],
            items: vec![coffee],
        };

        for base in [None, Some("https://cdn.example/media")] {
            let json = serde_json::to_value(assemble(&snapshot, base)).unwrap();
            assert_eq!(json[0]["subCategory"][0]["items"][0]["image"], serde_json::Value::Null);
        }
    }

    #[test]
    fn image_references_are_resolved_against_media_base() {
        let mut coffee = item(100, 10, "Coffee", 300);
        coffee.image = Some("items/coffee.jpg".to_string());
        let snapshot = CatalogSnapshot {
            categories: vec![category(1, "Drinks")],
            subcategories: vec![subcategory(10, 1, "Hot")],
            items: vec![coffee],
        };

        let docs = assemble(&snapshot, Some("https://cdn.example/media"));
        assert_eq!(
            docs[0].sub_category[0].items[0].image.as_deref(),
            Some("https://cdn.example/media/items/coffee.jpg")
        );

        let docs = assemble(&snapshot, None);
        assert_eq!(
            docs[0].sub_category[0].items[0].image.as_deref(),
            Some("items/coffee.jpg")
        );
    }
}
