//! Tests for CategoryService

use std::collections::BTreeMap;
use std::sync::Arc;

use catree::application::services::{CategoryService, CategoryUpdate, NewCategory};
use catree::application::ApplicationError;
use catree::domain::{Category, CategoryId, CategorySnapshot, DomainError, Product};
use catree::infrastructure::{
    CategoryRepository, InMemoryCategoryRepository, InMemoryProductRepository,
};
use catree::util::testing::init_test_setup;

fn category(id: &str, name: &str, parent: Option<&str>) -> Category {
    let mut c = Category::new(name);
    c.id = CategoryId::from(id);
    c.parent_category = parent.map(CategoryId::from);
    c
}

/// Service over Root -> Shoes -> Sneakers with one product in Sneakers.
fn seeded_service() -> (
    CategoryService,
    Arc<InMemoryCategoryRepository>,
    Arc<InMemoryProductRepository>,
) {
    init_test_setup();
    let categories = Arc::new(InMemoryCategoryRepository::with_categories([
        category("1", "Root", None),
        category("2", "Shoes", Some("1")),
        category("3", "Sneakers", Some("2")),
    ]));
    let products = Arc::new(InMemoryProductRepository::with_products([Product {
        id: "p1".to_string(),
        name: "Runner".to_string(),
        category: CategoryId::from("3"),
    }]));
    let service = CategoryService::new(categories.clone(), products.clone());
    (service, categories, products)
}

fn domain_error(err: ApplicationError) -> DomainError {
    match err {
        ApplicationError::Domain(e) => e,
        other => panic!("expected domain error, got: {other}"),
    }
}

#[test]
fn given_seeded_catalog_when_listing_then_returns_all_with_name_map() {
    let (service, _, _) = seeded_service();

    let listing = service.list().unwrap();

    let names: Vec<&str> = listing.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Root", "Shoes", "Sneakers"]);
    assert_eq!(
        listing.names_by_id.get(&CategoryId::from("2")),
        Some(&"Shoes".to_string())
    );
}

#[test]
fn given_mid_level_category_when_assembling_edit_form_then_candidates_exclude_subtree() {
    let (service, _, _) = seeded_service();

    let form = service.edit_form(&CategoryId::from("2")).unwrap();

    assert_eq!(form.category.name, "Shoes");
    assert_eq!(form.parent_id, Some(CategoryId::from("1")));
    let candidate_names: Vec<&str> = form
        .parent_candidates
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(candidate_names, vec!["Root"]);
}

#[test]
fn given_missing_category_when_assembling_edit_form_then_not_found() {
    let (service, _, _) = seeded_service();
    let ghost = CategoryId::from("no-such-id");

    let err = domain_error(service.edit_form(&ghost).unwrap_err());

    assert_eq!(err, DomainError::NotFound(ghost));
}

#[test]
fn given_valid_input_when_creating_then_category_is_persisted() {
    let (service, categories, _) = seeded_service();

    let created = service
        .create(NewCategory {
            name: "Boots".to_string(),
            parent_category: Some(CategoryId::from("2")),
            properties: BTreeMap::from([("season".to_string(), "winter".to_string())]),
        })
        .unwrap();

    let stored = categories.find_by_id(&created.id).unwrap().unwrap();
    assert_eq!(stored.name, "Boots");
    assert_eq!(stored.parent_category, Some(CategoryId::from("2")));
    assert_eq!(stored.properties.get("season").map(String::as_str), Some("winter"));
}

#[test]
fn given_blank_name_when_creating_then_empty_name() {
    let (service, _, _) = seeded_service();

    let err = domain_error(
        service
            .create(NewCategory {
                name: "   ".to_string(),
                ..Default::default()
            })
            .unwrap_err(),
    );

    assert_eq!(err, DomainError::EmptyName);
}

#[test]
fn given_missing_parent_when_creating_then_unknown_parent() {
    let (service, _, _) = seeded_service();
    let ghost = CategoryId::from("no-such-id");

    let err = domain_error(
        service
            .create(NewCategory {
                name: "Boots".to_string(),
                parent_category: Some(ghost.clone()),
                ..Default::default()
            })
            .unwrap_err(),
    );

    assert_eq!(err, DomainError::UnknownParent(ghost));
}

#[test]
fn given_valid_reparent_when_updating_then_change_is_persisted() {
    let (service, categories, _) = seeded_service();

    // Move Sneakers directly under Root
    service
        .update(
            &CategoryId::from("3"),
            CategoryUpdate {
                name: "Sneakers".to_string(),
                parent_category: Some(CategoryId::from("1")),
                ..Default::default()
            },
        )
        .unwrap();

    let stored = categories
        .find_by_id(&CategoryId::from("3"))
        .unwrap()
        .unwrap();
    assert_eq!(stored.parent_category, Some(CategoryId::from("1")));
}

#[test]
fn given_descendant_parent_when_updating_then_cyclic_assignment_and_nothing_written() {
    let (service, categories, _) = seeded_service();

    // Hanging Shoes below its descendant Sneakers must be rejected
    let err = domain_error(
        service
            .update(
                &CategoryId::from("2"),
                CategoryUpdate {
                    name: "Shoes".to_string(),
                    parent_category: Some(CategoryId::from("3")),
                    ..Default::default()
                },
            )
            .unwrap_err(),
    );

    assert!(matches!(err, DomainError::CyclicAssignment { .. }));
    let stored = categories
        .find_by_id(&CategoryId::from("2"))
        .unwrap()
        .unwrap();
    assert_eq!(stored.parent_category, Some(CategoryId::from("1")));
}

#[test]
fn given_blank_name_when_updating_then_empty_name() {
    let (service, _, _) = seeded_service();

    let err = domain_error(
        service
            .update(
                &CategoryId::from("2"),
                CategoryUpdate {
                    name: String::new(),
                    ..Default::default()
                },
            )
            .unwrap_err(),
    );

    assert_eq!(err, DomainError::EmptyName);
}

#[test]
fn given_referenced_category_when_deleting_then_blocked_by_products() {
    let (service, categories, _) = seeded_service();

    let err = domain_error(service.delete(&CategoryId::from("3")).unwrap_err());

    assert_eq!(err, DomainError::HasReferencingProducts(CategoryId::from("3")));
    assert!(categories
        .find_by_id(&CategoryId::from("3"))
        .unwrap()
        .is_some());
}

#[test]
fn given_category_with_children_when_deleting_then_blocked_by_children() {
    let (service, _, _) = seeded_service();

    let err = domain_error(service.delete(&CategoryId::from("2")).unwrap_err());

    assert_eq!(err, DomainError::HasChildCategories(CategoryId::from("2")));
}

#[test]
fn given_free_leaf_when_deleting_then_category_is_removed() {
    let (service, categories, _) = seeded_service();
    // Detach Sneakers' product blocker by adding a fresh leaf instead
    let leaf = service
        .create(NewCategory {
            name: "Sandals".to_string(),
            parent_category: Some(CategoryId::from("1")),
            ..Default::default()
        })
        .unwrap();

    service.delete(&leaf.id).unwrap();

    assert!(categories.find_by_id(&leaf.id).unwrap().is_none());
}

#[test]
fn given_missing_category_when_deleting_then_not_found() {
    let (service, _, _) = seeded_service();
    let ghost = CategoryId::from("no-such-id");

    let err = domain_error(service.delete(&ghost).unwrap_err());

    assert_eq!(err, DomainError::NotFound(ghost));
}

#[test]
fn given_sequence_of_valid_updates_when_walking_all_chains_then_forest_stays_acyclic() {
    let (service, categories, _) = seeded_service();

    // A handful of successful re-parent operations
    for (id, parent) in [("3", Some("1")), ("2", None), ("3", Some("2")), ("2", Some("1"))] {
        let name = categories
            .find_by_id(&CategoryId::from(id))
            .unwrap()
            .unwrap()
            .name;
        service
            .update(
                &CategoryId::from(id),
                CategoryUpdate {
                    name,
                    parent_category: parent.map(CategoryId::from),
                    ..Default::default()
                },
            )
            .unwrap();
    }

    // Every parent chain still terminates: no walk reports corruption
    let snapshot = CategorySnapshot::from_categories(categories.find_all().unwrap());
    for (idx, _) in snapshot.iter() {
        for (other, _) in snapshot.iter() {
            snapshot.is_ancestor(idx, other).unwrap();
        }
    }
}
