//! Seeded repository behaviour, including concurrent writers.

use std::sync::Arc;
use std::thread;

use petstore::domain::{Category, Order, OrderStatus, Pet, PetStatus, Tag};
use petstore::errors::AppError;
use petstore::infra::{Persistence, UnitOfWork};

fn pet(id: i64, name: &str) -> Pet {
    Pet {
        id,
        name: name.to_string(),
        category: Category {
            id: 1,
            name: "dogs".to_string(),
        },
        photo_urls: vec![],
        tags: vec![Tag {
            id: 1,
            name: "friendly".to_string(),
        }],
        status: PetStatus::Available,
    }
}

#[test]
fn test_seeded_stores_keep_insertion_order() {
    let uow = Persistence::seeded();

    let pet_ids: Vec<i64> = uow.pets().list().iter().map(|p| p.id).collect();
    let order_ids: Vec<i64> = uow.orders().list().iter().map(|o| o.id).collect();
    let usernames: Vec<String> = uow.users().list().into_iter().map(|u| u.username).collect();

    assert_eq!(pet_ids, vec![1, 2, 3]);
    assert_eq!(order_ids, vec![1, 2, 3]);
    assert_eq!(
        usernames,
        vec!["test_username1", "test_username2", "test_username3"]
    );
}

#[test]
fn test_save_then_get_returns_equal_entity() {
    let uow = Persistence::new();
    let saved = uow.pets().save(pet(7, "rex"));

    assert_eq!(uow.pets().get_by_id(7).unwrap(), saved);
}

#[test]
fn test_overwrite_keeps_original_position() {
    let uow = Persistence::seeded();
    uow.pets().save(pet(1, "replaced"));

    let pets = uow.pets().list();
    assert_eq!(pets[0].name, "replaced");
    assert_eq!(pets.len(), 3);
}

#[test]
fn test_status_and_tag_queries_over_seed() {
    let uow = Persistence::seeded();

    let by_status = uow
        .pets()
        .get_by_status(&[PetStatus::Available, PetStatus::Pending]);
    assert_eq!(by_status, vec![uow.pets().get_by_id(1).unwrap(), uow.pets().get_by_id(2).unwrap()]);

    let tags: Vec<String> = ["test_tag1", "test_tag2", "test_tag3", "test_tag4"]
        .iter()
        .map(|t| t.to_string())
        .collect();
    let ids: Vec<i64> = uow.pets().get_by_tags(&tags).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_order_for_deleted_pet_is_rejected() {
    let uow = Persistence::seeded();
    uow.pets().delete_by_id(2).unwrap();

    let mut order = uow.orders().get_by_id(2).unwrap();
    order.quantity = 10;

    let err = uow.orders().update(order).unwrap_err();
    assert_eq!(err, AppError::not_found("There is no pet with id 2"));
    assert_eq!(uow.orders().get_by_id(2).unwrap().quantity, 3);

    // Inventory lookups surface the dangling reference
    assert!(uow
        .orders()
        .get_pets_by_order_status(OrderStatus::Approved)
        .is_err());
}

#[test]
fn test_login_checks_password() {
    let uow = Persistence::seeded();

    assert!(uow.users().login("test_username1", "#Test_password1").is_ok());
    assert!(matches!(
        uow.users().login("test_username1", "wrong"),
        Err(AppError::InvalidCredentials(_))
    ));
    assert!(matches!(
        uow.users().login("ghost", "#Test_password1"),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_concurrent_pet_writers() {
    let uow = Arc::new(Persistence::new());

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let uow = Arc::clone(&uow);
            thread::spawn(move || {
                for round in 0..50 {
                    let id = (worker * 100 + round) as i64;
                    uow.pets().save(pet(id, &format!("pet_{}_{}", worker, round)));
                    // Every worker overwrites the shared id with its own name
                    uow.pets().save(pet(1_000, &format!("shared_{}", worker)));
                    if round % 2 == 1 {
                        uow.pets().delete_by_id(id).unwrap();
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let pets = uow.pets();
    // 8 workers x 25 surviving ids, plus the shared id
    assert_eq!(pets.count(), 8 * 25 + 1);

    for worker in 0..8i64 {
        for round in 0..50i64 {
            let id = worker * 100 + round;
            match pets.get_by_id(id) {
                Ok(found) => {
                    assert_eq!(round % 2, 0);
                    assert_eq!(found.name, format!("pet_{}_{}", worker, round));
                }
                Err(err) => {
                    assert_eq!(round % 2, 1);
                    assert!(matches!(err, AppError::NotFound(_)));
                }
            }
        }
    }

    let shared = pets.get_by_id(1_000).unwrap();
    assert!(shared.name.starts_with("shared_"));
}

#[test]
fn test_concurrent_orders_and_pets() {
    let uow = Arc::new(Persistence::seeded());

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let uow = Arc::clone(&uow);
            thread::spawn(move || {
                for round in 0..25 {
                    let id = 10 + worker * 25 + round;
                    let order = Order {
                        id,
                        pet_id: 1,
                        quantity: 1,
                        ship_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
                            .unwrap()
                            .and_hms_opt(12, 0, 0)
                            .unwrap(),
                        status: OrderStatus::Placed,
                        complete: false,
                    };
                    uow.orders().save(order).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(uow.orders().count(), 3 + 100);
    assert_eq!(
        uow.orders()
            .get_pets_by_order_status(OrderStatus::Placed)
            .unwrap()
            .len(),
        101
    );
}
