//! Sample records loaded into the stores at startup.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::{Category, Order, OrderStatus, Pet, PetStatus, Tag, User};

fn tag(id: i64, name: &str) -> Tag {
    Tag {
        id,
        name: name.to_string(),
    }
}

fn pet(id: i64, category: (i64, &str), urls: [&str; 2], tags: [Tag; 2], status: PetStatus) -> Pet {
    Pet {
        id,
        name: format!("test_pet{}", id),
        category: Category {
            id: category.0,
            name: category.1.to_string(),
        },
        photo_urls: urls.iter().map(|url| url.to_string()).collect(),
        tags: tags.to_vec(),
        status,
    }
}

/// Midnight on 2000-01-`day`
fn ship_date(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2000, 1, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

pub fn pets() -> Vec<Pet> {
    vec![
        pet(
            1,
            (1, "test_category1"),
            ["https://www.test_url1.jpg", "https://www.test_url2.jpg"],
            [tag(1, "test_tag1"), tag(2, "test_tag2")],
            PetStatus::Available,
        ),
        pet(
            2,
            (2, "test_category2"),
            ["https://www.test_url3.jpg", "https://www.test_url4.jpg"],
            [tag(1, "test_tag3"), tag(2, "test_tag4")],
            PetStatus::Pending,
        ),
        pet(
            3,
            (1, "test_category3"),
            ["https://www.test_url5.jpg", "https://www.test_url6.jpg"],
            [tag(1, "test_tag5"), tag(2, "test_tag6")],
            PetStatus::Sold,
        ),
    ]
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: 1,
            pet_id: 1,
            quantity: 2,
            ship_date: ship_date(1),
            status: OrderStatus::Placed,
            complete: true,
        },
        Order {
            id: 2,
            pet_id: 2,
            quantity: 3,
            ship_date: ship_date(2),
            status: OrderStatus::Approved,
            complete: false,
        },
        Order {
            id: 3,
            pet_id: 3,
            quantity: 2,
            ship_date: ship_date(3),
            status: OrderStatus::Delivered,
            complete: true,
        },
    ]
}

pub fn users() -> Vec<User> {
    (1..=3)
        .map(|n| User {
            id: n,
            username: format!("test_username{}", n),
            first_name: format!("test_firstname{}", n),
            last_name: format!("test_lastname{}", n),
            email: format!("test_email{}@email.com", n),
            password: format!("#Test_password{}", n),
            phone: format!("+40700 000 00{}", n),
            user_status: n as i32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_fixtures_are_valid() {
        assert!(pets().iter().all(|p| p.validate().is_ok()));
        assert!(orders().iter().all(|o| o.validate().is_ok()));
        assert!(users().iter().all(|u| u.validate().is_ok()));
    }

    #[test]
    fn test_orders_reference_seeded_pets() {
        let pet_ids: Vec<i64> = pets().iter().map(|p| p.id).collect();
        assert!(orders().iter().all(|o| pet_ids.contains(&o.pet_id)));
    }

    #[test]
    fn test_ship_dates() {
        assert_eq!(orders()[2].ship_date.to_string(), "2000-01-03 00:00:00");
    }
}
