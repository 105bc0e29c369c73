//! User service tests over a unit of work holding only a user store.

use std::sync::Arc;

use petstore::domain::User;
use petstore::errors::AppError;
use petstore::infra::seed;
use petstore::infra::{
    OrderRepository, OrderStore, PetRepository, PetStore, UnitOfWork, UserRepository, UserStore,
};
use petstore::services::{UserManager, UserService};

fn create_test_user(id: i64, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: "test.user@email.com".to_string(),
        password: "#Test_password9".to_string(),
        phone: "0721 123 456".to_string(),
        user_status: 0,
    }
}

/// Unit of Work with seeded users and empty pet and order stores
struct TestUnitOfWork {
    pet_repo: Arc<PetStore>,
    order_repo: Arc<OrderStore>,
    user_repo: Arc<UserStore>,
}

impl TestUnitOfWork {
    fn new() -> Self {
        let pet_repo = Arc::new(PetStore::new());
        Self {
            order_repo: Arc::new(OrderStore::new(pet_repo.clone())),
            pet_repo,
            user_repo: Arc::new(UserStore::with_users(seed::users())),
        }
    }
}

impl UnitOfWork for TestUnitOfWork {
    fn pets(&self) -> Arc<dyn PetRepository> {
        self.pet_repo.clone()
    }

    fn orders(&self) -> Arc<dyn OrderRepository> {
        self.order_repo.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }
}

fn service() -> UserManager<TestUnitOfWork> {
    UserManager::new(Arc::new(TestUnitOfWork::new()))
}

#[tokio::test]
async fn test_get_user_success() {
    let user = service().get_user(2).await.unwrap();
    assert_eq!(user.username, "test_username2");
}

#[tokio::test]
async fn test_get_user_not_found() {
    let result = service().get_user(99).await;
    assert_eq!(
        result.unwrap_err(),
        AppError::not_found("There is no user with id 99")
    );
}

#[tokio::test]
async fn test_list_users_success() {
    let users = service().list_users().await.unwrap();
    assert_eq!(users.len(), 3);
}

#[tokio::test]
async fn test_save_users_keeps_order() {
    let service = service();
    let saved = service
        .save_users(vec![create_test_user(5, "five"), create_test_user(4, "four")])
        .await
        .unwrap();
    assert_eq!(saved.len(), 2);

    let ids: Vec<i64> = service
        .list_users()
        .await
        .unwrap()
        .iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 5, 4]);
}

#[tokio::test]
async fn test_duplicate_username_resolves_first_match() {
    let service = service();
    service
        .save_user(create_test_user(8, "test_username1"))
        .await
        .unwrap();

    let found = service.get_by_username("test_username1").await.unwrap();
    assert_eq!(found.id, 1);
}

#[tokio::test]
async fn test_update_by_username_keeps_id() {
    let service = service();
    let updated = service
        .update_by_username(create_test_user(40, "renamed"), "test_username3")
        .await
        .unwrap();

    assert_eq!(updated.id, 3);
    assert_eq!(service.get_user(3).await.unwrap().username, "renamed");
}

#[tokio::test]
async fn test_delete_user_success() {
    let service = service();
    service.delete_by_username("test_username1").await.unwrap();

    assert!(matches!(
        service.get_user(1).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete_user(1).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_login_and_logout() {
    let service = service();

    assert_eq!(
        service
            .login("test_username1", "#Test_password1")
            .await
            .unwrap(),
        "Logged in successfully"
    );
    assert!(matches!(
        service.login("test_username1", "#Test_password2").await,
        Err(AppError::InvalidCredentials(_))
    ));
    assert_eq!(service.logout().await.unwrap(), "Logged out successfully");
}
