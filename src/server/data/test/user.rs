use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use entity::sea_orm_active_enums::UserType;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

fn param(username: &str) -> CreateUserParam {
    CreateUserParam {
        username: username.to_string(),
        password: "secret".to_string(),
        first_name: "First".to_string(),
        last_name: "Last".to_string(),
        email_address: "email@example.org".to_string(),
        user_type: UserType::Public,
        enabled: true,
        valid_to: None,
        description: String::new(),
    }
}

/// Tests creating a user and reading it back by ID and username.
///
/// Expected: Ok with the stored fields returned by both lookups
#[tokio::test]
async fn creates_and_finds_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let id = repo.create(param("buyer")).await?;

    let by_id = repo.find_by_id(id).await?.unwrap();
    assert_eq!(by_id.username, "buyer");
    assert_eq!(by_id.user_type, UserType::Public);
    assert!(by_id.is_public());

    let by_name = repo.find_by_username("buyer").await?.unwrap();
    assert_eq!(by_name.id, id);

    assert!(repo.find_by_username("nobody").await?.is_none());

    Ok(())
}

/// Tests that usernames are unique.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("buyer")).await?;

    assert!(repo.create(param("buyer")).await.is_err());

    Ok(())
}

/// Tests linking a user to an organization.
///
/// Expected: the organization is listed for the user
#[tokio::test]
async fn links_user_to_organization() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;
    let user = factory::user::create_user_with_type(db, UserType::Internal).await?;

    let repo = UserRepository::new(db);
    repo.link_to_organization(user.id, organization.id).await?;

    assert_eq!(repo.find_organization_ids(user.id).await?, vec![organization.id]);

    Ok(())
}
