use crate::server::{
    data::{event::EventRepository, ticket_category::TicketCategoryRepository},
    model::{
        event::{CreateEventParam, DateTimeModification},
        ticket_category::CreateTicketCategoryParam,
    },
};
use chrono::{Duration, TimeZone, Utc};
use entity::sea_orm_active_enums::TicketAccessType;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests creating an event and finding it by short name.
///
/// Expected: Ok with the event returned by both lookups
#[tokio::test]
async fn creates_and_finds_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;
    let begin = Utc.with_ymd_and_hms(2030, 1, 1, 10, 0, 0).unwrap();

    let repo = EventRepository::new(db);
    let event = repo
        .create(&CreateEventParam {
            organization_id: organization.id,
            short_name: "concert".to_string(),
            display_name: "Concert".to_string(),
            currency: "CHF".to_string(),
            available_seats: 10,
            begin,
            end: begin + Duration::hours(3),
            categories: Vec::new(),
        })
        .await?;

    let found = repo.find_by_short_name("concert").await?.unwrap();
    assert_eq!(found, event);
    assert_eq!(repo.find_by_id(event.id).await?, Some(event));
    assert!(repo.find_by_short_name("missing").await?.is_none());

    Ok(())
}

/// Tests that categories are resolved per event and their window stored in UTC.
///
/// Expected: category found for its own event only
#[tokio::test]
async fn finds_category_of_event_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (organization, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let other = factory::event::EventFactory::new(db, organization.id)
        .build()
        .await?;

    let inception = Utc.with_ymd_and_hms(2030, 1, 1, 9, 30, 0).unwrap();
    let repo = TicketCategoryRepository::new(db);
    let category = repo
        .create(
            event.id,
            &CreateTicketCategoryParam {
                name: "default".to_string(),
                access_type: TicketAccessType::Inherit,
                max_tickets: 5,
                inception: DateTimeModification::from_utc(inception),
                expiration: DateTimeModification::from_utc(inception + Duration::days(2)),
                price_cts: 1000,
                hidden: false,
                access_restricted: false,
                code: None,
            },
        )
        .await?;

    assert_eq!(category.inception, inception);
    assert!(repo.find_by_id(event.id, category.id).await?.is_some());
    assert!(repo.find_by_id(other.id, category.id).await?.is_none());
    assert_eq!(repo.find_by_event(event.id).await?, vec![category]);
    assert!(repo.find_by_event(other.id).await?.is_empty());

    Ok(())
}
