//! Reservation flow of a public user signed in through the public login.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Duration;
use entity::sea_orm_active_enums::{TicketAccessType, TicketStatus, UserType};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use std::sync::Arc;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower_sessions::Session;
use uuid::Uuid;

use super::{
    cancel, confirm, read_json, reserve, test_basic_flow, ReservationFlow, ReservationFlowContext,
    URL_CODE_HIDDEN,
};
use crate::{
    model::reservation::{ReservationDto, ReservationSummaryDto},
    server::{
        controller::user::get_user_reservations,
        data::{
            configuration::ConfigurationRepository, ticket::TicketRepository,
            user::UserRepository,
        },
        error::AppError,
        middleware::session::AuthSession,
        model::{
            configuration::ConfigurationKey,
            event::DateTimeModification,
            ticket_category::CreateTicketCategoryParam,
            user::CreateUserParam,
        },
        state::AppState,
        test::util::{init_event, test_now, test_state, AVAILABLE_SEATS},
        util::clock::{Clock, FixedClock},
    },
};

struct AuthenticatedUserFlow {
    test: TestContext,
    state: AppState,
    clock: Arc<FixedClock>,
}

impl AuthenticatedUserFlow {
    async fn new() -> Self {
        let mut test = TestBuilder::new()
            .with_reservation_tables()
            .build()
            .await
            .unwrap();
        let db = test.database().await.unwrap().clone();
        let clock = Arc::new(FixedClock::new(test_now()));
        let state = test_state(&db, clock.clone());

        Self { test, state, clock }
    }

    async fn insert_public_user(&self) -> Result<(i32, String), AppError> {
        let username = Uuid::new_v4().to_string();
        let id = UserRepository::new(&self.state.db)
            .create(CreateUserParam {
                username: username.clone(),
                password: Uuid::new_v4().to_string(),
                first_name: "First".to_string(),
                last_name: "Last".to_string(),
                email_address: "email@example.org".to_string(),
                user_type: UserType::Public,
                enabled: true,
                valid_to: None,
                description: String::new(),
            })
            .await?;

        Ok((id, username))
    }

    async fn list_reservations(&self, session: Session) -> Response {
        get_user_reservations(State(self.state.clone()), session)
            .await
            .into_response()
    }
}

impl ReservationFlow for AuthenticatedUserFlow {
    fn state(&self) -> &AppState {
        &self.state
    }

    async fn init(&mut self) -> Result<(), AppError> {
        self.insert_public_user().await?;
        ConfigurationRepository::new(&self.state.db)
            .insert(
                ConfigurationKey::OpenIdPublicEnabled,
                "true",
                "Openid is enabled for this test",
            )
            .await?;

        Ok(())
    }

    async fn create_context(&mut self) -> Result<ReservationFlowContext, AppError> {
        let now = self.clock.now();
        let inception = DateTimeModification::from_utc(now - Duration::days(1));
        let expiration = DateTimeModification::from_utc(now + Duration::days(1));

        let categories = vec![
            CreateTicketCategoryParam {
                name: "default".to_string(),
                access_type: TicketAccessType::Inherit,
                max_tickets: AVAILABLE_SEATS,
                inception,
                expiration,
                price_cts: 1000,
                hidden: false,
                access_restricted: false,
                code: None,
            },
            CreateTicketCategoryParam {
                name: "hidden".to_string(),
                access_type: TicketAccessType::Inherit,
                max_tickets: 2,
                inception,
                expiration,
                price_cts: 100,
                hidden: true,
                access_restricted: true,
                code: Some(URL_CODE_HIDDEN.to_string()),
            },
        ];

        let (event, username) = init_event(&self.state, categories).await?;
        let (public_user_id, public_username) = self.insert_public_user().await?;

        Ok(ReservationFlowContext {
            event,
            user_id: format!("{}_owner", username),
            check_in_steward_id: None,
            api_key: None,
            public_username,
            public_user_id,
            check_authenticated: true,
        })
    }

    async fn anonymous_session(&mut self) -> Result<Session, AppError> {
        Ok(self.test.new_session().await.unwrap())
    }

    async fn public_session(
        &mut self,
        context: &ReservationFlowContext,
    ) -> Result<Session, AppError> {
        let session = self.test.new_session().await.unwrap();
        AuthSession::new(&session)
            .set_user_id(context.public_user_id)
            .await?;

        Ok(session)
    }

    async fn perform_additional_tests(
        &mut self,
        context: &ReservationFlowContext,
    ) -> Result<(), AppError> {
        let session = self.public_session(context).await?;
        let response = self.list_reservations(session).await;

        assert_eq!(response.status(), StatusCode::OK);
        let reservations: Vec<ReservationSummaryDto> = read_json(response).await;
        assert!(!reservations.is_empty());
        assert_eq!(reservations.len(), 1);

        Ok(())
    }
}

/// Runs the full purchase flow as a signed-in public user.
///
/// Expected: only the confirmed reservation of the public user is listed; the anonymous
/// purchase and the cancelled reservation are not
#[tokio::test]
async fn reservation_flow_as_authenticated_user() -> Result<(), AppError> {
    let mut flow = AuthenticatedUserFlow::new().await;

    test_basic_flow(&mut flow).await
}

/// Tests the context built for the flow.
///
/// Expected: owner derived from the organizer, buyer is a second public user distinct from
/// the one created by `init`
#[tokio::test]
async fn context_references_second_public_user() -> Result<(), AppError> {
    let mut flow = AuthenticatedUserFlow::new().await;
    flow.init().await?;
    let context = flow.create_context().await?;

    assert!(context.user_id.ends_with("_owner"));
    assert!(context.user_id.starts_with("organizer-"));
    assert!(context.check_in_steward_id.is_none());
    assert!(context.api_key.is_none());
    assert!(context.check_authenticated);

    let user = UserRepository::new(&flow.state.db)
        .find_by_id(context.public_user_id)
        .await?
        .unwrap();
    assert_eq!(user.username, context.public_username);
    assert!(user.is_public());

    let public_users = entity::prelude::User::find()
        .filter(entity::user::Column::UserType.eq(UserType::Public))
        .count(&flow.state.db)
        .await?;
    assert_eq!(public_users, 2);

    Ok(())
}

/// Tests the categories persisted for the flow.
///
/// Expected: a visible default category of `AVAILABLE_SEATS` tickets at 10.00 and a hidden,
/// restricted category of 2 tickets at 1.00, both on sale one day around the clock and
/// every seat free
#[tokio::test]
async fn context_categories_match_fixture() -> Result<(), AppError> {
    let mut flow = AuthenticatedUserFlow::new().await;
    flow.init().await?;
    let context = flow.create_context().await?;

    let categories = entity::prelude::TicketCategory::find()
        .filter(entity::ticket_category::Column::EventId.eq(context.event.id))
        .all(&flow.state.db)
        .await?;
    assert_eq!(categories.len(), 2);

    let now = flow.clock.now();
    for category in &categories {
        assert_eq!(category.access_type, TicketAccessType::Inherit);
        assert_eq!(category.inception, now - Duration::days(1));
        assert_eq!(category.expiration, now + Duration::days(1));
    }

    let default = categories
        .iter()
        .find(|category| category.name == "default")
        .unwrap();
    assert_eq!(default.max_tickets, AVAILABLE_SEATS);
    assert_eq!(default.price_cts, 1000);
    assert!(!default.hidden);
    assert!(!default.access_restricted);
    assert!(default.code.is_none());

    let hidden = categories
        .iter()
        .find(|category| category.name == "hidden")
        .unwrap();
    assert_eq!(hidden.max_tickets, 2);
    assert_eq!(hidden.price_cts, 100);
    assert!(hidden.hidden);
    assert!(hidden.access_restricted);
    assert_eq!(hidden.code.as_deref(), Some(URL_CODE_HIDDEN));

    assert_eq!(context.event.available_seats, AVAILABLE_SEATS);
    assert_eq!(
        TicketRepository::new(&flow.state.db)
            .count_by_status(context.event.id, TicketStatus::Free)
            .await?,
        (AVAILABLE_SEATS + 2) as u64
    );

    Ok(())
}

/// Tests that initializing twice fails on the configuration key.
///
/// Expected: Err from the second `init`
#[tokio::test]
async fn init_twice_fails_on_duplicate_configuration() -> Result<(), AppError> {
    let mut flow = AuthenticatedUserFlow::new().await;
    flow.init().await?;

    let result = flow.init().await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

/// Tests the reservation history requires public login and a signed-in user.
///
/// Expected: 403 before `init`, 401 without a session user, 200 once signed in
#[tokio::test]
async fn user_reservations_require_public_login() -> Result<(), AppError> {
    let mut flow = AuthenticatedUserFlow::new().await;
    let (public_user_id, _) = flow.insert_public_user().await?;

    let anonymous = flow.anonymous_session().await?;
    let response = flow.list_reservations(anonymous.clone()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    flow.init().await?;
    let response = flow.list_reservations(anonymous).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let session = flow.anonymous_session().await?;
    AuthSession::new(&session).set_user_id(public_user_id).await?;
    let response = flow.list_reservations(session).await;
    assert_eq!(response.status(), StatusCode::OK);
    let reservations: Vec<ReservationSummaryDto> = read_json(response).await;
    assert!(reservations.is_empty());

    Ok(())
}

/// Tests a pending reservation cannot be confirmed once its validity passed.
///
/// Expected: 410 Gone after the clock moved past the reservation timeout
#[tokio::test]
async fn expired_reservation_cannot_be_confirmed() -> Result<(), AppError> {
    let mut flow = AuthenticatedUserFlow::new().await;
    flow.init().await?;
    let context = flow.create_context().await?;
    let session = flow.public_session(&context).await?;

    let categories = entity::prelude::TicketCategory::find()
        .filter(entity::ticket_category::Column::EventId.eq(context.event.id))
        .filter(entity::ticket_category::Column::Hidden.eq(false))
        .all(&flow.state.db)
        .await?;

    let response = reserve(
        &flow.state,
        &session,
        &context.event.short_name,
        categories[0].id,
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let reservation: ReservationDto = read_json(response).await;

    flow.clock.advance(Duration::minutes(26));

    let response = confirm(&flow.state, &session, &reservation.id).await;
    assert_eq!(response.status(), StatusCode::GONE);

    Ok(())
}

/// Tests another visitor cannot act on the public user's reservation.
///
/// Expected: 403 on confirm and cancel from an anonymous session, 204 for the owner
#[tokio::test]
async fn reservation_of_public_user_needs_its_session() -> Result<(), AppError> {
    let mut flow = AuthenticatedUserFlow::new().await;
    flow.init().await?;
    let context = flow.create_context().await?;
    let session = flow.public_session(&context).await?;
    let anonymous = flow.anonymous_session().await?;

    let categories = entity::prelude::TicketCategory::find()
        .filter(entity::ticket_category::Column::EventId.eq(context.event.id))
        .filter(entity::ticket_category::Column::Hidden.eq(false))
        .all(&flow.state.db)
        .await?;

    let response = reserve(
        &flow.state,
        &session,
        &context.event.short_name,
        categories[0].id,
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let reservation: ReservationDto = read_json(response).await;

    let response = confirm(&flow.state, &anonymous, &reservation.id).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let response = cancel(&flow.state, &anonymous, &reservation.id).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = cancel(&flow.state, &session, &reservation.id).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    Ok(())
}
