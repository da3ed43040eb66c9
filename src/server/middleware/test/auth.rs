use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
};
use entity::sea_orm_active_enums::UserType;
use test_utils::{builder::TestBuilder, factory};

/// Tests a public user passes when public login is enabled.
///
/// Expected: Ok(User) with the session user
#[tokio::test]
async fn grants_access_to_public_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::create_configuration(db, "OPENID_PUBLIC_ENABLED", "true").await?;
    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let guard = AuthGuard::new(db, session);
    let result = guard
        .require(&[Permission::PublicLogin, Permission::PublicUser])
        .await?;

    assert_eq!(result.id, user.id);
    assert_eq!(result.username, user.username);

    Ok(())
}

/// Tests public login must be enabled, even for anonymous visitors.
///
/// Expected: Err(AuthError::PublicLoginDisabled)
#[tokio::test]
async fn denies_access_when_public_login_disabled() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let guard = AuthGuard::new(db, session);
    let result = guard.require(&[Permission::PublicLogin]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::PublicLoginDisabled))
    ));

    AuthSession::new(session).clear().await;
    let result = guard.require(&[Permission::PublicLogin]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::PublicLoginDisabled))
    ));

    Ok(())
}

/// Tests a disabled flag value also denies access.
///
/// Expected: Err(AuthError::PublicLoginDisabled)
#[tokio::test]
async fn denies_access_when_flag_is_false() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::create_configuration(db, "OPENID_PUBLIC_ENABLED", "false").await?;
    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::PublicLogin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::PublicLoginDisabled))
    ));

    Ok(())
}

/// Tests an empty session is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_access_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::create_configuration(db, "OPENID_PUBLIC_ENABLED", "true").await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::PublicLogin, Permission::PublicUser])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a missing user.
///
/// Expected: Err(AuthError::UserNotInDatabase) from `require`, None from `optional`
#[tokio::test]
async fn handles_session_user_missing_from_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(4242).await?;

    let guard = AuthGuard::new(db, session);
    let result = guard.require(&[]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));
    assert!(guard.optional().await?.is_none());

    Ok(())
}

/// Tests organizers and disabled users are not public users.
///
/// Expected: Err(AuthError::NotPublicUser) for both
#[tokio::test]
async fn denies_access_to_non_public_users() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let organizer = factory::user::create_user_with_type(db, UserType::Internal).await?;
    let disabled = factory::user::UserFactory::new(db)
        .enabled(false)
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    let guard = AuthGuard::new(db, session);

    for user in [organizer, disabled] {
        auth_session.set_user_id(user.id).await?;
        let result = guard.require(&[Permission::PublicUser]).await;

        match result {
            Err(AppError::AuthErr(AuthError::NotPublicUser(id))) => assert_eq!(id, user.id),
            other => panic!("Expected NotPublicUser error, got: {:?}", other.map(|u| u.id)),
        }
    }

    Ok(())
}

/// Tests `optional` for anonymous and signed-in sessions.
///
/// Expected: None, then the signed-in user
#[tokio::test]
async fn optional_resolves_user_if_present() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let guard = AuthGuard::new(db, session);
    assert!(guard.optional().await?.is_none());

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let resolved = guard.optional().await?.unwrap();
    assert_eq!(resolved.id, user.id);

    Ok(())
}
