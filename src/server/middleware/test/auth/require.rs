use super::*;

mod require_admin;

/// Tests a request without a member in the session.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_missing_session_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a member that does not exist.
///
/// Expected: Err(AuthError::UserNotInDatabase) with the stale id
#[tokio::test]
async fn denies_unknown_session_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_member_id(404).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}

/// Tests an empty permission list.
///
/// Expected: Ok(Member) for any logged-in member
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let member = factory::member::create_member(db).await?;
    AuthSession::new(session).set_member_id(member.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let returned = auth_guard.require(&[]).await?;

    assert_eq!(returned.id, member.id);
    assert_eq!(returned.role, Role::Member);

    Ok(())
}
