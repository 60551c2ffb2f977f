use super::*;
use crate::server::service::member::MemberService;

/// Tests an admin passing the admin check.
///
/// Expected: Ok(Member) with the admin role
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::member::create_admin(db).await?;
    AuthSession::new(session).set_member_id(admin.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let returned = auth_guard.require(&[Permission::Admin]).await?;

    assert_eq!(returned.id, admin.id);
    assert!(returned.role.is_admin());

    Ok(())
}

/// Tests a regular member failing the admin check.
///
/// Expected: Err(AuthError::AccessDenied) naming the member
#[tokio::test]
async fn denies_access_to_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let member = factory::member::create_member(db).await?;
    AuthSession::new(session).set_member_id(member.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Admin]).await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(member_id, message))) => {
            assert_eq!(member_id, member.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests the administrator ensured at startup passing the admin check.
///
/// Expected: Ok(Member) for the ensured account
#[tokio::test]
async fn grants_access_to_ensured_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = MemberService::new(db)
        .ensure_admin("admin@roomescape.test", "open sesame")
        .await?;
    AuthSession::new(session).set_member_id(admin.id).await?;

    let returned = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(returned, admin);

    Ok(())
}
