use super::*;

/// Tests loading a member and stored hash by email.
///
/// Expected: Ok(Some) with the stored password column
#[tokio::test]
async fn returns_member_with_password() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::member::MemberFactory::new(db)
        .email("mint@roomescape.test")
        .password("stored-hash")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let (member, password) = repo
        .find_with_password_by_email("mint@roomescape.test")
        .await?
        .unwrap();

    assert_eq!(member.id, stored.id);
    assert_eq!(password, "stored-hash");

    Ok(())
}

/// Tests lookup with an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::create_member(db).await?;

    let repo = MemberRepository::new(db);
    let result = repo
        .find_with_password_by_email("nobody@roomescape.test")
        .await?;

    assert!(result.is_none());

    Ok(())
}
