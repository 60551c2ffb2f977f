use super::*;
use sea_orm::SqlErr;

fn param(name: &str) -> CreateThemeParam {
    CreateThemeParam {
        name: name.to_string(),
        description: "A locked study".to_string(),
        thumbnail: "https://img.roomescape.test/study.png".to_string(),
    }
}

/// Tests creating a theme.
///
/// Expected: Ok with the stored fields and an assigned id
#[tokio::test]
async fn creates_theme() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Theme).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ThemeRepository::new(db);
    let theme = repo.create(param("Study")).await?;

    assert!(theme.id > 0);
    assert_eq!(theme.name, "Study");
    assert_eq!(theme.description, "A locked study");

    Ok(())
}

/// Tests that theme names are unique.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Theme).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ThemeRepository::new(db);
    repo.create(param("Study")).await?;
    let result = repo.create(param("Study")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests the name existence check.
///
/// Expected: true for a stored name, false otherwise
#[tokio::test]
async fn checks_name_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Theme).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let theme = factory::theme::create_theme(db).await?;

    let repo = ThemeRepository::new(db);
    assert!(repo.exists_by_name(&theme.name).await?);
    assert!(!repo.exists_by_name("Nonexistent").await?);

    Ok(())
}
