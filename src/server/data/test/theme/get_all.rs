use super::*;

/// Tests listing themes.
///
/// Expected: Ok with every theme ordered by id
#[tokio::test]
async fn returns_themes_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Theme).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::theme::create_theme(db).await?;
    let second = factory::theme::create_theme(db).await?;

    let repo = ThemeRepository::new(db);
    let themes = repo.get_all().await?;

    let ids: Vec<i32> = themes.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests fetching themes by id with an empty id list.
///
/// Expected: Ok with no themes and no query error
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Theme).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::theme::create_theme(db).await?;

    let repo = ThemeRepository::new(db);
    let themes = repo.get_by_ids(Vec::new()).await?;

    assert!(themes.is_empty());

    Ok(())
}
