use super::*;

/// Tests searching with no filters.
///
/// Expected: Ok with every reservation ordered by date
#[tokio::test]
async fn returns_all_without_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, theme, time_slot) = create_slot_dependencies(db).await?;
    let later = factory::reservation::create_reservation(
        db,
        &member,
        &theme,
        &time_slot,
        tomorrow() + Duration::days(3),
    )
    .await?;
    let earlier =
        factory::reservation::create_reservation(db, &member, &theme, &time_slot, tomorrow())
            .await?;

    let repo = ReservationRepository::new(db);
    let results = repo.search(ReservationFilter::default()).await?;

    let ids: Vec<i32> = results.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);

    Ok(())
}

/// Tests combining the theme, member and inclusive date range filters.
///
/// Expected: Ok with only reservations matching every filter
#[tokio::test]
async fn applies_every_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, theme, time_slot) = create_slot_dependencies(db).await?;
    let other_member = factory::member::create_member(db).await?;
    let other_theme = factory::theme::create_theme(db).await?;
    let start = tomorrow();

    let matching =
        factory::reservation::create_reservation(db, &member, &theme, &time_slot, start).await?;
    let at_upper_bound = factory::reservation::create_reservation(
        db,
        &member,
        &theme,
        &time_slot,
        start + Duration::days(2),
    )
    .await?;
    factory::reservation::create_reservation(
        db,
        &member,
        &theme,
        &time_slot,
        start + Duration::days(3),
    )
    .await?;
    factory::reservation::create_reservation(
        db,
        &other_member,
        &theme,
        &time_slot,
        start + Duration::days(1),
    )
    .await?;
    factory::reservation::create_reservation(db, &member, &other_theme, &time_slot, start).await?;

    let repo = ReservationRepository::new(db);
    let results = repo
        .search(ReservationFilter {
            theme_id: Some(theme.id),
            member_id: Some(member.id),
            date_from: Some(start),
            date_to: Some(start + Duration::days(2)),
        })
        .await?;

    let ids: Vec<i32> = results.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![matching.id, at_upper_bound.id]);

    Ok(())
}
