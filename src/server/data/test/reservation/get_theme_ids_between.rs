use super::*;

/// Tests collecting theme ids inside an inclusive date window.
///
/// Expected: Ok with one entry per reservation in the window, none outside it
#[tokio::test]
async fn returns_one_entry_per_reservation_in_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, popular, time_slot) = create_slot_dependencies(db).await?;
    let quiet = factory::theme::create_theme(db).await?;
    let second_slot = factory::time_slot::create_time_slot(db).await?;

    let from = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let to = NaiveDate::from_ymd_opt(2024, 5, 7).unwrap();

    factory::reservation::create_reservation(db, &member, &popular, &time_slot, from).await?;
    factory::reservation::create_reservation(db, &member, &popular, &second_slot, to).await?;
    factory::reservation::create_reservation(db, &member, &quiet, &time_slot, to).await?;
    factory::reservation::create_reservation(
        db,
        &member,
        &quiet,
        &time_slot,
        to + Duration::days(1),
    )
    .await?;

    let repo = ReservationRepository::new(db);
    let mut ids = repo.get_theme_ids_between(from, to).await?;
    ids.sort();

    let mut expected = vec![popular.id, popular.id, quiet.id];
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}
