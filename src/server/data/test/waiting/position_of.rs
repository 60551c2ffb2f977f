use super::*;

/// Tests queue positions follow submission time.
///
/// Expected: 1-based positions in created_at order regardless of insertion order
#[tokio::test]
async fn ranks_by_created_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first_member, theme, time_slot) = create_slot_dependencies(db).await?;
    let second_member = factory::member::create_member(db).await?;
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    let second = WaitingFactory::new(db, &second_member, &theme, &time_slot)
        .date(tomorrow())
        .created_at(base + Duration::seconds(5))
        .build()
        .await?;
    let first = WaitingFactory::new(db, &first_member, &theme, &time_slot)
        .date(tomorrow())
        .created_at(base)
        .build()
        .await?;

    let repo = WaitingRepository::new(db);

    assert_eq!(repo.position_of(&Waiter::from_entity(first)).await?, 1);
    assert_eq!(repo.position_of(&Waiter::from_entity(second)).await?, 2);

    Ok(())
}

/// Tests the id tie-break for waiters sharing a timestamp.
///
/// Expected: the lower id ranks first
#[tokio::test]
async fn breaks_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first_member, theme, time_slot) = create_slot_dependencies(db).await?;
    let second_member = factory::member::create_member(db).await?;
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    let first = WaitingFactory::new(db, &first_member, &theme, &time_slot)
        .date(tomorrow())
        .created_at(at)
        .build()
        .await?;
    let second = WaitingFactory::new(db, &second_member, &theme, &time_slot)
        .date(tomorrow())
        .created_at(at)
        .build()
        .await?;

    let repo = WaitingRepository::new(db);
    let slot_key = SlotKey {
        date: tomorrow(),
        time_slot_id: time_slot.id,
        theme_id: theme.id,
    };

    assert_eq!(repo.position_of(&Waiter::from_entity(first)).await?, 1);
    assert_eq!(repo.position_of(&Waiter::from_entity(second)).await?, 2);
    assert_eq!(
        repo.position_of_member(slot_key, second_member.id).await?,
        Some(2)
    );

    Ok(())
}

/// Tests that other slot keys do not affect a position.
///
/// Expected: position 1 in each slot key's own queue
#[tokio::test]
async fn ignores_other_slot_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, theme, time_slot) = create_slot_dependencies(db).await?;
    let other_member = factory::member::create_member(db).await?;
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    WaitingFactory::new(db, &other_member, &theme, &time_slot)
        .date(tomorrow() + Duration::days(1))
        .created_at(base)
        .build()
        .await?;
    let mine = WaitingFactory::new(db, &member, &theme, &time_slot)
        .date(tomorrow())
        .created_at(base + Duration::seconds(1))
        .build()
        .await?;

    let repo = WaitingRepository::new(db);

    assert_eq!(repo.position_of(&Waiter::from_entity(mine)).await?, 1);

    Ok(())
}
