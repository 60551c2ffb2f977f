use super::*;
use crate::server::model::reservation::{MyReservationStatus, ReservationFilter};

/// Tests a member's history mixing bookings and waiting entries.
///
/// Expected: entries ordered by date, waiting entries with their position
#[tokio::test]
async fn lists_member_bookings_and_waiting() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, theme, time_slot) = factory::helpers::create_slot_dependencies(db).await?;
    let other = factory::member::create_member(db).await?;
    let later = SlotKey {
        date: tomorrow() + Duration::days(2),
        ..slot_key(&theme, &time_slot)
    };
    let sooner = slot_key(&theme, &time_slot);

    let payment = StubPaymentClient::new();
    let service = ReservationService::new(db, &payment);

    service.create(booking(&member, later, "pk_later")).await?;
    service.create(booking(&other, sooner, "pk_other")).await?;
    service.create(booking(&member, sooner, "pk_sooner")).await?;

    let history = service.list_for_member(member.id).await?;

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].date, sooner.date);
    assert_eq!(history[0].theme_name, theme.name);
    assert_eq!(history[0].time, time_slot.time);
    assert_eq!(history[0].status, MyReservationStatus::Waiting { position: 1 });
    assert_eq!(history[1].date, later.date);
    assert!(matches!(
        &history[1].status,
        MyReservationStatus::Booked(info) if info.payment_key == "pk_later"
    ));

    Ok(())
}

/// Tests the admin listing with a member filter.
///
/// Expected: only that member's reservations, with references loaded
#[tokio::test]
async fn lists_all_with_filter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, theme, time_slot) = factory::helpers::create_slot_dependencies(db).await?;
    let other = factory::member::create_member(db).await?;
    let other_theme = factory::theme::create_theme(db).await?;

    let mine =
        factory::reservation::create_reservation(db, &member, &theme, &time_slot, tomorrow())
            .await?;
    factory::reservation::create_reservation(db, &other, &other_theme, &time_slot, tomorrow())
        .await?;

    let payment = StubPaymentClient::new();
    let service = ReservationService::new(db, &payment);

    let all = service.list_all(ReservationFilter::default()).await?;
    assert_eq!(all.len(), 2);

    let filtered = service
        .list_all(ReservationFilter {
            member_id: Some(member.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, mine.id);
    assert_eq!(filtered[0].member.id, member.id);
    assert_eq!(filtered[0].theme.name, theme.name);
    assert_eq!(filtered[0].time_slot.id, time_slot.id);

    Ok(())
}

/// Tests the admin waiting list.
///
/// Expected: every waiter in queue order with references loaded
#[tokio::test]
async fn lists_all_waiters_in_queue_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (booker, theme, time_slot) = factory::helpers::create_slot_dependencies(db).await?;
    let first = factory::member::create_member(db).await?;
    let second = factory::member::create_member(db).await?;
    let key = slot_key(&theme, &time_slot);

    let payment = StubPaymentClient::new();
    let service = ReservationService::new(db, &payment);

    service.create(booking(&booker, key, "pk_booker")).await?;
    service.create(booking(&first, key, "pk_first")).await?;
    service.create(booking(&second, key, "pk_second")).await?;

    let waiters = service.list_waiters().await?;

    let members: Vec<i32> = waiters.iter().map(|w| w.member.id).collect();
    assert_eq!(members, vec![first.id, second.id]);
    assert_eq!(waiters[0].theme.id, theme.id);

    Ok(())
}
