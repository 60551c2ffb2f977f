use super::*;
use sea_orm::SqlErr;

/// Tests inserting a reservation and finding it by slot key.
///
/// Expected: Ok with the payment info stored alongside the slot key
#[tokio::test]
async fn creates_reservation_with_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, theme, time_slot) = create_slot_dependencies(db).await?;
    let slot_key = SlotKey {
        date: tomorrow(),
        time_slot_id: time_slot.id,
        theme_id: theme.id,
    };

    let repo = ReservationRepository::new(db);
    let created = repo
        .create(CreateReservationParam {
            slot_key,
            member_id: member.id,
            payment: PaymentInfo {
                payment_key: "pk_1".to_string(),
                order_id: "order_1".to_string(),
                amount: 21_000,
            },
        })
        .await?;

    let found = repo.find_by_slot_key(slot_key).await?.unwrap();

    assert_eq!(found, created);
    assert_eq!(found.payment.amount, 21_000);
    assert!(repo.exists_for_member(slot_key, member.id).await?);

    Ok(())
}

/// Tests that the slot key index rejects a second booking.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_second_booking_for_slot_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, theme, time_slot) = create_slot_dependencies(db).await?;
    let other = factory::member::create_member(db).await?;
    factory::reservation::create_reservation(db, &member, &theme, &time_slot, tomorrow()).await?;

    let repo = ReservationRepository::new(db);
    let result = repo
        .create(CreateReservationParam {
            slot_key: SlotKey {
                date: tomorrow(),
                time_slot_id: time_slot.id,
                theme_id: theme.id,
            },
            member_id: other.id,
            payment: PaymentInfo {
                payment_key: "pk_2".to_string(),
                order_id: "order_2".to_string(),
                amount: 1000,
            },
        })
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests the booked time slot lookup used by availability.
///
/// Expected: Ok with only the slot booked for that theme and date
#[tokio::test]
async fn returns_booked_time_slot_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, theme, booked) = create_slot_dependencies(db).await?;
    let free = factory::time_slot::create_time_slot(db).await?;
    let other_theme = factory::theme::create_theme(db).await?;

    factory::reservation::create_reservation(db, &member, &theme, &booked, tomorrow()).await?;
    factory::reservation::create_reservation(db, &member, &other_theme, &free, tomorrow()).await?;

    let repo = ReservationRepository::new(db);
    let ids = repo.get_booked_time_slot_ids(tomorrow(), theme.id).await?;

    assert_eq!(ids, vec![booked.id]);

    Ok(())
}
