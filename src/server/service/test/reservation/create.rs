use super::*;
use crate::server::error::{payment::PaymentError, reservation::ReservationError};

/// Tests booking a free slot key.
///
/// Expected: Booked with the confirmed payment, one gateway call
#[tokio::test]
async fn books_free_slot_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, theme, time_slot) = factory::helpers::create_slot_dependencies(db).await?;
    let key = slot_key(&theme, &time_slot);

    let payment = StubPaymentClient::new();
    let service = ReservationService::new(db, &payment);
    let outcome = service.create(booking(&member, key, "pk_m1")).await?;

    let reservation = match outcome {
        BookingOutcome::Booked(reservation) => reservation,
        other => panic!("expected a booked outcome, got {:?}", other),
    };
    assert_eq!(reservation.member_id, member.id);
    assert_eq!(reservation.payment.payment_key, "pk_m1");
    assert_eq!(payment.confirmed(), vec!["pk_m1".to_string()]);

    let stored = ReservationRepository::new(db).find_by_slot_key(key).await?;
    assert_eq!(stored, Some(reservation));

    Ok(())
}

/// Tests booking today's date.
///
/// Expected: Booked
#[tokio::test]
async fn accepts_today() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, theme, time_slot) = factory::helpers::create_slot_dependencies(db).await?;
    let key = SlotKey {
        date: Local::now().date_naive(),
        ..slot_key(&theme, &time_slot)
    };

    let payment = StubPaymentClient::new();
    let service = ReservationService::new(db, &payment);
    let outcome = service.create(booking(&member, key, "pk_today")).await?;

    assert!(matches!(outcome, BookingOutcome::Booked(_)));

    Ok(())
}

/// Tests requesting a booked slot key.
///
/// Expected: Waiting at the end of the queue, no gateway call
#[tokio::test]
async fn queues_request_for_booked_slot_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, theme, time_slot) = factory::helpers::create_slot_dependencies(db).await?;
    let second = factory::member::create_member(db).await?;
    let third = factory::member::create_member(db).await?;
    let key = slot_key(&theme, &time_slot);

    let payment = StubPaymentClient::new();
    let service = ReservationService::new(db, &payment);
    service.create(booking(&first, key, "pk_1")).await?;

    let second_outcome = service.create(booking(&second, key, "pk_2")).await?;
    let third_outcome = service.create(booking(&third, key, "pk_3")).await?;

    assert!(matches!(
        second_outcome,
        BookingOutcome::Waiting { position: 1, .. }
    ));
    assert!(matches!(
        third_outcome,
        BookingOutcome::Waiting { position: 2, .. }
    ));
    assert_eq!(payment.confirmed(), vec!["pk_1".to_string()]);

    let queue = WaitingRepository::new(db).get_queue(key).await?;
    let members: Vec<i32> = queue.iter().map(|w| w.member_id).collect();
    assert_eq!(members, vec![second.id, third.id]);
    assert_eq!(queue[0].payment.payment_key, "pk_2");

    Ok(())
}

/// Tests that a member cannot hold two requests for one slot key.
///
/// Expected: DuplicateRequest for the booker and for a queued waiter
#[tokio::test]
async fn rejects_duplicate_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (booker, theme, time_slot) = factory::helpers::create_slot_dependencies(db).await?;
    let waiter = factory::member::create_member(db).await?;
    let key = slot_key(&theme, &time_slot);

    let payment = StubPaymentClient::new();
    let service = ReservationService::new(db, &payment);
    service.create(booking(&booker, key, "pk_1")).await?;
    service.create(booking(&waiter, key, "pk_2")).await?;

    let booker_again = service.create(booking(&booker, key, "pk_3")).await;
    let waiter_again = service.create(booking(&waiter, key, "pk_4")).await;

    assert!(matches!(
        booker_again,
        Err(AppError::ReservationErr(ReservationError::DuplicateRequest))
    ));
    assert!(matches!(
        waiter_again,
        Err(AppError::ReservationErr(ReservationError::DuplicateRequest))
    ));
    assert_eq!(WaitingRepository::new(db).get_queue(key).await?.len(), 1);

    Ok(())
}

/// Tests a request with a blank payment key and one with a zero amount.
///
/// Expected: Err(BadRequest) for both, no gateway call
#[tokio::test]
async fn rejects_incomplete_payment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, theme, time_slot) = factory::helpers::create_slot_dependencies(db).await?;
    let key = slot_key(&theme, &time_slot);

    let payment = StubPaymentClient::new();
    let service = ReservationService::new(db, &payment);

    let blank_key = booking(&member, key, " ");
    let mut zero_amount = booking(&member, key, "pk_zero");
    zero_amount.payment.amount = 0;

    assert!(matches!(
        service.create(blank_key).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.create(zero_amount).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(payment.confirmed().is_empty());

    Ok(())
}

/// Tests booking a date in the past.
///
/// Expected: PastDate, nothing charged or stored
#[tokio::test]
async fn rejects_past_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, theme, time_slot) = factory::helpers::create_slot_dependencies(db).await?;
    let key = SlotKey {
        date: Local::now().date_naive() - Duration::days(1),
        ..slot_key(&theme, &time_slot)
    };

    let payment = StubPaymentClient::new();
    let service = ReservationService::new(db, &payment);
    let result = service.create(booking(&member, key, "pk_past")).await;

    assert!(matches!(
        result,
        Err(AppError::ReservationErr(ReservationError::PastDate(_)))
    ));
    assert!(payment.confirmed().is_empty());

    Ok(())
}

/// Tests booking with an unknown theme or time slot.
///
/// Expected: NotFound for each
#[tokio::test]
async fn rejects_unknown_references() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, theme, time_slot) = factory::helpers::create_slot_dependencies(db).await?;

    let payment = StubPaymentClient::new();
    let service = ReservationService::new(db, &payment);

    let unknown_theme = SlotKey {
        theme_id: theme.id + 100,
        ..slot_key(&theme, &time_slot)
    };
    let unknown_slot = SlotKey {
        time_slot_id: time_slot.id + 100,
        ..slot_key(&theme, &time_slot)
    };

    assert!(matches!(
        service.create(booking(&member, unknown_theme, "pk_a")).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.create(booking(&member, unknown_slot, "pk_b")).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests a declined payment for a free slot key.
///
/// Expected: PaymentError and no reservation stored
#[tokio::test]
async fn stores_nothing_when_payment_declined() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, theme, time_slot) = factory::helpers::create_slot_dependencies(db).await?;
    let key = slot_key(&theme, &time_slot);

    let payment = StubPaymentClient::declining(&["pk_declined"]);
    let service = ReservationService::new(db, &payment);
    let result = service.create(booking(&member, key, "pk_declined")).await;

    assert!(matches!(
        result,
        Err(AppError::PaymentErr(PaymentError::Declined { .. }))
    ));
    assert!(ReservationRepository::new(db)
        .find_by_slot_key(key)
        .await?
        .is_none());

    Ok(())
}

/// Tests that a charge is voided when the reservation insert fails.
///
/// The booking references a member id with no row, so the insert fails on the
/// foreign key after the gateway confirmed.
///
/// Expected: error returned, the confirmed payment cancelled
#[tokio::test]
async fn voids_payment_when_insert_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, theme, time_slot) = factory::helpers::create_slot_dependencies(db).await?;
    let key = slot_key(&theme, &time_slot);

    let mut request = booking(&member, key, "pk_orphan");
    request.member_id = member.id + 100;

    let payment = StubPaymentClient::new();
    let service = ReservationService::new(db, &payment);
    let result = service.create(request).await;

    assert!(result.is_err());
    assert_eq!(payment.confirmed(), vec!["pk_orphan".to_string()]);
    assert_eq!(payment.cancelled(), vec!["pk_orphan".to_string()]);
    assert!(ReservationRepository::new(db)
        .find_by_slot_key(key)
        .await?
        .is_none());

    Ok(())
}
