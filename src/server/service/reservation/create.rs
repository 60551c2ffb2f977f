use chrono::{Local, Utc};
use sea_orm::DatabaseTransaction;

use crate::server::{
    data::{
        reservation::ReservationRepository, theme::ThemeRepository,
        time_slot::TimeSlotRepository, waiting::WaitingRepository,
    },
    error::{reservation::ReservationError, AppError},
    model::reservation::{
        BookingOutcome, BookingRequest, CreateReservationParam, CreateWaiterParam, Reservation,
    },
    util::{
        db::{begin_serializable, conflict_on_race},
        validate::{require_non_blank, require_positive},
    },
};

use super::ReservationService;

impl<'a> ReservationService<'a> {
    /// Books a slot key, or queues the request when the slot key is taken.
    ///
    /// A free slot key is charged through the gateway and booked. A taken slot key
    /// yields a waiter at the end of the queue; nothing is charged until the
    /// waiter is promoted.
    ///
    /// # Returns
    /// - `Ok(BookingOutcome::Booked)` - Payment confirmed and reservation stored
    /// - `Ok(BookingOutcome::Waiting)` - Request queued with its 1-based position
    /// - `Err(AppError::BadRequest)` - Payment key or order id blank, amount not positive
    /// - `Err(ReservationError::PastDate)` - Date is before today
    /// - `Err(AppError::NotFound)` - Time slot or theme does not exist
    /// - `Err(ReservationError::DuplicateRequest)` - Member already holds this slot key
    ///   or is already queued for it
    /// - `Err(PaymentError)` - Gateway declined; nothing stored
    /// - `Err(AppError::Conflict)` - Lost a race for the slot key
    pub async fn create(&self, request: BookingRequest) -> Result<BookingOutcome, AppError> {
        let slot_key = request.slot_key;

        require_non_blank("paymentKey", &request.payment.payment_key)?;
        require_non_blank("orderId", &request.payment.order_id)?;
        require_positive("amount", request.payment.amount)?;

        let today = Local::now().date_naive();
        if slot_key.date < today {
            return Err(ReservationError::PastDate(slot_key.date).into());
        }

        if TimeSlotRepository::new(self.db)
            .find_by_id(slot_key.time_slot_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Time slot {} not found",
                slot_key.time_slot_id
            )));
        }
        if ThemeRepository::new(self.db)
            .find_by_id(slot_key.theme_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Theme {} not found",
                slot_key.theme_id
            )));
        }

        let txn = begin_serializable(self.db).await?;

        let reservation_repo = ReservationRepository::new(&txn);
        let waiting_repo = WaitingRepository::new(&txn);

        if reservation_repo
            .exists_for_member(slot_key, request.member_id)
            .await?
            || waiting_repo
                .exists_for_member(slot_key, request.member_id)
                .await?
        {
            return Err(ReservationError::DuplicateRequest.into());
        }

        if reservation_repo.find_by_slot_key(slot_key).await?.is_some() {
            return self.enqueue(txn, request).await;
        }

        let reservation = self.book(txn, request).await?;

        tracing::info!(
            "Member {} booked {} / slot {} / theme {}",
            reservation.member_id,
            slot_key.date,
            slot_key.time_slot_id,
            slot_key.theme_id
        );

        Ok(BookingOutcome::Booked(reservation))
    }

    /// Charges the member and stores the reservation, voiding the charge if the
    /// reservation cannot be committed.
    async fn book(
        &self,
        txn: DatabaseTransaction,
        request: BookingRequest,
    ) -> Result<Reservation, AppError> {
        let payment = self.payment.confirm(&request.payment).await?;

        let inserted = ReservationRepository::new(&txn)
            .create(CreateReservationParam {
                slot_key: request.slot_key,
                member_id: request.member_id,
                payment: payment.clone(),
            })
            .await;

        let reservation = match inserted {
            Ok(reservation) => reservation,
            Err(err) => {
                drop(txn);
                self.void_payment(&payment).await;
                return Err(conflict_on_race(err, "Slot was booked by another request"));
            }
        };

        if let Err(err) = txn.commit().await {
            self.void_payment(&payment).await;
            return Err(conflict_on_race(err, "Slot was booked by another request"));
        }

        Ok(reservation)
    }

    /// Appends the request to the waiting list of its slot key.
    async fn enqueue(
        &self,
        txn: DatabaseTransaction,
        request: BookingRequest,
    ) -> Result<BookingOutcome, AppError> {
        let waiting_repo = WaitingRepository::new(&txn);

        let waiter = waiting_repo
            .create(CreateWaiterParam {
                slot_key: request.slot_key,
                member_id: request.member_id,
                payment: request.payment,
                created_at: Utc::now(),
            })
            .await
            .map_err(|e| conflict_on_race(e, "Already waiting for this slot"))?;

        let position = waiting_repo.position_of(&waiter).await?;

        txn.commit()
            .await
            .map_err(|e| conflict_on_race(e, "Already waiting for this slot"))?;

        tracing::info!(
            "Member {} queued for {} / slot {} / theme {} at position {}",
            waiter.member_id,
            waiter.slot_key.date,
            waiter.slot_key.time_slot_id,
            waiter.slot_key.theme_id,
            position
        );

        Ok(BookingOutcome::Waiting { waiter, position })
    }
}
