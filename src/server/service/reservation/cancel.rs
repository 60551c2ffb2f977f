use sea_orm::{DatabaseTransaction, DbErr, TransactionTrait};

use crate::server::{
    data::{reservation::ReservationRepository, waiting::WaitingRepository},
    error::{auth::AuthError, AppError},
    model::{
        member::Requester,
        payment::PaymentInfo,
        reservation::{CreateReservationParam, SlotKey},
    },
    util::db::begin_serializable,
};

use super::ReservationService;

impl<'a> ReservationService<'a> {
    /// Cancels a reservation and promotes the earliest payable waiter.
    ///
    /// Waiters are popped in queue order. A waiter whose payment is declined, or
    /// whose reservation cannot be stored, is dropped and the next one is tried,
    /// so at most one new reservation is created and the slot key stays empty
    /// when every attempt fails. Only failures to read the queue or to remove the
    /// cancelled reservation fail the cancellation.
    ///
    /// # Returns
    /// - `Ok(())` - Reservation cancelled, promotion attempted
    /// - `Err(AppError::NotFound)` - No reservation with this id
    /// - `Err(AuthError::AccessDenied)` - Requester is neither the owner nor an admin
    pub async fn cancel_reservation(
        &self,
        requester: Requester,
        reservation_id: i32,
    ) -> Result<(), AppError> {
        let txn = begin_serializable(self.db).await?;
        let reservation_repo = ReservationRepository::new(&txn);

        let reservation = reservation_repo
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Reservation {} not found", reservation_id))
            })?;

        if !requester.can_manage(reservation.member_id) {
            return Err(AuthError::AccessDenied(
                requester.id,
                format!("cancel reservation {} of member {}", reservation.id, reservation.member_id),
            )
            .into());
        }

        reservation_repo.delete(reservation.id).await?;

        let promoted = self.promote(&txn, reservation.slot_key).await?;

        if let Err(err) = txn.commit().await {
            if let Some(payment) = &promoted {
                self.void_payment(payment).await;
            }
            return Err(err.into());
        }

        tracing::info!(
            "Reservation {} cancelled by member {}",
            reservation.id,
            requester.id
        );

        Ok(())
    }

    /// Cancels a waiting entry; the queue behind it moves up.
    pub async fn cancel_waiter(&self, requester: Requester, waiter_id: i32) -> Result<(), AppError> {
        let waiting_repo = WaitingRepository::new(self.db);

        let waiter = waiting_repo
            .find_by_id(waiter_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Waiting entry {} not found", waiter_id)))?;

        if !requester.can_manage(waiter.member_id) {
            return Err(AuthError::AccessDenied(
                requester.id,
                format!("cancel waiting entry {} of member {}", waiter.id, waiter.member_id),
            )
            .into());
        }

        waiting_repo.delete(waiter.id).await?;

        Ok(())
    }

    /// Pops waiters for `slot_key` until one pays, then books it for them.
    ///
    /// Returns the confirmed payment of the promoted waiter so the caller can void
    /// it if the transaction fails to commit.
    async fn promote(
        &self,
        txn: &DatabaseTransaction,
        slot_key: SlotKey,
    ) -> Result<Option<PaymentInfo>, AppError> {
        let waiting_repo = WaitingRepository::new(txn);

        while let Some(waiter) = waiting_repo.pop_earliest(slot_key).await? {
            let payment = match self.payment.confirm(&waiter.payment).await {
                Ok(payment) => payment,
                Err(err) => {
                    tracing::warn!(
                        "Skipping waiter {} of member {}: payment failed: {}",
                        waiter.id,
                        waiter.member_id,
                        err
                    );
                    continue;
                }
            };

            if let Err(err) =
                Self::store_promotion(txn, slot_key, waiter.member_id, &payment).await
            {
                self.void_payment(&payment).await;
                tracing::warn!(
                    "Skipping waiter {} of member {}: reservation could not be stored: {}",
                    waiter.id,
                    waiter.member_id,
                    err
                );
                continue;
            }

            tracing::info!(
                "Promoted waiter {} of member {} to a reservation",
                waiter.id,
                waiter.member_id
            );

            return Ok(Some(payment));
        }

        Ok(None)
    }

    /// Inserts the promoted reservation under a savepoint, so a failed insert
    /// leaves the enclosing cancellation intact.
    async fn store_promotion(
        txn: &DatabaseTransaction,
        slot_key: SlotKey,
        member_id: i32,
        payment: &PaymentInfo,
    ) -> Result<(), DbErr> {
        let savepoint = txn.begin().await?;

        ReservationRepository::new(&savepoint)
            .create(CreateReservationParam {
                slot_key,
                member_id,
                payment: payment.clone(),
            })
            .await?;

        savepoint.commit().await
    }
}
