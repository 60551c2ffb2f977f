use std::collections::HashMap;

use crate::server::{
    data::{
        member::MemberRepository, reservation::ReservationRepository, theme::ThemeRepository,
        time_slot::TimeSlotRepository, waiting::WaitingRepository,
    },
    error::AppError,
    model::{
        member::Member,
        reservation::{
            MyReservation, MyReservationStatus, ReservationDetail, ReservationFilter, SlotKey,
            WaiterDetail,
        },
        theme::Theme,
        time_slot::TimeSlot,
    },
};

use super::ReservationService;

/// Members, themes and time slots referenced by a batch of reservations or waiters.
struct References {
    members: HashMap<i32, Member>,
    themes: HashMap<i32, Theme>,
    time_slots: HashMap<i32, TimeSlot>,
}

impl References {
    fn member(&self, id: i32) -> Result<Member, AppError> {
        self.members
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::InternalError(format!("Member {} referenced but missing", id)))
    }

    fn theme(&self, id: i32) -> Result<Theme, AppError> {
        self.themes
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::InternalError(format!("Theme {} referenced but missing", id)))
    }

    fn time_slot(&self, id: i32) -> Result<TimeSlot, AppError> {
        self.time_slots.get(&id).cloned().ok_or_else(|| {
            AppError::InternalError(format!("Time slot {} referenced but missing", id))
        })
    }
}

impl<'a> ReservationService<'a> {
    /// Gets a member's reservations and waiting entries.
    ///
    /// Waiting entries carry their current queue position. Entries are ordered by
    /// date, then time.
    pub async fn list_for_member(&self, member_id: i32) -> Result<Vec<MyReservation>, AppError> {
        let reservations = ReservationRepository::new(self.db)
            .get_by_member(member_id)
            .await?;

        let waiting_repo = WaitingRepository::new(self.db);
        let waiters = waiting_repo.get_by_member(member_id).await?;

        let slot_keys: Vec<SlotKey> = reservations
            .iter()
            .map(|r| r.slot_key)
            .chain(waiters.iter().map(|w| w.slot_key))
            .collect();
        let refs = self.load_references(Vec::new(), &slot_keys).await?;

        let mut entries = Vec::with_capacity(reservations.len() + waiters.len());

        for reservation in reservations {
            entries.push(MyReservation {
                id: reservation.id,
                theme_name: refs.theme(reservation.slot_key.theme_id)?.name,
                date: reservation.slot_key.date,
                time: refs.time_slot(reservation.slot_key.time_slot_id)?.time,
                status: MyReservationStatus::Booked(reservation.payment),
            });
        }

        for waiter in waiters {
            let position = waiting_repo.position_of(&waiter).await?;

            entries.push(MyReservation {
                id: waiter.id,
                theme_name: refs.theme(waiter.slot_key.theme_id)?.name,
                date: waiter.slot_key.date,
                time: refs.time_slot(waiter.slot_key.time_slot_id)?.time,
                status: MyReservationStatus::Waiting { position },
            });
        }

        entries.sort_by(|a, b| (a.date, a.time, a.id).cmp(&(b.date, b.time, b.id)));

        Ok(entries)
    }

    /// Gets every reservation matching `filter`, ordered by date.
    pub async fn list_all(
        &self,
        filter: ReservationFilter,
    ) -> Result<Vec<ReservationDetail>, AppError> {
        let reservations = ReservationRepository::new(self.db).search(filter).await?;

        let member_ids = reservations.iter().map(|r| r.member_id).collect();
        let slot_keys: Vec<SlotKey> = reservations.iter().map(|r| r.slot_key).collect();
        let refs = self.load_references(member_ids, &slot_keys).await?;

        reservations
            .into_iter()
            .map(|reservation| {
                Ok(ReservationDetail {
                    id: reservation.id,
                    date: reservation.slot_key.date,
                    member: refs.member(reservation.member_id)?,
                    time_slot: refs.time_slot(reservation.slot_key.time_slot_id)?,
                    theme: refs.theme(reservation.slot_key.theme_id)?,
                    payment: reservation.payment,
                })
            })
            .collect()
    }

    /// Gets every waiter grouped by slot key, each group in queue order.
    pub async fn list_waiters(&self) -> Result<Vec<WaiterDetail>, AppError> {
        let waiters = WaitingRepository::new(self.db).get_all().await?;

        let member_ids = waiters.iter().map(|w| w.member_id).collect();
        let slot_keys: Vec<SlotKey> = waiters.iter().map(|w| w.slot_key).collect();
        let refs = self.load_references(member_ids, &slot_keys).await?;

        waiters
            .into_iter()
            .map(|waiter| {
                Ok(WaiterDetail {
                    id: waiter.id,
                    date: waiter.slot_key.date,
                    member: refs.member(waiter.member_id)?,
                    time_slot: refs.time_slot(waiter.slot_key.time_slot_id)?,
                    theme: refs.theme(waiter.slot_key.theme_id)?,
                    created_at: waiter.created_at,
                })
            })
            .collect()
    }

    async fn load_references(
        &self,
        mut member_ids: Vec<i32>,
        slot_keys: &[SlotKey],
    ) -> Result<References, AppError> {
        let mut theme_ids: Vec<i32> = slot_keys.iter().map(|k| k.theme_id).collect();
        let mut time_slot_ids: Vec<i32> = slot_keys.iter().map(|k| k.time_slot_id).collect();

        for ids in [&mut member_ids, &mut theme_ids, &mut time_slot_ids] {
            ids.sort_unstable();
            ids.dedup();
        }

        let members = MemberRepository::new(self.db)
            .get_by_ids(member_ids)
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();
        let themes = ThemeRepository::new(self.db)
            .get_by_ids(theme_ids)
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();
        let time_slots = TimeSlotRepository::new(self.db)
            .get_by_ids(time_slot_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        Ok(References {
            members,
            themes,
            time_slots,
        })
    }
}
