//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to keep theme names, member emails and slot times distinct across
/// factories within a test binary.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates the three rows every slot key depends on.
///
/// # Returns
/// - `Ok((member, theme, time_slot))` - Member with the `Member` role, a theme and a time slot
/// - `Err(DbErr)` - Database error during creation
pub async fn create_slot_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::member::Model,
        entity::theme::Model,
        entity::time_slot::Model,
    ),
    DbErr,
> {
    let member = crate::factory::member::create_member(db).await?;
    let theme = crate::factory::theme::create_theme(db).await?;
    let time_slot = crate::factory::time_slot::create_time_slot(db).await?;

    Ok((member, theme, time_slot))
}
