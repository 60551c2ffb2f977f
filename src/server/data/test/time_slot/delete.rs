use super::*;

/// Tests deleting a time slot.
///
/// Expected: Ok(true), then Ok(false) on a repeated delete
#[tokio::test]
async fn deletes_time_slot_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(TimeSlot).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let slot = factory::time_slot::create_time_slot(db).await?;

    let repo = TimeSlotRepository::new(db);

    assert!(repo.delete(slot.id).await?);
    assert!(!repo.delete(slot.id).await?);
    assert!(repo.find_by_id(slot.id).await?.is_none());

    Ok(())
}
