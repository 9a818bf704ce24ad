use super::*;

use test_utils::factory::sound_asset::create_sound;

/// Tests deleting a stored sound.
///
/// Expected: Ok(true) and the row is gone from the library
#[tokio::test]
async fn deletes_stored_sound() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SoundAsset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = create_sound(db).await?;

    let repo = SoundRepository::new(db);
    assert!(repo.delete(entity.id).await?);
    assert!(repo.list_all().await?.is_empty());

    Ok(())
}

/// Tests deleting a nonexistent sound.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_sound() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SoundAsset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!SoundRepository::new(db).delete(9999).await?);

    Ok(())
}
