use super::*;

use test_utils::factory::sound_asset::SoundAssetFactory;

/// Tests the partial sound update.
///
/// Expected: premium flag updated, name and category untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SoundAsset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = SoundAssetFactory::new(db)
        .name("Rainfall")
        .category("nature")
        .build()
        .await?;

    let updated = SoundRepository::new(db)
        .update(
            entity.id,
            UpdateSoundParams {
                premium: Some(true),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(updated.premium);
    assert_eq!(updated.name, "Rainfall");
    assert_eq!(updated.category, "nature");

    Ok(())
}

/// Tests updating a nonexistent sound.
///
/// Expected: Ok(None), nothing written
#[tokio::test]
async fn returns_none_for_unknown_sound() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SoundAsset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SoundRepository::new(db)
        .update(
            9999,
            UpdateSoundParams {
                premium: Some(true),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
