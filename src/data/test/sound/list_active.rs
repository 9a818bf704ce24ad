use super::*;

use test_utils::factory::sound_asset::SoundAssetFactory;

/// Tests the public library listing.
///
/// Verifies that inactive sounds are excluded and results come back
/// alphabetically.
///
/// Expected: two active sounds ordered by name
#[tokio::test]
async fn lists_active_sounds_alphabetically() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SoundAsset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SoundAssetFactory::new(db).name("Thunder").build().await?;
    SoundAssetFactory::new(db).name("Crickets").build().await?;
    SoundAssetFactory::new(db).name("Archived").active(false).build().await?;

    let repo = SoundRepository::new(db);

    let sounds = repo.list_active().await?;
    assert_eq!(sounds.len(), 2);
    assert_eq!(sounds[0].name, "Crickets");
    assert_eq!(sounds[1].name, "Thunder");

    assert_eq!(repo.count_active().await?, 2);
    assert_eq!(repo.list_all().await?.len(), 3);

    Ok(())
}
