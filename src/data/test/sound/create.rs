use super::*;

/// Tests inserting a sound into the library.
///
/// Verifies that new sounds start active with zeroed play and like counters.
///
/// Expected: Ok with active sound and zeroed counters
#[tokio::test]
async fn stores_sound_active_with_zeroed_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SoundAsset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sound = SoundRepository::new(db)
        .create(CreateSoundRecord {
            name: "Ocean Waves".to_string(),
            category: "nature".to_string(),
            file_path: "/sounds/ocean-waves.mp3".to_string(),
            premium: true,
            duration_secs: 3600,
        })
        .await?;

    assert_eq!(sound.name, "Ocean Waves");
    assert_eq!(sound.category, "nature");
    assert!(sound.premium);
    assert_eq!(sound.duration_secs, 3600);
    assert_eq!(sound.play_count, 0);
    assert_eq!(sound.like_count, 0);
    assert!(sound.active);

    Ok(())
}
