pub use super::account::Entity as Account;
pub use super::gift_code::Entity as GiftCode;
pub use super::sleep_session::Entity as SleepSession;
pub use super::sound_asset::Entity as SoundAsset;
pub use super::subscription_plan::Entity as SubscriptionPlan;
