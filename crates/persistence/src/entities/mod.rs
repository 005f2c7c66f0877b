//! Database row mappings.

pub mod alpha_session;
pub mod event;
pub mod message;
pub mod ministry;
pub mod prayer_request;
pub mod site_settings;
pub mod small_group;
pub mod staff_member;
pub mod support_resource;

pub use alpha_session::AlphaSessionEntity;
pub use event::EventEntity;
pub use message::MessageEntity;
pub use ministry::{MinistryCategoryDb, MinistryEntity};
pub use prayer_request::PrayerRequestEntity;
pub use site_settings::SiteSettingsEntity;
pub use small_group::{SmallGroupEntity, SmallGroupKindDb};
pub use staff_member::StaffMemberEntity;
pub use support_resource::{SupportCategoryDb, SupportResourceEntity};
