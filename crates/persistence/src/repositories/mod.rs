//! Repository implementations.

pub mod alpha_session;
pub mod event;
pub mod message;
pub mod ministry;
pub mod prayer_request;
pub mod site_settings;
pub mod small_group;
pub mod staff_member;
pub mod support_resource;

pub use alpha_session::AlphaSessionRepository;
pub use event::EventRepository;
pub use message::MessageRepository;
pub use ministry::MinistryRepository;
pub use prayer_request::PrayerRequestRepository;
pub use site_settings::SiteSettingsRepository;
pub use small_group::SmallGroupRepository;
pub use staff_member::StaffMemberRepository;
pub use support_resource::SupportResourceRepository;
