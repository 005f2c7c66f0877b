//! Domain models for the church site.

pub mod alpha_session;
pub mod event;
pub mod message;
pub mod ministry;
pub mod prayer_request;
pub mod site_settings;
pub mod small_group;
pub mod staff_member;
pub mod support_resource;

pub use alpha_session::AlphaSession;
pub use event::Event;
pub use message::Message;
pub use ministry::{Ministry, MinistryCategory};
pub use prayer_request::{CreatePrayerRequest, PrayerRequest};
pub use site_settings::{ServiceTime, SiteSettings};
pub use small_group::{SmallGroup, SmallGroupKind};
pub use staff_member::StaffMember;
pub use support_resource::{SupportCategory, SupportResource};
