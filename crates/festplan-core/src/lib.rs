//! festplan-core — domain model for the FestPlan event planner.
//!
//! Entity types serialize with the field names the application has always
//! written to storage (camelCase, original enum spellings), so slots written
//! before encryption was introduced still decode.

pub mod calendar;
pub mod seed;
pub mod settings;
pub mod stats;
pub mod types;

pub use settings::{AppSettings, Currency, Language, PrivacySettings};
pub use stats::DashboardStats;
pub use types::{
    CommunityPost, Event, EventTask, EventType, Expense, Guest, GuestStatus, SubscriptionTier,
    User, UserRole, Vendor, VendorCategory,
};
