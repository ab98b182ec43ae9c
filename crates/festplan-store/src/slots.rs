//! Storage slot names. One slot per entity; no two entities share a slot.

pub const USER_SLOT: &str = "festplan_user";
pub const EVENTS_SLOT: &str = "festplan_events";
pub const VENDORS_SLOT: &str = "festplan_vendors";
pub const SETTINGS_SLOT: &str = "festplan_settings";
pub const COMMUNITY_SLOT: &str = "festplan_community";

/// Master key descriptor. The only slot read by the key manager.
pub const KEY_SLOT: &str = "festplan_enc_key";

/// Time-boxed weather cache. Not encrypted.
pub const WEATHER_SLOT: &str = "festplan_weather_cache";
