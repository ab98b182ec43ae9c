//! festplan-app — application state stores.
//!
//! Each store owns one in-memory state slice and the slot binding that
//! persists it. Stores are plain objects handed a [`Store`] reference on
//! every mutating call; there are no ambient singletons. Construction loads
//! the slot (seeding from the mock dataset when empty), after which every
//! mutation re-persists through the binding.

pub mod auth;
pub mod community;
pub mod events;
pub mod settings;
pub mod weather;

use std::sync::Arc;

use anyhow::Result;
use festplan_store::{StorageMedium, Store};

pub use auth::{AuthStore, UserUpdate};
pub use community::CommunityStore;
pub use events::EventStore;
pub use settings::{PrivacyToggle, SettingsStore};
pub use weather::{WeatherCache, WeatherSnapshot};

/// Everything a FestPlan session needs, wired over one storage medium.
pub struct App {
    pub store: Store,
    pub auth: AuthStore,
    pub events: EventStore,
    pub settings: SettingsStore,
    pub community: CommunityStore,
    pub weather: WeatherCache,
}

impl App {
    /// Open the store (creating the master key on first run) and load every
    /// entity slot.
    pub fn open(medium: Arc<dyn StorageMedium>) -> Result<Self> {
        let store = Store::open(medium.clone())?;
        let auth = AuthStore::open(&store)?;
        let events = EventStore::open(&store)?;
        let settings = SettingsStore::open(&store)?;
        let community = CommunityStore::open(&store)?;
        let weather = WeatherCache::new(medium);
        Ok(Self {
            store,
            auth,
            events,
            settings,
            community,
            weather,
        })
    }
}
