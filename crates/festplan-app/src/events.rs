//! Events and the vendor marketplace. Two independent slots with
//! independent load/save cycles; no cross-slot transaction.

use anyhow::Result;
use chrono::Utc;
use festplan_core::seed;
use festplan_core::types::{Event, Vendor};
use festplan_store::slots::{EVENTS_SLOT, VENDORS_SLOT};
use festplan_store::{Binding, Store};

pub struct EventStore {
    events: Binding<Vec<Event>>,
    vendors: Binding<Vec<Vendor>>,
}

impl EventStore {
    pub fn open(store: &Store) -> Result<Self> {
        let today = Utc::now().date_naive();
        let mut events = Binding::new(EVENTS_SLOT, seed::seed_events(today));
        let mut vendors = Binding::new(VENDORS_SLOT, seed::seed_vendors());
        events.load(store)?;
        vendors.load(store)?;
        Ok(Self { events, vendors })
    }

    pub fn events(&self) -> &[Event] {
        self.events.get()
    }

    pub fn vendors(&self) -> &[Vendor] {
        self.vendors.get()
    }

    pub fn get_event(&self, id: &str) -> Option<&Event> {
        self.events.get().iter().find(|e| e.id == id)
    }

    pub fn get_vendor(&self, id: &str) -> Option<&Vendor> {
        self.vendors.get().iter().find(|v| v.id == id)
    }

    /// Newest first.
    pub fn add_event(&mut self, store: &Store, event: Event) -> Result<()> {
        self.events.mutate(store, |list| list.insert(0, event))?;
        Ok(())
    }

    pub fn add_vendor(&mut self, store: &Store, vendor: Vendor) -> Result<()> {
        self.vendors.mutate(store, |list| list.insert(0, vendor))?;
        Ok(())
    }

    /// Hire a vendor for an event. Hiring the same vendor twice is a no-op.
    pub fn add_vendor_to_event(
        &mut self,
        store: &Store,
        event_id: &str,
        vendor_id: &str,
    ) -> Result<()> {
        self.events.mutate(store, |list| {
            if let Some(event) = list.iter_mut().find(|e| e.id == event_id) {
                if !event.vendors.iter().any(|v| v == vendor_id) {
                    event.vendors.push(vendor_id.to_string());
                }
            }
        })?;
        Ok(())
    }

    /// Replace an event wholesale by id.
    pub fn update_event(&mut self, store: &Store, updated: Event) -> Result<()> {
        self.events.mutate(store, |list| {
            if let Some(event) = list.iter_mut().find(|e| e.id == updated.id) {
                *event = updated;
            }
        })?;
        Ok(())
    }
}
