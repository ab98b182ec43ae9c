//! Application settings: language, currency, subscription and privacy
//! consent, plus the GDPR export/delete operations.

use anyhow::Result;
use festplan_core::settings::{AppSettings, Currency, Language};
use festplan_core::types::SubscriptionTier;
use festplan_store::slots::SETTINGS_SLOT;
use festplan_store::{Binding, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivacyToggle {
    ShareDataForCredits,
    AnalyticsConsent,
}

pub struct SettingsStore {
    binding: Binding<AppSettings>,
}

impl SettingsStore {
    pub fn open(store: &Store) -> Result<Self> {
        let mut binding = Binding::new(SETTINGS_SLOT, AppSettings::default());
        binding.load(store)?;
        Ok(Self { binding })
    }

    pub fn settings(&self) -> &AppSettings {
        self.binding.get()
    }

    pub fn set_language(&mut self, store: &Store, language: Language) -> Result<()> {
        self.binding.mutate(store, |s| s.language = language)?;
        Ok(())
    }

    pub fn set_currency(&mut self, store: &Store, currency: Currency) -> Result<()> {
        self.binding.mutate(store, |s| s.currency = currency)?;
        Ok(())
    }

    pub fn set_subscription_tier(&mut self, store: &Store, tier: SubscriptionTier) -> Result<()> {
        self.binding.mutate(store, |s| s.subscription_tier = tier)?;
        Ok(())
    }

    pub fn toggle_privacy(&mut self, store: &Store, toggle: PrivacyToggle) -> Result<()> {
        self.binding.mutate(store, |s| match toggle {
            PrivacyToggle::ShareDataForCredits => {
                s.privacy.share_data_for_credits = !s.privacy.share_data_for_credits;
            }
            PrivacyToggle::AnalyticsConsent => {
                s.privacy.analytics_consent = !s.privacy.analytics_consent;
            }
        })?;
        Ok(())
    }

    /// GDPR data export: the settings document as pretty JSON.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.binding.get())?)
    }

    /// GDPR deletion: reset to defaults with every consent revoked.
    pub fn delete_user_data(&mut self, store: &Store) -> Result<()> {
        self.binding.mutate(store, |s| *s = AppSettings::wiped())?;
        Ok(())
    }
}
