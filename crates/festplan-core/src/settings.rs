use serde::{Deserialize, Serialize};

use crate::types::SubscriptionTier;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Es,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
    Usd,
    Eur,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    /// Passive income opt-in.
    pub share_data_for_credits: bool,
    pub analytics_consent: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub language: Language,
    pub currency: Currency,
    pub subscription_tier: SubscriptionTier,
    pub privacy: PrivacySettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: Language::En,
            currency: Currency::Inr,
            subscription_tier: SubscriptionTier::Free,
            privacy: PrivacySettings {
                share_data_for_credits: false,
                analytics_consent: true,
            },
        }
    }
}

impl AppSettings {
    /// Post-GDPR-deletion state: defaults with every consent revoked.
    pub fn wiped() -> Self {
        Self {
            privacy: PrivacySettings {
                share_data_for_credits: false,
                analytics_consent: false,
            },
            ..Self::default()
        }
    }
}
