use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventType {
    Wedding,
    Festival,
    Corporate,
    Birthday,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VendorCategory {
    Venue,
    Catering,
    Decor,
    Photography,
    Entertainment,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Host,
    Vendor,
    Admin,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionTier {
    Free,
    Pro,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_profile_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub category: VendorCategory,
    pub rating: f64,
    /// 1 = budget, 3 = premium.
    pub price_level: u8,
    pub is_eco_friendly: bool,
    pub location: String,
    pub image_url: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventTask {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GuestStatus {
    Confirmed,
    Pending,
    Declined,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: String,
    pub name: String,
    pub status: GuestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nft_badge_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub date: NaiveDate,
    pub location: String,
    pub budget: f64,
    pub spent: f64,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    pub tasks: Vec<EventTask>,
    pub guests: Vec<Guest>,
    /// Hired vendor ids.
    pub vendors: Vec<String>,
    /// 0-100.
    pub sustainability_score: u8,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
    pub id: String,
    pub author: String,
    pub avatar: String,
    pub title: String,
    pub content: String,
    pub likes: u32,
    pub comments: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_wire_spellings_match_legacy_storage() {
        assert_eq!(serde_json::to_string(&EventType::Wedding).unwrap(), "\"Wedding\"");
        assert_eq!(serde_json::to_string(&UserRole::Host).unwrap(), "\"HOST\"");
        assert_eq!(serde_json::to_string(&SubscriptionTier::Free).unwrap(), "\"FREE\"");
        assert_eq!(serde_json::to_string(&GuestStatus::Confirmed).unwrap(), "\"confirmed\"");
    }

    #[test]
    fn event_decodes_legacy_shape() {
        // An event written before expenses tracking existed: no `expenses` field.
        let json = r#"{
            "id": "e9", "name": "Housewarming", "type": "Other",
            "date": "2024-03-01", "location": "Pune", "budget": 20000,
            "spent": 0, "tasks": [], "guests": [], "vendors": [],
            "sustainabilityScore": 50, "image": ""
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(event.expenses.is_empty());
        assert_eq!(event.event_type, EventType::Other);
    }
}
