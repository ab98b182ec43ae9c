//! Seed datasets: the state a fresh profile starts from.
//!
//! Event dates are derived from the current clock so the demo data always
//! shows one event this month and one the next.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::types::{
    CommunityPost, Event, EventTask, EventType, Expense, Guest, GuestStatus, User, UserRole,
    Vendor, VendorCategory,
};

pub fn seed_vendors() -> Vec<Vendor> {
    vec![
        Vendor {
            id: "v1".into(),
            name: "Royal Heritage Banquet".into(),
            category: VendorCategory::Venue,
            rating: 4.8,
            price_level: 3,
            is_eco_friendly: false,
            location: "Mumbai, Andheri".into(),
            image_url: "https://images.unsplash.com/photo-1519167758481-83f550bb49b3?q=80&w=800&auto=format&fit=crop".into(),
            description: "Luxury banquet hall perfect for grand weddings.".into(),
            verified: None,
            owner_id: None,
        },
        Vendor {
            id: "v2".into(),
            name: "Green Leaf Catering".into(),
            category: VendorCategory::Catering,
            rating: 4.6,
            price_level: 2,
            is_eco_friendly: true,
            location: "Bangalore, Indiranagar".into(),
            image_url: "https://images.unsplash.com/photo-1555244162-803834f70033?q=80&w=800&auto=format&fit=crop".into(),
            description: "Organic, farm-to-table vegetarian catering with zero-waste policy.".into(),
            verified: None,
            owner_id: None,
        },
        Vendor {
            id: "v3".into(),
            name: "Shutter Bugs Photography".into(),
            category: VendorCategory::Photography,
            rating: 4.5,
            price_level: 2,
            is_eco_friendly: false,
            location: "Delhi, CP".into(),
            image_url: "https://images.unsplash.com/photo-1537633552985-df8429e8048b?q=80&w=800&auto=format&fit=crop".into(),
            description: "Capturing moments that last a lifetime. Drone shots available.".into(),
            verified: None,
            owner_id: None,
        },
        Vendor {
            id: "v4".into(),
            name: "Eco-Decor Solutions".into(),
            category: VendorCategory::Decor,
            rating: 4.9,
            price_level: 2,
            is_eco_friendly: true,
            location: "Pune, Koregaon Park".into(),
            image_url: "https://images.unsplash.com/photo-1478146896981-b80fe463b330?q=80&w=800&auto=format&fit=crop".into(),
            description: "Sustainable decor using recycled materials and local flowers.".into(),
            verified: None,
            owner_id: None,
        },
        Vendor {
            id: "v5".into(),
            name: "DJ Rakesh Beats".into(),
            category: VendorCategory::Entertainment,
            rating: 4.2,
            price_level: 1,
            is_eco_friendly: false,
            location: "Mumbai, Bandra".into(),
            image_url: "https://images.unsplash.com/photo-1516450360452-9312f5e86fc7?q=80&w=800&auto=format&fit=crop".into(),
            description: "Bollywood, EDM, and Punjabi hits to rock your party.".into(),
            verified: None,
            owner_id: None,
        },
    ]
}

pub fn seed_events(today: NaiveDate) -> Vec<Event> {
    let now = Utc::now();
    vec![
        Event {
            id: "e1".into(),
            name: "Sharma's Diwali Bash".into(),
            event_type: EventType::Festival,
            date: fifth_of_month(today),
            location: "Home, Mumbai".into(),
            budget: 50_000.0,
            spent: 12_000.0,
            expenses: vec![
                Expense {
                    id: "ex1".into(),
                    title: "Eco Crackers Advance".into(),
                    amount: 5_000.0,
                    category: "Entertainment".into(),
                    date: now,
                },
                Expense {
                    id: "ex2".into(),
                    title: "Sweet Box Order".into(),
                    amount: 7_000.0,
                    category: "Food".into(),
                    date: now,
                },
            ],
            tasks: vec![
                task("t1", "Buy Eco-friendly Crackers", true),
                task("t2", "Order Sweets", false),
                task("t3", "Send WhatsApp Invites", false),
            ],
            guests: vec![
                guest("g1", "Rahul Verma", GuestStatus::Confirmed, Some("+919876543210")),
                guest("g2", "Priya Singh", GuestStatus::Pending, Some("+919876543211")),
                guest("g3", "Amit Patel", GuestStatus::Declined, Some("+919876543212")),
            ],
            vendors: vec!["v2".into(), "v4".into()],
            sustainability_score: 85,
            image: "https://images.unsplash.com/photo-1517457373958-b7bdd4587205?q=80&w=800&auto=format&fit=crop".into(),
        },
        Event {
            id: "e2".into(),
            name: "Corporate Annual Meet".into(),
            event_type: EventType::Corporate,
            date: fifteenth_of_next_month(today),
            location: "Royal Heritage Banquet".into(),
            budget: 500_000.0,
            spent: 150_000.0,
            expenses: vec![Expense {
                id: "ex3".into(),
                title: "Venue Booking".into(),
                amount: 150_000.0,
                category: "Venue".into(),
                date: now,
            }],
            tasks: vec![
                task("t4", "Book Venue", true),
                task("t5", "Finalize Keynote Speaker", false),
            ],
            guests: vec![
                guest("g4", "Vikram Malhotra", GuestStatus::Confirmed, None),
                guest("g5", "Sneha Gupta", GuestStatus::Confirmed, None),
            ],
            vendors: vec!["v1".into()],
            sustainability_score: 40,
            image: "https://images.unsplash.com/photo-1511578314322-379afb476865?q=80&w=800&auto=format&fit=crop".into(),
        },
    ]
}

pub fn seed_posts(now: DateTime<Utc>) -> Vec<CommunityPost> {
    vec![
        CommunityPost {
            id: "p1".into(),
            author: "Anjali D.".into(),
            avatar: "https://i.pravatar.cc/150?u=anjali".into(),
            title: "5 Tips for a Sustainable Wedding in Delhi".into(),
            content: "We managed to reduce our plastic waste by 90% using banana leaves and clay pots! Here is how we did it...".into(),
            likes: 124,
            comments: 45,
            image: Some("https://images.unsplash.com/photo-1525268323814-8878939a9c6a?q=80&w=400&auto=format&fit=crop".into()),
            tags: vec!["Wedding".into(), "Sustainability".into(), "Delhi".into()],
            timestamp: now - Duration::hours(2),
        },
        CommunityPost {
            id: "p2".into(),
            author: "Rajesh K.".into(),
            avatar: "https://i.pravatar.cc/150?u=rajesh".into(),
            title: "Best budget caterers in Mumbai?".into(),
            content: "Looking for vegetarian caterers for a small family gathering (50 pax). Budget is around 500/plate. Any leads?".into(),
            likes: 12,
            comments: 8,
            image: None,
            tags: vec!["Catering".into(), "Mumbai".into(), "Budget".into()],
            timestamp: now - Duration::hours(5),
        },
    ]
}

/// Demo host identity used by role-based login.
pub fn host_profile() -> User {
    User {
        id: "u1".into(),
        name: "Jay Deep".into(),
        email: "jay@example.com".into(),
        role: UserRole::Host,
        avatar: "JD".into(),
        vendor_profile_id: None,
    }
}

/// Demo vendor identity used by role-based login.
pub fn vendor_profile() -> User {
    User {
        id: "v_user_1".into(),
        name: "Ramesh Decorators".into(),
        email: "ramesh@decor.com".into(),
        role: UserRole::Vendor,
        avatar: "RD".into(),
        vendor_profile_id: Some("v_pending".into()),
    }
}

fn fifth_of_month(today: NaiveDate) -> NaiveDate {
    today.with_day(5).unwrap_or(today)
}

fn fifteenth_of_next_month(today: NaiveDate) -> NaiveDate {
    let (year, month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 15).unwrap_or(today)
}

fn task(id: &str, title: &str, completed: bool) -> EventTask {
    EventTask {
        id: id.into(),
        title: title.into(),
        completed,
    }
}

fn guest(id: &str, name: &str, status: GuestStatus, phone: Option<&str>) -> Guest {
    Guest {
        id: id.into(),
        name: name.into(),
        status,
        phone: phone.map(Into::into),
        nft_badge_id: None,
    }
}
