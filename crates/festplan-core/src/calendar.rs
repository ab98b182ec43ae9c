//! Indian festival and muhurat calendar used for planning suggestions.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CalendarEntryKind {
    Festival,
    Muhurat,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: CalendarEntryKind,
    pub description: String,
}

use CalendarEntryKind::{Festival, Muhurat};

/// (day, kind, name, description) per calendar month, January first.
const YEARLY: [&[(u32, CalendarEntryKind, &str, &str)]; 12] = [
    &[
        (1, Festival, "New Year", "Global Celebration"),
        (13, Festival, "Lohri", "Punjabi Folk Festival"),
        (14, Festival, "Makar Sankranti", "Harvest Festival"),
        (15, Festival, "Pongal", "Tamil Harvest Festival"),
        (17, Festival, "Guru Gobind Singh Jayanti", "Sikh Festival"),
        (22, Muhurat, "Wedding Muhurat", "Auspicious Date"),
        (26, Festival, "Republic Day", "National Holiday"),
    ],
    &[
        (10, Festival, "Vasant Panchami", "Worship of Goddess Saraswati"),
        (14, Muhurat, "Wedding Muhurat", "Valentine Wedding Special"),
        (19, Festival, "Chhatrapati Shivaji Maharaj Jayanti", "Maratha Warrior King"),
        (28, Muhurat, "Wedding Muhurat", "End of month auspicious date"),
    ],
    &[
        (8, Festival, "Maha Shivratri", "Night of Lord Shiva"),
        (24, Festival, "Holika Dahan", "Bonfire Night"),
        (25, Festival, "Holi", "Festival of Colors"),
        (29, Festival, "Good Friday", "Religious Holiday"),
        (31, Festival, "Easter", "Resurrection Sunday"),
    ],
    &[
        (9, Festival, "Ugadi / Gudi Padwa", "New Year"),
        (11, Festival, "Eid al-Fitr", "End of Ramadan"),
        (13, Festival, "Baisakhi", "Punjabi New Year"),
        (14, Festival, "Ambedkar Jayanti", "Equality Day"),
        (17, Festival, "Ram Navami", "Birth of Lord Rama"),
        (21, Festival, "Mahavir Jayanti", "Jain Festival"),
        (22, Muhurat, "Wedding Muhurat", "Auspicious Date"),
    ],
    &[
        (1, Festival, "Labour Day", "International Workers Day"),
        (10, Muhurat, "Akshaya Tritiya", "Most Auspicious Day"),
        (12, Festival, "Mothers Day", "Celebration of Mothers"),
        (23, Festival, "Buddha Purnima", "Birth of Gautam Buddha"),
    ],
    &[
        (5, Festival, "World Environment Day", "Sustainability Awareness"),
        (17, Festival, "Eid al-Adha", "Festival of Sacrifice"),
        (21, Festival, "International Yoga Day", "Wellness & Yoga"),
        (29, Muhurat, "Wedding Muhurat", "Summer Wedding Date"),
    ],
    &[
        (7, Festival, "Rath Yatra", "Chariot Festival"),
        (11, Muhurat, "Wedding Muhurat", "Auspicious Date"),
        (17, Festival, "Muharram", "Islamic New Year"),
        (21, Festival, "Guru Purnima", "Honoring Teachers"),
    ],
    &[
        (4, Festival, "Friendship Day", "Celebration of friends"),
        (15, Festival, "Independence Day", "National Holiday"),
        (16, Festival, "Parsi New Year", "Navroz"),
        (19, Festival, "Raksha Bandhan", "Bond of protection"),
        (26, Festival, "Janmashtami", "Birth of Lord Krishna"),
    ],
    &[
        (5, Festival, "Teachers Day", "Honoring Educators"),
        (7, Festival, "Ganesh Chaturthi", "Festival of Ganesh"),
        (15, Festival, "Onam", "Harvest Festival of Kerala"),
        (16, Festival, "Eid-e-Milad", "Birth of Prophet"),
    ],
    &[
        (2, Festival, "Gandhi Jayanti", "Birth of Mahatma Gandhi"),
        (3, Festival, "Navratri Begins", "9 Nights of Goddess"),
        (9, Festival, "Durga Puja", "Worship of Goddess Durga"),
        (12, Festival, "Dussehra", "Victory of Good over Evil"),
        (20, Festival, "Karwa Chauth", "Fasting for husbands"),
        (29, Festival, "Dhanteras", "Festival of Wealth"),
        (31, Festival, "Diwali", "Festival of Lights"),
    ],
    &[
        (2, Festival, "Govardhan Puja", "Day after Diwali"),
        (3, Festival, "Bhai Dooj", "Brother-Sister Festival"),
        (7, Festival, "Chhath Puja", "Sun God Worship"),
        (14, Festival, "Childrens Day", "Birthday of Nehru"),
        (15, Festival, "Guru Nanak Jayanti", "Gurpurab"),
        (22, Muhurat, "Wedding Muhurat", "Wedding Season Begins"),
    ],
    &[
        (4, Muhurat, "Wedding Muhurat", "Peak Wedding Date"),
        (14, Muhurat, "Wedding Muhurat", "Last Muhurat of Year"),
        (25, Festival, "Christmas", "Birth of Jesus"),
        (31, Festival, "New Year Eve", "Party Time"),
    ],
];

/// Materialize the calendar for one year. Entries falling on days the year
/// does not have (none in the current table) are skipped.
pub fn yearly_calendar(year: i32) -> Vec<CalendarEvent> {
    let mut events = Vec::new();
    for (month_index, entries) in YEARLY.iter().enumerate() {
        for (idx, (day, kind, name, description)) in entries.iter().enumerate() {
            let Some(date) = NaiveDate::from_ymd_opt(year, month_index as u32 + 1, *day) else {
                continue;
            };
            events.push(CalendarEvent {
                id: format!("cal-{month_index}-{idx}"),
                name: (*name).to_string(),
                date,
                kind: *kind,
                description: (*description).to_string(),
            });
        }
    }
    events
}

/// Festivals in the current and next calendar month of `today`'s year.
pub fn upcoming_festivals(today: NaiveDate) -> Vec<CalendarEvent> {
    let current = today.month();
    let next = current % 12 + 1;
    yearly_calendar(today.year())
        .into_iter()
        .filter(|e| {
            let m = e.date.month();
            (m == current || m == next) && e.kind == CalendarEntryKind::Festival
        })
        .collect()
}
