//! Fixed keyword tables used by the classifier. All entries are lower-case.

use crate::models::common::{Department, Priority};

pub const HOUSEKEEPING_KEYWORDS: &[&str] = &[
    "clean",
    "towels",
    "sheets",
    "linens",
    "room service",
    "dirty",
    "maid",
    "housekeeping",
    "bed",
    "bathroom",
    "amenities",
    "pillow",
];

pub const MAINTENANCE_KEYWORDS: &[&str] = &[
    "fix",
    "broken",
    "repair",
    "leak",
    "plumbing",
    "electrical",
    "ac",
    "air conditioning",
    "heating",
    "hot water",
    "tv",
    "wifi",
    "internet",
    "light",
    "outlet",
    "window",
    "door",
    "lock",
];

pub const FOOD_AND_BEVERAGE_KEYWORDS: &[&str] = &[
    "food",
    "drink",
    "meal",
    "breakfast",
    "lunch",
    "dinner",
    "room service",
    "restaurant",
    "bar",
    "beverage",
    "snack",
    "coffee",
    "tea",
    "water",
    "wine",
    "beer",
];

pub const FRONT_DESK_KEYWORDS: &[&str] = &[
    "checkin",
    "checkout",
    "reservation",
    "bill",
    "payment",
    "key",
    "late checkout",
    "early checkin",
    "parking",
    "baggage",
    "concierge",
    "recommendation",
    "tour",
    "taxi",
];

pub const URGENT_KEYWORDS: &[&str] = &[
    "emergency",
    "urgent",
    "immediately",
    "asap",
    "broken",
    "leak",
    "security",
    "medical",
    "help",
    "stuck",
    "locked out",
];

pub const HIGH_PRIORITY_KEYWORDS: &[&str] = &[
    "soon",
    "quick",
    "fast",
    "hurry",
    "important",
    "needed",
    "dirty",
    "clean",
    "late",
    "early",
];

/// Department keyword lists in routing precedence order.
pub fn department_keywords() -> [(Department, &'static [&'static str]); 4] {
    [
        (Department::Housekeeping, HOUSEKEEPING_KEYWORDS),
        (Department::Maintenance, MAINTENANCE_KEYWORDS),
        (Department::FoodAndBeverage, FOOD_AND_BEVERAGE_KEYWORDS),
        (Department::FrontDesk, FRONT_DESK_KEYWORDS),
    ]
}

/// Priority keyword lists, scanned in order; the first list with any hit wins.
pub const PRIORITY_KEYWORDS: &[(Priority, &[&str])] = &[
    (Priority::Urgent, URGENT_KEYWORDS),
    (Priority::High, HIGH_PRIORITY_KEYWORDS),
];
