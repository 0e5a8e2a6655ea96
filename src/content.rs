//! Every word and number the page displays, in one place.
//! Regenerating the supply figures (new fundraising data) means editing the
//! tables here and shipping a new build; nothing is mutated at runtime.

pub const BRAND_NAME: &str = "Footprints 2 Africa";
pub const BRAND_TAGLINE: &str = "Restoring Dignity";

// Hero
pub const HERO_TITLE: &str = "Restoring Dignity, Delivering Hope";
pub const HERO_SUB: &str = "Connecting surplus medical supplies in the UK with people who \
urgently need them across Africa. One precious bag at a time.";
pub const HERO_CTA_PRIMARY: &str = "Donate Now";
pub const HERO_CTA_SECONDARY: &str = "How We Help";

/// An animated impact figure: counts up from zero the first time the
/// metrics section scrolls into view.
pub struct Metric {
    pub target: f64,
    pub decimals: usize,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const METRICS: [Metric; 4] = [
    Metric { target: 31_752.0, decimals: 0, suffix: "", label: "Supplies Delivered" },
    Metric { target: 921.5, decimals: 1, suffix: "kg", label: "Saved from Landfill" },
    Metric { target: 5.0, decimals: 0, suffix: "", label: "Countries Served" },
    Metric { target: 100.0, decimals: 0, suffix: "%", label: "Volunteer-Led" },
];

// About
pub const ABOUT_HEADING: &str = "Our Purpose & Vision";
pub const PURPOSE_TITLE: &str = "Our Purpose";
pub const PURPOSE_BODY: &str = "We restore dignity, hope, and confidence to ostomates across \
Africa. It's not just about supplies—it's about restoring human worth and belonging.";
pub const VISION_TITLE: &str = "Our Vision";
pub const VISION_BODY: &str = "A world where every ostomate has access to essential supplies, \
community support, and the dignity they deserve. Grassroots, sustainable, compassionate.";
pub const WHY_TITLE: &str = "Why It Matters";
pub const WHY_BODY: &str = "Many ostomates are discharged with only 1-3 bags. When supplies run \
out, they resort to improvised solutions, leading to infections and isolation. Your support \
changes lives.";

// Stories of Change
pub struct Story {
    pub title: &'static str,
    pub quote: &'static str,
}

pub const STORIES: [Story; 3] = [
    Story {
        title: "Dickson's Story",
        quote: "The supplies gave me my life back. I can now work, go to school, and live \
with dignity.",
    },
    Story {
        title: "Asanda's Story",
        quote: "I felt alone until Footprints 2 Africa reached out. Now I know I'm not the \
only one.",
    },
    Story {
        title: "Hospital Partnership",
        quote: "These supplies have transformed our ability to care for ostomates with \
dignity.",
    },
];
pub const STORIES_HEADING: &str = "Stories of Change";

// How It Works
pub struct Step {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const HOW_HEADING: &str = "How It Works";
pub const HOW_STEPS: [Step; 4] = [
    Step {
        title: "Collect Donations",
        blurb: "From individuals, NHS trusts, and suppliers UK-wide",
    },
    Step {
        title: "Sort & Pack",
        blurb: "Our volunteer team checks and packs every donation",
    },
    Step {
        title: "Ship to Africa",
        blurb: "Shipped to partner hospitals and NGOs in the region",
    },
    Step {
        title: "Local Distribution",
        blurb: "Local partners hand each delivery to ostomates",
    },
];

// Impact map
pub const MAP_HEADING: &str = "Our Reach Across Southern Africa";
pub const MAP_SUB: &str = "Shaded by supplies delivered to date. Hover a country for details.";
pub const MAP_HINT: &str = "Scroll to zoom • Drag to pan • r resets the view";
pub const MAP_LEGEND_LABEL: &str = "Supplies delivered:";
pub const MAP_OFFLINE_NOTE: &str = "offline boundary data (simplified outlines)";

/// Countries drawn on the map: the five served countries plus neighbours
/// shown for geographic context. Anything else in the boundary atlas is
/// discarded at load time.
pub const DISPLAY_COUNTRIES: [&str; 13] = [
    "South Africa",
    "Zimbabwe",
    "Botswana",
    "Namibia",
    "Lesotho",
    "Mozambique",
    "Zambia",
    "Angola",
    "eSwatini",
    "Malawi",
    "Madagascar",
    "Dem. Rep. Congo",
    "Tanzania",
];

/// Supplies delivered per served country to date.
pub const SUPPLIES_DELIVERED: [(&str, u32); 5] = [
    ("South Africa", 12_543),
    ("Zimbabwe", 8_234),
    ("Botswana", 5_421),
    ("Namibia", 3_124),
    ("Lesotho", 2_430),
];

/// Fixed normalization bounds for the colour ramp. These are literals kept
/// in lockstep with the extremes of `SUPPLIES_DELIVERED` (asserted in tests),
/// not recomputed from the table at runtime.
pub const SUPPLY_RANGE: (u32, u32) = (2_430, 12_543);

/// Look up the delivered-supply count for a display country, if it is one of
/// the served five.
pub fn supplies_for(name: &str) -> Option<u32> {
    SUPPLIES_DELIVERED
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, count)| count)
}

/// Whether a boundary feature name is on the display allow-list.
pub fn is_display_country(name: &str) -> bool {
    DISPLAY_COUNTRIES.contains(&name)
}

// Donate
pub const DONATE_HEADING: &str = "Please donate today to help restore someone's dignity";
pub const DONATE_SUB: &str = "Your donation helps deliver essential medical supplies to \
ostomates across Africa when they need it most.";
pub const DONATE_FREQ_MONTHLY: &str = "Monthly donation";
pub const DONATE_FREQ_ONE_OFF: &str = "One-off donation";
pub const DONATE_AMOUNT_LABEL: &str = "Select an amount";
pub const DONATE_CUSTOM_LABEL: &str = "Change amount";
pub const PAYMENT_METHODS: [&str; 5] = ["Visa", "Mastercard", "G Pay", "Apple Pay", "PayPal"];
pub const DONATE_TOAST: &str = "Demo build: a real deployment hands off to our payment provider here.";

// Get Involved
pub const INVOLVED_HEADING: &str = "Get Involved";
pub const INVOLVED_SUB: &str = "Choose how you'd like to make a difference. Every contribution, \
no matter the size, restores dignity and hope.";
pub const INVOLVED_DONATE_TITLE: &str = "Make a Donation";
pub const INVOLVED_DONATE_BODY: &str = "Direct impact on lives. Your donation directly funds \
the collection, sorting, and delivery of essential medical supplies to ostomates across Africa.";
pub const INVOLVED_VOLUNTEER_TITLE: &str = "Volunteer";
pub const INVOLVED_VOLUNTEER_BODY: &str = "Join our passionate team. Help collect, sort, and \
pack supplies for distribution. No experience necessary—just compassion.";
pub const INVOLVED_VOLUNTEER_CTA: &str = "Get Started";
pub const VOLUNTEER_TOAST: &str = "Write to sam@footprints2africa.org.uk to join the volunteer team.";
pub const INFO_CARDS: [(&str, &str); 3] = [
    ("Impact", "£20 helps deliver approximately 100 stoma bags"),
    ("Gift Aid", "UK taxpayers can increase donation value by 25% at no extra cost"),
    ("Secure", "100% of donations go directly to supplies and delivery"),
];

// Contact
pub const CONTACT_HEADING: &str = "Get In Touch";
pub const CONTACT_EMAIL: &str = "sam@footprints2africa.org.uk";
pub const CONTACT_PHONE: &str = "+44 7352 036320";
pub const CONTACT_LOCATION: &str = "United Kingdom";
pub const TRUST_HEADING: &str = "Trust & Governance";
pub const TRUST_ITEMS: [(&str, &str); 3] = [
    ("Charity Registration", "UK Registered Charity No. 1214173"),
    ("Volunteer Leadership", "100% volunteer-led organization"),
    ("Transparency", "Complete transparency in all operations"),
];

// Footer
pub const FOOTER_BLURB: &str = "Restoring dignity, hope, and human worth to ostomates across \
Africa.";
pub const FOOTER_LEGAL: [&str; 3] = ["Privacy Policy", "Terms of Service", "Charity Registration"];
pub const FOOTER_SOCIAL: [&str; 3] = ["Facebook", "Twitter", "Instagram"];
pub const COPYRIGHT: &str = "© 2026 Footprints 2 Africa. UK Registered Charity No. 1214173.";
pub const COPYRIGHT_SUB: &str = "Designed with compassion for those who need it most.";
