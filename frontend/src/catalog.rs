//! Static marketing content for the landing page.

#[derive(Debug, PartialEq)]
pub struct Feature {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ScooterModel {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub price: &'static str,
    pub original_price: &'static str,
    pub color: &'static str,
    pub features: [Feature; 4],
    pub highlights: [&'static str; 3],
}

pub static MODELS: [ScooterModel; 3] = [
    ScooterModel {
        id: "rizta",
        name: "Ather Rizta",
        tagline: "The Most Awarded Electric Scooter",
        price: "₹1,10,000",
        original_price: "₹1,20,000",
        color: "#2563eb",
        features: [
            Feature { label: "120km Range", value: "True Range" },
            Feature { label: "0-40 kmph", value: "3.3 seconds" },
            Feature { label: "90 kmph", value: "Top Speed" },
            Feature { label: "7\" Touch", value: "Dashboard" },
        ],
        highlights: ["Award Winner 2024", "Family Friendly", "Smart Features"],
    },
    ScooterModel {
        id: "450s",
        name: "Ather 450S",
        tagline: "Smart. Stylish. Sustainable.",
        price: "₹1,30,000",
        original_price: "₹1,40,000",
        color: "#ea580c",
        features: [
            Feature { label: "115km Range", value: "Certified" },
            Feature { label: "0-40 kmph", value: "3.9 seconds" },
            Feature { label: "90 kmph", value: "Top Speed" },
            Feature { label: "7\" Touch", value: "Dashboard" },
        ],
        highlights: ["DeepView Display", "Magic Twist", "OTA Updates"],
    },
    ScooterModel {
        id: "450apex",
        name: "Ather 450 Apex",
        tagline: "Performance Redefined",
        price: "₹1,80,000",
        original_price: "₹1,90,000",
        color: "#dc2626",
        features: [
            Feature { label: "150km Range", value: "True Range" },
            Feature { label: "0-40 kmph", value: "2.9 seconds" },
            Feature { label: "100 kmph", value: "Top Speed" },
            Feature { label: "7\" Touch", value: "Dashboard" },
        ],
        highlights: ["Sports Mode", "Premium Design", "Fastest Acceleration"],
    },
];

/// Unknown ids fall back to the first model.
pub fn find_model(id: &str) -> &'static ScooterModel {
    MODELS.iter().find(|m| m.id == id).unwrap_or(&MODELS[0])
}

#[derive(Debug, PartialEq)]
pub struct City {
    pub id: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub dealerships: u32,
    pub charging_stations: u32,
    pub featured: bool,
}

pub static CITIES: [City; 4] = [
    City { id: "bangalore", city: "Bangalore", state: "Karnataka", dealerships: 12, charging_stations: 45, featured: true },
    City { id: "chennai", city: "Chennai", state: "Tamil Nadu", dealerships: 8, charging_stations: 32, featured: true },
    City { id: "hyderabad", city: "Hyderabad", state: "Telangana", dealerships: 6, charging_stations: 28, featured: false },
    City { id: "pune", city: "Pune", state: "Maharashtra", dealerships: 5, charging_stations: 22, featured: false },
];

/// Unknown ids fall back to the first city.
pub fn find_city(id: &str) -> &'static City {
    CITIES.iter().find(|c| c.id == id).unwrap_or(&CITIES[0])
}

#[derive(Debug, PartialEq)]
pub struct Dealership {
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub hours: &'static str,
    pub services: &'static [&'static str],
    pub distance: &'static str,
}

pub static NEARBY_DEALERSHIPS: [Dealership; 3] = [
    Dealership {
        name: "Ather Space - Koramangala",
        address: "80 Feet Road, Koramangala 4th Block, Bangalore",
        phone: "+91 80 4718 0000",
        hours: "10:00 AM - 8:00 PM",
        services: &["Test Rides", "Sales", "Service", "Charging"],
        distance: "2.3 km",
    },
    Dealership {
        name: "Ather Space - Indiranagar",
        address: "100 Feet Road, Indiranagar, Bangalore",
        phone: "+91 80 4718 0001",
        hours: "10:00 AM - 8:00 PM",
        services: &["Test Rides", "Sales", "Service"],
        distance: "3.8 km",
    },
    Dealership {
        name: "Ather Space - Whitefield",
        address: "ITPL Main Road, Whitefield, Bangalore",
        phone: "+91 80 4718 0002",
        hours: "10:00 AM - 8:00 PM",
        services: &["Test Rides", "Sales", "Service", "Charging"],
        distance: "8.2 km",
    },
];

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub dropdown: &'static [NavLink],
}

pub static NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Rizta", href: "#rizta", dropdown: &[] },
    NavItem {
        label: "Ather 450",
        href: "#ather-450",
        dropdown: &[
            NavLink { label: "450S", href: "#450s" },
            NavLink { label: "450 Apex", href: "#450-apex" },
            NavLink { label: "Compare Models", href: "#compare" },
        ],
    },
    NavItem {
        label: "Smart Helmet & Accessories",
        href: "#accessories",
        dropdown: &[
            NavLink { label: "Smart Helmets", href: "#helmets" },
            NavLink { label: "Ather Accessories", href: "#accessories" },
            NavLink { label: "Chargers", href: "#chargers" },
        ],
    },
    NavItem {
        label: "Ather Ecosystem",
        href: "#ecosystem",
        dropdown: &[
            NavLink { label: "Ather Grid", href: "#grid" },
            NavLink { label: "Ather Connect", href: "#connect" },
            NavLink { label: "Service Centers", href: "#service" },
        ],
    },
];

pub static CAROUSEL_IMAGES: [&str; 4] = [
    "/assets/rider-sports-court.png",
    "/assets/rizta-night.png",
    "/assets/rider-road.png",
    "/assets/tunnel-lineup.png",
];
