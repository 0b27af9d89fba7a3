//! Static site copy that is not worth a round-trip: venue facts, the
//! featured-spaces blurbs and the gallery fallback shown when the remote
//! store is unreachable.

use dioxus::prelude::*;

/// Bundled hero shot, doubling as the first fallback gallery image.
pub const HERO_IMAGE: Asset = asset!("/assets/header.jpeg");

pub struct ContactInfo {
    pub location: &'static str,
    pub venue_type: &'static str,
    pub capacity: &'static str,
    pub parking: &'static str,
    pub whatsapp_url: &'static str,
}

pub const CONTACT_INFO: ContactInfo = ContactInfo {
    location: "Redhill, Kenya",
    venue_type: "Outdoor garden venue",
    capacity: "Flexible (enquire for details)",
    parking: "Available",
    whatsapp_url: "https://wa.me/254000000000?text=Hello%20Eva's%20Garden,%20I'd%20like%20to%20inquire%20about%20booking%20the%20venue%20for%20an%20event.",
};

pub struct FeaturedSpace {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const FEATURED_SPACES: [FeaturedSpace; 3] = [
    FeaturedSpace {
        title: "The Garden Ceremony Space",
        description: "Say your vows surrounded by lush greenery, open skies, and nature at its most beautiful. Our garden ceremony area provides a romantic and peaceful setting for unforgettable \"I do\" moments.",
        icon: "🌿",
    },
    FeaturedSpace {
        title: "Reception & Celebration Area",
        description: "The expansive lawn transforms seamlessly from a daytime celebration to an elegant evening reception, accommodating both tented and open-air setups.",
        icon: "✨",
    },
    FeaturedSpace {
        title: "Pre-Event & Cocktail Lawn",
        description: "Perfect for welcome drinks, guest mingling, and golden-hour photos, this space offers a relaxed transition between ceremony and celebration.",
        icon: "🍃",
    },
];

/// Shown in the public gallery when the remote query fails or returns
/// nothing; the site should never render an empty hero wall. Bundled so
/// the fallback works with no network at all.
pub const FALLBACK_GALLERY: [(Asset, &str); 3] = [
    (HERO_IMAGE, "Eva's Garden entrance view"),
    (asset!("/assets/evasgarden4.jpeg"), "Elegant event setup"),
    (asset!("/assets/gardenspace.jpeg"), "The open garden lawn"),
];
