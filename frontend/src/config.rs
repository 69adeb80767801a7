/// Time between two automatic carousel advances.
pub const AUTOPLAY_INTERVAL_MS: u32 = 5000;

pub const BOOKING_SUBMIT_DELAY_MS: u32 = 1000;
pub const CONTACT_SUBMIT_DELAY_MS: u32 = 1500;
pub const NEWSLETTER_SUBMIT_DELAY_MS: u32 = 1500;
pub const INSTAGRAM_LOAD_DELAY_MS: u32 = 1500;

pub const BOOKING_CONFIRMATION_MS: u32 = 5000;
pub const FOOTER_SUBSCRIBED_MS: u32 = 3000;

/// Widest viewport (px) still treated as a phone.
pub const NARROW_MAX_WIDTH: f64 = 640.0;
/// Widest viewport (px) still treated as a tablet.
pub const MEDIUM_MAX_WIDTH: f64 = 1024.0;

pub const BOOKING_DAYS_AHEAD: usize = 14;
pub const MAX_GUESTS: u8 = 8;
pub const INSTAGRAM_POSTS_COUNT: usize = 6;

pub const CAFE_NAME: &str = "Café Gamma";
pub const CAFE_ADDRESS: &str = "115 Allenby St, Tel Aviv";
pub const CAFE_PHONE: &str = "03-1234567";
pub const CAFE_EMAIL: &str = "info@cafegamma.co.il";

pub const OPENING_HOURS: &[(&str, &str)] = &[
    ("Sunday-Thursday", "08:00 - 22:00"),
    ("Friday", "08:00 - 16:00"),
    ("Saturday", "10:00 - 22:00"),
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Facebook", icon: "f", href: "https://facebook.com/cafegamma" },
    SocialLink { label: "Instagram", icon: "◎", href: "https://instagram.com/cafegamma" },
    SocialLink { label: "WhatsApp", icon: "✆", href: "https://wa.me/9721234567" },
];

pub const INSTAGRAM_USERNAME: &str = "cafe_gamma";
pub const INSTAGRAM_PROFILE_URL: &str = "https://www.instagram.com/cafe_gamma/";

/// Café location as (latitude, longitude).
pub const MAP_POSITION: (f64, f64) = (32.0853, 34.7818);
const MAP_SPAN: f64 = 0.01;

#[cfg(debug_assertions)]
pub fn site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn site_url() -> &'static str {
    "https://cafe-gamma.com"
}

/// OpenStreetMap embed centred on `(lat, lon)` with a marker on the café.
pub fn map_embed_url((lat, lon): (f64, f64)) -> String {
    let bbox = format!(
        "{:.4},{:.4},{:.4},{:.4}",
        lon - MAP_SPAN,
        lat - MAP_SPAN,
        lon + MAP_SPAN,
        lat + MAP_SPAN
    );
    let marker = format!("{:.4},{:.4}", lat, lon);
    format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={}&layer=mapnik&marker={}",
        urlencoding::encode(&bbox),
        urlencoding::encode(&marker)
    )
}

pub fn map_link_url((lat, lon): (f64, f64)) -> String {
    format!("https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map=17/{lat}/{lon}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_embed_encodes_bbox_and_marker() {
        let url = map_embed_url(MAP_POSITION);
        assert!(url.starts_with("https://www.openstreetmap.org/export/embed.html?bbox="));
        assert!(url.contains("bbox=34.7718%2C32.0753%2C34.7918%2C32.0953"));
        assert!(url.ends_with("marker=32.0853%2C34.7818"));
    }

    #[test]
    fn map_link_points_at_marker() {
        let url = map_link_url((1.5, 2.25));
        assert_eq!(url, "https://www.openstreetmap.org/?mlat=1.5&mlon=2.25#map=17/1.5/2.25");
    }
}
