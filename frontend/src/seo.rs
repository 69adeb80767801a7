use serde_json::{json, Value};
use web_sys::window;

use crate::config;

pub const DEFAULT_TITLE: &str = "Café Gamma";
pub const DEFAULT_DESCRIPTION: &str =
    "Café Gamma - a meeting place for lovers of quality coffee, good food and a pleasant atmosphere";

const STRUCTURED_DATA_ID: &str = "structured-data";

/// schema.org description of the café, embedded as JSON-LD.
pub fn structured_data(description: &str) -> Value {
    let hours: Vec<String> = config::OPENING_HOURS
        .iter()
        .map(|(days, hours)| format!("{days} {hours}"))
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "CafeOrCoffeeShop",
        "name": config::CAFE_NAME,
        "description": description,
        "url": config::site_url(),
        "telephone": config::CAFE_PHONE,
        "email": config::CAFE_EMAIL,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": config::CAFE_ADDRESS,
            "addressLocality": "Tel Aviv",
            "addressCountry": "IL",
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": config::MAP_POSITION.0,
            "longitude": config::MAP_POSITION.1,
        },
        "servesCuisine": "Coffee, pastries, breakfast",
        "priceRange": "₪₪",
        "openingHours": hours,
    })
}

/// Sets the document title, meta description and JSON-LD block. Missing DOM pieces are skipped.
pub fn apply_head(title: &str, description: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(title);

    let Some(head) = document.head() else {
        return;
    };

    let meta = match document.query_selector("meta[name=\"description\"]") {
        Ok(Some(meta)) => Some(meta),
        _ => document.create_element("meta").ok().map(|meta| {
            let _ = meta.set_attribute("name", "description");
            let _ = head.append_child(&meta);
            meta
        }),
    };
    if let Some(meta) = meta {
        let _ = meta.set_attribute("content", description);
    }

    let script = match document.get_element_by_id(STRUCTURED_DATA_ID) {
        Some(script) => Some(script),
        None => document.create_element("script").ok().map(|script| {
            script.set_id(STRUCTURED_DATA_ID);
            let _ = script.set_attribute("type", "application/ld+json");
            let _ = head.append_child(&script);
            script
        }),
    };
    if let Some(script) = script {
        script.set_text_content(Some(&structured_data(description).to_string()));
    }
    log::debug!("document head set for {}", title);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_data_describes_the_cafe() {
        let data = structured_data(DEFAULT_DESCRIPTION);
        assert_eq!(data["@type"], "CafeOrCoffeeShop");
        assert_eq!(data["name"], config::CAFE_NAME);
        assert_eq!(data["description"], DEFAULT_DESCRIPTION);
        assert_eq!(data["address"]["addressCountry"], "IL");
        assert_eq!(data["openingHours"].as_array().map(Vec::len), Some(3));
        assert_eq!(data["openingHours"][1], "Friday 08:00 - 16:00");
    }

    #[test]
    fn structured_data_links_to_site() {
        let data = structured_data("x");
        assert_eq!(data["url"], config::site_url());
    }
}
