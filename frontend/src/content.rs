// Static display content. Views receive these tables at construction and never mutate them.

#[derive(Clone, PartialEq, Debug)]
pub struct GalleryImage {
    pub id: u32,
    pub src: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

pub const GALLERY_IMAGES: &[GalleryImage] = &[
    GalleryImage {
        id: 1,
        src: "/images/cafe-interior-1.jpg",
        alt: "Café Gamma - main seating area",
        caption: "The main seating area in natural light",
    },
    GalleryImage {
        id: 2,
        src: "/images/cafe-interior-2.jpg",
        alt: "Café Gamma - sofa corner",
        caption: "Our cosy sofa corner",
    },
    GalleryImage {
        id: 3,
        src: "/images/cafe-interior-3.jpg",
        alt: "Café Gamma - the bar",
        caption: "The bar and its wide drinks selection",
    },
    GalleryImage {
        id: 4,
        src: "/images/cafe-interior-4.jpg",
        alt: "Café Gamma - work corner",
        caption: "The quiet work corner",
    },
    GalleryImage {
        id: 5,
        src: "/images/cafe-interior-5.jpg",
        alt: "Café Gamma - in the evening",
        caption: "The evening atmosphere",
    },
    GalleryImage {
        id: 6,
        src: "/images/cafe-interior-6.jpg",
        alt: "Café Gamma - design details",
        caption: "Our one-of-a-kind design details",
    },
];

#[derive(Clone, PartialEq, Debug)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub quote: &'static str,
    /// 1 to 5 stars.
    pub rating: u8,
    pub image: Option<&'static str>,
}

impl Testimonial {
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Ronit Levi",
        quote: "Café Gamma is my favourite place to sit and work. Lovely atmosphere and excellent coffee!",
        rating: 5,
        image: Some("https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&w=200&q=80"),
    },
    Testimonial {
        id: 2,
        name: "Yossi Cohen",
        quote: "Fresh cakes and quality coffee make every visit special. Highly recommended!",
        rating: 4,
        image: Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=200&q=80"),
    },
    Testimonial {
        id: 3,
        name: "Michal Avraham",
        quote: "The best place in the neighbourhood! Kind service, fair prices and delicious food.",
        rating: 5,
        image: Some("https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&w=200&q=80"),
    },
    Testimonial {
        id: 4,
        name: "David Shimoni",
        quote: "I've been coming for years and the quality never drops. Perfect for business meetings.",
        rating: 5,
        image: None,
    },
    Testimonial {
        id: 5,
        name: "Noa Golan",
        quote: "The fresh croissants and great coffee are why I'm back every morning. Simply excellent!",
        rating: 4,
        image: Some("https://images.unsplash.com/photo-1544005313-94ddf0286df2?auto=format&fit=crop&w=200&q=80"),
    },
    Testimonial {
        id: 6,
        name: "Alon Barak",
        quote: "The warm atmosphere and special design make it a place to spend hours in. Recommended!",
        rating: 5,
        image: Some("https://images.unsplash.com/photo-1552058544-f2b08422138a?auto=format&fit=crop&w=200&q=80"),
    },
];

#[derive(Clone, PartialEq, Debug)]
pub struct MenuItem {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub image: &'static str,
    pub category: &'static str,
}

pub const MENU_HIGHLIGHTS: &[MenuItem] = &[
    MenuItem {
        id: 1,
        name: "Gamma Special Coffee",
        description: "Fine arabica with our secret house blend, served with velvety milk foam",
        price: "₪18",
        image: "/images/special-coffee.jpg",
        category: "Hot drinks",
    },
    MenuItem {
        id: 2,
        name: "Almond Croissant",
        description: "Fresh butter croissant filled with rich almond cream, baked on site",
        price: "₪24",
        image: "/images/almond-croissant.jpg",
        category: "Pastries",
    },
    MenuItem {
        id: 3,
        name: "Mediterranean Salad",
        description: "Fresh vegetables, kalamata olives, feta and local za'atar in extra virgin olive oil",
        price: "₪42",
        image: "/images/mediterranean-salad.jpg",
        category: "Light meals",
    },
    MenuItem {
        id: 4,
        name: "Gamma Shakshuka",
        description: "Fresh eggs in homemade tomato sauce with special spices, tahini and sourdough",
        price: "₪48",
        image: "/images/shakshuka.jpg",
        category: "Breakfast",
    },
    MenuItem {
        id: 5,
        name: "Pistachio Dessert",
        description: "Velvety pistachio mousse on almond dacquoise with mirror glaze and caramelised pistachios",
        price: "₪32",
        image: "/images/pistachio-dessert.jpg",
        category: "Desserts",
    },
    MenuItem {
        id: 6,
        name: "Berry Smoothie",
        description: "Fresh forest berries with yoghurt, honey and seasonal fruit",
        price: "₪28",
        image: "/images/berry-smoothie.jpg",
        category: "Cold drinks",
    },
];

#[derive(Clone, PartialEq, Debug)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub image: &'static str,
    pub learn_more_url: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ServiceTab {
    Coffee,
    Food,
    Events,
}

impl ServiceTab {
    pub const ALL: [ServiceTab; 3] = [ServiceTab::Coffee, ServiceTab::Food, ServiceTab::Events];

    pub fn label(self) -> &'static str {
        match self {
            ServiceTab::Coffee => "Coffee",
            ServiceTab::Food => "Food",
            ServiceTab::Events => "Events",
        }
    }

    pub fn services(self) -> &'static [Service] {
        match self {
            ServiceTab::Coffee => COFFEE_SERVICES,
            ServiceTab::Food => FOOD_SERVICES,
            ServiceTab::Events => EVENT_SERVICES,
        }
    }
}

const COFFEE_SERVICES: &[Service] = &[
    Service {
        title: "Specialty Coffee",
        description: "Quality coffee from carefully selected beans from around the world, gently roasted to perfection.",
        icon: "☕",
        image: "/images/specialty-coffee.jpg",
        learn_more_url: "/services/specialty-coffee",
    },
    Service {
        title: "Pour-over & Chemex",
        description: "Special brewing methods that bring out the delicate flavours of our coffee.",
        icon: "☕",
        image: "/images/brewing-methods.jpg",
        learn_more_url: "/services/brewing-methods",
    },
];

const FOOD_SERVICES: &[Service] = &[
    Service {
        title: "Fresh Pastries",
        description: "Sweet and savoury pastries baked on site every day.",
        icon: "🍴",
        image: "/images/fresh-pastries.jpg",
        learn_more_url: "/services/pastries",
    },
    Service {
        title: "Breakfasts",
        description: "Rich breakfasts served with the finest fresh ingredients.",
        icon: "🍴",
        image: "/images/breakfast.jpg",
        learn_more_url: "/services/breakfast",
    },
];

const EVENT_SERVICES: &[Service] = &[
    Service {
        title: "Private Events",
        description: "Private events for up to 30 guests in a designed, intimate space.",
        icon: "📅",
        image: "/images/private-events.jpg",
        learn_more_url: "/services/private-events",
    },
    Service {
        title: "Catering",
        description: "Catering for small events with a range of dishes from our menu.",
        icon: "📅",
        image: "/images/catering.jpg",
        learn_more_url: "/services/catering",
    },
];

#[derive(Clone, PartialEq, Debug)]
pub struct FaqEntry {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        id: 1,
        question: "What are Café Gamma's opening hours?",
        answer: "We are open Sunday to Thursday 08:00-22:00, Friday 08:00-16:00 and Saturday 10:00-22:00. Hours may change on holidays, follow our Facebook page for updates.",
    },
    FaqEntry {
        id: 2,
        question: "Can I book a table in advance?",
        answer: "Absolutely! Book through our website, by phone at 03-1234567 or through our app. We recommend booking ahead on weekends and at peak hours. Groups of 8 or more must book in advance.",
    },
    FaqEntry {
        id: 3,
        question: "Do you host special events?",
        answer: "Yes, we host live music evenings on Thursdays, baking workshops on Sundays and monthly wine tastings. The full calendar is published on our site and Facebook page at the start of each month.",
    },
    FaqEntry {
        id: 4,
        question: "Do you have vegan or gluten-free options?",
        answer: "Definitely! Our menu includes vegan, vegetarian and gluten-free dishes, all marked on the menu, and we're always happy to adapt dishes. Please tell your server about any allergy or dietary preference.",
    },
    FaqEntry {
        id: 5,
        question: "Can I order a special cake for an event?",
        answer: "Yes, our patisserie makes cakes for birthdays, family and business events. Please order at least 48 hours ahead, from our menu or fully custom. Call the patisserie team at 03-1234568.",
    },
    FaqEntry {
        id: 6,
        question: "Is there parking nearby?",
        answer: "There's a public car park 50 metres away and café customers get 20% off there (ask for a voucher at the till). Street parking is free after 19:00 and on Friday-Saturday.",
    },
    FaqEntry {
        id: 7,
        question: "Can I host a private event at the café?",
        answer: "Of course! We host birthdays, parties, business events and more. Rent the whole space or part of it depending on the size of the event, with dedicated event menus. Contact our events manager for details.",
    },
    FaqEntry {
        id: 8,
        question: "Is there Wi-Fi at the café?",
        answer: "Yes, fast and free Wi-Fi for all customers. The password changes weekly and is printed on your receipt, or just ask your server.",
    },
];

#[derive(Clone, PartialEq, Debug)]
pub struct InstagramPost {
    pub id: &'static str,
    pub image_url: &'static str,
    pub caption: &'static str,
    pub likes: u32,
    pub comments: u32,
    pub permalink: &'static str,
}

/// Mock feed; there is no Instagram API behind it.
pub const INSTAGRAM_POSTS: &[InstagramPost] = &[
    InstagramPost {
        id: "1",
        image_url: "https://images.unsplash.com/photo-1509042239860-f550ce710b93",
        caption: "A perfect morning coffee at Café Gamma",
        likes: 124,
        comments: 23,
        permalink: "https://www.instagram.com/p/sample1/",
    },
    InstagramPost {
        id: "2",
        image_url: "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085",
        caption: "Cake of the week - chocolate pistachio",
        likes: 98,
        comments: 12,
        permalink: "https://www.instagram.com/p/sample2/",
    },
    InstagramPost {
        id: "3",
        image_url: "https://images.unsplash.com/photo-1554118811-1e0d58224f24",
        caption: "Butter croissant fresh from the oven",
        likes: 156,
        comments: 18,
        permalink: "https://www.instagram.com/p/sample3/",
    },
    InstagramPost {
        id: "4",
        image_url: "https://images.unsplash.com/photo-1513267048331-5611cad62e41",
        caption: "Special latte art",
        likes: 201,
        comments: 32,
        permalink: "https://www.instagram.com/p/sample4/",
    },
    InstagramPost {
        id: "5",
        image_url: "https://images.unsplash.com/photo-1556742393-d75f468bfcb0",
        caption: "This morning's health salad",
        likes: 87,
        comments: 9,
        permalink: "https://www.instagram.com/p/sample5/",
    },
    InstagramPost {
        id: "6",
        image_url: "https://images.unsplash.com/photo-1572286258217-215b98b27b99",
        caption: "Perfect vibe for remote work",
        likes: 112,
        comments: 15,
        permalink: "https://www.instagram.com/p/sample6/",
    },
    InstagramPost {
        id: "7",
        image_url: "https://images.unsplash.com/photo-1534080564583-6be75777b70a",
        caption: "Special iced coffee for summer",
        likes: 178,
        comments: 27,
        permalink: "https://www.instagram.com/p/sample7/",
    },
    InstagramPost {
        id: "8",
        image_url: "https://images.unsplash.com/photo-1579888944880-d98341245702",
        caption: "Fresh pastries every morning",
        likes: 143,
        comments: 19,
        permalink: "https://www.instagram.com/p/sample8/",
    },
];

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const ABOUT_STATS: &[Stat] = &[
    Stat { number: "10+", label: "Years of experience", icon: "☕" },
    Stat { number: "1000+", label: "Regular customers", icon: "👥" },
    Stat { number: "50+", label: "Kinds of coffee", icon: "🌱" },
];

pub struct FooterLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const FOOTER_LINKS: &[FooterLink] = &[
    FooterLink { name: "Home", href: "/" },
    FooterLink { name: "Menu", href: "/#menu" },
    FooterLink { name: "About", href: "/#about" },
    FooterLink { name: "Gallery", href: "/gallery" },
    FooterLink { name: "FAQ", href: "/faq" },
    FooterLink { name: "Contact", href: "/contact" },
];

pub const POLICY_LINKS: &[FooterLink] = &[
    FooterLink { name: "Terms of use", href: "/terms" },
    FooterLink { name: "Privacy policy", href: "/privacy" },
    FooterLink { name: "FAQ", href: "/faq" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn carousel_tables_have_unique_ids() {
        let gallery: HashSet<_> = GALLERY_IMAGES.iter().map(|i| i.id).collect();
        assert_eq!(gallery.len(), GALLERY_IMAGES.len());
        let testimonials: HashSet<_> = TESTIMONIALS.iter().map(|t| t.id).collect();
        assert_eq!(testimonials.len(), TESTIMONIALS.len());
    }

    #[test]
    fn ratings_stay_within_five_stars() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn testimonial_initial_falls_back_to_first_letter() {
        assert_eq!(TESTIMONIALS[3].initial(), "D");
        assert!(TESTIMONIALS[3].image.is_none());
    }

    #[test]
    fn every_service_tab_has_cards() {
        for tab in ServiceTab::ALL {
            assert_eq!(tab.services().len(), 2, "{}", tab.label());
        }
    }
}
