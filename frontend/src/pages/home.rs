use yew::prelude::*;

use crate::components::{
    about::About, booking::BookingSystem, contact::ContactSection, gallery::AtmosphereGallery,
    hero::Hero, instagram::InstagramFeed, menu_highlights::MenuHighlights,
    newsletter::NewsletterSignup, services::Services, testimonials::TestimonialsSlider,
};
use crate::pages::faq::FaqAccordion;
use crate::pages::layout::Layout;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <Layout>
            <Hero />
            <About />
            <Services />
            <MenuHighlights />
            <AtmosphereGallery />
            <TestimonialsSlider />
            <BookingSystem />
            <FaqAccordion />
            <InstagramFeed />
            <NewsletterSignup />
            <ContactSection />
        </Layout>
    }
}

#[function_component(BookingPage)]
pub fn booking_page() -> Html {
    html! {
        <Layout
            title="Reserve a table | Café Gamma"
            description="Book a table at Café Gamma for up to eight guests, up to two weeks ahead"
        >
            <div class="page-spacer"></div>
            <BookingSystem />
        </Layout>
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    html! {
        <Layout
            title="Contact | Café Gamma"
            description="Address, opening hours and a contact form for Café Gamma in Tel Aviv"
        >
            <div class="page-spacer"></div>
            <ContactSection />
        </Layout>
    }
}

#[function_component(GalleryPage)]
pub fn gallery_page() -> Html {
    html! {
        <Layout
            title="Gallery | Café Gamma"
            description="A look inside Café Gamma and what our guests say about us"
        >
            <div class="page-spacer"></div>
            <AtmosphereGallery />
            <TestimonialsSlider />
        </Layout>
    }
}
