use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::content::{InstagramPost, INSTAGRAM_POSTS};

#[derive(Properties, PartialEq)]
pub struct InstagramFeedProps {
    #[prop_or(config::INSTAGRAM_POSTS_COUNT)]
    pub posts_count: usize,
}

fn visible_posts(count: usize) -> &'static [InstagramPost] {
    &INSTAGRAM_POSTS[..count.min(INSTAGRAM_POSTS.len())]
}

#[function_component(InstagramFeed)]
pub fn instagram_feed(props: &InstagramFeedProps) -> Html {
    let loading = use_state(|| true);

    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(config::INSTAGRAM_LOAD_DELAY_MS, move || loading.set(false));
                move || drop(timer)
            },
            (),
        );
    }

    html! {
        <section class="instagram-section">
            <style>
                {r#"
                .instagram-section {
                    padding: 4rem 1rem;
                    background: #fffbf5;
                    text-align: center;
                }
                .instagram-section h2 {
                    font-size: 2.25rem;
                    color: #1f2937;
                    margin-bottom: 0.5rem;
                }
                .instagram-handle {
                    display: inline-block;
                    margin-bottom: 2rem;
                    color: #d97706;
                    text-decoration: none;
                }
                .instagram-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                }
                .instagram-post {
                    position: relative;
                    display: block;
                    aspect-ratio: 1 / 1;
                    overflow: hidden;
                    border-radius: 0.75rem;
                }
                .instagram-post img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .instagram-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.55);
                    color: white;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .instagram-post:hover .instagram-overlay { opacity: 1; }
                .instagram-skeleton {
                    aspect-ratio: 1 / 1;
                    border-radius: 0.75rem;
                    background: #e5e7eb;
                    animation: pulse 1.5s ease-in-out infinite;
                }
                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                @media (max-width: 640px) {
                    .instagram-grid { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
            <h2>{"Follow Us on Instagram"}</h2>
            <a
                class="instagram-handle"
                href={config::INSTAGRAM_PROFILE_URL}
                target="_blank"
                rel="noopener noreferrer"
            >
                {format!("@{}", config::INSTAGRAM_USERNAME)}
            </a>
            <div class="instagram-grid">
                if *loading {
                    { for (0..props.posts_count).map(|i| html! {
                        <div key={i} class="instagram-skeleton"></div>
                    }) }
                } else {
                    { for visible_posts(props.posts_count).iter().map(|post| html! {
                        <a
                            key={post.id}
                            class="instagram-post"
                            href={post.permalink}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <img src={post.image_url} alt={post.caption} loading="lazy" />
                            <div class="instagram-overlay">
                                <span>{format!("♥ {}   💬 {}", post.likes, post.comments)}</span>
                                <p>{post.caption}</p>
                            </div>
                        </a>
                    }) }
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_the_first_posts_in_order() {
        let posts = visible_posts(6);
        assert_eq!(posts.len(), 6);
        assert_eq!(posts[0].id, "1");
        assert_eq!(posts[5].id, "6");
    }

    #[test]
    fn count_is_capped_by_the_feed() {
        assert_eq!(visible_posts(20).len(), INSTAGRAM_POSTS.len());
        assert!(visible_posts(0).is_empty());
    }
}
