use yew::prelude::*;

use crate::seo;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or(AttrValue::Static(seo::DEFAULT_TITLE))]
    pub title: AttrValue,
    #[prop_or(AttrValue::Static(seo::DEFAULT_DESCRIPTION))]
    pub description: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Page shell: writes the document head whenever the title or description changes.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    {
        let title = props.title.clone();
        let description = props.description.clone();
        use_effect_with_deps(
            |(title, description)| {
                seo::apply_head(title, description);
                || ()
            },
            (title, description),
        );
    }

    html! {
        <main class="page-layout">
            <style>
                {r#"
                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                .page-layout {
                    min-height: 100vh;
                    background: #fffbf5;
                    font-family: 'Heebo', system-ui, sans-serif;
                }
                "#}
            </style>
            { for props.children.iter() }
        </main>
    }
}
