use yew::prelude::*;

/// Properties for [`CloseIcon`].
#[derive(Properties, PartialEq)]
pub struct IconProps {
    /// Extra classes for the `svg` element.
    #[prop_or_default]
    pub class: Classes,
    /// Accessible title; the icon is hidden from assistive tech without one.
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

/// Close glyph; sized and filled by the surrounding stylesheet.
#[function_component(CloseIcon)]
pub fn close_icon(props: &IconProps) -> Html {
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={props.class.clone()}
            viewBox="0 0 32 32"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            <path d="M25.714 7.887l-1.6-1.6L16 14.4 7.886 6.287l-1.6 1.6L14.4 16l-8.114 8.114 1.6 1.6L16 17.6l8.114 8.114 1.6-1.6L17.6 16z" />
        </svg>
    }
}
