use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct NeonBackgroundProps {
    #[prop_or_default]
    pub children: Html,
}

/// Full-page dark backdrop; mounts the neon stylesheet while it is on screen.
#[function_component(NeonBackground)]
pub fn neon_background(props: &NeonBackgroundProps) -> Html {
    use_effect_with((), move |_| {
        let document = gloo_utils::document();
        let style = document.create_element("style").ok();
        if let (Some(style), Some(head)) = (&style, document.head()) {
            style.set_text_content(Some(styles::NEON_CSS));
            let _ = head.append_child(style);
        }

        move || {
            if let Some(style) = style {
                style.remove();
            }
        }
    });

    html! {
        <div class={styles::PAGE}>
            {props.children.clone()}
        </div>
    }
}
