use shared::shared_wheel_game::SpinOutcome;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WheelButtonProps {
    pub label: AttrValue,
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(WheelButton)]
pub fn wheel_button(props: &WheelButtonProps) -> Html {
    html! {
        <button
            class={styles::BUTTON}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
        >
            {props.label.clone()}
        </button>
    }
}

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub message: Option<String>,
    pub outcome: Option<SpinOutcome>,
}

pub fn result_class(outcome: Option<SpinOutcome>) -> &'static str {
    match outcome {
        Some(SpinOutcome::Win(_)) => styles::RESULT_WIN,
        _ => styles::RESULT_LOSE,
    }
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(message) = &props.message else {
        return html! {};
    };

    html! {
        <div class={classes!(styles::RESULT, result_class(props.outcome))}>
            {message.clone()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_class_by_outcome() {
        assert_eq!(result_class(Some(SpinOutcome::Win(45))), styles::RESULT_WIN);
        assert_eq!(result_class(Some(SpinOutcome::NoPrize)), styles::RESULT_LOSE);
        assert_eq!(result_class(None), styles::RESULT_LOSE);
    }
}
