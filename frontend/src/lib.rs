pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;

use crate::components::NeonBackground;
use crate::pages::wheel_game::NeonWheelGame;

#[function_component(App)]
pub fn app() -> Html {
    // URL overrides are read once; later changes need a reload.
    let config = use_state(config::load_wheel_config);

    html! {
        <NeonBackground>
            <NeonWheelGame config={(*config).clone()} />
        </NeonBackground>
    }
}
