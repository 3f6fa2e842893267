mod wheel_svg;
mod wheel_utils;

use shared::config::WheelConfig;
use yew::prelude::*;

use crate::hooks::use_wheel_game;
use crate::styles;
use wheel_svg::WheelSvg;
use wheel_utils::{ResultDisplay, WheelButton};

#[derive(Properties, PartialEq)]
pub struct NeonWheelGameProps {
    pub config: WheelConfig,
}

#[function_component(NeonWheelGame)]
pub fn neon_wheel_game(props: &NeonWheelGameProps) -> Html {
    let wheel = use_wheel_game(props.config.clone());
    let game = wheel.game.clone();

    // Only show the outcome once the spin has resolved.
    let outcome = game.result.as_ref().and_then(|_| game.outcome());

    html! {
        <>
            <h1 class={styles::TITLE}>{"Neon Gambling Wheel"}</h1>
            <div class={styles::WHEEL_CONTAINER}>
                <WheelSvg game={game.clone()} />
                <div class={styles::POINTER}>{"▼"}</div>
            </div>
            <div class={styles::CONTROLS}>
                <WheelButton label="Spin" disabled={game.spinning} onclick={wheel.spin.clone()} />
                <WheelButton label="Reset" disabled={game.spinning} onclick={wheel.reset.clone()} />
            </div>
            <ResultDisplay message={game.result.clone()} outcome={outcome} />
        </>
    }
}
