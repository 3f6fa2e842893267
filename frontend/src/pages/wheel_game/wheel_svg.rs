use std::rc::Rc;

use shared::shared_wheel_game::WheelGame;
use shared::wheel_geometry::{label_position, spin_rotation, wedge_path};
use yew::prelude::*;

use crate::styles;

const SIZE: f64 = 400.0;
const RADIUS: f64 = 170.0;
const RIM: f64 = 8.0;

#[derive(Properties, PartialEq)]
pub struct WheelSvgProps {
    pub game: Rc<WheelGame>,
}

/// CSS for the wheel graphic: no transform until a target has been drawn,
/// then a transition to the target's rotation over the spin duration.
pub fn rotation_style(game: &WheelGame) -> String {
    let transform = match game.selected {
        Some(target) => format!("rotate({}deg)", spin_rotation(target, game.wheel.len())),
        None => "none".to_string(),
    };
    format!(
        "transition: transform {}ms {}; transform: {};",
        game.config.spin_duration_ms,
        styles::SPIN_EASING,
        transform
    )
}

#[function_component(WheelSvg)]
pub fn wheel_svg(props: &WheelSvgProps) -> Html {
    let game = &props.game;
    let len = game.wheel.len();
    let center = SIZE / 2.0;

    let slices = game
        .wheel
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let opacity = if game.selected == Some(i) { "1" } else { "0.85" };
            let label = (!segment.label.is_empty()).then(|| {
                let at = label_position(i, len, RADIUS);
                html! {
                    <text
                        x={format!("{:.2}", at.x)}
                        y={format!("{:.2}", at.y)}
                        text-anchor="middle"
                        dominant-baseline="middle"
                        font-size="1.3em"
                        fill="#fff"
                        stroke="#fff"
                        stroke-width="0.5"
                        class="neon-text"
                    >
                        {segment.label.clone()}
                    </text>
                }
            });

            html! {
                <g key={i}>
                    <path
                        d={wedge_path(i, len, RADIUS)}
                        fill={segment.color.hex()}
                        stroke={styles::WHEEL_STROKE}
                        stroke-width="3"
                        filter={format!("url(#{})", styles::GLOW_FILTER_ID)}
                        opacity={opacity}
                    />
                    { for label }
                </g>
            }
        })
        .collect::<Html>();

    html! {
        <svg
            width={SIZE.to_string()}
            height={SIZE.to_string()}
            class={classes!(game.spinning.then_some(styles::SPINNING))}
            style={rotation_style(game)}
        >
            <defs>
                <filter id={styles::GLOW_FILTER_ID} x="-50%" y="-50%" width="200%" height="200%">
                    <@{"feDropShadow"} dx="0" dy="0" stdDeviation="6" flood-color="#fff" />
                </filter>
            </defs>
            <g transform={format!("translate({},{})", center, center)}>
                <circle
                    cx="0"
                    cy="0"
                    r={(RADIUS + RIM).to_string()}
                    fill={styles::WHEEL_BACKGROUND}
                    stroke={styles::WHEEL_STROKE}
                    stroke-width="4"
                />
                { slices }
            </g>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared::config::WheelConfig;

    #[test]
    fn test_no_rotation_before_first_spin() {
        let game = WheelGame::new(WheelConfig::default(), &mut StdRng::seed_from_u64(7));
        assert!(rotation_style(&game).ends_with("transform: none;"));
    }

    #[test]
    fn test_rotation_targets_selected_slice() {
        let mut game = WheelGame::new(WheelConfig::default(), &mut StdRng::seed_from_u64(7));
        game.selected = Some(3);
        let style = rotation_style(&game);
        assert!(style.contains("transition: transform 3500ms cubic-bezier(.17,.67,.83,.67)"));
        assert!(style.contains("rotate(2055deg)"));
    }
}
