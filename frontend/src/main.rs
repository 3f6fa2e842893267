use neon_wheel::App;
use yew::Renderer;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Mounting neon wheel");

    Renderer::<App>::new().render();
}
