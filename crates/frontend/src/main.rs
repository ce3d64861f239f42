mod app;
mod logging;
mod pages;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    yew::Renderer::<App>::new().render();
}
