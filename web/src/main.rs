use blog_ui::app::App;
use gloo_console::log;

fn main() {
    log!("starting blog ui");
    yew::Renderer::<App>::new().render();
}
