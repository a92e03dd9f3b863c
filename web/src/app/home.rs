use yew::prelude::*;

/// Landing page body, rendered under the banner. Post listing is served
/// elsewhere; this page only provides the styled container.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class={classes!("home")}>
        </div>
    }
}
