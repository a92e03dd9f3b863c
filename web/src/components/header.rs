use yew::prelude::*;

pub const HEADER_IMAGE_URL: &str = "https://images.unsplash.com/photo-1488190211105-8b0e65b80b4e?ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&ixlib=rb-1.2.1&auto=format&fit=crop&w=1050&q=80";
pub const HEADER_IMAGE_ALT: &str = "";
pub const HEADER_TITLE: &str = "Write your thoughts here";

/// The banner shown at the top of every page. Layout and appearance are
/// owned by the stylesheet through the `header*` classes.
#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <div class={classes!("header")}>
            <img class={classes!("headerImg")} src={HEADER_IMAGE_URL} alt={HEADER_IMAGE_ALT} />
            <div class={classes!("headerTitles")}>
                <span class={classes!("headerTitleLg")}>{HEADER_TITLE}</span>
            </div>
        </div>
    }
}
