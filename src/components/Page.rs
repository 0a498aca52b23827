use crate::components::Footer::*;
use leptos::*;

#[component]
pub fn Page(children: Children) -> impl IntoView {
    view! { <div class="overflow-x-hidden bg-background">{children()} <Footer/></div> }
}
