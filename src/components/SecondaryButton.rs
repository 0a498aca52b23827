use leptos::*;

#[component]
pub fn SecondaryButton(
    #[prop(into)] title: String,
    #[prop(default = String::new(), into)] class: String,
    #[prop(default = None)] href: Option<String>,
) -> impl IntoView {
    let combined_class = format!("btn-secondary {}", class);

    view! {
        {move || match &href {
            Some(href) => view! {
                <a href=href class=&combined_class>
                    <span>{title.clone()}</span>
                </a>
            }.into_view(),
            None => view! {
                <button class=&combined_class>
                    <span>{title.clone()}</span>
                </button>
            }.into_view()
        }}
    }
}
