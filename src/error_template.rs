/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

use crate::errors::SiteError;
use leptos::*;

// A basic function to display errors served by the error boundaries. Feel
// free to do more complicated things here than just displaying them.
#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match outside_errors {
        Some(e) => create_rw_signal(e),
        None => match errors {
            Some(e) => e,
            None => panic!("No Errors found and we expected errors!"),
        },
    };

    // Get Errors from Signal
    // Downcast lets us take a type that implements `std::error::Error`
    let errors: Vec<SiteError> = errors
        .get_untracked()
        .into_iter()
        .filter_map(|(_, v)| v.downcast_ref::<SiteError>().cloned())
        .collect();

    // Only the response code for the first error is actually sent from the
    // server; this may be customized by the specific application
    #[cfg(feature = "ssr")]
    {
        let response = use_context::<leptos_axum::ResponseOptions>();
        if let Some(response) = response {
            if let Some(error) = errors.first() {
                response.set_status(error.status_code());
            }
        }
    }

    view! {
        <div class="min-h-screen bg-background flex flex-col items-center justify-center px-6">
            <h1 class="text-headline text-foreground mb-6">
                {if errors.len() > 1 { "Errors" } else { "Error" }}
            </h1>
            <For
                each=move || errors.clone().into_iter().enumerate()
                key=|(index, _error)| *index
                children=move |(_, error)| {
                    let error_code = error.status_code();
                    view! {
                        <h2 class="text-subheadline text-foreground-secondary mb-2">
                            {error_code.to_string()}
                        </h2>
                        <p class="text-body text-foreground-secondary mb-8">{error.to_string()}</p>
                        <a href="/" class="btn-primary px-6 py-3">
                            "Back to the homepage"
                        </a>
                    }
                }
            />
        </div>
    }
}
