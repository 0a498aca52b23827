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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::pages::Home::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    let formatter = |text| format!("{text} - Tally");
    provide_meta_context();

    let json_ld = r#"
    {
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": "Tally",
        "operatingSystem": "Any",
        "applicationCategory": "FinanceApplication",
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "USD"
        },
        "description": "The simplest way to run club finances. Dues, attendance, payouts, and communications in one place for student organizations."
    }
    "#;

    view! {
        <Html lang="en"/>
        <Stylesheet id="leptos" href="/pkg/tally_website.css"/>
        <Title formatter/>
        <Meta
            name="description"
            content="Tally keeps dues, attendance, payouts, and communications in one place, so student leaders spend less time chasing payments and more time building community."
        />
        <Meta
            name="keywords"
            content="club finances, dues tracking, student organizations, treasurer software, attendance tracking, club payments, roster management"
        />

        // Open Graph / Facebook
        <Meta property="og:type" content="website"/>
        <Meta property="og:site_name" content="Tally"/>
        <Meta property="og:url" content="https://www.gettally.dev/"/>
        <Meta property="og:title" content="Tally - The simplest way to run club finances"/>
        <Meta property="og:description" content="Dues, attendance, payouts, and communications in one place for student organizations."/>
        <Meta property="og:image" content="https://www.gettally.dev/images/og-image.png"/>

        // Twitter
        <Meta property="twitter:card" content="summary_large_image"/>
        <Meta property="twitter:url" content="https://www.gettally.dev/"/>
        <Meta property="twitter:title" content="Tally - The simplest way to run club finances"/>
        <Meta property="twitter:description" content="Dues, attendance, payouts, and communications in one place for student organizations."/>
        <Meta property="twitter:image" content="https://www.gettally.dev/images/og-image.png"/>

        <Router>
            <Routes>
                <Route path="" view=Home ssr=SsrMode::Async/>
            </Routes>
        </Router>
        <script type="application/ld+json">
            {json_ld}
        </script>
    }
}
