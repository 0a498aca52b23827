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

use crate::components::CTAButton::{ButtonSize, ButtonVariant, CTAButton};
use crate::components::SignupModal::SignupModalButton;
use leptos::*;

#[component]
pub fn PricingSection() -> impl IntoView {
    view! {
        <section id="pricing" class="py-24 px-6 relative">
            <div class="text-center mb-20">
                <h2 class="text-headline text-foreground mb-6">
                    "Pricing"
                </h2>
                <p class="text-body-large text-foreground-secondary max-w-3xl mx-auto">
                    "Start free, upgrade when your org outgrows the basics"
                </p>
            </div>

            <div class="grid md:grid-cols-3 gap-8 lg:gap-10 max-w-6xl mx-auto">
                <PricingCard
                    title="Starter"
                    price="$0"
                    description="For new clubs and pilot orgs"
                    features=vec![
                        "Up to 100 members".to_string(),
                        "Dues tracking".to_string(),
                        "Basic reminders".to_string(),
                        "CSV/Sheets import".to_string(),
                    ]
                    button_text="Get started"
                    highlighted=false
                />

                <PricingCard
                    title="Growth"
                    price="$49/mo"
                    description="For active orgs with multiple events"
                    features=vec![
                        "Unlimited members".to_string(),
                        "Automated notifications".to_string(),
                        "Attendance sync".to_string(),
                        "Dashboards & exports".to_string(),
                    ]
                    button_text="Start free trial"
                    highlighted=true
                />

                <PricingCard
                    title="Campus / Enterprise"
                    price="Custom"
                    description="For multi-club networks and universities"
                    features=vec![
                        "SSO & roles".to_string(),
                        "Department-level reporting".to_string(),
                        "Priority support".to_string(),
                        "Custom integrations".to_string(),
                    ]
                    button_text="Talk to us"
                    button_href=Some("mailto:hello@gettally.dev".to_string())
                    highlighted=false
                />
            </div>
        </section>
    }
}

#[component]
fn PricingCard(
    #[prop(into)] title: String,
    #[prop(into)] price: String,
    #[prop(into)] description: String,
    features: Vec<String>,
    #[prop(into)] button_text: String,
    // when absent, the button opens the sign-up modal instead
    #[prop(default = None)] button_href: Option<String>,
    #[prop(default = false)] highlighted: bool,
) -> impl IntoView {
    let card_class = if highlighted {
        "card-apple relative transform scale-105 ring-2 ring-primary/20"
    } else {
        "card-apple"
    };

    view! {
        <div class=format!("{} group hover:shadow-lg transition-all duration-300", card_class)>
            {if highlighted {
                view! {
                    <div class="absolute -top-4 left-1/2 transform -translate-x-1/2">
                        <span class="bg-primary text-white px-4 py-1 rounded-full text-sm font-medium">
                            "Most Popular"
                        </span>
                    </div>
                }.into_view()
            } else {
                view! {}.into_view()
            }}

            <div class="text-center mb-8">
                <h3 class="text-subheadline text-foreground mb-2">
                    {title}
                </h3>
                <div class="text-4xl font-bold text-foreground mb-2">
                    {price}
                </div>
                <p class="text-body text-foreground-secondary">
                    {description}
                </p>
            </div>

            <ul class="space-y-4 mb-8">
                {features.into_iter().map(|feature| view! {
                    <li class="flex items-center text-foreground-secondary">
                        <div class="w-5 h-5 rounded-full bg-primary/10 flex items-center justify-center mr-3 flex-shrink-0">
                            <svg class="w-3 h-3 text-primary" fill="currentColor" viewBox="0 0 20 20">
                                <path fill-rule="evenodd" d="M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z" clip-rule="evenodd" />
                            </svg>
                        </div>
                        <span class="text-sm">{feature}</span>
                    </li>
                }).collect_view()}
            </ul>

            {match button_href {
                Some(href) => view! {
                    <CTAButton
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Medium
                        href=Some(href)
                        class="w-full justify-center".to_string()
                    >
                        {button_text}
                    </CTAButton>
                }.into_view(),
                None => view! {
                    <SignupModalButton
                        label=button_text
                        class="btn-primary w-full justify-center px-6 py-3"
                    />
                }.into_view(),
            }}
        </div>
    }
}
