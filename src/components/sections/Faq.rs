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

use leptos::*;

#[component]
pub fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="py-24 px-6 relative">
            <div class="max-w-3xl mx-auto">
                <h2 class="text-headline text-foreground text-center mb-12">"FAQ"</h2>
                <div class="divide-y divide-border rounded-2xl border border-border bg-background-secondary/40">
                    <FaqItem
                        question="Can members pay without creating an account?"
                        answer="Yes. You can share a secure pay link. Members can optionally create an account to view history and receipts."
                    />
                    <FaqItem
                        question="Do you support multiple clubs per user?"
                        answer="Absolutely. Tally was designed for leaders in multiple orgs with different roles in each."
                    />
                    <FaqItem
                        question="What integrations are available?"
                        answer="Google Sheets, CSV import/export, and popular CRMs. Campus-wide deployments get custom integrations."
                    />
                    <FaqItem
                        question="How hard is onboarding?"
                        answer="Most orgs import a roster and start collecting in minutes. Our team can help migrate historical data."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    view! {
        <details class="group p-6">
            <summary class="flex cursor-pointer list-none items-center justify-between text-base font-medium text-foreground">
                {question}
                <span class="ml-4 text-foreground-tertiary transition group-open:rotate-90">
                    <svg class="h-4 w-4" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2">
                        <path stroke-linecap="round" stroke-linejoin="round" d="M9 5l7 7-7 7"/>
                    </svg>
                </span>
            </summary>
            <p class="mt-3 text-sm text-foreground-secondary">{answer}</p>
        </details>
    }
}
