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
pub fn HowItWorksSection() -> impl IntoView {
    view! {
        <section id="how" class="py-24 px-6 relative">
            <div class="grid items-center gap-10 md:grid-cols-2 md:gap-16 max-w-6xl mx-auto">
                <div>
                    <h2 class="text-headline text-foreground mb-6">
                        "From messy spreadsheets to clarity in minutes"
                    </h2>
                    <ol class="space-y-4 text-foreground-secondary list-none">
                        <Step number="1." text="Create your club."/>
                        <Step number="2." text="Set an event, and select who is responsible."/>
                        <Step number="3." text="Members choose card, wallet, or bank.*"/>
                        <Step
                            number="4."
                            text="Tally auto-reconciles payments, attendance, and reminders."
                        />
                    </ol>
                    <p class="mt-4 text-xs text-foreground-subtle">
                        "* Payment methods facilitated via PayPal Inc."
                    </p>
                </div>
                <div class="relative rounded-3xl border border-border bg-background-secondary p-4">
                    <div class="grid gap-4 sm:grid-cols-2">
                        <MiniCard
                            heading="Import members"
                            text="Map columns and validate emails automatically."
                        />
                        <MiniCard
                            heading="Smart reminders"
                            text="Gentle nudges that actually get paid."
                        />
                        <MiniCard
                            heading="Attendance sync"
                            text="Tie activity to eligibility and perks."
                        />
                        <MiniCard
                            heading="One source of truth"
                            text="Finance, roster, and CRM all aligned."
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Step(number: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <li class="flex gap-3">
            <span class="mt-0.5 text-primary font-semibold">{number}</span>
            {text}
        </li>
    }
}

#[component]
fn MiniCard(heading: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-border bg-background p-4">
            <h4 class="text-sm font-medium text-foreground">{heading}</h4>
            <p class="mt-1 text-sm text-foreground-secondary">{text}</p>
        </div>
    }
}
