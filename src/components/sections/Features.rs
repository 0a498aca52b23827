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

use crate::icons::*;
use leptos::*;

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="py-24 px-6 relative">
            <div class="text-center mb-16 max-w-3xl mx-auto">
                <h2 class="text-headline text-foreground mb-6">
                    "Everything a treasurer needs"
                </h2>
                <p class="text-body-large text-foreground-secondary">
                    "Purpose-built workflows that keep your books, and your members, in sync."
                </p>
            </div>

            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3 max-w-6xl mx-auto">
                <FeatureCard
                    title="Dues tracking, done right"
                    description="Know exactly who's paid, who's pending, and who needs a nudge, across every club you run."
                >
                    <CreditCardIcon/>
                </FeatureCard>
                <FeatureCard
                    title="Auto-notifications"
                    description="Smart reminders via email or text that follow up so you don't have to."
                >
                    <BellRingIcon/>
                </FeatureCard>
                <FeatureCard
                    title="Roster & attendance"
                    description="Sync attendance sheets to see engagement and eligibility at a glance."
                >
                    <UsersIcon/>
                </FeatureCard>
                <FeatureCard
                    title="Payouts & treasury"
                    description="Track balances per club and move funds to where they need to be, fast."
                >
                    <WalletIcon/>
                </FeatureCard>
                <FeatureCard
                    title="Analytics that matter"
                    description="Cohort-level insights on payments, churn risk, and activity trends."
                >
                    <BarChartIcon/>
                </FeatureCard>
                <FeatureCard
                    title="CRM integrations"
                    description="Plug into Sheets and popular CRMs so your board stays perfectly in sync."
                >
                    <DatabaseIcon/>
                </FeatureCard>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card-apple group hover:shadow-lg transition-all duration-300">
            <div class="w-12 h-12 rounded-xl bg-primary/10 text-primary flex items-center justify-center mb-4 p-3">
                {children()}
            </div>
            <h3 class="text-lg font-semibold text-foreground mb-2">{title}</h3>
            <p class="text-sm text-foreground-secondary">{description}</p>
        </div>
    }
}
