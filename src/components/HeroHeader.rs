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

use crate::components::SecondaryButton::SecondaryButton;
use crate::components::SignupModal::SignupModalButton;
use crate::icons::ShieldCheckIcon;
use leptos::*;
use leptos_router::A;

#[component]
pub fn HeroHeader() -> impl IntoView {
    view! {
        <MobileMenuProvider>
            // Sticky translucent navigation
            <nav class="sticky top-0 z-40 backdrop-blur-md bg-background/90 border-b border-border/10">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center h-16">
                        // Logo
                        <A href="/" class="flex-shrink-0 transition-opacity hover:opacity-80">
                            <img
                                class="h-10 w-auto"
                                src="/images/tally_logo.svg"
                                alt="Tally"
                            />
                        </A>

                        // Desktop Navigation
                        <div class="hidden md:flex items-center space-x-8">
                            <NavLink href="#features" text="Features" />
                            <NavLink href="#how" text="How it works" />
                            <NavLink href="#pricing" text="Pricing" />
                            <NavLink href="#faq" text="FAQ" />
                        </div>

                        // Right side: sign-up trigger and mobile menu
                        <div class="flex items-center space-x-4">
                            <SignupModalButton
                                label="Get Started"
                                class="hidden sm:inline-flex btn-primary px-4 py-2 text-sm"
                            />
                            <MobileMenuButton />
                        </div>
                    </div>
                </div>

                // Mobile Navigation Menu
                <MobileMenu />
            </nav>

            // Hero Section
            <section class="relative overflow-hidden bg-background">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="pt-20 pb-24 lg:pt-28 lg:pb-32">
                        <div class="grid items-center gap-12 md:grid-cols-2 md:gap-16">
                            <div class="text-center md:text-left">
                                <h1 class="text-hero text-foreground mb-6">
                                    "The simplest way to run "
                                    <span class="text-primary">"club finances"</span>
                                    "."
                                </h1>
                                <p class="text-body-large text-foreground-secondary mb-12 max-w-2xl mx-auto md:mx-0">
                                    "Tally keeps dues, attendance, payouts, and communications in one place, so student leaders spend less time chasing payments and more time building community."
                                </p>
                                <div class="flex flex-col sm:flex-row gap-4 justify-center md:justify-start items-center">
                                    <SignupModalButton
                                        label="Start now"
                                        class="btn-primary text-lg px-8 py-4"
                                    />
                                    <SecondaryButton
                                        title="See how it works"
                                        href=Some("#how".to_string())
                                        class="text-lg px-8 py-4"
                                    />
                                </div>
                                <div class="mt-8 flex items-center justify-center md:justify-start gap-6 text-sm text-foreground-tertiary">
                                    <div class="flex items-center gap-2">
                                        <span class="w-4 h-4 inline-block">
                                            <ShieldCheckIcon/>
                                        </span>
                                        "PCI-aware best practices"
                                    </div>
                                    <div class="hidden sm:flex items-center gap-2">
                                        "Built by engineers, for orgs"
                                    </div>
                                </div>
                            </div>

                            <HeroMockup/>
                        </div>

                        // Trust strip
                        <div class="mt-20 lg:mt-24">
                            <p class="text-center text-sm uppercase tracking-[0.15em] text-foreground-tertiary">
                                "Trusted by clubs, teams, and student orgs"
                            </p>
                            <div class="mx-auto mt-8 flex max-w-4xl flex-wrap items-center justify-center gap-x-16 gap-y-6 text-foreground-secondary">
                                <span class="text-lg font-semibold tracking-tight">"Georgetown Ventures"</span>
                                <span class="text-lg font-semibold tracking-tight">"Hoyalytics"</span>
                                <span class="text-lg font-semibold tracking-tight">"HoyaDev"</span>
                            </div>
                        </div>
                    </div>
                </div>

                // Subtle background pattern
                <div class="absolute inset-0 bg-gradient-to-b from-transparent via-transparent to-background-secondary/10 pointer-events-none"></div>
            </section>
        </MobileMenuProvider>
    }
}

#[component]
fn NavLink(href: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            class="text-foreground-secondary hover:text-foreground transition-colors duration-200 text-sm font-medium"
        >
            {text}
        </a>
    }
}

/// Static phone-style preview of the app next to the hero copy. Pure markup;
/// nothing in it is interactive.
#[component]
fn HeroMockup() -> impl IntoView {
    view! {
        <div class="relative mx-auto w-full max-w-[340px]">
            <div class="rounded-[40px] border-8 border-background-secondary bg-background shadow-2xl ring-1 ring-border/40 overflow-hidden">
                <div class="px-6 pb-6 pt-10">
                    <div class="mb-6 flex items-center gap-3">
                        <div class="flex h-12 w-12 items-center justify-center rounded-full bg-primary/15 text-lg font-bold text-primary">
                            "JD"
                        </div>
                        <div>
                            <div class="font-semibold text-foreground">"John Doe"</div>
                            <div class="text-sm text-foreground-tertiary">"johndoe@gmail.com"</div>
                        </div>
                    </div>

                    <div class="mb-4 rounded-xl border border-border bg-background-secondary/40 p-4">
                        <div class="mb-2 flex items-center justify-between">
                            <div class="text-sm font-semibold text-foreground">"Club Balance"</div>
                            <div class="rounded-full bg-primary/10 px-2 py-0.5 text-xs font-medium text-primary">
                                "+12% this month"
                            </div>
                        </div>
                        <div class="text-2xl font-bold text-foreground">"$847.50"</div>
                        <div class="mt-3 grid grid-cols-2 gap-2">
                            <div class="rounded-lg bg-background-secondary p-2">
                                <div class="text-xs text-foreground-tertiary">"Collected"</div>
                                <div class="text-sm font-semibold text-foreground">"$1,240"</div>
                            </div>
                            <div class="rounded-lg bg-background-secondary p-2">
                                <div class="text-xs text-foreground-tertiary">"Spent"</div>
                                <div class="text-sm font-semibold text-foreground">"$392.50"</div>
                            </div>
                        </div>
                    </div>

                    <div class="rounded-xl border border-border bg-background-secondary/40 p-4">
                        <div class="mb-3 text-sm font-semibold text-foreground">"Recent Activity"</div>
                        <div class="space-y-3">
                            <MockActivityRow
                                title="cdt50@georgetown.edu paid"
                                detail="Test Club · Just now"
                                amount="+$1.00"
                                incoming=true
                            />
                            <MockActivityRow
                                title="cdt50@georgetown.edu payout"
                                detail="MSBTC · 2 days ago"
                                amount="-$5.00"
                                incoming=false
                            />
                        </div>
                    </div>
                </div>

                <div class="border-t border-border/50 bg-background-secondary/30 px-6 py-3">
                    <div class="flex items-center justify-between text-xs font-medium">
                        <span class="text-primary">"Home"</span>
                        <span class="text-foreground-tertiary">"Clubs"</span>
                        <span class="text-foreground-tertiary">"Payout"</span>
                        <span class="text-foreground-tertiary">"Events"</span>
                        <span class="text-foreground-tertiary">"Settings"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MockActivityRow(
    title: &'static str,
    detail: &'static str,
    amount: &'static str,
    incoming: bool,
) -> impl IntoView {
    let amount_class = if incoming {
        "text-sm font-semibold text-emerald-500"
    } else {
        "text-sm font-semibold text-red-500"
    };

    view! {
        <div class="flex items-center gap-3">
            <div class="flex-1 min-w-0">
                <div class="text-sm text-foreground truncate">{title}</div>
                <div class="text-xs text-foreground-tertiary">{detail}</div>
            </div>
            <div class=amount_class>{amount}</div>
        </div>
    }
}

#[island]
fn MobileMenuProvider(children: Children) -> impl IntoView {
    provide_context(RwSignal::new(false));
    children()
}

#[island]
fn MobileMenuButton() -> impl IntoView {
    let (menu_open, set_menu_open) = expect_context::<RwSignal<bool>>().split();

    view! {
        <button
            class="md:hidden p-2 text-foreground-secondary hover:text-foreground transition-colors"
            on:click=move |_| set_menu_open.update(|n| *n = !*n)
            aria-label="Toggle navigation menu"
        >
            <svg
                class="h-6 w-6"
                fill="none"
                viewBox="0 0 24 24"
                stroke="currentColor"
            >
                <path
                    class=move || if menu_open() { "hidden" } else { "" }
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M4 6h16M4 12h16M4 18h16"
                />
                <path
                    class=move || if menu_open() { "" } else { "hidden" }
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M6 18L18 6M6 6l12 12"
                />
            </svg>
        </button>
    }
}

#[island]
fn MobileMenu() -> impl IntoView {
    let menu_open = expect_context::<RwSignal<bool>>().read_only();
    let set_menu_open = expect_context::<RwSignal<bool>>().write_only();

    view! {
        <div
            class=move || format!(
                "md:hidden absolute top-full left-0 right-0 bg-background-secondary/95 backdrop-blur-md border-b border-border transition-all duration-300 ease-out {}",
                if menu_open() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 -translate-y-2 pointer-events-none"
                }
            )
        >
            <div class="px-4 py-6 space-y-4">
                <MobileNavLink
                    href="#features"
                    text="Features"
                    on_click=move || set_menu_open.set(false)
                />
                <MobileNavLink
                    href="#how"
                    text="How it works"
                    on_click=move || set_menu_open.set(false)
                />
                <MobileNavLink
                    href="#pricing"
                    text="Pricing"
                    on_click=move || set_menu_open.set(false)
                />
                <MobileNavLink
                    href="#faq"
                    text="FAQ"
                    on_click=move || set_menu_open.set(false)
                />
            </div>
        </div>
    }
}

#[component]
fn MobileNavLink<F>(href: &'static str, text: &'static str, on_click: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <a
            href=href
            class="block text-foreground-secondary hover:text-foreground transition-colors duration-200 text-base font-medium py-2"
            on:click=move |_| on_click()
        >
            {text}
        </a>
    }
}
