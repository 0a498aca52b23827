use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-16 px-6 relative overflow-hidden">
            {/* Background gradient */}
            <div class="absolute inset-0 bg-gradient-to-t from-background-light/40 to-background/90 pointer-events-none"></div>

            {/* Top border with gradient */}
            <div class="absolute top-0 left-0 right-0 h-[1px] bg-gradient-to-r from-transparent via-primary/30 to-transparent"></div>

            <div class="max-w-4xl mx-auto relative z-10">
                <div class="flex flex-col md:flex-row justify-between items-center mb-12">
                    <div class="mb-8 md:mb-0">
                        <img
                            class="h-10 w-auto"
                            src="/images/tally_logo.svg"
                            alt="Tally"
                        />
                    </div>

                    {/* Navigation links */}
                    <nav class="w-full md:w-auto">
                        <ul class="grid grid-cols-2 sm:grid-cols-4 md:flex md:flex-row gap-x-10 gap-y-6 text-foreground-muted">
                            <li>
                                <a href="#features" class="relative hover:text-foreground transition-colors group block">
                                    <span>{"Features"}</span>
                                    <span class="absolute -bottom-1 left-0 w-0 h-[1px] bg-primary group-hover:w-full transition-all duration-300"></span>
                                </a>
                            </li>
                            <li>
                                <a href="#how" class="relative hover:text-foreground transition-colors group block">
                                    <span>{"How it works"}</span>
                                    <span class="absolute -bottom-1 left-0 w-0 h-[1px] bg-primary group-hover:w-full transition-all duration-300"></span>
                                </a>
                            </li>
                            <li>
                                <a href="#pricing" class="relative hover:text-foreground transition-colors group block">
                                    <span>{"Pricing"}</span>
                                    <span class="absolute -bottom-1 left-0 w-0 h-[1px] bg-primary group-hover:w-full transition-all duration-300"></span>
                                </a>
                            </li>
                            <li>
                                <a href="#faq" class="relative hover:text-foreground transition-colors group block">
                                    <span>{"FAQ"}</span>
                                    <span class="absolute -bottom-1 left-0 w-0 h-[1px] bg-primary group-hover:w-full transition-all duration-300"></span>
                                </a>
                            </li>
                        </ul>
                    </nav>
                </div>

                <div class="pt-8 flex flex-col md:flex-row justify-between items-center relative">
                    {/* Subtle divider */}
                    <div class="absolute top-0 left-0 right-0 h-[1px] bg-gradient-to-r from-transparent via-primary/10 to-transparent"></div>

                    <p class="text-foreground-subtle text-sm mb-4 md:mb-0">
                        {"Copyright 2025 Tally. All rights reserved."}
                    </p>
                    <div class="flex gap-6">
                        <a href="#" class="text-foreground-subtle hover:text-foreground transition-colors text-sm relative group">
                            <span>{"Terms"}</span>
                            <span class="absolute -bottom-1 left-0 w-0 h-[1px] bg-primary/50 group-hover:w-full transition-all duration-300"></span>
                        </a>
                        <a href="#" class="text-foreground-subtle hover:text-foreground transition-colors text-sm relative group">
                            <span>{"Privacy"}</span>
                            <span class="absolute -bottom-1 left-0 w-0 h-[1px] bg-primary/50 group-hover:w-full transition-all duration-300"></span>
                        </a>
                        <a href="mailto:hello@gettally.dev" class="text-foreground-subtle hover:text-foreground transition-colors text-sm relative group">
                            <span>{"Contact"}</span>
                            <span class="absolute -bottom-1 left-0 w-0 h-[1px] bg-primary/50 group-hover:w-full transition-all duration-300"></span>
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
