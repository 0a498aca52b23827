use crate::components::sections::Faq::*;
use crate::components::sections::Features::*;
use crate::components::sections::HowItWorks::*;
use crate::components::sections::Pricing::*;
use crate::components::HeroHeader::*;
use crate::components::Page::*;
use crate::components::SignupModal::*;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Title text="Home"/>
        <Page>
            <SignupModalProvider>
                <HeroHeader/>
                <FeaturesSection/>
                <HowItWorksSection/>
                <PricingSection/>
                <FaqSection/>
                <SignupModal/>
            </SignupModalProvider>
        </Page>
    }
}
