use serde::Serialize;

/// A static page shown to first-time users.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OnboardingPage {
    /// Key of the illustration asset for this page.
    pub image: &'static str,
    pub head_text: &'static str,
    pub body_text: &'static str,
}

/// The onboarding pages in display order.
#[must_use]
pub fn onboarding_pages() -> Vec<OnboardingPage> {
    vec![
        OnboardingPage {
            image: "onboarding_1",
            head_text: "Hello!",
            body_text: "Welcome!!! Do you want clear task super fast with Taskii",
        },
        OnboardingPage {
            image: "onboarding_2",
            head_text: "Arrangement",
            body_text: "Easily arrange work order for you to easily manage",
        },
        OnboardingPage {
            image: "onboarding_3",
            head_text: "Solving",
            body_text: "It has never been easier to complete tasks. Get started with us!",
        },
    ]
}
