use dioxus::prelude::*;
use shared_types::OnboardingStep;

fn step_state(step: OnboardingStep, current: OnboardingStep) -> &'static str {
    if step.number() < current.number() {
        "done"
    } else if step == current {
        "current"
    } else {
        "todo"
    }
}

/// "Step N of 4" header with one marker per wizard step.
#[component]
pub fn StepIndicator(current: OnboardingStep) -> Element {
    let number = current.number();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "steps",
            p { class: "steps-caption", "Step {number} of {OnboardingStep::COUNT}" }
            ol { class: "steps-list",
                for step in OnboardingStep::ALL {
                    li {
                        key: "{step.number()}",
                        class: "steps-item",
                        "data-state": step_state(step, current),
                        span { class: "steps-marker", "{step.number()}" }
                        span { class: "steps-title", "{step.title()}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_current_step() {
        let html = dioxus_ssr::render_element(rsx! {
            StepIndicator { current: OnboardingStep::EmailVerification }
        });
        assert!(html.contains("Step 3 of 4"));
        assert!(html.contains(r#"data-state="current""#));
        assert!(html.contains("Email Verification"));
    }
}
