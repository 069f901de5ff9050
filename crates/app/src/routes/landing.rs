use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowRight, LdCircleCheck, LdStar};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, Card, CardContent};

struct Feature {
    title: &'static str,
    description: &'static str,
}

struct Testimonial {
    name: &'static str,
    role: &'static str,
    content: &'static str,
}

struct Plan {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    highlight: bool,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "User Management",
        description: "Comprehensive role-based access control for all hospital staff with seamless user management.",
    },
    Feature {
        title: "Patient Care",
        description: "Digital patient records, appointment scheduling, and medical history tracking in one place.",
    },
    Feature {
        title: "Analytics & Reports",
        description: "Real-time insights, financial reports, and operational analytics to drive better decisions.",
    },
    Feature {
        title: "Secure & Compliant",
        description: "HIPAA compliant security measures ensuring patient data protection and privacy.",
    },
    Feature {
        title: "24/7 Support",
        description: "Round-the-clock technical support and system monitoring for uninterrupted operations.",
    },
    Feature {
        title: "Easy Integration",
        description: "Seamless integration with existing hospital systems and medical equipment.",
    },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Dr. Sarah Johnson",
        role: "Chief Medical Officer, Metro General",
        content: "HMS has revolutionized our hospital operations. The intuitive interface and comprehensive features have improved our efficiency by 40%.",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Hospital Administrator, City Health",
        content: "The multi-role dashboard system is exactly what we needed. Each department can access what they need while maintaining security.",
    },
    Testimonial {
        name: "Dr. Emily Rodriguez",
        role: "Head of Nursing, Regional Medical",
        content: "Patient management has never been easier. The system is user-friendly and has significantly reduced our administrative burden.",
    },
];

const PLANS: &[Plan] = &[
    Plan {
        name: "Clinic",
        price: "Free",
        period: "Forever",
        description: "Perfect for small clinics and practices",
        features: &[
            "Up to 5 users",
            "Basic patient management",
            "Appointment scheduling",
            "Email support",
            "Basic reporting",
        ],
        highlight: false,
    },
    Plan {
        name: "Hospital",
        price: "$99",
        period: "per month",
        description: "Ideal for medium to large hospitals",
        features: &[
            "Unlimited users",
            "Advanced patient management",
            "Full analytics suite",
            "24/7 priority support",
            "Custom integrations",
            "Advanced security features",
        ],
        highlight: true,
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        period: "Contact us",
        description: "For large healthcare networks",
        features: &[
            "Multi-hospital management",
            "Custom development",
            "Dedicated support team",
            "Advanced compliance tools",
            "API access",
            "Training & onboarding",
        ],
        highlight: false,
    },
];

/// Public marketing page with entry points into onboarding and both logins.
#[component]
pub fn Landing() -> Element {
    let get_started = move |_| {
        navigator().push(Route::Onboarding {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        div { class: "landing",
            header { class: "landing-nav",
                span { class: "landing-logo", "HMS" }
                nav { class: "landing-links",
                    a { href: "#features", "Features" }
                    a { href: "#testimonials", "Testimonials" }
                    a { href: "#pricing", "Pricing" }
                    Link { to: Route::UserLogin {}, "Staff Login" }
                    Link { to: Route::AdminLogin {}, "Admin Login" }
                }
                Button { onclick: get_started, "Get Started" }
            }

            section { class: "landing-hero",
                h1 {
                    "Healthcare"
                    span { class: "landing-accent", " Management " }
                    "Made Simple"
                }
                p { class: "landing-lead",
                    "Streamline your hospital operations with our comprehensive management system. From patient care to staff coordination, manage everything in one powerful platform."
                }
                div { class: "landing-cta",
                    Button { onclick: get_started,
                        "Start Free Trial"
                        Icon::<LdArrowRight> { icon: LdArrowRight, width: 18, height: 18 }
                    }
                }
                ul { class: "landing-perks",
                    for perk in ["Free 30-day trial", "No credit card required", "24/7 support"] {
                        li { key: "{perk}",
                            Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 16, height: 16 }
                            "{perk}"
                        }
                    }
                }
            }

            section { id: "features", class: "landing-section",
                h2 { "Everything you need to run your hospital" }
                div { class: "landing-grid",
                    for feature in FEATURES {
                        Card { key: "{feature.title}",
                            CardContent {
                                h3 { "{feature.title}" }
                                p { "{feature.description}" }
                            }
                        }
                    }
                }
            }

            section { id: "testimonials", class: "landing-section muted",
                h2 { "Trusted by healthcare professionals" }
                div { class: "landing-grid",
                    for testimonial in TESTIMONIALS {
                        Card { key: "{testimonial.name}",
                            CardContent {
                                div { class: "landing-stars",
                                    for i in 0..5 {
                                        Icon::<LdStar> { key: "{i}", icon: LdStar, width: 16, height: 16 }
                                    }
                                }
                                p { class: "landing-quote", "\"{testimonial.content}\"" }
                                p { class: "landing-author", "{testimonial.name}" }
                                p { class: "landing-author-role", "{testimonial.role}" }
                            }
                        }
                    }
                }
            }

            section { id: "pricing", class: "landing-section",
                h2 { "Simple, transparent pricing" }
                div { class: "landing-grid",
                    for plan in PLANS {
                        Card {
                            key: "{plan.name}",
                            class: if plan.highlight { "landing-plan highlight" } else { "landing-plan" },
                            CardContent {
                                h3 { "{plan.name}" }
                                p { class: "landing-price",
                                    "{plan.price}"
                                    span { class: "landing-period", " {plan.period}" }
                                }
                                p { "{plan.description}" }
                                ul {
                                    for item in plan.features.iter() {
                                        li { key: "{item}", "{item}" }
                                    }
                                }
                                Button {
                                    variant: if plan.highlight { ButtonVariant::Primary } else { ButtonVariant::Outline },
                                    onclick: get_started,
                                    if plan.price == "Custom" { "Contact Sales" } else { "Get Started" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "landing-section muted",
                h2 { "Ready to transform your hospital?" }
                div { class: "landing-contact",
                    div {
                        h4 { "Call Us" }
                        p { "+1 (555) 123-4567" }
                    }
                    div {
                        h4 { "Email Us" }
                        p { "support@hms.com" }
                    }
                }
            }

            footer { class: "landing-footer",
                p { "\u{a9} 2025 HMS. All rights reserved." }
            }
        }
    }
}
