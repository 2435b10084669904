//! Landing page - what Finexus is, with ways into the dashboard.

use chrono::Datelike;
use dioxus::prelude::*;
use finexus_ui::ButtonVariant;

use crate::app::Route;

const STATS: [(&str, &str); 4] = [
    ("Accounts unified", "5+"),
    ("Data points tracked", "1k+"),
    ("Avg. setup time", "~2 min"),
    ("Satisfaction", "98%"),
];

const FEATURES: [(&str, &str, &str); 6] = [
    (
        "\u{1F45B}",
        "Unified assets",
        "Track physical and digital assets with values, notes, and categories.",
    ),
    (
        "\u{1F4C8}",
        "Investments & crypto",
        "Monitor traditional portfolios and coins side-by-side, with instant totals.",
    ),
    (
        "\u{1F4C4}",
        "Wills & taxes",
        "Keep estate documents and tax filings organized and accessible.",
    ),
    (
        "\u{1F6E1}",
        "Secure by design",
        "Data persists in your database; designed with privacy in mind.",
    ),
    (
        "\u{2728}",
        "Modern UI",
        "Frosted glass cards, calm colors and a layout that stays out of the way.",
    ),
    (
        "\u{2192}",
        "Fast start",
        "Be up and running in minutes, no spreadsheets required.",
    ),
];

const SAMPLE_FIGURES: [(&str, &str); 4] = [
    ("Assets", "+$18,000"),
    ("Investments", "+$62,450"),
    ("Crypto", "+$15,220"),
    ("Tax Status", "On track"),
];

const FAQ: [(&str, &str); 3] = [
    (
        "Is my data persistent?",
        "Yes. Entries are stored in the connected database so they stick around.",
    ),
    (
        "Can I bring my own backend?",
        "Absolutely. Point FINEXUS_API_URL (or --api-url) at your own API.",
    ),
    (
        "Can I export my data?",
        "We can add CSV export/import on request.",
    ),
];

#[component]
pub fn Landing() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        div { class: "landing",
            // Navbar
            nav { class: "navbar",
                div { class: "brand",
                    div { class: "brand-mark" }
                    span { class: "brand-name", "Finexus" }
                }
                div { class: "nav-links",
                    a { href: "#features", "Features" }
                    a { href: "#how", "How it works" }
                    a { href: "#faq", "FAQ" }
                }
                div { class: "nav-actions",
                    Link { class: ButtonVariant::Secondary.class().to_string(), to: Route::Diagnostics {}, "Check API" }
                    Link { class: ButtonVariant::Primary.class().to_string(), to: Route::Dashboard {}, "Open App" }
                }
            }

            // Hero
            header { class: "hero",
                span { class: "pill", "\u{2728} Smart finance, one dashboard" }
                h1 { class: "hero-title", "See your entire financial life at a glance" }
                p { class: "hero-text",
                    "Track assets, traditional investments, crypto, wills, and income tax in one calm, glassy workspace."
                }
                div { class: "hero-actions",
                    Link { class: ButtonVariant::Primary.class().to_string(), to: Route::Dashboard {}, "Get Started \u{2192}" }
                    a { class: ButtonVariant::Secondary.class(), href: "#features", "Learn more" }
                }
            }

            // Stats
            section { class: "stats-strip",
                for (label, value) in STATS {
                    div { key: "{label}", class: "stat-card",
                        div { class: "stat-title", "{label}" }
                        div { class: "stat-value", "{value}" }
                    }
                }
            }

            // Features
            section { id: "features", class: "features",
                div { class: "eyebrow", "Features" }
                h2 { class: "section-heading", "Everything you need to manage wealth" }
                p { class: "muted",
                    "A single command center for assets, investments, crypto, estate planning, and taxes, all privacy-first."
                }
                div { class: "feature-grid",
                    for (icon, title, description) in FEATURES {
                        div { key: "{title}", class: "feature",
                            div { class: "feature-icon", "{icon}" }
                            div { class: "feature-title", "{title}" }
                            div { class: "feature-text", "{description}" }
                        }
                    }
                }
            }

            // How it works
            section { id: "how", class: "how",
                div { class: "how-copy",
                    div { class: "eyebrow inverse", "How it works" }
                    h3 { class: "section-heading", "Connect, add, and see your net worth" }
                    ul {
                        li { "Add assets, investments, and crypto balances" }
                        li { "Attach will and tax documents for quick reference" }
                        li { "Totals and insights update instantly" }
                    }
                    div { class: "hero-actions",
                        Link { class: ButtonVariant::Inverse.class().to_string(), to: Route::Dashboard {}, "Open the dashboard" }
                        Link { class: ButtonVariant::OutlineInverse.class().to_string(), to: Route::Diagnostics {}, "Check connectivity" }
                    }
                }
                div { class: "how-figures",
                    for (label, value) in SAMPLE_FIGURES {
                        div { key: "{label}", class: "figure",
                            div { class: "figure-label", "{label}" }
                            div { class: "figure-value", "{value}" }
                        }
                    }
                }
            }

            // FAQ
            section { id: "faq", class: "faq",
                h3 { class: "section-heading", "FAQs" }
                for (question, answer) in FAQ {
                    div { key: "{question}", class: "faq-item",
                        div { class: "faq-question", "{question}" }
                        div { class: "faq-answer", "{answer}" }
                    }
                }
            }

            footer { class: "footer",
                div { "\u{00A9} {year} Finexus" }
                div { class: "nav-links",
                    a { href: "#features", "Features" }
                    a { href: "#how", "How it works" }
                    a { href: "#faq", "FAQ" }
                }
            }
        }
    }
}
