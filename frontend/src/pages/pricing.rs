use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::section_header::SectionHeader;

#[derive(Clone, Debug, PartialEq)]
pub struct PricingTier {
    pub title: &'static str,
    pub price: u32,
    pub subtitle: &'static str,
    pub badge: Option<&'static str>,
    pub recommended: bool,
    pub features: &'static [&'static str],
    pub cta: &'static str,
}

pub const TIERS: &[PricingTier] = &[
    PricingTier {
        title: "The Blueprint",
        price: 19,
        subtitle: "The raw schematics for the DIY architect.",
        badge: Some("Entry Level"),
        recommended: false,
        features: &[
            "Complete Case Study PDF",
            "Server Setup Checklist",
            "The 'Infinity Core' Setup",
            "Basic SES Approval Script",
            "Newsletter Access",
        ],
        cta: "Instant Download",
    },
    PricingTier {
        title: "The System",
        price: 47,
        subtitle: "The visual masterclass. Watch me build it.",
        badge: None,
        recommended: true,
        features: &[
            "Everything in Blueprint",
            "4-Hour Video Walkthrough",
            "The C.R.E.A.T.E Prompt Library",
            "Infinity Core Templates",
            "Private Community Access",
            "Passive Income Roadmap",
        ],
        cta: "Start Building",
    },
    PricingTier {
        title: "Mentorship",
        price: 297,
        subtitle: "Direct implementation with the Architect.",
        badge: Some("Limited Spots"),
        recommended: false,
        features: &[
            "Everything in System",
            "4 Live Weekly Calls",
            "Direct Implementation Support",
            "Review of Your Email Copy",
            "Lifetime Updates",
        ],
        cta: "Apply for Cohort",
    },
];

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub tier: PricingTier,
    pub on_buy: Callback<()>,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let tier = &props.tier;
    let onclick = {
        let on_buy = props.on_buy.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_buy.emit(());
        })
    };

    // The flagship ribbon replaces any badge
    let ribbon = if tier.recommended {
        Some(("pricing-ribbon flagship", "Flagship Protocol"))
    } else {
        tier.badge.map(|badge| ("pricing-ribbon", badge))
    };

    html! {
        <div class={classes!("pricing-card", tier.recommended.then(|| "recommended"))}>
            if let Some((class, text)) = ribbon {
                <div class={class}>{text}</div>
            }
            <div class="card-header">
                <h3>{tier.title}</h3>
                <p class="pricing-subtitle">{tier.subtitle}</p>
            </div>
            <div class="price">
                <span class="currency">{"$"}</span>
                <span class="amount">{tier.price.to_string()}</span>
                <span class="period">{"USD"}</span>
            </div>
            <ul class="pricing-features">
                { for tier.features.iter().map(|feature| html! { <li>{"✓ "}{*feature}</li> }) }
            </ul>
            <button class="pricing-cta" {onclick}>{tier.cta}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingSectionProps {
    pub on_buy: Callback<()>,
}

#[function_component(PricingSection)]
pub fn pricing_section(props: &PricingSectionProps) -> Html {
    html! {
        <section id="pricing" class="pricing-section">
            <SectionHeader
                number="06"
                title="Acquire The Asset"
                subtitle="Stop spending on liabilities. Start investing in your sovereign infrastructure."
            />
            <div class="pricing-grid">
                { for TIERS.iter().map(|tier| html! {
                    <PricingCard key={tier.title} tier={tier.clone()} on_buy={props.on_buy.clone()} />
                }) }
            </div>
            <p class="pricing-secure">{"🔒 256-Bit Secure Encryption Protocol"}</p>
            <style>
                {r#"
                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .pricing-card {
                    position: relative;
                    padding: 2rem;
                    border-radius: 1rem;
                    border: 1px solid #1e293b;
                    background: rgba(15, 23, 42, 0.4);
                    display: flex;
                    flex-direction: column;
                    transition: transform 0.5s ease, border-color 0.5s ease;
                }
                .pricing-card:hover {
                    transform: translateY(-8px);
                    border-color: #475569;
                }
                .pricing-card.recommended {
                    background: rgba(15, 23, 42, 0.8);
                    border-color: #10b981;
                    box-shadow: 0 0 50px rgba(16, 185, 129, 0.1);
                }
                .pricing-ribbon {
                    position: absolute;
                    top: -1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: #1e293b;
                    color: #cbd5e1;
                    font-size: 0.75rem;
                    font-weight: bold;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    padding: 0.4rem 1rem;
                    border-radius: 999px;
                    border: 1px solid #334155;
                    white-space: nowrap;
                }
                .pricing-ribbon.flagship {
                    background: #10b981;
                    color: #0b1120;
                    border: none;
                    font-weight: 900;
                }
                .pricing-card h3 {
                    color: #fff;
                    font-size: 1.25rem;
                    margin: 0 0 0.5rem;
                }
                .pricing-subtitle {
                    color: #94a3b8;
                    font-size: 0.875rem;
                    min-height: 2.5rem;
                }
                .price {
                    display: flex;
                    align-items: baseline;
                    gap: 0.25rem;
                    margin: 1.5rem 0 2rem;
                }
                .price .currency, .price .period {
                    color: #64748b;
                }
                .price .amount {
                    font-size: 3rem;
                    font-weight: 900;
                    color: #fff;
                }
                .pricing-features {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                    flex: 1;
                    color: #cbd5e1;
                    font-size: 0.875rem;
                    line-height: 2;
                }
                .pricing-cta {
                    width: 100%;
                    padding: 1rem;
                    border-radius: 8px;
                    border: 1px solid #334155;
                    background: #1e293b;
                    color: #fff;
                    font-weight: bold;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    cursor: pointer;
                }
                .pricing-card.recommended .pricing-cta {
                    background: #10b981;
                    color: #0b1120;
                    border: none;
                }
                .pricing-secure {
                    text-align: center;
                    color: #64748b;
                    font-size: 0.75rem;
                    margin-top: 3rem;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_flagship_tier() {
        assert_eq!(TIERS.iter().filter(|tier| tier.recommended).count(), 1);
    }

    #[test]
    fn tiers_are_priced_in_ascending_order() {
        assert!(TIERS.windows(2).all(|pair| pair[0].price < pair[1].price));
    }
}
