use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::network::random_seed;
use crate::components::charts::{AssetGrowthChart, CostComparisonChart};
use crate::components::flow_diagram::AutomationFlowDiagram;
use crate::components::framework_card::CreateFrameworkCard;
use crate::components::network_background::NetworkBackground;
use crate::components::newsletter_popup::NewsletterPopup;
use crate::components::section_header::SectionHeader;
use crate::components::terminal_boot::TerminalBootSequence;
use crate::config;
use crate::pages::faq::ProtocolFaq;
use crate::pages::pricing::PricingSection;

const HERO_STACK: &[&str] = &["High-Velocity VPS", "LiteSpeed Grid", "Infinity Core DB", "Amazon SES"];

struct Pillar {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
}

const PILLARS: &[Pillar] = &[
    Pillar {
        icon: "🖥️",
        title: "Titanium-Grade Hosting",
        desc: "We use Industrial-Grade VPS Architecture (German Engineering) to secure high-performance compute for pennies.",
    },
    Pillar {
        icon: "🗄️",
        title: "The Infinity Core",
        desc: "Our Open-Source Engine allows for infinite segmentation, tagging, and automation flows without the 'Pro Plan' limits.",
    },
    Pillar {
        icon: "⚡",
        title: "Wholesale Delivery",
        desc: "Amazon SES is the backbone of the internet. We tap into it directly, bypassing the middlemen.",
    },
];

struct Resource {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
    tag: &'static str,
}

const RESOURCES: &[Resource] = &[
    Resource {
        icon: "👑",
        title: "The 1% Doctrine",
        desc: "The philosophical manifesto on why ownership beats rental every single time. A mind-shift required for wealth.",
        tag: "Manifesto",
    },
    Resource {
        icon: "📦",
        title: "The Black Box",
        desc: "(Classified) The exact templates and server configurations used to send 1M+ emails with 99.9% deliverability.",
        tag: "Technical",
    },
    Resource {
        icon: "🧱",
        title: "Phase 2: The Uncommon",
        desc: "Advanced strategies for scaling beyond email. Expanding into multi-channel sovereign assets.",
        tag: "Strategy",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let show_newsletter = use_state(|| false);
    let network_seed = use_state(random_seed);

    // Open the newsletter popup once, a while after the page mounts
    {
        let show_newsletter = show_newsletter.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::NEWSLETTER_DELAY_MS, move || {
                    debug!("Newsletter popup timer fired");
                    show_newsletter.set(true);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    let open_newsletter = {
        let show_newsletter = show_newsletter.clone();
        Callback::from(move |_| show_newsletter.set(true))
    };
    let close_newsletter = {
        let show_newsletter = show_newsletter.clone();
        Callback::from(move |_| show_newsletter.set(false))
    };
    let open_newsletter_click = {
        let open_newsletter = open_newsletter.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open_newsletter.emit(());
        })
    };

    html! {
        <div class="landing-page">
            if *show_newsletter {
                <NewsletterPopup on_close={close_newsletter} />
            }

            <header class="hero">
                <NetworkBackground seed={*network_seed} />
                <div class="hero-gradient"></div>
                <div class="hero-content">
                    <div class="hero-copy">
                        <div class="status-pill">
                            <span class="status-dot"></span>
                            {"System Status: Online"}
                        </div>
                        <h1>
                            {"Own The"}<br />
                            <span class="accent-gradient">{"Infrastructure."}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"Stop renting your livelihood. The "}<b>{"\"Self-Hosted Sovereign\""}</b>
                            {" protocol is the only way to build a censorship-resistant, $100k/mo asset for $10/mo."}
                        </p>
                        <div class="hero-cta-group">
                            <a href="#doctrine" class="hero-cta">{"Declassify The Case Study →"}</a>
                            <a href="#system" class="hero-secondary">{"View Architecture"}</a>
                        </div>
                        <div class="hero-stack">
                            { for HERO_STACK.iter().map(|tech| html! { <span key={*tech}>{*tech}</span> }) }
                        </div>
                    </div>
                    <div class="hero-terminal">
                        <TerminalBootSequence />
                    </div>
                </div>
            </header>

            <main>
                <section id="story" class="story-section">
                    <div class="narrow">
                        <span class="journal-tag">{"ENCRYPTED LOG: ARCHITECT'S JOURNAL"}</span>
                        <h2>{"\"I spent 7 years burning money on the wrong things.\""}</h2>
                        <p>
                            {"For seven years, I failed. Not because I didn't work hard, but because I had poor "}
                            <b>{"wealth management"}</b>{". I was \"renting\" my business."}
                        </p>
                        <div class="mindset-grid">
                            <div class="mindset renter">
                                <h4>{"✕ The \"Renter\" Mindset"}</h4>
                                <p>{"Paying $200/mo for email tools. Buying \"shiny object\" courses. Building audiences on platforms that ban you. Expenses > Assets."}</p>
                            </div>
                            <div class="mindset sovereign">
                                <h4>{"✓ The \"Sovereign\" Mindset"}</h4>
                                <p>{"Owning the server. Owning the code. Owning the data. Spending $10 to make $10,000. Assets > Expenses."}</p>
                            </div>
                        </div>
                        <p>
                            {"I realized that "}<b>{"Email is Digital Real Estate"}</b>
                            {". It is an asset that pays you for a lifetime, if you own the infrastructure."}
                        </p>
                    </div>
                </section>

                <section id="doctrine" class="doctrine-section">
                    <div class="narrow centered">
                        <div class="doctrine-crown">{"👑"}</div>
                        <h2>
                            {"Are you a "}<span class="muted">{"Tenant"}</span>
                            {" or a "}<span class="accent">{"King?"}</span>
                        </h2>
                        <div class="doctrine-grid">
                            <div class="doctrine-card">
                                <h3>{"The 99% (Tenants)"}</h3>
                                <p>{"They rent their audience from Zuckerberg, Google, and SaaS platforms. They live in fear of algorithm changes, price hikes, and account bans. They own nothing."}</p>
                            </div>
                            <div class="doctrine-card owner">
                                <h3>{"The 1% (Owners)"}</h3>
                                <p>{"They own the server. They own the IP. They own the relationship. They pay wholesale prices for infrastructure and keep 100% of the upside."}</p>
                            </div>
                        </div>
                    </div>
                </section>

                <section id="system" class="system-section">
                    <SectionHeader
                        number="01"
                        title="The Mathematics of Failure"
                        subtitle="Why the 'Old Way' is designed to keep you poor."
                    />
                    <div class="two-column">
                        <CostComparisonChart />
                        <div>
                            <h3>{"The \"100k Trap\""}</h3>
                            <ul class="trap-list">
                                <li>
                                    <h4>{"The Subscription Bleed"}</h4>
                                    <p>{"Services like ActiveCampaign charge you for storing data, not just sending. As you grow, you get punished."}</p>
                                </li>
                                <li>
                                    <h4>{"The Sovereign Solution"}</h4>
                                    <p>{"With my self-hosted stack, you pay for the server ($10). Whether you have 1,000 or 1,000,000 subscribers, the cost stays flat."}</p>
                                </li>
                            </ul>
                        </div>
                    </div>
                </section>

                <section class="architecture-section">
                    <SectionHeader
                        number="02"
                        title="The Hidden Architecture"
                        subtitle="A glimpse into the private process never before revealed in this market."
                    />
                    <div class="diagram-frame">
                        <AutomationFlowDiagram />
                    </div>
                    <div class="pillar-grid">
                        { for PILLARS.iter().map(|pillar| html! {
                            <div key={pillar.title} class="pillar">
                                <div class="pillar-icon">{pillar.icon}</div>
                                <h3>{pillar.title}</h3>
                                <p>{pillar.desc}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="wealth" class="wealth-section">
                    <div class="two-column">
                        <div>
                            <div class="eyebrow">{"03. WEALTH MANAGEMENT"}</div>
                            <h2>{"\"How easy can it be?\""}</h2>
                            <p>
                                {"Once this system is built, it becomes a "}<b>{"Passive Income Generator"}</b>
                                {". This is the difference between \"working\" and \"owning.\""}
                            </p>
                            <ul class="wealth-list">
                                <li>{"Build the system once (Weekend Project)."}</li>
                                <li>{"Auto-feed content via Newsletter."}</li>
                                <li>{"Earn lifetime commissions from a loyal community."}</li>
                            </ul>
                            <div class="roi">
                                <p>{"PROJECTED ROI"}</p>
                                <div>{"$10 Cost → $10k Value"}</div>
                            </div>
                        </div>
                        <AssetGrowthChart />
                    </div>
                </section>

                <section id="resources" class="resources-section">
                    <SectionHeader
                        number="04"
                        title="Classified Intelligence"
                        subtitle="Access the private files that power the Sovereign ecosystem."
                    />
                    <div class="resource-grid">
                        { for RESOURCES.iter().map(|resource| html! {
                            <a key={resource.title} href="#pricing" class="resource-card">
                                <div class="resource-meta">
                                    <span class="resource-icon">{resource.icon}</span>
                                    <span class="resource-tag">{resource.tag}</span>
                                </div>
                                <h3>{resource.title}</h3>
                                <p>{resource.desc}</p>
                                <span class="resource-access">{"Access File →"}</span>
                            </a>
                        }) }
                    </div>
                    <p class="resource-note">{"* Click any file to verify access clearance."}</p>
                </section>

                <section class="ai-section">
                    <div class="two-column">
                        <CreateFrameworkCard />
                        <div>
                            <div class="eyebrow">{"05. ARTIFICIAL INTELLIGENCE"}</div>
                            <h2>{"The \"C.R.E.A.T.E\" Protocol"}</h2>
                            <p>
                                {"A server without a message is useless. I will hand you my proprietary AI Logic. This isn't ChatGPT text; this is "}
                                <b>{"Psychological Engineering"}</b>{"."}
                            </p>
                            <p>{"We program the AI to \"Think\" like a human copywriter before it writes a single word."}</p>
                            <a href="#pricing" class="text-link">{"See the prompt logic →"}</a>
                        </div>
                    </div>
                </section>

                <section id="community" class="community-section">
                    <div class="narrow centered">
                        <h2>{"Join The Sovereign Society"}</h2>
                        <p>{"When you acquire this asset, you don't just get a course. You enter a private network of builders who are exiting the \"Rental Economy.\""}</p>
                        <div class="community-actions">
                            <button class="hero-cta" onclick={open_newsletter_click}>{"✉ Weekly \"Alpha\" Newsletter"}</button>
                            <a href="#pricing" class="hero-secondary">{"Private Discord Access"}</a>
                        </div>
                    </div>
                </section>

                <PricingSection on_buy={open_newsletter} />
                <ProtocolFaq />
            </main>

            <SiteFooter />

            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                    scroll-padding-top: 80px;
                }
                body {
                    margin: 0;
                    background: #0b1120;
                    color: #e2e8f0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    overflow-x: hidden;
                }
                .landing-page section {
                    padding: 6rem 1.5rem;
                    position: relative;
                }
                .landing-page h2 {
                    color: #fff;
                    font-size: 2.5rem;
                    letter-spacing: -0.02em;
                }
                .narrow {
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .centered {
                    text-align: center;
                }
                .two-column {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                }
                .hero-gradient {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, transparent, #0b1120);
                    pointer-events: none;
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 8rem 1.5rem 4rem;
                }
                .hero h1 {
                    font-size: 4.5rem;
                    line-height: 1;
                    color: #fff;
                    margin: 1.5rem 0;
                }
                .accent-gradient {
                    background: linear-gradient(to right, #10b981, #3b82f6);
                    -webkit-background-clip: text;
                    color: transparent;
                }
                .status-pill {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.75rem;
                    font-family: ui-monospace, monospace;
                    color: #10b981;
                    border: 1px solid rgba(16, 185, 129, 0.3);
                    border-radius: 999px;
                    padding: 0.25rem 0.75rem;
                }
                .status-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #10b981;
                }
                .hero-subtitle {
                    font-size: 1.2rem;
                    color: #94a3b8;
                    line-height: 1.6;
                }
                .hero-cta-group, .community-actions {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                    margin: 2rem 0;
                }
                .community-actions {
                    justify-content: center;
                }
                .hero-cta {
                    background: #10b981;
                    color: #0b1120;
                    font-weight: bold;
                    padding: 1rem 1.75rem;
                    border-radius: 8px;
                    border: none;
                    text-decoration: none;
                    cursor: pointer;
                }
                .hero-secondary {
                    color: #fff;
                    border: 1px solid #334155;
                    padding: 1rem 1.75rem;
                    border-radius: 8px;
                    text-decoration: none;
                }
                .hero-stack {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .hero-stack span {
                    font-size: 0.7rem;
                    font-family: ui-monospace, monospace;
                    color: #64748b;
                    border: 1px solid #1e293b;
                    padding: 0.25rem 0.5rem;
                    border-radius: 4px;
                }
                .journal-tag, .eyebrow {
                    font-family: ui-monospace, monospace;
                    font-size: 0.75rem;
                    color: #10b981;
                    letter-spacing: 0.2em;
                }
                .mindset-grid, .doctrine-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                    margin: 2rem 0;
                    text-align: left;
                }
                .mindset, .doctrine-card {
                    padding: 1.5rem;
                    border-radius: 12px;
                    border: 1px solid #1e293b;
                    background: rgba(15, 23, 42, 0.5);
                }
                .mindset.renter h4 { color: #f87171; }
                .mindset.sovereign h4, .doctrine-card.owner h3 { color: #10b981; }
                .doctrine-crown { font-size: 2rem; }
                .muted { color: #64748b; }
                .accent { color: #10b981; }
                .section-header {
                    text-align: center;
                    max-width: 48rem;
                    margin: 0 auto 4rem;
                }
                .section-number {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 0.75rem;
                    color: #10b981;
                    font-family: ui-monospace, monospace;
                    letter-spacing: 0.2em;
                }
                .section-rule {
                    height: 1px;
                    width: 2rem;
                    background: rgba(16, 185, 129, 0.5);
                }
                .section-header p {
                    color: #94a3b8;
                    font-size: 1.1rem;
                }
                .trap-list, .wealth-list {
                    list-style: none;
                    padding: 0;
                }
                .trap-list h4 { color: #fff; margin-bottom: 0.25rem; }
                .trap-list p, .wealth-section p, .ai-section p { color: #94a3b8; }
                .wealth-list li::before {
                    content: "● ";
                    color: #10b981;
                }
                .roi {
                    margin-top: 2rem;
                    padding: 1rem 1.5rem;
                    border-left: 3px solid #10b981;
                    background: rgba(16, 185, 129, 0.05);
                    color: #fff;
                    font-weight: bold;
                }
                .diagram-frame {
                    padding: 3rem 2rem;
                    border: 1px solid #1e293b;
                    border-radius: 1.5rem;
                    background: rgba(2, 6, 23, 0.6);
                    max-width: 72rem;
                    margin: 0 auto 4rem;
                }
                .pillar-grid, .resource-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 1.5rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .pillar, .resource-card {
                    padding: 1.5rem;
                    border: 1px solid #1e293b;
                    border-radius: 12px;
                    background: rgba(15, 23, 42, 0.5);
                    color: inherit;
                    text-decoration: none;
                    transition: border-color 0.3s ease, background 0.3s ease;
                }
                .resource-card:hover {
                    border-color: rgba(16, 185, 129, 0.5);
                    background: #1e293b;
                }
                .pillar-icon, .resource-icon { font-size: 1.75rem; }
                .pillar h3, .resource-card h3 { color: #fff; }
                .pillar p, .resource-card p { color: #94a3b8; font-size: 0.9rem; }
                .resource-meta {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .resource-tag {
                    font-size: 10px;
                    font-family: ui-monospace, monospace;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #64748b;
                    border: 1px solid #334155;
                    border-radius: 999px;
                    padding: 0.1rem 0.5rem;
                }
                .resource-access, .text-link {
                    color: #10b981;
                    font-size: 0.75rem;
                    font-weight: bold;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    text-decoration: none;
                }
                .resource-note {
                    text-align: center;
                    color: #475569;
                    font-size: 0.75rem;
                    margin-top: 2rem;
                }
                .community-section {
                    background: linear-gradient(to bottom, #0b1120, #022c22);
                }
                .community-section p { color: #94a3b8; }
                @media (max-width: 900px) {
                    .hero-content, .two-column, .mindset-grid, .doctrine-grid {
                        grid-template-columns: 1fr;
                    }
                    .hero h1 { font-size: 3rem; }
                }
                "#}
            </style>
        </div>
    }
}

const SUPPORT_MAILTO: &str = "mailto:support@imnokib.com";

/// Footer buttons that answer with a browser alert.
const FOOTER_NOTICES: &[(&str, &str)] = &[
    ("Terms of Protocol", "Standard Protocol Terms apply. Ownership belongs to the buyer."),
    ("Privacy Policy", "We do not track you. We do not sell you. You are sovereign."),
];

fn show_notice(message: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                warn!("Failed to show notice: {:?}", err);
            }
        }
    })
}

#[function_component(SiteFooter)]
fn site_footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <div class="footer-logo">
                        <span class="footer-mark">{"N"}</span>
                        <span class="footer-name">{"IM NOKIB"}</span>
                    </div>
                    <p>
                        {"The \"Self-Hosted Sovereign\" is a trademark of Nokib Architecture."}
                        <br />
                        {"Teaching wealth management through digital asset ownership."}
                    </p>
                </div>
                <div class="footer-actions">
                    { for FOOTER_NOTICES.iter().map(|(label, message)| html! {
                        <button key={*label} class="footer-action" onclick={show_notice(*message)}>{*label}</button>
                    }) }
                    <a class="footer-action" href={SUPPORT_MAILTO}>{"⚠ Support Line"}</a>
                </div>
            </div>
            <div class="footer-status">{"EST. 2025 • DHAKA / GLOBAL • ALL SYSTEMS OPERATIONAL"}</div>
            <style>
                {r#"
                .site-footer {
                    background: #000;
                    color: #64748b;
                    padding: 4rem 1.5rem;
                    border-top: 1px solid #0f172a;
                }
                .footer-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                }
                .footer-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .footer-mark {
                    width: 2rem;
                    height: 2rem;
                    background: #10b981;
                    color: #0b1120;
                    font-weight: 900;
                    border-radius: 4px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .footer-name {
                    color: #fff;
                    font-weight: bold;
                    font-size: 1.25rem;
                }
                .footer-brand p {
                    font-size: 0.875rem;
                    max-width: 28rem;
                    line-height: 1.6;
                }
                .footer-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .footer-action {
                    padding: 0.5rem 1rem;
                    border: 1px solid #1e293b;
                    border-radius: 4px;
                    background: none;
                    color: #64748b;
                    font-size: 0.75rem;
                    font-weight: bold;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                    cursor: pointer;
                }
                .footer-action:hover {
                    background: #1e293b;
                    color: #fff;
                }
                .footer-status {
                    text-align: center;
                    margin-top: 3rem;
                    font-size: 10px;
                    color: #1e293b;
                    font-family: ui-monospace, monospace;
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_offers_terms_privacy_and_support() {
        let labels: Vec<&str> = FOOTER_NOTICES.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["Terms of Protocol", "Privacy Policy"]);
        assert!(FOOTER_NOTICES.iter().all(|(_, message)| !message.is_empty()));
        assert!(SUPPORT_MAILTO.starts_with("mailto:"));
    }
}
