use web_sys::MouseEvent;
use yew::prelude::*;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{"→ "}{props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(ProtocolFaq)]
pub fn protocol_faq() -> Html {
    html! {
        <section class="faq-section">
            <div class="faq-inner">
                <h3 class="faq-heading">{"Protocol FAQ"}</h3>

                <FaqItem question="Do I need coding skills?">
                    <p>{"No. The \"Blueprint\" provides copy-paste terminal commands. If you can follow a recipe, you can build this server. We have stripped away the complexity."}</p>
                </FaqItem>

                <FaqItem question="Why is this better than Mailchimp?">
                    <p>{"Ownership. Mailchimp owns your data and can ban you anytime. Here, you own the database. Plus, the cost difference is 98% in your favor ($10 vs $600)."}</p>
                </FaqItem>

                <FaqItem question="Is this \"Cold Email\" spam?">
                    <p>{"Absolutely not. We teach \"Targeted Value Outreach.\" Spam is sending 1 million identical emails. Our AI system personalizes every single email, making it compliant and highly relevant."}</p>
                </FaqItem>

                <FaqItem question="What about maintenance time?">
                    <p>{"Once built, the system is automated. You will spend perhaps 1 hour per month on server updates. The rest is profit generation."}</p>
                </FaqItem>
            </div>

            <style>
                {r#"
                .faq-section {
                    padding: 6rem 1.5rem;
                    background: #020617;
                    border-top: 1px solid #1e293b;
                }
                .faq-inner {
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .faq-heading {
                    color: #fff;
                    font-size: 1.5rem;
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .faq-item {
                    border-bottom: 1px solid #1e293b;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.05rem;
                    font-weight: bold;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-question .question-text {
                    color: #e2e8f0;
                }
                .toggle-icon {
                    color: #10b981;
                    font-size: 1.25rem;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                    color: #94a3b8;
                    font-size: 0.9rem;
                    line-height: 1.6;
                }
                .faq-item.open .faq-answer {
                    max-height: 20rem;
                    padding-bottom: 1.25rem;
                }
                "#}
            </style>
        </section>
    }
}
