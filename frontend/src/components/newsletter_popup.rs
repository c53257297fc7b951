use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NewsletterPopupProps {
    pub on_close: Callback<()>,
}

#[function_component(NewsletterPopup)]
pub fn newsletter_popup(props: &NewsletterPopupProps) -> Html {
    let joined = use_state(|| false);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    let join = {
        let joined = joined.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            info!("Newsletter access requested");
            joined.set(true);
        })
    };

    html! {
        <div class="popup-overlay">
            <style>
                {r#"
                    .popup-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 60;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(4px);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        animation: overlayIn 0.3s ease-out;
                    }
                    .popup {
                        background: #0f172a;
                        border: 1px solid rgba(16, 185, 129, 0.3);
                        border-radius: 1rem;
                        padding: 2rem;
                        max-width: 28rem;
                        width: 100%;
                        position: relative;
                        box-shadow: 0 0 50px rgba(16, 185, 129, 0.15);
                        animation: popupIn 0.3s ease-out;
                    }
                    .popup-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        color: #64748b;
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    .popup-close:hover { color: #fff; }
                    .popup-eyebrow {
                        color: #10b981;
                        font-family: ui-monospace, monospace;
                        font-size: 0.75rem;
                        letter-spacing: 0.1em;
                        margin-bottom: 1rem;
                    }
                    .popup h3 {
                        color: #fff;
                        font-size: 1.5rem;
                        margin: 0 0 0.5rem;
                    }
                    .popup p {
                        color: #94a3b8;
                        font-size: 0.875rem;
                    }
                    .popup input {
                        width: 100%;
                        box-sizing: border-box;
                        background: #1e293b;
                        border: 1px solid #334155;
                        border-radius: 8px;
                        padding: 0.75rem 1rem;
                        color: #fff;
                        margin-bottom: 1rem;
                    }
                    .popup input:focus {
                        outline: none;
                        border-color: #10b981;
                    }
                    .popup-submit {
                        width: 100%;
                        background: #10b981;
                        color: #0b1120;
                        font-weight: bold;
                        padding: 0.75rem;
                        border: none;
                        border-radius: 8px;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        cursor: pointer;
                    }
                    .popup-submit:hover { background: #fff; }
                    .popup-fineprint {
                        font-size: 10px !important;
                        color: #475569 !important;
                        text-align: center;
                    }
                    @keyframes overlayIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes popupIn {
                        from { transform: scale(0.9) translateY(20px); }
                        to { transform: scale(1) translateY(0); }
                    }
                "#}
            </style>
            <div class="popup">
                <button class="popup-close" onclick={close.clone()}>{"✕"}</button>
                <div class="popup-eyebrow">{"● SECURE ACCESS REQUEST"}</div>
                if *joined {
                    <h3>{"Welcome to the Society."}</h3>
                    <p>{"Check your inbox."}</p>
                    <button class="popup-submit" onclick={close}>{"Close"}</button>
                } else {
                    <h3>{"Join The Sovereign Society"}</h3>
                    <p>
                        {"Enter your primary email to unlock the blueprints and receive the weekly \"Alpha Report\"."}
                    </p>
                    <input type="email" placeholder="Enter your best email..." />
                    <button class="popup-submit" onclick={join}>{"Initialize Access"}</button>
                }
                <p class="popup-fineprint">
                    {"We respect the sanctity of your inbox. Zero spam. 100% Signal."}
                </p>
            </div>
        </div>
    }
}
