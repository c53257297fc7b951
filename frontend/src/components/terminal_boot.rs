use web_sys::Element;
use yew::prelude::*;

use crate::animation::hooks::use_sequence;
use crate::animation::sequence::SequenceMode;
use crate::config;

pub const BOOT_LINES: &[&str] = &[
    "> INITIALIZING SOVEREIGN PROTOCOL...",
    "> CONNECTING TO TITANIUM VPS (NODE_DE_01)... [OK]",
    "> ESTABLISHING ROOT ACCESS... [GRANTED]",
    "> DEPLOYING COMMAND GRID... [COMPLETE]",
    "> INITIALIZING NEURAL DB... [COMPLETE]",
    "> BYPASSING MIDDLEMEN... [SUCCESS]",
    "> CONNECTING AMAZON SES API... [CONNECTED]",
    "> COST ANALYSIS: $0.10 / 1000 EMAILS",
    "> SYSTEM STATUS: 100% OWNERSHIP",
    "> WELCOME, ARCHITECT.",
];

#[function_component(TerminalBootSequence)]
pub fn terminal_boot_sequence() -> Html {
    let boot = use_sequence(BOOT_LINES, config::BOOT_LINE_INTERVAL_MS, SequenceMode::OneShot, true);
    let log_ref = use_node_ref();

    // Keep the newest line in view
    {
        let log_ref = log_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(log) = log_ref.cast::<Element>() {
                    log.set_scroll_top(log.scroll_height());
                }
                || ()
            },
            boot.cursor,
        );
    }

    let revealed = &BOOT_LINES[..boot.cursor];
    let complete = boot.is_complete();

    html! {
        <div class="terminal-wrapper">
            <style>
                {r#"
                    .terminal-wrapper {
                        position: relative;
                        width: 100%;
                        max-width: 32rem;
                        margin: 0 auto;
                    }
                    .terminal {
                        background: #020617;
                        border: 1px solid #1e293b;
                        border-radius: 12px;
                        overflow: hidden;
                        font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
                        font-size: 0.85rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                        position: relative;
                        z-index: 1;
                    }
                    .terminal-bar {
                        background: #0f172a;
                        padding: 0.5rem 1rem;
                        display: flex;
                        gap: 0.5rem;
                        align-items: center;
                        border-bottom: 1px solid #1e293b;
                    }
                    .terminal-dot {
                        width: 12px;
                        height: 12px;
                        border-radius: 50%;
                    }
                    .terminal-dot.red { background: rgba(239, 68, 68, 0.5); }
                    .terminal-dot.yellow { background: rgba(234, 179, 8, 0.5); }
                    .terminal-dot.green { background: rgba(34, 197, 94, 0.5); }
                    .terminal-title {
                        margin-left: auto;
                        color: #64748b;
                    }
                    .terminal-log {
                        padding: 1.5rem;
                        height: 16rem;
                        overflow-y: auto;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        scroll-behavior: smooth;
                    }
                    .terminal-line {
                        color: #94a3b8;
                        animation: lineIn 0.3s ease-out;
                    }
                    .terminal-line.latest {
                        color: #10b981;
                        font-weight: bold;
                    }
                    .terminal-caret {
                        width: 8px;
                        height: 16px;
                        background: #10b981;
                        animation: blink 0.8s infinite;
                    }
                    .telemetry-card {
                        position: absolute;
                        bottom: -1.5rem;
                        right: -1.5rem;
                        z-index: 2;
                        background: rgba(15, 23, 42, 0.9);
                        backdrop-filter: blur(16px);
                        border: 1px solid #334155;
                        border-radius: 12px;
                        padding: 1rem;
                        min-width: 200px;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        opacity: 0;
                        transform: translateY(20px) scale(0.9);
                        transition: opacity 0.5s ease 0.5s, transform 0.5s ease 0.5s;
                    }
                    .telemetry-card.visible {
                        opacity: 1;
                        transform: translateY(0) scale(1);
                    }
                    .telemetry-label {
                        font-size: 10px;
                        font-weight: bold;
                        color: #64748b;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                    .telemetry-value {
                        font-size: 1.5rem;
                        font-weight: 900;
                        color: #fff;
                    }
                    .telemetry-delta {
                        font-size: 0.75rem;
                        color: #34d399;
                        background: rgba(52, 211, 153, 0.1);
                        padding: 0.1rem 0.4rem;
                        border-radius: 4px;
                        margin-left: 0.5rem;
                    }
                    @keyframes lineIn {
                        from { opacity: 0; transform: translateX(-10px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    @keyframes blink {
                        0%, 100% { opacity: 0; }
                        50% { opacity: 1; }
                    }
                "#}
            </style>
            <div class="terminal">
                <div class="terminal-bar">
                    <div class="terminal-dot red"></div>
                    <div class="terminal-dot yellow"></div>
                    <div class="terminal-dot green"></div>
                    <div class="terminal-title">{"bash"}</div>
                </div>
                <div class="terminal-log" ref={log_ref}>
                    { for revealed.iter().enumerate().map(|(i, line)| html! {
                        <div key={i} class={classes!("terminal-line", (i + 1 == revealed.len()).then(|| "latest"))}>
                            {*line}
                        </div>
                    }) }
                    if !complete {
                        <div class="terminal-caret"></div>
                    }
                </div>
            </div>
            <div class={classes!("telemetry-card", complete.then(|| "visible"))}>
                <div class="telemetry-body">
                    <div class="telemetry-label">{"Live Open Rate"}</div>
                    <div class="telemetry-value">
                        {"68.4%"}
                        <span class="telemetry-delta">{"+142%"}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_log_ends_with_the_greeting() {
        assert_eq!(BOOT_LINES.len(), 10);
        assert!(BOOT_LINES.iter().all(|line| line.starts_with("> ")));
        assert_eq!(BOOT_LINES.last(), Some(&"> WELCOME, ARCHITECT."));
    }
}
