use yew::prelude::*;

use crate::animation::hooks::use_sequence;
use crate::animation::sequence::SequenceMode;
use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct FrameworkStep {
    pub letter: char,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const CREATE_STEPS: &[FrameworkStep] = &[
    FrameworkStep { letter: 'C', title: "CONTEXT", detail: "Inject background data" },
    FrameworkStep { letter: 'R', title: "ROLE", detail: "Assign expert persona" },
    FrameworkStep { letter: 'E', title: "EXPECTATION", detail: "Set output parameters" },
    FrameworkStep { letter: 'A', title: "AUDIENCE", detail: "Define the target" },
    FrameworkStep { letter: 'T', title: "TASK", detail: "Execute specific command" },
    FrameworkStep { letter: 'E', title: "EXAMPLES", detail: "Provide few-shot logic" },
];

#[function_component(CreateFrameworkCard)]
pub fn create_framework_card() -> Html {
    let framework = use_sequence(CREATE_STEPS, config::FRAMEWORK_STEP_INTERVAL_MS, SequenceMode::Looping, true);

    html! {
        <div class="framework-card">
            <style>
                {r#"
                    .framework-card {
                        background: #020617;
                        border: 1px solid #1e293b;
                        border-radius: 1rem;
                        overflow: hidden;
                        position: relative;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    }
                    .framework-header {
                        padding: 1.5rem;
                        background: #0f172a;
                        border-bottom: 1px solid #1e293b;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .framework-header h3 {
                        color: #fff;
                        margin: 0;
                    }
                    .framework-version {
                        padding: 0.25rem 0.75rem;
                        background: rgba(16, 185, 129, 0.1);
                        color: #10b981;
                        font-size: 10px;
                        font-weight: bold;
                        border-radius: 999px;
                        font-family: ui-monospace, monospace;
                    }
                    .framework-grid {
                        padding: 2rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .framework-step {
                        padding: 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid transparent;
                        opacity: 0.3;
                        transition: all 0.3s ease;
                    }
                    .framework-step.current {
                        opacity: 1;
                        transform: scale(1.02);
                        background: #1e293b;
                        border-color: #10b981;
                        box-shadow: 0 0 15px rgba(16, 185, 129, 0.1);
                    }
                    .framework-letter {
                        font-weight: 900;
                        font-size: 1.5rem;
                        color: #475569;
                        margin-right: 0.75rem;
                    }
                    .framework-step.current .framework-letter {
                        color: #10b981;
                    }
                    .framework-title {
                        font-weight: bold;
                        font-size: 0.75rem;
                        letter-spacing: 0.1em;
                        color: #64748b;
                    }
                    .framework-step.current .framework-title {
                        color: #fff;
                    }
                    .framework-detail {
                        font-size: 0.75rem;
                        color: #94a3b8;
                        font-family: ui-monospace, monospace;
                    }
                "#}
            </style>
            <div class="framework-header">
                <h3>{"C.R.E.A.T.E LOGIC"}</h3>
                <div class="framework-version">{"V 2.0"}</div>
            </div>
            <div class="framework-grid">
                { for CREATE_STEPS.iter().enumerate().map(|(index, step)| html! {
                    <div key={index} class={classes!("framework-step", (index == framework.cursor).then(|| "current"))}>
                        <div>
                            <span class="framework-letter">{step.letter.to_string()}</span>
                            <span class="framework-title">{step.title}</span>
                        </div>
                        <div class="framework-detail">{step.detail}</div>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_spell_create() {
        let word: String = CREATE_STEPS.iter().map(|step| step.letter).collect();
        assert_eq!(word, "CREATE");
    }
}
