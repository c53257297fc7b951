use yew::prelude::*;

use crate::animation::hooks::use_sequence;
use crate::animation::sequence::SequenceMode;
use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct FlowStage {
    pub label: &'static str,
    pub desc: &'static str,
    pub icon: &'static str,
    pub status: &'static str,
}

pub const FLOW_STAGES: &[FlowStage] = &[
    FlowStage {
        label: "Extraction",
        desc: "Lead Sources",
        icon: "👥",
        status: "SCRAPING HIGH-INTENT DATA...",
    },
    FlowStage {
        label: "AI Logic",
        desc: "Enrichment",
        icon: "🧠",
        status: "GENERATING PSYCHOLOGICAL TRIGGERS...",
    },
    FlowStage {
        label: "The Core",
        desc: "Neural DB",
        icon: "🗄️",
        status: "OPTIMIZING LOGIC NODES...",
    },
    FlowStage {
        label: "Inboxes",
        desc: "Direct Delivery",
        icon: "✉️",
        status: "EXECUTING SES TRANSMISSION PROTOCOL...",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StagePhase {
    Past,
    Active,
    Upcoming,
}

pub fn stage_phase(index: usize, active: usize) -> StagePhase {
    if index == active {
        StagePhase::Active
    } else if index < active {
        StagePhase::Past
    } else {
        StagePhase::Upcoming
    }
}

/// Horizontal position of the travelling packet, in percent of the track.
pub fn packet_offset_percent(active: usize, stage_count: usize) -> f64 {
    if stage_count < 2 {
        return 0.0;
    }
    active as f64 / (stage_count - 1) as f64 * 100.0
}

#[function_component(AutomationFlowDiagram)]
pub fn automation_flow_diagram() -> Html {
    let flow = use_sequence(FLOW_STAGES, config::FLOW_STAGE_INTERVAL_MS, SequenceMode::Looping, true);
    let active = flow.cursor;
    let packet_left = packet_offset_percent(active, FLOW_STAGES.len());

    html! {
        <div class="flow-diagram">
            <style>
                {r#"
                    .flow-track {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 2rem;
                        max-width: 56rem;
                        margin: 0 auto;
                        position: relative;
                    }
                    .flow-line {
                        position: absolute;
                        top: 2.5rem;
                        left: 0;
                        width: 100%;
                        height: 2px;
                        background: #1e293b;
                        z-index: 0;
                    }
                    .flow-stage {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        position: relative;
                        z-index: 1;
                    }
                    .flow-icon {
                        width: 5rem;
                        height: 5rem;
                        border-radius: 1rem;
                        border: 1px solid #334155;
                        background: #0b1120;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.75rem;
                        margin-bottom: 1.5rem;
                        transition: all 0.5s ease;
                        filter: grayscale(1);
                    }
                    .flow-stage.past .flow-icon {
                        background: #064e3b;
                        border-color: #059669;
                        filter: none;
                    }
                    .flow-stage.active .flow-icon {
                        background: #10b981;
                        border-color: #34d399;
                        transform: scale(1.1);
                        filter: none;
                    }
                    .flow-label {
                        font-weight: bold;
                        font-size: 1.1rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        color: #64748b;
                    }
                    .flow-stage.active .flow-label {
                        color: #10b981;
                    }
                    .flow-desc {
                        font-size: 0.75rem;
                        color: #64748b;
                        font-family: ui-monospace, monospace;
                    }
                    .flow-packet {
                        position: absolute;
                        top: 2.5rem;
                        margin-top: -4px;
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: #10b981;
                        box-shadow: 0 0 20px #10b981;
                        transition: left 1.2s cubic-bezier(0.34, 1.2, 0.64, 1);
                        z-index: 2;
                    }
                    .flow-status {
                        margin: 3rem auto 0;
                        max-width: 42rem;
                        padding: 1rem;
                        background: #020617;
                        border: 1px solid #1e293b;
                        border-radius: 8px;
                        text-align: center;
                        color: #10b981;
                        font-size: 0.75rem;
                        font-family: ui-monospace, monospace;
                        letter-spacing: 0.1em;
                    }
                    .pulse {
                        animation: pulse 1.5s infinite;
                    }
                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.3; }
                    }
                    @media (max-width: 768px) {
                        .flow-track { flex-direction: column; }
                        .flow-line, .flow-packet { display: none; }
                    }
                "#}
            </style>
            <div class="flow-track">
                <div class="flow-line"></div>
                { for FLOW_STAGES.iter().enumerate().map(|(index, stage)| {
                    let phase = match stage_phase(index, active) {
                        StagePhase::Past => "past",
                        StagePhase::Active => "active",
                        StagePhase::Upcoming => "upcoming",
                    };
                    html! {
                        <div key={index} class={classes!("flow-stage", phase)}>
                            <div class="flow-icon">{stage.icon}</div>
                            <h4 class="flow-label">{stage.label}</h4>
                            <p class="flow-desc">{stage.desc}</p>
                        </div>
                    }
                }) }
                <div class="flow-packet" style={format!("left: {}%;", packet_left)}></div>
            </div>
            <div class="flow-status">
                <span class="pulse">{"● "}</span>
                {"PROCESS RUNNING: "}
                {FLOW_STAGES[active].status}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn phases_split_around_the_active_stage() {
        let phases: Vec<StagePhase> = (0..4).map(|i| stage_phase(i, 2)).collect();
        assert_eq!(
            phases,
            vec![
                StagePhase::Past,
                StagePhase::Past,
                StagePhase::Active,
                StagePhase::Upcoming
            ]
        );
    }

    #[test]
    fn nothing_is_past_before_the_first_tick() {
        assert!((0..4).all(|i| stage_phase(i, 0) != StagePhase::Past));
    }

    #[test]
    fn packet_spans_the_track() {
        assert_eq!(packet_offset_percent(0, 4), 0.0);
        assert_eq!(packet_offset_percent(3, 4), 100.0);
        assert!((packet_offset_percent(1, 4) - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(packet_offset_percent(0, 1), 0.0);
    }

    #[test]
    fn four_stages_each_with_a_status() {
        assert_eq!(FLOW_STAGES.len(), 4);
        assert!(FLOW_STAGES.iter().all(|stage| stage.status.ends_with("...")));
    }
}
