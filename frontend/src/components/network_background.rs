use glam::Vec2;
use yew::prelude::*;

use crate::animation::network::{generate, Camera, NetworkEdge, NetworkLayout, NetworkParams};

const VIEWPORT: Vec2 = Vec2::new(1600.0, 900.0);
const ACCENT: &str = "#10B981";
const NODE: &str = "#3B82F6";

#[derive(Properties, PartialEq)]
pub struct NetworkBackgroundProps {
    pub seed: u64,
}

#[function_component(NetworkBackground)]
pub fn network_background(props: &NetworkBackgroundProps) -> Html {
    let layout = use_memo(|seed| generate(*seed, &NetworkParams::default()), props.seed);
    let camera = Camera::default();

    html! {
        <div class="network-background">
            <style>
                {r#"
                    .network-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        opacity: 0.4;
                        pointer-events: none;
                    }
                    .network-background svg {
                        width: 100%;
                        height: 100%;
                    }
                    .network-node {
                        animation: nodeFloat 4s ease-in-out infinite alternate;
                    }
                    .network-star {
                        animation: starFade 6s ease-in-out infinite alternate;
                    }
                    @keyframes nodeFloat {
                        from { transform: translateY(-4px); }
                        to { transform: translateY(4px); }
                    }
                    @keyframes starFade {
                        from { opacity: 0.2; }
                        to { opacity: 1; }
                    }
                "#}
            </style>
            <svg viewBox={format!("0 0 {} {}", VIEWPORT.x, VIEWPORT.y)} preserveAspectRatio="xMidYMid slice">
                { render_stars(&layout) }
                { render_edges(&layout, &camera) }
                { render_nodes(&layout, &camera) }
            </svg>
        </div>
    }
}

fn render_stars(layout: &NetworkLayout) -> Html {
    layout
        .stars
        .iter()
        .enumerate()
        .map(|(i, star)| {
            html! {
                <circle
                    class="network-star"
                    cx={(star.position.x * VIEWPORT.x).to_string()}
                    cy={(star.position.y * VIEWPORT.y).to_string()}
                    r="1"
                    fill="#ffffff"
                    opacity={star.brightness.to_string()}
                    style={format!("animation-delay: -{}s;", i % 6)}
                />
            }
        })
        .collect()
}

/// Seconds into its trip a packet starts at, spread evenly across edges so
/// packets do not all leave their origin together.
fn packet_phase_secs(edge: &NetworkEdge, index: usize, edge_count: usize) -> f32 {
    edge.trip_secs() * index as f32 / edge_count.max(1) as f32
}

fn render_edges(layout: &NetworkLayout, camera: &Camera) -> Html {
    let edge_count = layout.edges.len();
    layout
        .edges
        .iter()
        .enumerate()
        .filter_map(|(i, edge)| {
            let (start, end) = edge.endpoints(layout);
            let a = camera.project(start, VIEWPORT)?;
            let b = camera.project(end, VIEWPORT)?;
            let phase = packet_phase_secs(edge, i, edge_count);
            let packet = camera.project(edge.packet_position(layout, phase), VIEWPORT)?;
            let dur = format!("{:.2}s", edge.trip_secs());
            let begin = format!("-{:.2}s", phase);
            Some(html! {
                <g>
                    <line
                        x1={a.x.to_string()} y1={a.y.to_string()}
                        x2={b.x.to_string()} y2={b.y.to_string()}
                        stroke="#1E293B" stroke-width="1" opacity="0.3"
                    />
                    <circle r="3" fill="#ffffff" cx={packet.x.to_string()} cy={packet.y.to_string()}>
                        <animate attributeName="cx" from={a.x.to_string()} to={b.x.to_string()} dur={dur.clone()} begin={begin.clone()} repeatCount="indefinite" />
                        <animate attributeName="cy" from={a.y.to_string()} to={b.y.to_string()} dur={dur} begin={begin} repeatCount="indefinite" />
                    </circle>
                </g>
            })
        })
        .collect()
}

fn render_nodes(layout: &NetworkLayout, camera: &Camera) -> Html {
    layout
        .nodes
        .iter()
        .enumerate()
        .filter_map(|(i, node)| {
            let p = camera.project(node.position, VIEWPORT)?;
            let color = if node.accent { ACCENT } else { NODE };
            Some(html! {
                <circle
                    class="network-node"
                    cx={p.x.to_string()}
                    cy={p.y.to_string()}
                    r={(node.radius * p.scale).to_string()}
                    fill={color}
                    style={format!("filter: drop-shadow(0 0 6px {}); animation-delay: -{}s;", color, i % 4)}
                />
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packet_phases_stay_within_one_trip() {
        let edge = NetworkEdge { from: 0, to: 1, packet_speed: 0.5 };
        assert_eq!(packet_phase_secs(&edge, 0, 4), 0.0);
        assert_eq!(packet_phase_secs(&edge, 2, 4), 1.0);
        assert!(packet_phase_secs(&edge, 3, 4) < edge.trip_secs());
        assert_eq!(packet_phase_secs(&edge, 0, 0), 0.0);
    }
}
