//! Decorative node graph behind the hero section.
//!
//! Layouts are a pure function of a seed so the same seed always draws the
//! same picture. Only the page picks a fresh seed per visit.

use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkParams {
    pub node_count: usize,
    /// Full width, height and depth of the box nodes are scattered in.
    pub extent: Vec3,
    pub connection_chance: f64,
    pub star_count: usize,
    pub packet_speed: (f32, f32),
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            node_count: 15,
            extent: Vec3::new(10.0, 6.0, 5.0),
            connection_chance: 0.2,
            star_count: 240,
            packet_speed: (0.5, 1.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkNode {
    pub position: Vec3,
    pub accent: bool,
    pub radius: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkEdge {
    pub from: usize,
    pub to: usize,
    /// Packet trips per second.
    pub packet_speed: f32,
}

/// Background star in normalised screen space, both axes in `[0, 1)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub position: Vec2,
    pub brightness: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkLayout {
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
    pub stars: Vec<Star>,
}

pub fn generate(seed: u64, params: &NetworkParams) -> NetworkLayout {
    let mut rng = StdRng::seed_from_u64(seed);
    let half = params.extent * 0.5;

    let nodes: Vec<NetworkNode> = (0..params.node_count)
        .map(|i| NetworkNode {
            position: Vec3::new(
                rng.gen_range(-half.x..=half.x),
                rng.gen_range(-half.y..=half.y),
                rng.gen_range(-half.z..=half.z),
            ),
            accent: i % 3 == 0,
            radius: if i == 0 { 0.3 } else { 0.1 },
        })
        .collect();

    let (min_speed, max_speed) = params.packet_speed;
    let mut edges = Vec::new();
    for from in 0..nodes.len() {
        for to in from + 1..nodes.len() {
            if rng.gen_bool(params.connection_chance) {
                edges.push(NetworkEdge {
                    from,
                    to,
                    packet_speed: rng.gen_range(min_speed..max_speed),
                });
            }
        }
    }

    let stars = (0..params.star_count)
        .map(|_| Star {
            position: Vec2::new(rng.gen::<f32>(), rng.gen::<f32>()),
            brightness: rng.gen_range(0.2..1.0),
        })
        .collect();

    NetworkLayout { nodes, edges, stars }
}

/// Fresh seed from the browser's entropy.
pub fn random_seed() -> u64 {
    seed_from_unit(js_sys::Math::random())
}

/// Spreads a uniform `[0, 1)` sample over the 53 bits an `f64` can carry.
fn seed_from_unit(sample: f64) -> u64 {
    (sample * 2f64.powi(53)) as u64
}

impl NetworkEdge {
    pub fn endpoints(&self, layout: &NetworkLayout) -> (Vec3, Vec3) {
        (layout.nodes[self.from].position, layout.nodes[self.to].position)
    }

    /// Packet position after `elapsed_secs`; it restarts at `from` every trip.
    pub fn packet_position(&self, layout: &NetworkLayout, elapsed_secs: f32) -> Vec3 {
        let (start, end) = self.endpoints(layout);
        let t = (elapsed_secs * self.packet_speed).rem_euclid(1.0);
        start.lerp(end, t)
    }

    /// Seconds for one trip from `from` to `to`.
    pub fn trip_secs(&self) -> f32 {
        1.0 / self.packet_speed
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    /// World units to pixels at this depth.
    pub scale: f32,
}

/// Pinhole camera looking down the negative z axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub fov_y_degrees: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 8.0),
            fov_y_degrees: 45.0,
        }
    }
}

impl Camera {
    /// Maps a world point to viewport pixels, y growing downwards.
    pub fn project(&self, point: Vec3, viewport: Vec2) -> Option<Projected> {
        let relative = point - self.position;
        let depth = -relative.z;
        if depth <= f32::EPSILON {
            return None;
        }
        let focal = (viewport.y * 0.5) / (self.fov_y_degrees.to_radians() * 0.5).tan();
        let scale = focal / depth;
        Some(Projected {
            x: viewport.x * 0.5 + relative.x * scale,
            y: viewport.y * 0.5 - relative.y * scale,
            scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn same_seed_same_layout() {
        let params = NetworkParams::default();
        assert_eq!(generate(42, &params), generate(42, &params));
    }

    #[test]
    fn different_seeds_move_nodes() {
        let params = NetworkParams::default();
        let a = generate(1, &params);
        let b = generate(2, &params);
        assert_ne!(a.nodes, b.nodes);
    }

    #[test]
    fn nodes_stay_inside_the_box() {
        let params = NetworkParams::default();
        for seed in 0..20 {
            let layout = generate(seed, &params);
            assert_eq!(layout.nodes.len(), 15);
            for node in &layout.nodes {
                assert!(node.position.x.abs() <= 5.0);
                assert!(node.position.y.abs() <= 3.0);
                assert!(node.position.z.abs() <= 2.5);
            }
        }
    }

    #[test]
    fn node_styling_follows_index() {
        let layout = generate(7, &NetworkParams::default());
        assert_eq!(layout.nodes[0].radius, 0.3);
        assert!(layout.nodes[1..].iter().all(|n| n.radius == 0.1));
        let accents: Vec<usize> = layout
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.accent)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(accents, vec![0, 3, 6, 9, 12]);
    }

    #[test]
    fn edges_pair_distinct_nodes_once() {
        for seed in 0..20 {
            let layout = generate(seed, &NetworkParams::default());
            let mut seen = std::collections::HashSet::new();
            for edge in &layout.edges {
                assert!(edge.from < edge.to);
                assert!(edge.to < layout.nodes.len());
                assert!(seen.insert((edge.from, edge.to)));
                assert!((0.5..1.0).contains(&edge.packet_speed));
            }
        }
    }

    #[test]
    fn connection_chance_bounds_edge_count() {
        let none = NetworkParams {
            connection_chance: 0.0,
            ..NetworkParams::default()
        };
        assert!(generate(3, &none).edges.is_empty());

        let all = NetworkParams {
            connection_chance: 1.0,
            ..NetworkParams::default()
        };
        assert_eq!(generate(3, &all).edges.len(), 15 * 14 / 2);
    }

    #[test]
    fn packet_travels_from_start_to_end_and_wraps() {
        let layout = NetworkLayout {
            nodes: vec![
                NetworkNode { position: Vec3::ZERO, accent: true, radius: 0.3 },
                NetworkNode { position: Vec3::new(4.0, 0.0, 0.0), accent: false, radius: 0.1 },
            ],
            edges: vec![NetworkEdge { from: 0, to: 1, packet_speed: 0.5 }],
            stars: Vec::new(),
        };
        let edge = &layout.edges[0];

        assert_eq!(edge.packet_position(&layout, 0.0), Vec3::ZERO);
        assert_eq!(edge.packet_position(&layout, 1.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(edge.packet_position(&layout, 2.5), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(edge.trip_secs(), 2.0);
    }

    #[test]
    fn seeds_use_more_than_32_bits() {
        assert_eq!(seed_from_unit(0.0), 0);
        assert!(seed_from_unit(0.75) > u64::from(u32::MAX));
        assert!(seed_from_unit(0.999_999) < 1 << 53);
    }

    #[test]
    fn camera_projects_origin_to_viewport_centre() {
        let camera = Camera::default();
        let viewport = Vec2::new(1600.0, 900.0);
        let centre = camera.project(Vec3::ZERO, viewport).unwrap();
        assert_eq!((centre.x, centre.y), (800.0, 450.0));

        let up_right = camera.project(Vec3::new(1.0, 1.0, 0.0), viewport).unwrap();
        assert!(up_right.x > 800.0);
        assert!(up_right.y < 450.0);
    }

    #[test]
    fn nearer_points_project_larger() {
        let camera = Camera::default();
        let viewport = Vec2::new(1600.0, 900.0);
        let far = camera.project(Vec3::new(0.0, 0.0, -2.0), viewport).unwrap();
        let near = camera.project(Vec3::new(0.0, 0.0, 2.0), viewport).unwrap();
        assert!(near.scale > far.scale);
    }

    #[test]
    fn points_behind_the_camera_are_culled() {
        let camera = Camera::default();
        let viewport = Vec2::new(1600.0, 900.0);
        assert_eq!(camera.project(Vec3::new(0.0, 0.0, 8.0), viewport), None);
        assert_eq!(camera.project(Vec3::new(0.0, 0.0, 12.0), viewport), None);
    }
}
