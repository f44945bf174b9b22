//! Decorative feed-forward network figure with pulsing activity.
//!
//! The graph itself is generated once per mount. Every two seconds the
//! node activity is redrawn; edges keep the activity they were built
//! with, which leaves some lit paths ending in dark nodes. That
//! mismatch is part of the figure's look.

use gloo_timers::callback::Interval;
use rand::Rng;
use yew::prelude::*;

use crate::theme;

/// Milliseconds between activity redraws.
const PULSE_MS: u32 = 2_000;

/// Input, two hidden, one output.
pub const LAYER_SIZES: [usize; 4] = [13, 8, 5, 1];

#[derive(Clone, Debug, PartialEq)]
pub struct NetNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub layer: usize,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetEdge {
    pub from: String,
    pub to: String,
    pub strength: f64,
    pub active: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Network {
    pub nodes: Vec<NetNode>,
    pub edges: Vec<NetEdge>,
}

/// Lays out the whole graph. Nodes draw their initial activity from
/// `rng`; every pair of nodes in adjacent layers gets one edge whose
/// activity is frozen from its endpoints at build time.
pub fn build_network(rng: &mut impl Rng) -> Network {
    let mut nodes = Vec::new();
    for i in 0..LAYER_SIZES[0] {
        nodes.push(NetNode {
            id: format!("input-{i}"),
            x: 50.0,
            y: 50.0 + i as f64 * 20.0,
            layer: 0,
            active: rng.gen::<f64>() > 0.3,
        });
    }
    for layer in 1..=2 {
        for i in 0..LAYER_SIZES[layer] {
            nodes.push(NetNode {
                id: format!("hidden-{layer}-{i}"),
                x: 50.0 + layer as f64 * 150.0,
                y: 100.0 + i as f64 * 30.0,
                layer,
                active: rng.gen::<f64>() > 0.4,
            });
        }
    }
    nodes.push(NetNode {
        id: "output-0".to_string(),
        x: 350.0,
        y: 180.0,
        layer: 3,
        active: true,
    });

    let mut edges = Vec::new();
    for layer in 0..LAYER_SIZES.len() - 1 {
        let froms: Vec<(String, bool)> = nodes
            .iter()
            .filter(|node| node.layer == layer)
            .map(|node| (node.id.clone(), node.active))
            .collect();
        let tos: Vec<(String, bool)> = nodes
            .iter()
            .filter(|node| node.layer == layer + 1)
            .map(|node| (node.id.clone(), node.active))
            .collect();
        for (from, from_active) in &froms {
            for (to, to_active) in &tos {
                edges.push(NetEdge {
                    from: from.clone(),
                    to: to.clone(),
                    strength: rng.gen::<f64>(),
                    active: *from_active && *to_active,
                });
            }
        }
    }

    Network { nodes, edges }
}

/// Fresh activity for every node; geometry and edges stay put.
pub fn resample_activity(network: &Network, rng: &mut impl Rng) -> Network {
    Network {
        nodes: network
            .nodes
            .iter()
            .map(|node| NetNode {
                active: rng.gen::<f64>() > 0.3,
                ..node.clone()
            })
            .collect(),
        edges: network.edges.clone(),
    }
}

#[function_component(NeuralNetwork)]
pub fn neural_network() -> Html {
    let network = use_state(|| build_network(&mut rand::thread_rng()));

    // Resampling ignores previous activity, so the interval works from
    // the mount-time network and only ever rewrites node state.
    {
        let network = network.clone();
        use_effect_with_deps(
            move |_| {
                let base = (*network).clone();
                let pulse = Interval::new(PULSE_MS, move || {
                    network.set(resample_activity(&base, &mut rand::thread_rng()));
                });
                move || drop(pulse)
            },
            (),
        );
    }

    html! {
        <div class="neural-network">
            <style>{r#"
                .neural-network {
                    position: relative;
                    overflow: hidden;
                }
                .neural-svg {
                    width: 100%;
                    height: 100%;
                }
                .neural-edge, .neural-node {
                    transition: all 0.5s ease;
                }
                .neural-node.pulsing {
                    animation: neural-pulse 2s ease-in-out infinite;
                }
                @keyframes neural-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.55; }
                }
            "#}</style>
            <svg viewBox="0 0 400 320" class="neural-svg">
                { for network.edges.iter().filter_map(|edge| {
                    let from = network.nodes.iter().find(|node| node.id == edge.from)?;
                    let to = network.nodes.iter().find(|node| node.id == edge.to)?;
                    Some(html! {
                        <line
                            x1={from.x.to_string()} y1={from.y.to_string()}
                            x2={to.x.to_string()} y2={to.y.to_string()}
                            stroke={if edge.active { theme::PRIMARY } else { theme::MUTED }}
                            stroke-width={format!("{}", edge.strength * 2.0)}
                            opacity={if edge.active { "0.8" } else { "0.2" }}
                            class="neural-edge"
                        />
                    })
                }) }
                { for network.nodes.iter().map(|node| html! {
                    <circle
                        key={node.id.clone()}
                        cx={node.x.to_string()} cy={node.y.to_string()}
                        r={if node.layer == 3 { "8" } else { "4" }}
                        fill={if node.active { theme::PRIMARY } else { theme::MUTED }}
                        class={classes!("neural-node", node.active.then(|| "pulsing"))}
                    />
                }) }
                <text x="50" y="30" fill={theme::MUTED} font-size="12" text-anchor="middle">
                    { "Input Features" }
                </text>
                <text x="200" y="30" fill={theme::MUTED} font-size="12" text-anchor="middle">
                    { "Hidden Layers" }
                </text>
                <text x="350" y="30" fill={theme::MUTED} font-size="12" text-anchor="middle">
                    { "Price Output" }
                </text>
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_network_connects_every_adjacent_pair() {
        let mut rng = SmallRng::seed_from_u64(1);
        let network = build_network(&mut rng);
        assert_eq!(network.nodes.len(), 27);
        // 13*8 + 8*5 + 5*1
        assert_eq!(network.edges.len(), 149);
    }

    #[test]
    fn test_edges_only_bridge_neighbouring_layers() {
        let mut rng = SmallRng::seed_from_u64(2);
        let network = build_network(&mut rng);
        for edge in &network.edges {
            let from = network.nodes.iter().find(|n| n.id == edge.from).unwrap();
            let to = network.nodes.iter().find(|n| n.id == edge.to).unwrap();
            assert_eq!(to.layer, from.layer + 1, "{} -> {}", edge.from, edge.to);
        }
    }

    #[test]
    fn test_node_layout_matches_the_figure() {
        let mut rng = SmallRng::seed_from_u64(3);
        let network = build_network(&mut rng);
        let node = |id: &str| network.nodes.iter().find(|n| n.id == id).unwrap();
        assert_eq!((node("input-0").x, node("input-0").y), (50.0, 50.0));
        assert_eq!((node("input-12").x, node("input-12").y), (50.0, 290.0));
        assert_eq!((node("hidden-1-0").x, node("hidden-1-0").y), (200.0, 100.0));
        assert_eq!((node("hidden-2-4").x, node("hidden-2-4").y), (350.0, 220.0));
        assert_eq!((node("output-0").x, node("output-0").y), (350.0, 180.0));
        assert!(node("output-0").active);
    }

    #[test]
    fn test_edge_activity_mirrors_its_endpoints_at_build_time() {
        let mut rng = SmallRng::seed_from_u64(4);
        let network = build_network(&mut rng);
        for edge in &network.edges {
            let from = network.nodes.iter().find(|n| n.id == edge.from).unwrap();
            let to = network.nodes.iter().find(|n| n.id == edge.to).unwrap();
            assert_eq!(edge.active, from.active && to.active);
            assert!((0.0..1.0).contains(&edge.strength));
        }
    }

    #[test]
    fn test_resampling_touches_nodes_but_never_edges() {
        let mut rng = SmallRng::seed_from_u64(5);
        let network = build_network(&mut rng);
        let pulsed = resample_activity(&network, &mut rng);

        assert_eq!(pulsed.edges, network.edges);
        assert_eq!(pulsed.nodes.len(), network.nodes.len());
        for (before, after) in network.nodes.iter().zip(&pulsed.nodes) {
            assert_eq!(before.id, after.id);
            assert_eq!(
                (before.x, before.y, before.layer),
                (after.x, after.y, after.layer)
            );
        }
        // 27 fresh draws reproducing the exact same activity pattern
        // would be a broken generator.
        let flipped = network
            .nodes
            .iter()
            .zip(&pulsed.nodes)
            .any(|(before, after)| before.active != after.active);
        assert!(flipped);
    }
}
