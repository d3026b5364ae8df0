/*
 * Scene Module
 *
 * This module builds the static scene: the scale particles on both pipe
 * walls, the bonds between neighbouring particles of the same layer, and
 * the descaling agents. Topology is fixed; sub-positions are jittered with
 * the random generator passed in by the caller.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::agent::DescalingAgent;
use crate::bond::Bond;
use crate::params::AnimationParams;
use crate::scale::{Layer, ScaleParticle, Wall};
use crate::spatial_grid::SpatialGrid;
use crate::{WORLD_BOTTOM, WORLD_LEFT, WORLD_RIGHT, WORLD_TOP};

// First and last grid anchor along the pipe
pub const ANCHOR_START_X: f32 = 1.0;
pub const ANCHOR_END_X: f32 = 9.0;

pub struct Scene {
    pub particles: Vec<ScaleParticle>,
    pub bonds: Vec<Bond>,
    pub agents: Vec<DescalingAgent>,
}

impl Scene {
    pub fn build<R: Rng>(params: &AnimationParams, rng: &mut R) -> Self {
        let particles = create_scale_particles(params, rng);
        let mut scene = Self {
            particles,
            bonds: Vec::new(),
            agents: create_descaling_agents(params, rng),
        };
        scene.connect_bonds(params);

        log::info!(
            "Built scene with {} scale particles, {} bonds and {} agents",
            scene.particles.len(),
            scene.bonds.len(),
            scene.agents.len()
        );

        scene
    }

    // Create bonds between close particles of the same layer
    fn connect_bonds(&mut self, params: &AnimationParams) {
        let pairs = if params.enable_spatial_grid {
            bond_pairs_with_spatial_grid(&self.particles, params.bond_threshold)
        } else {
            bond_pairs_pairwise(&self.particles, params.bond_threshold)
        };

        for (i, j, distance) in pairs {
            let bond_index = self.bonds.len();
            self.bonds.push(Bond::new(i, j, distance));
            self.particles[i].bonds.push(bond_index);
            self.particles[j].bonds.push(bond_index);
        }
    }

    pub fn attached_count(&self, layer: Layer) -> usize {
        self.particles
            .iter()
            .filter(|p| p.attached && p.layer() == layer)
            .count()
    }

    pub fn broken_bond_count(&self) -> usize {
        self.bonds.iter().filter(|b| b.breaking).count()
    }
}

/// `count` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f32, end: f32, count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f32;
            (0..count).map(|i| start + step * i as f32).collect()
        }
    }
}

fn create_scale_particles<R: Rng>(params: &AnimationParams, rng: &mut R) -> Vec<ScaleParticle> {
    let anchors_x = linspace(ANCHOR_START_X, ANCHOR_END_X, params.grid_points);
    let capacity = Layer::ALL.len() * anchors_x.len() * params.jitter_per_point * Wall::BOTH.len();
    let mut particles = Vec::with_capacity(capacity);

    for layer in Layer::ALL {
        for &x_base in &anchors_x {
            for _ in 0..params.jitter_per_point {
                // Both walls share the x jitter of this instance
                let x = x_base + rng.gen_range(-params.anchor_jitter..=params.anchor_jitter);

                for wall in Wall::BOTH {
                    let anchor = pt2(x_base, wall.layer_y(layer, params.layer_spacing));
                    let y = anchor.y + rng.gen_range(-params.wall_jitter..=params.wall_jitter);
                    particles.push(ScaleParticle::new(pt2(x, y), anchor, layer, wall));
                }
            }
        }
    }

    particles
}

fn create_descaling_agents<R: Rng>(params: &AnimationParams, rng: &mut R) -> Vec<DescalingAgent> {
    let (y_min, y_max) = params.agent_y_range;
    (0..params.agent_count)
        .map(|_| DescalingAgent::new(rng.gen_range(0.0..1.0), rng.gen_range(y_min..=y_max)))
        .collect()
}

/// Quadratic scan over every same-layer pair, in index order.
pub fn bond_pairs_pairwise(particles: &[ScaleParticle], threshold: f32) -> Vec<(usize, usize, f32)> {
    let mut pairs = Vec::new();

    for (i, first) in particles.iter().enumerate() {
        for (j, second) in particles.iter().enumerate().skip(i + 1) {
            if first.layer() != second.layer() {
                continue;
            }

            let distance = first.position.distance(second.position);
            if distance < threshold {
                pairs.push((i, j, distance));
            }
        }
    }

    pairs
}

/// Same result as `bond_pairs_pairwise`, using grid bucketing for the lookup.
pub fn bond_pairs_with_spatial_grid(particles: &[ScaleParticle], threshold: f32) -> Vec<(usize, usize, f32)> {
    let bounds = Rect::from_corners(pt2(WORLD_LEFT, WORLD_BOTTOM), pt2(WORLD_RIGHT, WORLD_TOP));
    let mut grid = SpatialGrid::new(threshold, bounds);

    for (i, particle) in particles.iter().enumerate() {
        grid.insert(i, particle.position);
    }

    let mut pairs = Vec::new();
    for (i, first) in particles.iter().enumerate() {
        for j in grid.get_nearby_indices(first.position) {
            if j <= i {
                continue;
            }

            let second = &particles[j];
            if first.layer() != second.layer() {
                continue;
            }

            let distance = first.position.distance(second.position);
            if distance < threshold {
                pairs.push((i, j, distance));
            }
        }
    }

    pairs.sort_unstable_by_key(|&(i, j, _)| (i, j));
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(1.0, 9.0, 30);
        assert_eq!(xs.len(), 30);
        assert_eq!(xs[0], 1.0);
        assert!((xs[29] - 9.0).abs() < 1e-5);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    }

    #[test]
    fn test_scene_counts() {
        let params = AnimationParams::default();
        let mut rng = StdRng::seed_from_u64(42);
        let scene = Scene::build(&params, &mut rng);

        assert_eq!(scene.particles.len(), 3 * 30 * 4 * 2);
        assert_eq!(scene.agents.len(), 2);
        assert!(!scene.bonds.is_empty());
        for layer in Layer::ALL {
            assert_eq!(scene.attached_count(layer), 240);
        }
        assert_eq!(scene.broken_bond_count(), 0);
    }

    #[test]
    fn test_particles_stay_within_jitter_of_anchor() {
        let params = AnimationParams::default();
        let mut rng = StdRng::seed_from_u64(3);
        let scene = Scene::build(&params, &mut rng);

        for particle in &scene.particles {
            assert!((particle.position.x - particle.anchor.x).abs() <= params.anchor_jitter + 1e-5);
            assert!((particle.position.y - particle.anchor.y).abs() <= params.wall_jitter + 1e-5);
            assert_eq!(particle.position, particle.original_position);
            assert!(particle.attached);
            assert!(particle.carrying_agent.is_none());
        }
    }

    #[test]
    fn test_bonds_join_close_same_layer_particles() {
        let params = AnimationParams::default();
        let mut rng = StdRng::seed_from_u64(11);
        let scene = Scene::build(&params, &mut rng);

        for (index, bond) in scene.bonds.iter().enumerate() {
            let (a, b) = bond.endpoints();
            assert!(a < b);
            let (pa, pb) = (&scene.particles[a], &scene.particles[b]);
            assert_eq!(pa.layer(), pb.layer());
            assert!(pa.position.distance(pb.position) < params.bond_threshold);
            assert!(pa.bonds.contains(&index));
            assert!(pb.bonds.contains(&index));
        }
    }

    #[test]
    fn test_spatial_grid_scan_matches_pairwise() {
        let params = AnimationParams::default();
        let mut rng = StdRng::seed_from_u64(99);
        let particles = create_scale_particles(&params, &mut rng);

        let pairwise = bond_pairs_pairwise(&particles, params.bond_threshold);
        let gridded = bond_pairs_with_spatial_grid(&particles, params.bond_threshold);
        assert_eq!(pairwise, gridded);
    }

    #[test]
    fn test_same_seed_same_scene() {
        let params = AnimationParams::default();
        let first = Scene::build(&params, &mut StdRng::seed_from_u64(5));
        let second = Scene::build(&params, &mut StdRng::seed_from_u64(5));

        assert_eq!(first.bonds.len(), second.bonds.len());
        for (a, b) in first.particles.iter().zip(&second.particles) {
            assert_eq!(a.position, b.position);
        }
        for (a, b) in first.agents.iter().zip(&second.agents) {
            assert_eq!(a.position, b.position);
        }
    }
}
