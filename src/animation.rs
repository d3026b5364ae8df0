/*
 * Animation Module
 *
 * This module owns the animation state and advances it one frame at a time.
 * Each frame:
 * 1. Picks the scale layers targeted by the current cycle
 * 2. Moves the descaling agents and pulses their glow
 * 3. Detaches targeted scale within reach of an agent
 * 4. Carries detached scale along with its agent
 * 5. Breaks the bonds of detached scale
 *
 * A pass is `cycles` blocks of `frames_per_cycle` frames. The first three
 * cycles strip the inner, middle and outer layer in turn; the last sweeps
 * whatever is left.
 */

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::agent::GLOW_RADIUS;
use crate::params::AnimationParams;
use crate::scale::{Layer, ScaleParticle};
use crate::scene::Scene;

// Cycle from which every layer is targeted
pub const SWEEP_CYCLE: u32 = 3;

/// A visual element that changed during a frame and needs redrawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Agent(usize),
    Particle(usize),
    Bond(usize),
}

pub fn cycle_for_frame(frame: u32, frames_per_cycle: u32) -> u32 {
    (frame / frames_per_cycle).min(SWEEP_CYCLE)
}

pub fn target_layers(cycle: u32) -> &'static [Layer] {
    match cycle {
        0 => &[Layer::Inner],
        1 => &[Layer::Mid],
        2 => &[Layer::Outer],
        _ => &Layer::ALL,
    }
}

pub struct Animation {
    scene: Scene,
    params: AnimationParams,
    rng: StdRng,
    frame: u32,
    current_cycle: Option<u32>,
}

impl Animation {
    pub fn new(params: AnimationParams) -> Self {
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let scene = Scene::build(&params, &mut rng);

        Self {
            scene,
            params,
            rng,
            frame: 0,
            current_cycle: None,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn params(&self) -> &AnimationParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut AnimationParams {
        &mut self.params
    }

    /// Index of the next frame `tick` will run.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn cycle(&self) -> u32 {
        cycle_for_frame(self.frame, self.params.frames_per_cycle)
    }

    /// Run the next frame, looping at the end of a pass.
    pub fn tick(&mut self) -> Vec<Element> {
        if self.frame >= self.params.total_frames() {
            if self.params.restart_on_loop {
                self.restart();
            } else {
                self.frame = 0;
            }
        }

        let changed = self.update_frame(self.frame);
        self.frame += 1;
        changed
    }

    /// Advance the scene to `frame` and return the elements that changed.
    pub fn update_frame(&mut self, frame: u32) -> Vec<Element> {
        let Animation {
            scene,
            params,
            rng,
            current_cycle,
            ..
        } = self;

        let cycle = cycle_for_frame(frame, params.frames_per_cycle);
        let targets = target_layers(cycle);
        if *current_cycle != Some(cycle) {
            log::debug!("Frame {}: cycle {} targets {:?}", frame, cycle, targets);
            *current_cycle = Some(cycle);
        }

        let mut changed = Vec::new();
        let mut moved = vec![false; scene.particles.len()];

        for (agent_index, agent) in scene.agents.iter_mut().enumerate() {
            if frame % params.frames_per_cycle == 0 {
                agent.move_to(agent_start(params, rng));
            } else {
                agent.advance(params.agent_step);
                if agent.position.x > params.agent_exit_x {
                    agent.move_to(agent_start(params, rng));
                }
            }
            agent.pulse(frame, params.glow_pulse, params.glow_pulse_rate);
            changed.push(Element::Agent(agent_index));

            // Dissolve targeted scale within reach
            for (index, particle) in scene.particles.iter_mut().enumerate() {
                if !particle.attached || !targets.contains(&particle.layer()) {
                    continue;
                }

                if particle.position.distance(agent.position) < params.detach_radius {
                    particle.detach(agent_index);
                    let radius = params.carry_radius_for(particle.layer().index());
                    particle.orbit(rng, agent.position, radius);
                    moved[index] = true;
                }
            }
        }

        // Carry detached scale along with its agent
        for (index, particle) in scene.particles.iter_mut().enumerate() {
            if let Some(agent_index) = particle.carrying_agent {
                let center = scene.agents[agent_index].position;
                let radius = params.carry_radius_for(particle.layer().index());
                particle.orbit(rng, center, radius);
                moved[index] = true;
            }
        }

        changed.extend(
            moved
                .iter()
                .enumerate()
                .filter(|(_, m)| **m)
                .map(|(index, _)| Element::Particle(index)),
        );

        for (bond_index, bond) in scene.bonds.iter_mut().enumerate() {
            let (a, b) = bond.endpoints();
            let before = (bond.draw_alpha(params.flash_range), bond.width, bond.color);

            if !bond.breaking && (!scene.particles[a].attached || !scene.particles[b].attached) {
                bond.breaking = true;
            }
            bond.advance_break(params.break_step, params.flash_range);

            let after = (bond.draw_alpha(params.flash_range), bond.width, bond.color);
            if moved[a] || moved[b] || before != after {
                changed.push(Element::Bond(bond_index));
            }
        }

        changed
    }

    /// Put every agent, particle and bond back to its starting state and
    /// rewind to frame zero.
    pub fn restart(&mut self) {
        let Animation { scene, params, rng, .. } = self;

        for agent in &mut scene.agents {
            let (y_min, y_max) = params.agent_y_range;
            let x = rng.gen_range(params.agent_start_x.min(0.0)..=0.0);
            let position = pt2(x, rng.gen_range(y_min..=y_max));
            agent.move_to(position);
            agent.glow_radius = GLOW_RADIUS;
        }

        for particle in &mut scene.particles {
            let position = ScaleParticle::jitter(rng, particle.anchor, params.anchor_jitter, params.wall_jitter);
            particle.reattach(position);
        }

        for bond in &mut scene.bonds {
            bond.reset();
        }

        self.frame = 0;
        self.current_cycle = None;
        log::info!("Animation restarted");
    }
}

fn agent_start(params: &AnimationParams, rng: &mut StdRng) -> Point2 {
    let (y_min, y_max) = params.agent_y_range;
    pt2(params.agent_start_x, rng.gen_range(y_min..=y_max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bond::BOND_ALPHA;

    fn seeded(seed: u64) -> Animation {
        Animation::new(AnimationParams {
            seed: Some(seed),
            ..AnimationParams::default()
        })
    }

    #[test]
    fn test_cycle_schedule() {
        assert_eq!(cycle_for_frame(0, 150), 0);
        assert_eq!(cycle_for_frame(149, 150), 0);
        assert_eq!(cycle_for_frame(150, 150), 1);
        assert_eq!(cycle_for_frame(599, 150), 3);
        assert_eq!(cycle_for_frame(900, 150), 3);

        assert_eq!(target_layers(0), &[Layer::Inner]);
        assert_eq!(target_layers(1), &[Layer::Mid]);
        assert_eq!(target_layers(2), &[Layer::Outer]);
        assert_eq!(target_layers(3).len(), 3);
    }

    #[test]
    fn test_agents_start_each_cycle_at_left_edge() {
        let mut animation = seeded(1);
        animation.update_frame(0);
        for agent in &animation.scene().agents {
            assert_eq!(agent.position.x, -2.0);
        }

        animation.update_frame(1);
        for agent in &animation.scene().agents {
            assert!((agent.position.x + 1.92).abs() < 1e-5);
        }
    }

    #[test]
    fn test_agent_wraps_past_exit() {
        let mut animation = seeded(2);
        animation.scene.agents[0].move_to(pt2(9.95, 2.0));
        animation.update_frame(10);
        assert_eq!(animation.scene().agents[0].position.x, -2.0);
    }

    #[test]
    fn test_detached_particles_orbit_their_agent() {
        let mut animation = seeded(4);
        for _ in 0..100 {
            animation.tick();
        }

        let scene = animation.scene();
        let mut detached = 0;
        for particle in scene.particles.iter().filter(|p| !p.attached) {
            let agent = particle.carrying_agent.expect("detached particle without agent");
            let radius = animation.params().carry_radius_for(particle.layer().index());
            let distance = particle.position.distance(scene.agents[agent].position);
            assert!((distance - radius).abs() < 1e-4);
            detached += 1;
        }
        assert!(detached > 0);
    }

    #[test]
    fn test_detachment_breaks_bonds() {
        let mut animation = seeded(8);
        for _ in 0..100 {
            animation.tick();
        }

        let scene = animation.scene();
        for bond in &scene.bonds {
            let (a, b) = bond.endpoints();
            let loose = !scene.particles[a].attached || !scene.particles[b].attached;
            assert_eq!(bond.breaking, loose);
            assert!(bond.alpha >= 0.0 && bond.alpha <= BOND_ALPHA);
        }
        assert!(scene.broken_bond_count() > 0);
    }

    #[test]
    fn test_changed_elements_cover_agents_and_moved_scale() {
        let mut animation = seeded(6);
        let changed = animation.tick();
        assert!(changed.contains(&Element::Agent(0)));
        assert!(changed.contains(&Element::Agent(1)));
        // Agents start off-pipe, so nothing else moves on the first frame
        assert_eq!(changed.len(), 2);

        for _ in 0..100 {
            animation.tick();
        }
        let changed = animation.tick();
        for (index, particle) in animation.scene().particles.iter().enumerate() {
            if !particle.attached {
                assert!(changed.contains(&Element::Particle(index)));
            }
        }
    }

    #[test]
    fn test_restart_rewinds_frame_counter() {
        let mut animation = seeded(9);
        for _ in 0..200 {
            animation.tick();
        }
        assert_eq!(animation.frame(), 200);
        assert_eq!(animation.cycle(), 1);

        animation.restart();
        assert_eq!(animation.frame(), 0);
        assert_eq!(animation.cycle(), 0);
        for agent in &animation.scene().agents {
            assert!(agent.position.x >= -2.0 && agent.position.x <= 0.0);
        }
    }

    #[test]
    fn test_degenerate_ranges_do_not_panic() {
        let mut animation = Animation::new(AnimationParams {
            seed: Some(13),
            anchor_jitter: 0.0,
            wall_jitter: 0.0,
            agent_start_x: 0.5,
            agent_y_range: (2.0, 2.0),
            ..AnimationParams::default()
        });
        for _ in 0..10 {
            animation.tick();
        }
        animation.restart();

        for particle in &animation.scene().particles {
            assert_eq!(particle.position, particle.anchor);
        }
        for agent in &animation.scene().agents {
            assert_eq!(agent.position, pt2(0.0, 2.0));
        }
    }

    #[test]
    fn test_restart_on_loop_starts_a_fresh_pass() {
        let mut animation = Animation::new(AnimationParams {
            seed: Some(12),
            restart_on_loop: true,
            ..AnimationParams::default()
        });
        for _ in 0..600 {
            animation.tick();
        }
        assert!(animation.scene().particles.iter().any(|p| !p.attached));

        animation.tick();
        assert_eq!(animation.frame(), 1);
        assert!(animation.scene().particles.iter().all(|p| p.attached));
        assert_eq!(animation.scene().broken_bond_count(), 0);
    }
}
