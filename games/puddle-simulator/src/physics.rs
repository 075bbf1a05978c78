//! Soft repulsion between molecules inside a circular container.
//!
//! Each tick rebuilds the force on every molecule from scratch: repulsion over
//! every ordered pair with a cubic falloff (stronger between different colors), then a
//! spring pushing escaped molecules back inside. Velocity is integrated,
//! damped by viscosity, and finally applied to positions. The step order is
//! fixed; changing it changes how puddles settle.

use glam::Vec2;
use puddle_engine::Rng;

use crate::config::PuddleConfig;
use crate::molecule::{Molecule, MOLECULE_RADIUS};

/// Interaction between two molecules for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairForce {
    /// Same position; needs a random kick instead of a force.
    Coincident,
    /// Out of interaction range.
    None,
    /// Force applied to the second molecule; the first receives the negation.
    Push(Vec2),
}

/// Repulsion between `a` and `b`.
pub fn pair_force(a: &Molecule, b: &Molecule, config: &PuddleConfig) -> PairForce {
    let delta = b.pos - a.pos;
    let distance = delta.length();

    if distance == 0.0 {
        return PairForce::Coincident;
    }
    if distance >= config.interaction_range {
        return PairForce::None;
    }

    let direction = delta / distance;
    let falloff = 1.0 - distance / config.interaction_range;
    let mut modulus = falloff * falloff * falloff * config.repulsion_strength;
    if a.color != b.color {
        modulus *= config.mixed_color_multiplier;
    }
    PairForce::Push(direction * modulus)
}

/// Inward spring force for a molecule at `pos`. Zero while the molecule is inside.
pub fn boundary_force(pos: Vec2, container_radius: f32, config: &PuddleConfig) -> Vec2 {
    let distance = pos.length();
    let limit = container_radius - MOLECULE_RADIUS;
    if distance <= limit {
        return Vec2::ZERO;
    }
    let overshoot = distance - limit;
    -pos / distance * (overshoot * config.boundary_stiffness)
}

/// Physics stepper that owns the per-tick force buffer.
#[derive(Debug, Clone)]
pub struct PhysicsSolver {
    config: PuddleConfig,
    /// Scratch force per molecule, indexed like the molecule slice.
    forces: Vec<Vec2>,
}

impl PhysicsSolver {
    pub fn new(config: PuddleConfig) -> Self {
        Self { config, forces: Vec::new() }
    }

    pub fn config(&self) -> &PuddleConfig {
        &self.config
    }

    /// Forces accumulated during the last step.
    pub fn forces(&self) -> &[Vec2] {
        &self.forces
    }

    /// Advance all molecules by `dt`.
    pub fn step(&mut self, molecules: &mut [Molecule], container_radius: f32, dt: f32, rng: &mut Rng) {
        let count = molecules.len();

        // 1. Reset
        self.forces.clear();
        self.forces.resize(count, Vec2::ZERO);

        // 2. Pairwise repulsion. Both orderings of a pair are visited, so each
        // interaction is applied twice per tick.
        for i in 0..count {
            for j in 0..count {
                if i == j {
                    continue;
                }
                match pair_force(&molecules[i], &molecules[j], &self.config) {
                    PairForce::Coincident => {
                        let kick = self.config.coincident_kick;
                        let velocity = Vec2::new(rng.range_f32(-kick, kick), rng.range_f32(-kick, kick));
                        molecules[i].velocity = velocity;
                        molecules[j].velocity = -velocity;
                    }
                    PairForce::None => {}
                    PairForce::Push(force) => {
                        self.forces[i] -= force;
                        self.forces[j] += force;
                    }
                }
            }
        }

        // 3. Container wall
        for (molecule, force) in molecules.iter().zip(self.forces.iter_mut()) {
            *force += boundary_force(molecule.pos, container_radius, &self.config);
        }

        // 4. Velocity
        for (molecule, force) in molecules.iter_mut().zip(self.forces.iter()) {
            molecule.velocity += *force * dt;
        }

        // 5. Viscosity
        let damping = dt * self.config.viscosity;
        for molecule in molecules.iter_mut() {
            molecule.velocity = molecule.velocity.lerp(Vec2::ZERO, damping);
        }

        // 6. Position
        for molecule in molecules.iter_mut() {
            molecule.pos += molecule.velocity * dt;
        }
    }
}

impl Default for PhysicsSolver {
    fn default() -> Self {
        Self::new(PuddleConfig::default())
    }
}

/// One simulation tick with default constants.
pub fn simulate(molecules: &mut [Molecule], container_radius: f32, dt: f32, rng: &mut Rng) {
    PhysicsSolver::default().step(molecules, container_radius, dt, rng);
}
