use glam::Vec2;
use puddle_engine::Rng;

use crate::config::PuddleConfig;
use crate::fill::{flood_fill, RecolorQueue};
use crate::level::{LevelData, MoleculeData};
use crate::molecule::{self, Molecule, PaletteColor, MOLECULE_RADIUS};
use crate::physics::PhysicsSolver;

/// Result of evaluating the container after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerStatus {
    /// A recolor animation is still running; win/loss not evaluated.
    Filling,
    /// Every molecule has the same color.
    Solved,
    /// Colors are still mixed and no turns remain.
    OutOfTurns,
    /// Nothing decided yet.
    InProgress,
}

/// The circular vessel holding one level's molecules.
#[derive(Debug, Clone)]
pub struct Container {
    molecules: Vec<Molecule>,
    radius: f32,
    turns_remaining: u32,
    recolor: RecolorQueue,
    solver: PhysicsSolver,
}

impl Container {
    pub fn new(radius: f32, turns: u32, config: &PuddleConfig) -> Self {
        Self {
            molecules: Vec::new(),
            radius,
            turns_remaining: turns,
            recolor: RecolorQueue::new(config.recolor_batch, config.recolor_delay),
            solver: PhysicsSolver::new(config.clone()),
        }
    }

    /// An empty container with the configured default radius and turns.
    pub fn empty(config: &PuddleConfig) -> Self {
        Self::new(config.default_container_radius, config.default_turns, config)
    }

    pub fn from_level(level: &LevelData, config: &PuddleConfig) -> Self {
        let mut container = Self::new(level.radius, level.turns, config);
        container.molecules = level
            .molecules
            .iter()
            .map(|m| Molecule::new(Vec2::new(m.x, m.y), m.color))
            .collect();
        container
    }

    /// Snapshot for saving. Velocities are not persisted.
    pub fn to_level(&self) -> LevelData {
        LevelData {
            radius: self.radius,
            turns: self.turns_remaining,
            molecules: self
                .molecules
                .iter()
                .map(|m| MoleculeData { x: m.pos.x, y: m.pos.y, color: m.color })
                .collect(),
        }
    }

    pub fn molecules(&self) -> &[Molecule] {
        &self.molecules
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(MOLECULE_RADIUS);
    }

    pub fn turns_remaining(&self) -> u32 {
        self.turns_remaining
    }

    /// Add a turn (editor).
    pub fn increase_turns(&mut self) {
        self.turns_remaining = self.turns_remaining.saturating_add(1).max(1);
    }

    /// Remove a turn (editor). Never drops below one.
    pub fn decrease_turns(&mut self) {
        self.turns_remaining = self.turns_remaining.saturating_sub(1).max(1);
    }

    pub fn is_filling(&self) -> bool {
        self.recolor.is_filling()
    }

    pub fn is_single_color(&self) -> bool {
        molecule::is_single_color(&self.molecules)
    }

    /// Index of the molecule under `point`.
    pub fn molecule_at(&self, point: Vec2) -> Option<usize> {
        molecule::pick(&self.molecules, point)
    }

    pub fn insert_molecule(&mut self, pos: Vec2, color: PaletteColor) -> usize {
        self.molecules.push(Molecule::new(pos, color));
        self.molecules.len() - 1
    }

    /// Insert a molecule at a random spot inside a container of `spawn_radius`.
    pub fn insert_random(&mut self, color: PaletteColor, spawn_radius: f32, rng: &mut Rng) -> usize {
        let max_distance = (spawn_radius - MOLECULE_RADIUS).max(0.1);
        let distance = rng.range_f32(0.1, max_distance);
        let angle = rng.range_f32(0.0, std::f32::consts::TAU);
        let pos = Vec2::new(distance * angle.sin(), distance * angle.cos());
        self.insert_molecule(pos, color)
    }

    /// Immediately recolor one molecule (editor). Returns false when nothing is there.
    pub fn recolor(&mut self, index: usize, color: PaletteColor) -> bool {
        match self.molecules.get_mut(index) {
            Some(m) => {
                m.color = color;
                true
            }
            None => false,
        }
    }

    /// Start a fill from `start` with `color`.
    ///
    /// Returns the number of molecules queued for recoloring. A fill that changes
    /// anything costs one turn right away, before the animation runs. With no
    /// turns left nothing is filled.
    pub fn fill(&mut self, start: usize, color: PaletteColor) -> usize {
        if self.turns_remaining == 0 {
            return 0;
        }
        let adjacency = self.solver.config().adjacency_distance;
        let filled = flood_fill(&self.molecules, start, color, adjacency);
        if filled.is_empty() {
            return 0;
        }
        self.turns_remaining -= 1;
        log::debug!(
            "fill from molecule {} to {}: {} molecules, {} turns left",
            start,
            color.name(),
            filled.len(),
            self.turns_remaining
        );
        let count = filled.len();
        self.recolor.begin(filled, color);
        count
    }

    /// Step the molecule physics.
    pub fn simulate(&mut self, dt: f32, rng: &mut Rng) {
        self.solver.step(&mut self.molecules, self.radius, dt, rng);
    }

    /// Advance the pending recolor animation if one is running.
    pub fn advance_recolor(&mut self, dt: f32) -> usize {
        self.recolor.advance(&mut self.molecules, dt)
    }

    /// One tick of play: advance the fill animation, or decide win/loss when idle.
    pub fn evaluate(&mut self, dt: f32) -> ContainerStatus {
        if self.is_filling() {
            self.advance_recolor(dt);
            return ContainerStatus::Filling;
        }
        if self.is_single_color() {
            ContainerStatus::Solved
        } else if self.turns_remaining == 0 {
            ContainerStatus::OutOfTurns
        } else {
            ContainerStatus::InProgress
        }
    }
}
