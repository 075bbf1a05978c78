use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::PuddleError;

/// Radius of a single molecule in world units.
pub const MOLECULE_RADIUS: f32 = 0.5;

/// Number of colors in the palette.
pub const PALETTE_SIZE: u8 = 7;

/// Index into the fixed 7-color palette (0 = red … 6 = violet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PaletteColor(u8);

impl PaletteColor {
    pub const RED: PaletteColor = PaletteColor(0);
    pub const ORANGE: PaletteColor = PaletteColor(1);
    pub const YELLOW: PaletteColor = PaletteColor(2);
    pub const GREEN: PaletteColor = PaletteColor(3);
    pub const BLUE: PaletteColor = PaletteColor(4);
    pub const INDIGO: PaletteColor = PaletteColor(5);
    pub const VIOLET: PaletteColor = PaletteColor(6);

    pub const ALL: [PaletteColor; PALETTE_SIZE as usize] = [
        Self::RED,
        Self::ORANGE,
        Self::YELLOW,
        Self::GREEN,
        Self::BLUE,
        Self::INDIGO,
        Self::VIOLET,
    ];

    /// Returns `None` for indices outside the palette.
    pub fn new(index: u8) -> Option<Self> {
        (index < PALETTE_SIZE).then_some(PaletteColor(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        match self.0 {
            0 => "red",
            1 => "orange",
            2 => "yellow",
            3 => "green",
            4 => "blue",
            5 => "indigo",
            _ => "violet",
        }
    }
}

impl Default for PaletteColor {
    fn default() -> Self {
        PaletteColor::RED
    }
}

impl TryFrom<u8> for PaletteColor {
    type Error = PuddleError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        PaletteColor::new(index).ok_or(PuddleError::InvalidColor(index))
    }
}

impl From<PaletteColor> for u8 {
    fn from(color: PaletteColor) -> u8 {
        color.0
    }
}

/// A single colored point mass in the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Molecule {
    pub pos: Vec2,
    pub velocity: Vec2,
    pub color: PaletteColor,
}

impl Molecule {
    /// A molecule at rest.
    pub fn new(pos: Vec2, color: PaletteColor) -> Self {
        Self { pos, velocity: Vec2::ZERO, color }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Whether `point` lies on this molecule's disc.
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance(point) <= MOLECULE_RADIUS
    }
}

/// True when every molecule shares one color. Vacuously true for zero or one molecule.
pub fn is_single_color(molecules: &[Molecule]) -> bool {
    match molecules.split_first() {
        None => true,
        Some((first, rest)) => rest.iter().all(|m| m.color == first.color),
    }
}

/// Index of the molecule under `point`, nearest center first.
pub fn pick(molecules: &[Molecule], point: Vec2) -> Option<usize> {
    molecules
        .iter()
        .enumerate()
        .filter(|(_, m)| m.contains(point))
        .min_by(|(_, a), (_, b)| {
            a.pos
                .distance_squared(point)
                .total_cmp(&b.pos.distance_squared(point))
        })
        .map(|(i, _)| i)
}
