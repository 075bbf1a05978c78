use std::collections::VecDeque;

use puddle_engine::Countdown;

use crate::molecule::{Molecule, PaletteColor};

/// Collect every molecule connected to `start` through neighbors of the start's color.
///
/// Two molecules are neighbors when their centers are at most `adjacency_distance`
/// apart. The result is in breadth-first visit order, so the recolor animation spreads
/// outward from the start. Returns an empty list when the start already has `target`
/// or does not exist.
pub fn flood_fill(
    molecules: &[Molecule],
    start: usize,
    target: PaletteColor,
    adjacency_distance: f32,
) -> Vec<usize> {
    let start_color = match molecules.get(start) {
        Some(m) if m.color != target => m.color,
        _ => return Vec::new(),
    };

    let mut visited = vec![false; molecules.len()];
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(molecules.len());
    let mut order = Vec::new();

    visited[start] = true;
    queue.push_back(start);
    order.push(start);

    while let Some(current) = queue.pop_front() {
        let pos = molecules[current].pos;
        for (i, other) in molecules.iter().enumerate() {
            if visited[i] || other.color != start_color {
                continue;
            }
            if pos.distance(other.pos) > adjacency_distance {
                continue;
            }
            visited[i] = true;
            queue.push_back(i);
            order.push(i);
        }
    }

    order
}

/// Rate-limited recolor animation.
///
/// Pending molecules change color in batches; the first batch of a fill applies on the
/// next advance, later batches wait `delay` each. While anything is pending the game is
/// filling and refuses new fills.
#[derive(Debug, Clone)]
pub struct RecolorQueue {
    pending: VecDeque<(usize, PaletteColor)>,
    batch: usize,
    delay: f32,
    timer: Countdown,
}

impl RecolorQueue {
    pub fn new(batch: usize, delay: f32) -> Self {
        Self {
            pending: VecDeque::new(),
            batch: batch.max(1),
            delay,
            timer: Countdown::expired(),
        }
    }

    /// Queue `indices` to become `color`.
    pub fn begin(&mut self, indices: impl IntoIterator<Item = usize>, color: PaletteColor) {
        self.pending.extend(indices.into_iter().map(|i| (i, color)));
        self.timer = Countdown::expired();
    }

    /// Advance the animation by `dt`. Returns how many molecules changed color.
    pub fn advance(&mut self, molecules: &mut [Molecule], dt: f32) -> usize {
        if !self.timer.tick(dt) {
            return 0;
        }

        let mut recolored = 0;
        while recolored < self.batch {
            let Some((index, color)) = self.pending.pop_front() else {
                break;
            };
            if let Some(molecule) = molecules.get_mut(index) {
                molecule.color = color;
            }
            recolored += 1;
        }
        self.timer.set(self.delay);
        recolored
    }

    pub fn is_filling(&self) -> bool {
        !self.pending.is_empty()
    }
}
