use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::result::NOT_FOUND_COST;
use super::config::EvaluationParams;
use super::gene::Gene;


/// Fixed-length move sequence encoding one candidate route
/// Immutable: crossover and mutation build new chromosomes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chromosome {
    genes: Vec<Gene>,
}

/// What a chromosome achieved when walked on a particular grid
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    total_cost: u64, // path cost plus penalties
    fitness: f64, // higher is better
    goal_reached: bool,
    path: Vec<Cell>,
}

impl Chromosome {

    pub fn new(genes: Vec<Gene>) -> Self {
        Self { genes }
    }

    pub fn random<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Self {
        Self::new((0..length).map(|_| rng.random()).collect())
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Single-point crossover
    /// The child takes this chromosome's genes before a random cut and `other`'s from the cut on,
    /// never growing past this chromosome's length
    pub fn crossover<R: Rng + ?Sized>(&self, other: &Chromosome, rng: &mut R) -> Chromosome {
        if self.genes.is_empty() {
            return self.clone();
        }
        let cut = rng.random_range(0..self.genes.len());

        let genes = self.genes[..cut]
            .iter()
            .chain(other.genes.iter().skip(cut))
            .take(self.genes.len())
            .copied()
            .collect();
        Chromosome::new(genes)
    }

    /// Replace each gene with a random move with probability `rate`
    pub fn mutate<R: Rng + ?Sized>(self, rate: f64, rng: &mut R) -> Chromosome {
        let genes = self.genes
            .into_iter()
            .map(|gene| if rng.random::<f64>() < rate { rng.random() } else { gene })
            .collect();
        Chromosome::new(genes)
    }

    /// Walk the moves from the grid's start and score the outcome
    ///
    /// Stepping off the grid or into a wall ends the walk with `wall_hit_penalty`.
    /// Each accepted step charges the entered cell's cost. The walk ends successfully on the goal,
    /// or with `overlength_penalty` once the path reaches `max_path_length` cells.
    /// A walk that misses the goal pays `distance_penalty` per unit of Manhattan distance left,
    /// so near misses rank above far ones.
    pub fn evaluate(&self, grid: &Grid, params: &EvaluationParams) -> Evaluation {
        let Some((start, goal)) = grid.endpoints() else {
            return Evaluation::unreachable();
        };

        let mut current = *start;
        let mut path = vec![current];
        let mut total_cost: u64 = 0;
        let mut goal_reached = false;

        for gene in &self.genes {
            let (r, c) = gene.step(current.row(), current.col());
            let Some((next, step_cost)) = grid.cell(r, c)
                .and_then(|cell| cell.time_cost().map(|cost| (*cell, cost)))
            else {
                total_cost += params.wall_hit_penalty;
                break;
            };

            total_cost += u64::from(step_cost);
            path.push(next);
            current = next;

            if current == *goal {
                goal_reached = true;
                break;
            }

            if path.len() >= params.max_path_length {
                total_cost += params.overlength_penalty;
                break;
            }
        }

        if !goal_reached {
            total_cost += params.distance_penalty * current.manhattan_to(goal);
        }

        Evaluation {
            total_cost,
            fitness: 1.0 / (total_cost as f64 + params.fitness_epsilon),
            goal_reached,
            path,
        }
    }
}

impl FromIterator<Gene> for Chromosome {
    fn from_iter<I: IntoIterator<Item = Gene>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Evaluation {

    /// Score for a grid lacking start or goal
    fn unreachable() -> Self {
        Self {
            total_cost: NOT_FOUND_COST,
            fitness: 0.0,
            goal_reached: false,
            path: Vec::new(),
        }
    }

    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn goal_reached(&self) -> bool {
        self.goal_reached
    }

    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// Where the walk stopped
    pub fn last_cell(&self) -> Option<&Cell> {
        self.path.last()
    }

    pub fn into_path(self) -> Vec<Cell> {
        self.path
    }
}
