use std::time::Instant;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::errors::ConfigError;
use crate::grid::Grid;
use crate::result::PathResult;
use crate::solver::Solver;
use super::chromosome::{Chromosome, Evaluation};
use super::config::GeneticConfig;


/// A chromosome together with its score on the grid being solved
#[derive(Clone, Debug)]
struct Individual {
    chromosome: Chromosome,
    evaluation: Evaluation,
}

impl Individual {
    fn fitness(&self) -> f64 {
        self.evaluation.fitness()
    }
}

/// How a generational run went
#[derive(Clone, Debug)]
struct Evolution {
    best: Individual, // fittest ever seen
    generations: usize, // bred before stopping
    goal_reached_at: Option<usize>, // generations bred when the best first reached the goal, 0 for the initial population
    fittest_per_generation: Vec<f64>, // initial population first
}


/// Evolves move sequences toward cheap goal-reaching walks
/// Results vary between runs unless a seed is configured
#[derive(Clone, Debug, Default)]
pub struct GeneticSolver {
    config: GeneticConfig,
}

impl GeneticSolver {
    pub const NAME: &'static str = "Genetic Algorithm (GA)";

    pub fn new(config: GeneticConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Solve drawing all randomness from `rng`
    pub fn solve_with_rng<R: Rng + ?Sized>(&self, grid: &Grid, rng: &mut R) -> PathResult {
        let timer = Instant::now();

        if grid.endpoints().is_none() {
            log::warn!("{}: grid has no start or no goal", Self::NAME);
            return PathResult::not_found(Self::NAME, timer.elapsed());
        }

        let run = self.evolve(grid, rng);
        let elapsed = timer.elapsed();
        log::debug!(
            "{}: bred {} generations, goal first reached after {:?}, final generation best fitness {:?}",
            Self::NAME,
            run.generations,
            run.goal_reached_at,
            run.fittest_per_generation.last(),
        );

        let best = run.best;

        if best.evaluation.goal_reached() {
            let cost = best.evaluation.total_cost();
            log::debug!(
                "{}: reached goal with cost {cost} in {} steps, {elapsed:?}",
                Self::NAME,
                best.evaluation.path().len(),
            );
            return PathResult::found(best.evaluation.into_path(), cost, Self::NAME, elapsed);
        }

        // the closest attempt is only reported, failure stays distinguishable from a real route
        log::debug!(
            "{}: goal not reached, closest attempt stopped at {:?} after {} cells",
            Self::NAME,
            best.evaluation.last_cell().map(|c| c.position()),
            best.evaluation.path().len(),
        );
        PathResult::not_found(Self::NAME, elapsed)
    }

    /// Run the generational loop, keeping the fittest individual ever seen
    fn evolve<R: Rng + ?Sized>(&self, grid: &Grid, rng: &mut R) -> Evolution {
        let config = &self.config;

        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| self.individual(Chromosome::random(config.genome_length, rng), grid))
            .collect();
        rank(&mut population);

        let mut run = Evolution {
            best: population[0].clone(),
            generations: 0,
            goal_reached_at: population[0].evaluation.goal_reached().then_some(0),
            fittest_per_generation: vec![population[0].fitness()],
        };
        let mut stagnant_generations = 0;

        while run.generations < config.max_generations {
            // elites pass through unchanged
            let mut next: Vec<Individual> = population
                .iter()
                .take(config.elitism_count)
                .cloned()
                .collect();

            while next.len() < config.population_size {
                let Some(child) = self.breed(&population, rng) else {
                    break;
                };
                next.push(self.individual(child, grid));
            }

            rank(&mut next);
            population = next;
            run.generations += 1;
            let generation = run.generations;

            let generation_best = &population[0];
            run.fittest_per_generation.push(generation_best.fitness());

            if generation_best.fitness() > run.best.fitness() {
                run.best = generation_best.clone();
                stagnant_generations = 0;
                log::debug!(
                    "generation {generation}: best cost {} (goal reached: {})",
                    run.best.evaluation.total_cost(),
                    run.best.evaluation.goal_reached(),
                );
            } else if run.best.evaluation.goal_reached() {
                stagnant_generations += 1;
            }

            if run.goal_reached_at.is_none() && run.best.evaluation.goal_reached() {
                run.goal_reached_at = Some(generation);
            }

            if run.best.evaluation.goal_reached() && stagnant_generations >= config.stagnation_limit {
                log::debug!("generation {generation}: no improvement for {stagnant_generations} generations, stopping");
                break;
            }
        }

        run
    }

    fn individual(&self, chromosome: Chromosome, grid: &Grid) -> Individual {
        let evaluation = chromosome.evaluate(grid, &self.config.evaluation);
        Individual { chromosome, evaluation }
    }

    /// Two tournament winners crossed over, then mutated
    fn breed<R: Rng + ?Sized>(&self, population: &[Individual], rng: &mut R) -> Option<Chromosome> {
        let first = tournament(population, self.config.tournament_size, rng)?;
        let second = tournament(population, self.config.tournament_size, rng)?;

        let child = first.chromosome
            .crossover(&second.chromosome, rng)
            .mutate(self.config.mutation_rate, rng);
        Some(child)
    }
}

impl Solver for GeneticSolver {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn solve(&self, grid: &Grid) -> PathResult {
        match self.config.seed {
            Some(seed) => self.solve_with_rng(grid, &mut StdRng::seed_from_u64(seed)),
            None => self.solve_with_rng(grid, &mut rand::rng()),
        }
    }
}


/// Sort fittest first
fn rank(population: &mut [Individual]) {
    population.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));
}

/// Fittest of `size` individuals drawn uniformly with replacement
fn tournament<'p, R: Rng + ?Sized>(population: &'p [Individual], size: usize, rng: &mut R) -> Option<&'p Individual> {
    (0..size)
        .filter_map(|_| population.choose(rng))
        .max_by(|a, b| a.fitness().total_cmp(&b.fitness()))
}
