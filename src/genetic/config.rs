use crate::errors::ConfigError;


/// Scoring constants used when simulating a genome on a grid
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationParams {
    pub max_path_length: usize, // walk is cut once the path holds this many cells
    pub wall_hit_penalty: u64,
    pub overlength_penalty: u64,
    pub distance_penalty: u64, // per unit of Manhattan distance left to the goal
    pub fitness_epsilon: f64,
}

impl Default for EvaluationParams {
    fn default() -> Self {
        Self {
            max_path_length: 1000,
            wall_hit_penalty: 5000,
            overlength_penalty: 10000,
            distance_penalty: 50,
            fitness_epsilon: 1e-6,
        }
    }
}


/// Genetic search settings
#[derive(Clone, Debug, PartialEq)]
pub struct GeneticConfig {
    pub population_size: usize,
    pub max_generations: usize,
    pub genome_length: usize,
    pub mutation_rate: f64, // per gene
    pub tournament_size: usize,
    pub elitism_count: usize,
    /// Generations without improvement tolerated once the goal has been reached
    pub stagnation_limit: usize,
    /// Fixed seed for reproducible runs; None draws fresh entropy on every solve
    pub seed: Option<u64>,
    pub evaluation: EvaluationParams,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            max_generations: 3000,
            genome_length: 600,
            mutation_rate: 0.05,
            tournament_size: 5,
            elitism_count: 5,
            stagnation_limit: 500,
            seed: None,
            evaluation: EvaluationParams::default(),
        }
    }
}

impl GeneticConfig {

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_stagnation_limit(mut self, generations: usize) -> Self {
        self.stagnation_limit = generations;
        self
    }

    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.genome_length == 0 {
            return Err(ConfigError::EmptyGenome);
        }
        if self.elitism_count >= self.population_size {
            return Err(ConfigError::ElitismTooLarge {
                elitism: self.elitism_count,
                population: self.population_size,
            });
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::EmptyTournament);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        Ok(())
    }
}
