use std::fmt;


#[derive(Debug, PartialEq, Eq)]
pub enum PathPlannerError {
    NoPathFound, // Frontier exhausted before reaching the goal
    MissingEndpoint, // Grid has no start or no goal
}

#[derive(Debug)]
pub enum GridLoadError {
    Io(std::io::Error), // Source missing or unreadable
    Empty, // Source held no grid rows
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownSolver(pub String); // name matched no strategy

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    EmptyPopulation,
    EmptyGenome,
    ElitismTooLarge { elitism: usize, population: usize },
    EmptyTournament,
    InvalidMutationRate(f64),
}


impl fmt::Display for PathPlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPlannerError::NoPathFound => write!(f, "no path to the goal"),
            PathPlannerError::MissingEndpoint => write!(f, "grid has no start or no goal"),
        }
    }
}

impl fmt::Display for GridLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridLoadError::Io(e) => write!(f, "cannot read grid: {e}"),
            GridLoadError::Empty => write!(f, "grid source contains no rows"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPopulation => write!(f, "population size must be positive"),
            ConfigError::EmptyGenome => write!(f, "genome length must be positive"),
            ConfigError::ElitismTooLarge { elitism, population } => {
                write!(f, "elitism count {elitism} must be smaller than population size {population}")
            }
            ConfigError::EmptyTournament => write!(f, "tournament size must be positive"),
            ConfigError::InvalidMutationRate(rate) => write!(f, "mutation rate {rate} outside [0, 1]"),
        }
    }
}

impl fmt::Display for UnknownSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown solver '{}'", self.0)
    }
}

impl std::error::Error for PathPlannerError {}
impl std::error::Error for UnknownSolver {}
impl std::error::Error for ConfigError {}

impl std::error::Error for GridLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GridLoadError::Io(e) => Some(e),
            GridLoadError::Empty => None,
        }
    }
}


impl From<std::io::Error> for GridLoadError {
    fn from(error: std::io::Error) -> Self {
        GridLoadError::Io(error)
    }
}
