use rand::{Rng, distr::{Distribution, StandardUniform}};

use crate::geometry::Direction;


/// One move of a genome
pub type Gene = Direction;

/// Uniform over the four moves, so `rng.random::<Gene>()` works
impl Distribution<Direction> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.random_range(0..Direction::ALL.len())]
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashMap;

    #[test]
    fn test_random_genes_cover_all_moves_evenly() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts: HashMap<Gene, usize> = HashMap::new();
        for _ in 0..4000 {
            *counts.entry(rng.random::<Gene>()).or_default() += 1;
        }

        assert_eq!(counts.len(), 4);
        for (gene, count) in counts {
            assert!((800..1200).contains(&count), "{gene:?} drawn {count} times");
        }
    }
}
