//! Truncation selection.
//!
//! The population is ranked by fitness (best first) and only the top
//! fraction survives. Ranking is a stable sort, so chromosomes with equal
//! fitness keep their previous relative order.

use super::types::{Chromosome, Population};
use std::cmp::Ordering;

/// Number of survivors for a population of `len`: `floor(len * selection_size)`.
pub fn survivor_count(len: usize, selection_size: f64) -> usize {
    (len as f64 * selection_size) as usize
}

/// Sorts `population` in place by descending fitness (stable).
pub fn rank(population: &mut [Chromosome]) {
    population.sort_by(by_fitness_desc);
}

/// Ranks the population and keeps the best `floor(len * selection_size)`.
///
/// The input vector is reused: it is sorted in place and truncated, so no
/// chromosome is copied. An empty population yields an empty result.
pub fn select(mut population: Population, selection_size: f64) -> Population {
    let keep = survivor_count(population.len(), selection_size);
    rank(&mut population);
    population.truncate(keep);
    population
}

fn by_fitness_desc(a: &Chromosome, b: &Chromosome) -> Ordering {
    b.fitness().total_cmp(&a.fitness())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::types::Gene;
    use proptest::prelude::*;

    /// Each chromosome gets a distinct single-gene marker so order can be
    /// checked after sorting.
    fn make_population(fitnesses: &[f64]) -> Population {
        fitnesses
            .iter()
            .enumerate()
            .map(|(i, &f)| Chromosome::with_fitness(vec![Gene::new(i, 0.0, 0.0)], f))
            .collect()
    }

    fn markers(pop: &[Chromosome]) -> Vec<usize> {
        pop.iter().map(|c| c.genes()[0].id).collect()
    }

    #[test]
    fn test_survivor_count() {
        assert_eq!(survivor_count(10, 0.666667), 6);
        assert_eq!(survivor_count(4, 0.5), 2);
        assert_eq!(survivor_count(3, 0.5), 1);
        assert_eq!(survivor_count(0, 0.5), 0);
        assert_eq!(survivor_count(7, 1.0), 7);
        assert_eq!(survivor_count(7, 0.0), 0);
    }

    #[test]
    fn test_select_best_first() {
        let pop = make_population(&[1.0, 5.0, 3.0, 4.0]);
        let selected = select(pop, 0.5);
        assert_eq!(markers(&selected), vec![1, 3]);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let pop = make_population(&[2.0, 7.0, 2.0, 7.0, 2.0]);
        let selected = select(pop, 1.0);
        assert_eq!(markers(&selected), vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn test_empty_population() {
        let selected = select(Vec::new(), 0.5);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_select_reuses_storage() {
        let pop = make_population(&[1.0, 2.0, 3.0, 4.0]);
        let ptr = pop.as_ptr();
        let selected = select(pop, 0.5);
        assert_eq!(selected.as_ptr(), ptr);
    }

    proptest! {
        #[test]
        fn prop_sorted_and_truncated(
            fitnesses in prop::collection::vec(0.0..1e6f64, 0..64),
            ratio in 0.0..=1.0f64,
        ) {
            let n = fitnesses.len();
            let selected = select(make_population(&fitnesses), ratio);
            prop_assert_eq!(selected.len(), survivor_count(n, ratio));
            for w in selected.windows(2) {
                prop_assert!(w[0].fitness() >= w[1].fitness());
            }
        }

        /// Re-ranking a selected population keeps its order, and selecting
        /// again with the same ratio keeps the sorted prefix.
        #[test]
        fn prop_reselect_is_idempotent(
            fitnesses in prop::collection::vec(0.0..1e6f64, 0..64),
            ratio in 0.0..=1.0f64,
        ) {
            let once = select(make_population(&fitnesses), ratio);
            let before = markers(&once);

            let again = select(once.clone(), ratio);
            let keep = survivor_count(before.len(), ratio);
            prop_assert_eq!(markers(&again), before[..keep].to_vec());

            let reranked = select(once, 1.0);
            prop_assert_eq!(markers(&reranked), before);
        }
    }
}
