use std::collections::HashSet;

use apriori_candidates::{
    combi::join_step, generate_candidates, CandidateGenerator, GeneratorConfig, IndexPolicy,
    ItemSet,
};
use itertools::Itertools;
use maplit::hashset;

macro_rules! itemsets {
    ($([$($x:expr),*]),*) => {
        vec![$(ItemSet::new(vec![$($x),*]).unwrap()),*]
    };
}

fn exact() -> CandidateGenerator {
    CandidateGenerator::new(GeneratorConfig::default().with_index_policy(IndexPolicy::Exact))
}

/// All 3-itemsets over 1..=6 except those containing both 2 and 5.
fn dense_3_itemsets() -> Vec<ItemSet> {
    (1..=6)
        .combinations(3)
        .filter(|items| !(items.contains(&2) && items.contains(&5)))
        .map(|items| ItemSet::new(items).unwrap())
        .collect()
}

#[test]
fn four_itemset_from_complete_three_itemsets() {
    let prev = itemsets![[1, 2, 3], [1, 2, 4], [1, 3, 4], [2, 3, 4]];
    assert_eq!(generate_candidates(&prev, 4).unwrap(), itemsets![[1, 2, 3, 4]]);
}

#[test]
fn three_itemset_from_pairs() {
    let prev = itemsets![[1, 2], [1, 3], [2, 3]];
    assert_eq!(generate_candidates(&prev, 3).unwrap(), itemsets![[1, 2, 3]]);
}

#[test]
fn missing_subset_prunes_candidate() {
    let prev = itemsets![[1, 2], [1, 3]];
    assert!(generate_candidates(&prev, 3).unwrap().is_empty());
}

#[test]
fn empty_input_is_empty_output() {
    for target_size in 2..5 {
        assert!(generate_candidates(&[], target_size).unwrap().is_empty());
    }
}

#[test]
fn candidates_have_target_length_and_ascending_items() {
    let prev = dense_3_itemsets();
    let candidates = generate_candidates(&prev, 4).unwrap();

    assert!(!candidates.is_empty());
    for candidate in &candidates {
        assert_eq!(candidate.len(), 4);
        assert!(candidate.items().windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn candidates_are_downward_closed() {
    let prev = dense_3_itemsets();
    let frequent: HashSet<&ItemSet> = prev.iter().collect();

    for candidate in exact().generate(&prev, 4).unwrap() {
        assert!(
            candidate.subsets().all(|subset| frequent.contains(&subset)),
            "{} has an infrequent subset",
            candidate
        );
    }
}

#[test]
fn every_closed_join_survives() {
    let mut prev = dense_3_itemsets();
    prev.sort();
    let frequent: HashSet<&ItemSet> = prev.iter().collect();
    let candidates: HashSet<ItemSet> = exact().generate(&prev, 4).unwrap().into_iter().collect();

    for (a, b) in prev.iter().tuple_combinations() {
        if !a.partial_equal(b) {
            continue;
        }
        let joined = a.with_item(b.last().unwrap()).unwrap();
        let closed = joined.subsets().all(|subset| frequent.contains(&subset));
        assert_eq!(candidates.contains(&joined), closed, "{}", joined);
    }
}

#[test]
fn no_candidate_without_partial_equal_parents() {
    let prev = dense_3_itemsets();
    let frequent: HashSet<&ItemSet> = prev.iter().collect();

    for candidate in generate_candidates(&prev, 4).unwrap() {
        let left = candidate.without(candidate.len() - 1).unwrap();
        let right = candidate.without(candidate.len() - 2).unwrap();
        assert!(left.partial_equal(&right));
        assert!(frequent.contains(&left));
        assert!(frequent.contains(&right));
    }
}

#[test]
fn excluded_pair_never_appears() {
    let candidates = generate_candidates(&dense_3_itemsets(), 4).unwrap();
    let as_sets: HashSet<Vec<i32>> = candidates.into_iter().map(Vec::from).collect();

    assert_eq!(
        as_sets,
        hashset! {
            vec![1, 2, 3, 4],
            vec![1, 2, 3, 6],
            vec![1, 2, 4, 6],
            vec![1, 3, 4, 5],
            vec![1, 3, 4, 6],
            vec![1, 3, 5, 6],
            vec![1, 4, 5, 6],
            vec![2, 3, 4, 6],
            vec![3, 4, 5, 6],
        }
    );
}

#[test]
fn output_follows_join_order() {
    let mut prev = dense_3_itemsets();
    prev.reverse();
    let candidates = generate_candidates(&prev, 4).unwrap();

    let mut sorted = prev.clone();
    sorted.sort();
    let joined = join_step(&sorted).unwrap();
    let positions: Vec<usize> = candidates
        .iter()
        .map(|c| joined.iter().position(|j| j == c).unwrap())
        .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn parallel_and_exact_agree_without_collisions() {
    let prev = dense_3_itemsets();
    let baseline = generate_candidates(&prev, 4).unwrap();

    let configs = vec![
        GeneratorConfig::default().with_parallel(true),
        GeneratorConfig::default().with_index_policy(IndexPolicy::Exact),
        GeneratorConfig::default()
            .with_index_policy(IndexPolicy::Exact)
            .with_parallel(true),
    ];
    for config in configs {
        let candidates = CandidateGenerator::new(config).generate(&prev, 4).unwrap();
        assert_eq!(candidates, baseline, "{:?}", config);
    }
}
