// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end searches over small and full berry tables.

mod common;

use common::{demo_table, five_berries};
use poffin_search::ranking::{MaxSmoothness, MinLevel};
use poffin_search::search::Counter;
use poffin_search::{
    CombinationTable, Comparator, Cooker, CookingParams, DefaultComparator, EnumerationStrategy,
    Execution, Outcome, OrderingComparator, SearchError, SearchRequest, SearchResult, Searcher,
};

fn assert_ordered(comparator: &dyn Comparator, result: &SearchResult) {
    for pair in result.outcomes.windows(2) {
        assert!(
            !comparator.is_better(&pair[1], &pair[0]),
            "{:?} ranked after {:?}",
            pair[1],
            pair[0]
        );
    }
}

#[test]
fn test_five_berries_pairs_at_forty_seconds() {
    let table = five_berries();
    let params = CookingParams::new(40, 0, 0);
    let request = SearchRequest::new(table.ids(), 2)
        .top_k(25)
        .params(params)
        .with_recipes(true);

    let result = Searcher::new(&table).run(&request, &DefaultComparator, None).unwrap();

    // Fewer combinations than slots: every pair is retained
    assert_eq!(result.outcomes.len(), 10);
    assert_eq!(result.statistics.get(Counter::Enumerated), 10);
    assert_ordered(&DefaultComparator, &result);

    let cooker = Cooker::new(params).unwrap();
    let recipes = result.recipes.as_ref().unwrap();
    for (outcome, recipe) in result.outcomes.iter().zip(recipes) {
        assert_eq!(&cooker.cook_ids(&table, recipe.items()).unwrap(), outcome);
    }
}

#[test]
fn test_every_execution_mode_agrees() {
    let table = demo_table();
    let combinations = CombinationTable::build(&table, 3).unwrap();
    let base = SearchRequest::new(table.ids(), 3)
        .top_k(15)
        .params(CookingParams::new(45, 1, 2))
        .with_recipes(true);

    let reference = Searcher::new(&table).run(&base, &DefaultComparator, None).unwrap();
    assert_eq!(reference.outcomes.len(), 15);
    assert_ordered(&DefaultComparator, &reference);

    let variants = [
        base.clone().strategy(EnumerationStrategy::Backtracking),
        base.clone().execution(Execution::Parallel { workers: 4 }),
        base.clone().execution(Execution::Parallel { workers: 0 }),
    ];
    for request in &variants {
        let result = Searcher::new(&table).run(request, &DefaultComparator, None).unwrap();
        assert_eq!(result.outcomes, reference.outcomes, "{:?}", request.execution);
        assert_eq!(result.recipes, reference.recipes, "{:?}", request.strategy);
        assert_eq!(result.statistics, reference.statistics);
    }

    let precomputed = Searcher::new(&table)
        .with_combinations(&combinations)
        .run(&base, &DefaultComparator, None)
        .unwrap();
    assert_eq!(precomputed.outcomes, reference.outcomes);
    assert_eq!(precomputed.recipes, reference.recipes);
}

#[test]
fn test_custom_ordering_and_filters() {
    let table = demo_table();
    let comparator: OrderingComparator = "sweet:desc,smoothness:asc".parse().unwrap();
    let predicate = MinLevel(15);
    let request = SearchRequest::new(table.ids(), 2).top_k(5).with_recipes(true);

    let result = Searcher::new(&table)
        .run(&request, &comparator, Some(&predicate))
        .unwrap();

    assert_eq!(result.outcomes.len(), 5);
    assert_ordered(&comparator, &result);
    assert!(result.outcomes.iter().all(|o| o.level() >= 15));

    let stats = &result.statistics;
    assert_eq!(
        stats.get(Counter::Pruned) + stats.get(Counter::Cooked),
        stats.get(Counter::Enumerated)
    );
}

#[test]
fn test_pruning_never_changes_results() {
    let table = demo_table();
    let request = SearchRequest::new(table.ids(), 2).top_k(40);
    let searcher = Searcher::new(&table);
    let predicate = MaxSmoothness(30);

    let pruned = searcher.run(&request, &DefaultComparator, Some(&predicate)).unwrap();

    let unfiltered = searcher
        .run(&request.clone().top_k(10_000), &DefaultComparator, None)
        .unwrap();
    let expected: Vec<Outcome> = unfiltered
        .outcomes
        .into_iter()
        .filter(|o| o.smoothness() <= 30)
        .take(40)
        .collect();
    assert_eq!(pruned.outcomes, expected);
}

#[test]
fn test_subset_pool() {
    let table = demo_table();
    let pool: Vec<_> = ["Cheri", "Pecha", "Rawst", "Aspear"]
        .iter()
        .map(|name| table.find(name).unwrap())
        .collect();
    let request = SearchRequest::new(pool.clone(), 4).with_recipes(true);

    let result = Searcher::new(&table).run(&request, &DefaultComparator, None).unwrap();
    assert_eq!(result.outcomes.len(), 1);
    assert_eq!(result.recipes.unwrap()[0].items(), pool.as_slice());
}

#[test]
fn test_rejected_requests() {
    let table = five_berries();
    let searcher = Searcher::new(&table);

    let too_big = SearchRequest::new(table.ids(), 5);
    assert!(searcher.run(&too_big, &DefaultComparator, None).unwrap_err().is_invalid_argument());

    let empty = SearchRequest::new(Vec::new(), 2);
    assert!(searcher.run(&empty, &DefaultComparator, None).unwrap_err().is_invalid_argument());

    let zero = SearchRequest::new(table.ids(), 2).top_k(0);
    assert!(searcher.run(&zero, &DefaultComparator, None).unwrap_err().is_invalid_argument());

    let mut doubled = table.ids();
    doubled.push(doubled[0]);
    let duplicate = SearchRequest::new(doubled, 2);
    assert!(searcher.run(&duplicate, &DefaultComparator, None).unwrap_err().is_invalid_argument());
}

#[test]
fn test_worker_panic_reported() {
    let table = demo_table();
    let request = SearchRequest::new(table.ids(), 2).execution(Execution::Parallel { workers: 4 });
    let exploding = |a: &Outcome, _b: &Outcome| -> bool {
        if a.level() > 0 {
            panic!("comparator failure");
        }
        false
    };

    let err = Searcher::new(&table).run(&request, &exploding, None).unwrap_err();
    assert!(matches!(err, SearchError::WorkerPanicked { .. }));
}
