use super::*;
use super::candidates::{first_level_candidates, has_frequent_subsets, next_level_candidates};
use super::counting::{count_support, filter_frequent, percentage, support_count};
use super::rules::for_each_partition;
use ndarray::Array2;
use std::convert::Infallible;
use std::num::NonZeroUsize;

fn set(items: &[Item]) -> Itemset {
    Itemset::new(items.to_vec())
}

fn database(rows: &[&[Item]]) -> TransactionDatabase {
    rows.iter().map(|row| row.to_vec()).collect()
}

/// {1,2}, {1,2,3}, {1,3}, {2,3}
fn small_database() -> TransactionDatabase {
    database(&[&[1, 2], &[1, 2, 3], &[1, 3], &[2, 3]])
}

fn table(itemset_size: usize, entries: &[(&[Item], usize)]) -> ItemsetTable {
    let mut table = ItemsetTable::new(itemset_size);
    for &(items, count) in entries {
        table.insert(set(items), count);
    }
    table
}

fn mine(database: &TransactionDatabase, min_support: f64) -> FrequentItemsets {
    apriori_algorithm(database, &MiningConfig::new(min_support)).unwrap()
}

fn rule_lines(frequent: &FrequentItemsets) -> Vec<String> {
    generate_rules(frequent).iter().map(|rule| rule.to_string()).collect()
}

#[test]
fn test_itemset_is_sorted_and_unique() {
    let itemset = set(&[7, 2, 5, 2]);

    assert_eq!(itemset.items(), &[2, 5, 7]);
    assert_eq!(itemset.len(), 3);
    assert_eq!(itemset.to_string(), "{2,5,7}");
    assert_eq!(Itemset::default().to_string(), "{}");
}

#[test]
fn test_itemset_ordering_is_lexicographic() {
    let mut itemsets = vec![set(&[2, 3]), set(&[1, 3]), set(&[1, 2]), set(&[1, 2, 3]), set(&[10])];
    itemsets.sort();

    assert_eq!(
        itemsets,
        vec![set(&[1, 2]), set(&[1, 2, 3]), set(&[1, 3]), set(&[2, 3]), set(&[10])]
    );
}

#[test]
fn test_overlap() {
    assert_eq!(set(&[1, 2, 3]).overlap(&set(&[2, 3, 4])), 2);
    assert_eq!(set(&[1, 5, 9]).overlap(&set(&[2, 6, 10])), 0);
    assert_eq!(set(&[1, 2]).overlap(&set(&[1, 2])), 2);
    assert_eq!(set(&[]).overlap(&set(&[1])), 0);
    assert_eq!(set(&[3]).overlap(&set(&[1, 2, 3, 4])), 1);
}

#[test]
fn test_merge_requires_all_but_one_shared() {
    assert_eq!(set(&[1, 2]).merge(&set(&[1, 3])), Some(set(&[1, 2, 3])));
    assert_eq!(set(&[1, 3]).merge(&set(&[1, 2])), Some(set(&[1, 2, 3])));
    assert_eq!(set(&[2, 4]).merge(&set(&[1, 4])), Some(set(&[1, 2, 4])));
    assert_eq!(set(&[1]).merge(&set(&[5])), Some(set(&[1, 5])));

    // identical itemsets share every item
    assert_eq!(set(&[1, 2]).merge(&set(&[1, 2])), None);
    // nothing shared
    assert_eq!(set(&[1, 2]).merge(&set(&[3, 4])), None);
    // sizes differ
    assert_eq!(set(&[1, 2]).merge(&set(&[1, 2, 3])), None);
    assert_eq!(set(&[]).merge(&set(&[])), None);
}

#[test]
fn test_merge_result_is_sorted_and_one_larger() {
    let pool = [
        set(&[1, 2, 3]),
        set(&[1, 2, 4]),
        set(&[1, 3, 4]),
        set(&[2, 3, 4]),
        set(&[2, 5, 9]),
        set(&[-3, 2, 5]),
    ];

    for a in &pool {
        for b in &pool {
            match a.merge(b) {
                Some(merged) => {
                    assert_eq!(a.overlap(b), a.len() - 1);
                    assert_eq!(merged.len(), a.len() + 1);
                    assert!(merged.items().windows(2).all(|w| w[0] < w[1]));
                    assert!(a.is_subset_of(&merged));
                    assert!(b.is_subset_of(&merged));
                }
                None => assert_ne!(a.overlap(b), a.len() - 1),
            }
        }
    }
}

#[test]
fn test_remove_at() {
    let itemset = set(&[1, 4, 9]);

    assert_eq!(itemset.remove_at(0), set(&[4, 9]));
    assert_eq!(itemset.remove_at(1), set(&[1, 9]));
    assert_eq!(itemset.remove_at(2), set(&[1, 4]));
}

#[test]
fn test_is_subset_of() {
    assert!(set(&[1, 3]).is_subset_of(&set(&[1, 2, 3])));
    assert!(set(&[]).is_subset_of(&set(&[1])));
    assert!(!set(&[1, 4]).is_subset_of(&set(&[1, 2, 3])));
    assert!(!set(&[1, 2, 3]).is_subset_of(&set(&[1, 3])));
}

#[test]
fn test_database_normalizes_transactions() {
    let database = database(&[&[3, 1, 3], &[2, 2, 2]]);

    assert_eq!(database.len(), 2);
    assert_eq!(database.transactions()[0], set(&[1, 3]));
    assert_eq!(database.transactions()[1], set(&[2]));
    assert_eq!(database.duplicates_dropped(), 3);
}

#[test]
fn test_database_from_dense() {
    let matrix = Array2::from_shape_vec(
        (4, 3),
        vec![
            1, 1, 0, // items 0, 1
            1, 1, 1, // items 0, 1, 2
            1, 0, 1, // items 0, 2
            0, 1, 1, // items 1, 2
        ],
    )
    .unwrap();

    let database = TransactionDatabase::from_dense(matrix.view());

    assert_eq!(database.len(), 4);
    assert_eq!(database.transactions()[1], set(&[0, 1, 2]));
    assert_eq!(database.transactions()[3], set(&[1, 2]));
}

#[test]
fn test_database_from_dense_uses_column_ids() {
    let matrix = Array2::from_shape_vec((2, 4), vec![0, 0, 0, 0, 0, 0, 0, 7]).unwrap();

    let database = TransactionDatabase::from_dense(matrix.view());

    assert!(database.transactions()[0].is_empty());
    assert_eq!(database.transactions()[1].items(), &[3]);
}

#[test]
fn test_first_level_candidates() {
    let candidates = first_level_candidates(&small_database());

    assert_eq!(candidates.itemset_size, 1);
    assert_eq!(
        candidates,
        table(1, &[(&[1], 3), (&[2], 3), (&[3], 3)])
    );
}

#[test]
fn test_first_level_counts_presence_after_normalization() {
    let candidates = first_level_candidates(&database(&[&[5, 5, 6], &[5]]));

    assert_eq!(candidates.count(&[5]), Some(2));
    assert_eq!(candidates.count(&[6]), Some(1));
}

#[test]
fn test_next_level_candidates_join() {
    let frequent = table(1, &[(&[1], 3), (&[2], 3), (&[3], 3)]);
    let candidates = next_level_candidates(&frequent);

    assert_eq!(candidates.itemset_size, 2);
    let itemsets: Vec<_> = candidates.itemsets().cloned().collect();
    assert_eq!(itemsets, vec![set(&[1, 2]), set(&[1, 3]), set(&[2, 3])]);
    assert!(candidates.iter().all(|(_, count)| count == 0));
}

#[test]
fn test_next_level_candidates_prune_infrequent_subsets() {
    // {3,4} is missing, so {2,3,4} and {1,3,4} cannot be candidates
    let frequent = table(
        2,
        &[(&[1, 2], 2), (&[1, 3], 2), (&[1, 4], 2), (&[2, 3], 2), (&[2, 4], 2)],
    );
    let candidates = next_level_candidates(&frequent);

    let itemsets: Vec<_> = candidates.itemsets().cloned().collect();
    assert_eq!(itemsets, vec![set(&[1, 2, 3]), set(&[1, 2, 4])]);

    for candidate in candidates.itemsets() {
        assert!(has_frequent_subsets(candidate, &frequent));
        for idx in 0..candidate.len() {
            assert!(frequent.contains(candidate.remove_at(idx).items()));
        }
    }
    assert!(!has_frequent_subsets(&set(&[2, 3, 4]), &frequent));
}

#[test]
fn test_next_level_from_single_itemset_is_empty() {
    let frequent = table(3, &[(&[1, 2, 3], 1)]);
    assert!(next_level_candidates(&frequent).is_empty());
}

#[test]
fn test_support_count_is_subset_membership() {
    let database = database(&[&[1, 2, 3, 4], &[2, 4], &[4, 2, 9], &[1, 3]]);

    assert_eq!(support_count(&set(&[2, 4]), &database), 3);
    assert_eq!(support_count(&set(&[1, 3]), &database), 2);
    assert_eq!(support_count(&set(&[1, 4, 9]), &database), 0);
}

#[test]
fn test_parallel_counting_matches_sequential() {
    let rows: Vec<Vec<Item>> = (0..200)
        .map(|tx| (0..12).filter(|item| (tx * 7 + item * 3) % 5 != 0).collect())
        .collect();
    let database: TransactionDatabase = rows.into_iter().collect();

    let frequent = filter_frequent(first_level_candidates(&database), database.len(), 0.0);
    let mut sequential = next_level_candidates(&frequent);
    let mut parallel = sequential.clone();

    count_support(&mut sequential, &database, false);
    count_support(&mut parallel, &database, true);

    assert_eq!(sequential, parallel);
    for (itemset, count) in sequential.iter() {
        assert_eq!(count, support_count(itemset, &database));
    }
}

#[test]
fn test_filter_frequent_threshold_is_inclusive() {
    let candidates = table(1, &[(&[1], 2), (&[2], 1), (&[3], 4)]);
    let frequent = filter_frequent(candidates, 4, 50.0);

    assert_eq!(frequent, table(1, &[(&[1], 2), (&[3], 4)]));
}

#[test]
fn test_percentage() {
    assert_eq!(percentage(2, 4), 50.0);
    assert_eq!(percentage(3, 3), 100.0);
    assert_eq!(format!("{:.2}", percentage(2, 3)), "66.67");
}

#[test]
fn test_apriori_small_example() {
    let database = small_database();
    let frequent = mine(&database, 50.0);

    assert_eq!(frequent.num_transactions(), 4);
    assert_eq!(frequent.max_level(), 2);
    assert_eq!(frequent.level(1), Some(&table(1, &[(&[1], 3), (&[2], 3), (&[3], 3)])));
    assert_eq!(
        frequent.level(2),
        Some(&table(2, &[(&[1, 2], 2), (&[1, 3], 2), (&[2, 3], 2)]))
    );
    assert_eq!(frequent.level(3), None);
    assert_eq!(frequent.level(0), None);
    assert_eq!(frequent.len(), 6);
    assert_eq!(
        frequent
            .iter()
            .map(|(itemset, count)| (itemset.items().to_vec(), count))
            .collect::<Vec<_>>(),
        vec![
            (vec![1], 3),
            (vec![2], 3),
            (vec![3], 3),
            (vec![1, 2], 2),
            (vec![1, 3], 2),
            (vec![2, 3], 2),
        ]
    );
    assert_eq!(frequent.support(&[1, 3]), 2);
    assert_eq!(frequent.support(&[1, 2, 3]), 0);
}

#[test]
fn test_rules_small_example() {
    let frequent = mine(&small_database(), 50.0);

    assert_eq!(
        rule_lines(&frequent),
        vec![
            "{1}\t{2}\t50.00\t66.67",
            "{2}\t{1}\t50.00\t66.67",
            "{1}\t{3}\t50.00\t66.67",
            "{3}\t{1}\t50.00\t66.67",
            "{2}\t{3}\t50.00\t66.67",
            "{3}\t{2}\t50.00\t66.67",
        ]
    );
}

#[test]
fn test_zero_support_mines_until_joins_run_out() {
    let frequent = mine(&small_database(), 0.0);

    assert_eq!(frequent.max_level(), 3);
    assert_eq!(frequent.level(3), Some(&table(3, &[(&[1, 2, 3], 1)])));

    let lines = rule_lines(&frequent);
    assert_eq!(lines.len(), 12);
    assert_eq!(
        &lines[6..],
        &[
            "{1,2}\t{3}\t25.00\t50.00",
            "{1,3}\t{2}\t25.00\t50.00",
            "{1}\t{2,3}\t25.00\t33.33",
            "{2,3}\t{1}\t25.00\t50.00",
            "{2}\t{1,3}\t25.00\t33.33",
            "{3}\t{1,2}\t25.00\t33.33",
        ]
    );
}

#[test]
fn test_full_support_yields_nothing() {
    let frequent = mine(&small_database(), 100.0);

    assert!(frequent.is_empty());
    assert!(generate_rules(&frequent).is_empty());
}

#[test]
fn test_full_support_with_identical_transactions() {
    let frequent = mine(&database(&[&[4, 8], &[8, 4], &[4, 8]]), 100.0);

    assert_eq!(frequent.max_level(), 2);
    assert_eq!(
        rule_lines(&frequent),
        vec!["{4}\t{8}\t100.00\t100.00", "{8}\t{4}\t100.00\t100.00"]
    );
}

#[test]
fn test_empty_database() {
    let frequent = mine(&TransactionDatabase::new(), 10.0);

    assert_eq!(frequent.num_transactions(), 0);
    assert!(frequent.is_empty());
    assert!(generate_rules(&frequent).is_empty());
}

#[test]
fn test_max_level_caps_mining() {
    let config = MiningConfig::new(0.0).with_max_level(NonZeroUsize::new(2).unwrap());
    let frequent = apriori_algorithm(&small_database(), &config).unwrap();

    assert_eq!(frequent.max_level(), 2);
    assert_eq!(generate_rules(&frequent).len(), 6);
}

#[test]
fn test_sequential_and_parallel_mining_agree() {
    let database = database(&[
        &[1, 2, 5],
        &[2, 4],
        &[2, 3],
        &[1, 2, 4],
        &[1, 3],
        &[2, 3],
        &[1, 3],
        &[1, 2, 3, 5],
        &[1, 2, 3],
    ]);

    let sequential = apriori_algorithm(&database, &MiningConfig::new(22.0).with_parallel_counting(false)).unwrap();
    let parallel = apriori_algorithm(&database, &MiningConfig::new(22.0).with_parallel_counting(true)).unwrap();

    assert_eq!(sequential.levels(), parallel.levels());
    assert_eq!(sequential.max_level(), 3);
    assert_eq!(
        sequential.level(3),
        Some(&table(3, &[(&[1, 2, 3], 2), (&[1, 2, 5], 2)]))
    );
}

#[test]
fn test_invalid_min_support_is_rejected() {
    for min_support in [-0.5, 100.01, f64::NAN, f64::INFINITY] {
        let result = apriori_algorithm(&small_database(), &MiningConfig::new(min_support));
        assert!(matches!(
            result,
            Err(crate::error::AprioriError::InvalidSupportValue { .. })
        ));
    }
}

#[test]
fn test_partitions_visit_antecedent_first() {
    let mut seen = Vec::new();
    let outcome: Result<(), Infallible> = for_each_partition(&[1, 2], &mut |x: &[Item], y: &[Item]| {
        seen.push((x.to_vec(), y.to_vec()));
        Ok(())
    });
    assert!(outcome.is_ok());

    assert_eq!(
        seen,
        vec![
            (vec![1, 2], vec![]),
            (vec![1], vec![2]),
            (vec![2], vec![1]),
            (vec![], vec![1, 2]),
        ]
    );
}

#[test]
fn test_rule_count_per_itemset() {
    // every item in every transaction, so every subset is frequent
    let database = database(&[&[1, 2, 3, 4], &[1, 2, 3, 4], &[1, 2, 3, 4, 5]]);
    let frequent = mine(&database, 60.0);

    assert_eq!(frequent.max_level(), 4);

    let rules = generate_rules(&frequent);
    let expected: usize = frequent
        .levels()
        .iter()
        .skip(1)
        .map(|level| level.len() * ((1usize << level.itemset_size) - 2))
        .sum();
    assert_eq!(rules.len(), expected);

    for rule in &rules {
        assert!(!rule.antecedent.is_empty());
        assert!(!rule.consequent.is_empty());
        assert_eq!(rule.antecedent.overlap(&rule.consequent), 0);

        let union: Itemset = rule
            .antecedent
            .iter()
            .chain(rule.consequent.iter())
            .copied()
            .collect();
        let union_support = frequent.support(union.items());
        assert!(union_support > 0);
        assert_eq!(rule.support, percentage(union_support, 3));
        assert_eq!(
            rule.confidence,
            percentage(union_support, frequent.support(rule.antecedent.items()))
        );
    }
}

#[test]
fn test_try_for_each_rule_stops_on_error() {
    let frequent = mine(&small_database(), 50.0);

    let mut visited = 0;
    let outcome = try_for_each_rule(&frequent, |_| {
        visited += 1;
        if visited == 3 {
            Err("stop")
        } else {
            Ok(())
        }
    });

    assert_eq!(outcome, Err("stop"));
    assert_eq!(visited, 3);
}
