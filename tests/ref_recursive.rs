use all_construct::{all_construct, ConstructorBuilder, ConstructError, Constructor, WordBank};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Top-down enumeration over distinct words; exponential but obviously right.
fn brute_force(target: &str, words: &[String]) -> Vec<Vec<String>> {
    if target.is_empty() {
        return vec![Vec::new()];
    }
    let distinct: BTreeSet<&String> = words.iter().collect();
    let mut out = Vec::new();
    for word in distinct {
        if let Some(rest) = target.strip_prefix(word.as_str()) {
            for mut tail in brute_force(rest, words) {
                tail.insert(0, word.clone());
                out.push(tail);
            }
        }
    }
    out
}

/// Decompositions the forward table writes: for each offset, the ways to reach
/// it times the distinct words matching there.
fn table_writes(target: &str, words: &[String]) -> usize {
    let distinct: BTreeSet<&String> = words.iter().collect();
    (0..target.len())
        .map(|p| {
            let reach = brute_force(&target[..p], words).len();
            let matching = distinct
                .iter()
                .filter(|w| target[p..].starts_with(w.as_str()))
                .count();
            reach * matching
        })
        .sum()
}

fn sorted(mut v: Vec<Vec<String>>) -> Vec<Vec<String>> {
    v.sort();
    v
}

proptest! {
    #[test]
    fn matches_brute_force(target in "[ab]{1,9}", words in prop::collection::vec("[ab]{1,3}", 0..6)) {
        let dp = all_construct(&target, Some(&words)).unwrap();
        let reference = brute_force(&target, &words);
        prop_assert_eq!(sorted(dp), sorted(reference));
    }

    #[test]
    fn every_decomposition_is_sound_and_unique(target in "[abc]{1,10}", words in prop::collection::vec("[abc]{1,4}", 0..8)) {
        let dp = all_construct(&target, Some(&words)).unwrap();
        let unique: BTreeSet<&Vec<String>> = dp.iter().collect();
        prop_assert_eq!(unique.len(), dp.len());
        for d in &dp {
            prop_assert_eq!(d.concat(), target.clone());
            prop_assert!(d.iter().all(|w| words.contains(w)));
        }
    }

    #[test]
    fn count_agrees_with_run(target in "[ab]{1,12}", words in prop::collection::vec("[ab]{1,3}", 0..6)) {
        let bank = WordBank::new(words.clone()).unwrap();
        let c = Constructor::new(&target, &bank).unwrap();
        prop_assert_eq!(c.count(), c.run().unwrap().len() as u128);
    }

    #[test]
    fn limit_fails_exactly_when_writes_exceed_it(target in "[ab]{1,8}", words in prop::collection::vec("[ab]{1,3}", 0..5), limit in 0usize..64) {
        let bank = WordBank::new(words.clone()).unwrap();
        let unlimited = Constructor::new(&target, &bank).unwrap().run().unwrap();
        let limited = ConstructorBuilder::new(&target, &bank).with_limit(limit).build().unwrap().run();
        if table_writes(&target, &words) > limit {
            prop_assert_eq!(limited, Err(ConstructError::LimitExceeded { limit }));
        } else {
            prop_assert_eq!(limited, Ok(unlimited));
        }
    }
}

#[test]
fn non_ascii_targets_decompose_on_character_boundaries() {
    let all = all_construct("żółw", Some(["ż", "ół", "w", "żó", "łw"])).unwrap();
    assert_eq!(sorted(all.clone()), sorted(brute_force("żółw", &["ż", "ół", "w", "żó", "łw"].map(String::from))));
    assert_eq!(all.len(), 2);
}
