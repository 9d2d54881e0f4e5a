//! Property tests for the default policy on randomly generated pools

use pox_policy::{
    DefaultPolicy, InstalledMap, Literal, Operator, Package, PolicyInterface, Pool, PoolEntry,
};
use proptest::prelude::*;

const NAMES: [&str; 3] = ["vendor/a", "vendor/b", "vendor/c"];

#[derive(Debug, Clone)]
struct Fixture {
    repo: usize,
    name: usize,
    major: u8,
    minor: u8,
    installed: bool,
    alias: Option<bool>,
}

fn fixture() -> impl Strategy<Value = Fixture> {
    (0..3usize, 0..NAMES.len(), 0..3u8, 0..3u8, any::<bool>(), proptest::option::of(any::<bool>())).prop_map(
        |(repo, name, major, minor, installed, alias)| Fixture {
            repo,
            name,
            major,
            minor,
            installed,
            alias,
        },
    )
}

/// Build a pool over three repositories; returns the pool, the installed map
/// and every id in the pool
fn build(fixtures: &[Fixture]) -> (Pool, InstalledMap, Vec<Literal>) {
    let mut pool = Pool::new();
    let repos: Vec<_> = ["installed", "private", "packagist"]
        .iter()
        .map(|name| pool.add_repository(name).unwrap())
        .collect();
    let mut installed = InstalledMap::new();

    for fixture in fixtures {
        let version = format!("{}.{}.0", fixture.major, fixture.minor);
        let id = pool
            .add_package(&repos[fixture.repo], Package::new(NAMES[fixture.name], version))
            .unwrap();
        if fixture.installed {
            installed.insert(id);
        }
        if let Some(root) = fixture.alias {
            let alias_version = format!("{}.{}.9999999.9999999-dev", fixture.major, fixture.minor);
            pool.add_alias(id, &alias_version, root).unwrap();
        }
    }

    let literals = pool.iter().map(PoolEntry::id).collect();
    (pool, installed, literals)
}

proptest! {
    #[test]
    fn selection_is_deterministic(fixtures in prop::collection::vec(fixture(), 1..12)) {
        let (pool, installed, literals) = build(&fixtures);
        let policy = DefaultPolicy::new();

        let first = policy.select_preferred_packages(&pool, &installed, &literals).unwrap();
        let second = policy.select_preferred_packages(&pool, &installed, &literals).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn selection_is_a_non_empty_subset(fixtures in prop::collection::vec(fixture(), 1..12)) {
        let (pool, installed, literals) = build(&fixtures);
        let selected = DefaultPolicy::new()
            .select_preferred_packages(&pool, &installed, &literals)
            .unwrap();

        prop_assert!(!selected.is_empty());
        for literal in &selected {
            prop_assert!(literals.contains(literal));
        }

        // every name keeps at least one candidate
        for name in NAMES {
            let offered = literals.iter().any(|&l| pool.entry(l).unwrap().name() == name);
            let kept = selected.iter().any(|&l| pool.entry(l).unwrap().name() == name);
            prop_assert_eq!(offered, kept);
        }
    }

    #[test]
    fn no_selected_version_is_dominated(fixtures in prop::collection::vec(fixture(), 1..12)) {
        let (pool, installed, literals) = build(&fixtures);
        let policy = DefaultPolicy::new();
        let selected = policy.select_preferred_packages(&pool, &installed, &literals).unwrap();

        for &kept in &selected {
            let kept = pool.entry(kept).unwrap();
            for &other in &literals {
                let other = pool.entry(other).unwrap();
                if other.name() == kept.name() {
                    prop_assert!(!policy.version_compare(other, kept, Operator::GreaterThan));
                }
            }
        }
    }

    #[test]
    fn installed_best_version_is_kept(fixtures in prop::collection::vec(fixture(), 1..12)) {
        let (pool, installed, literals) = build(&fixtures);
        let policy = DefaultPolicy::new();
        let selected = policy.select_preferred_packages(&pool, &installed, &literals).unwrap();

        for id in installed.iter() {
            let entry = pool.entry(id).unwrap();
            let same_name: Vec<&PoolEntry> = literals
                .iter()
                .map(|&l| pool.entry(l).unwrap())
                .filter(|e| e.name() == entry.name())
                .collect();
            let is_best = same_name
                .iter()
                .all(|e| !policy.version_compare(e, entry, Operator::GreaterThan));
            let has_root_alias = same_name.iter().any(|e| {
                e.is_root_package_alias() && policy.version_compare(e, entry, Operator::Equal)
            });

            if is_best && !has_root_alias {
                prop_assert!(selected.contains(&id), "installed #{} dropped from {:?}", id, selected);
            }
        }
    }

    #[test]
    fn root_aliases_exclude_other_candidates(fixtures in prop::collection::vec(fixture(), 1..12)) {
        let (pool, installed, literals) = build(&fixtures);
        let selected = DefaultPolicy::new()
            .select_preferred_packages(&pool, &installed, &literals)
            .unwrap();

        for name in NAMES {
            let kept: Vec<&PoolEntry> = selected
                .iter()
                .map(|&l| pool.entry(l).unwrap())
                .filter(|e| e.name() == name)
                .collect();
            if kept.iter().any(|e| e.is_root_package_alias()) {
                prop_assert!(kept.iter().all(|e| e.is_root_package_alias()));
            }
        }
    }
}
