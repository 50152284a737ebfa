use crate::common;
use ghg_inventory::{ActivityId, ScopeId, search};

#[test]
fn repeated_queries_return_identical_results() {
    let inv = common::midor();
    let before = inv.clone();

    assert_eq!(inv.find_scope(ScopeId(1)), inv.find_scope(ScopeId(1)));
    assert_eq!(
        inv.find_category(ScopeId(1), "flaring"),
        inv.find_category(ScopeId(1), "flaring")
    );
    assert_eq!(
        inv.find_activity(ActivityId(9)),
        inv.find_activity(ActivityId(9))
    );
    assert_eq!(
        inv.activities_in_scope(ScopeId(3)),
        inv.activities_in_scope(ScopeId(3))
    );
    assert_eq!(
        inv.activities_in_category(ScopeId(3), "business travel"),
        inv.activities_in_category(ScopeId(3), "business travel")
    );
    assert_eq!(search(&inv, "sold"), search(&inv, "sold"));

    assert_eq!(inv, before, "queries must not alter the snapshot");
}

#[test]
fn snapshot_can_be_shared_across_threads() {
    let inv = std::sync::Arc::new(common::midor());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let inv = inv.clone();
            std::thread::spawn(move || {
                search(&inv, "ipcc")
                    .iter()
                    .map(|a| a.id.get())
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), vec![1, 2, 4, 8, 9]);
    }
}
