use costar::metrics;
use costar::testing::DatasetBuilder;
use costar::Imdb;

// Counters are process-wide and tests run in parallel: assert on deltas only.
#[test]
fn metrics_count_lookups_and_searches() {
    let (a, f) = DatasetBuilder::new()
        .film("Apollo 13", 1995, &["Kevin Bacon", "Tom Hanks"])
        .build();
    let db = Imdb::from_buffers(a, f);

    let before = metrics::snapshot();
    assert!(db.shortest_path("Kevin Bacon", "Tom Hanks").is_some());
    assert!(db.credits("Nobody").unwrap().is_none());
    let after = metrics::snapshot();

    assert!(after.searches_total >= before.searches_total + 1);
    assert!(after.searches_found >= before.searches_found + 1);
    assert!(after.films_expanded >= before.films_expanded + 1);
    assert!(after.paths_enqueued >= before.paths_enqueued + 1);
    assert!(after.actor_lookup_misses >= before.actor_lookup_misses + 1);
    assert!(after.records_decoded > before.records_decoded);
}

#[test]
fn metrics_snapshot_serialises() {
    let snap = metrics::snapshot();
    let v = serde_json::to_value(&snap).unwrap();
    assert!(v.get("decode_faults").is_some());
    assert!(snap.actor_hit_ratio() >= 0.0);
}
