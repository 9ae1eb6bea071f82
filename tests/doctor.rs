use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use costar::record::film_layout;
use costar::testing::DatasetBuilder;
use costar::{find_film, CostarConfig, Film, Imdb};

#[test]
fn doctor_clean_dataset() -> Result<()> {
    let root = unique_root("doctor-ok");
    DatasetBuilder::new()
        .film("Apollo 13", 1995, &["Kevin Bacon", "Tom Hanks"])
        .film("Big", 1988, &["Tom Hanks"])
        .write_to(&root)?;

    let db = Imdb::open_with_config(CostarConfig::default().with_data_dir(&root))?;
    let r = db.doctor();
    assert!(r.is_clean(), "{:?}", r);
    assert_eq!(r.actors_total, 2);
    assert_eq!(r.films_total, 2);

    // JSON must serialise
    let v = serde_json::to_value(&r)?;
    assert_eq!(v["actors_total"], 2);
    Ok(())
}

#[test]
fn doctor_reports_corrupt_film() -> Result<()> {
    let root = unique_root("doctor-bad");
    let (actors, mut films) = DatasetBuilder::new()
        .film("Apollo 13", 1995, &["Kevin Bacon", "Tom Hanks"])
        .film("Big", 1988, &["Tom Hanks"])
        .build();
    let off = find_film(&films, &Film::new("Big", 1988))?.expect("Big indexed");
    let at = off.get() + film_layout(3).count_at;
    films[at..at + 2].copy_from_slice(&(-7i16).to_le_bytes());

    fs::create_dir_all(&root)?;
    fs::write(root.join("actordata"), &actors)?;
    fs::write(root.join("moviedata"), &films)?;

    let db = Imdb::open_with_config(CostarConfig::default().with_data_dir(&root))?;
    let r = db.doctor();
    assert!(!r.is_clean());
    assert_eq!(r.film_faults, 1);
    // Tom Hanks -> Big can no longer be read back
    assert_eq!(r.dangling_refs, 1);
    assert!(!r.samples.is_empty());
    Ok(())
}

fn unique_root(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("costar-{}-{}-{}", prefix, pid, t))
}
