use std::env;
use std::path::PathBuf;

use anyhow::Result;

use costar::testing::DatasetBuilder;
use costar::{CostarConfig, Imdb};

const VARS: [&str; 4] = ["COSTAR_DATA_DIR", "COSTAR_MMAP", "COSTAR_LOCK", "COSTAR_MAX_HOPS"];

fn clear_env() {
    for v in VARS {
        env::remove_var(v);
    }
}

// One test per binary: the environment is process-wide.
#[test]
fn env_parsing_and_open_follow_costar_vars() -> Result<()> {
    clear_env();
    let cfg = CostarConfig::from_env();
    assert_eq!(cfg.data_dir, PathBuf::from("./data"));
    assert!(cfg.mmap);
    assert!(cfg.lock_shared);
    assert_eq!(cfg.max_hops, None);

    env::set_var("COSTAR_DATA_DIR", "  /srv/imdb  ");
    env::set_var("COSTAR_MMAP", " Yes ");
    env::set_var("COSTAR_LOCK", "off");
    env::set_var("COSTAR_MAX_HOPS", "3");
    let cfg = CostarConfig::from_env();
    assert_eq!(cfg.data_dir, PathBuf::from("/srv/imdb"));
    assert!(cfg.mmap);
    assert!(!cfg.lock_shared);
    assert_eq!(cfg.max_hops, Some(3));

    // Unparseable bool reads as false; unparseable hop limit is ignored.
    env::set_var("COSTAR_DATA_DIR", "   ");
    env::set_var("COSTAR_MMAP", "maybe");
    env::set_var("COSTAR_LOCK", "TRUE");
    env::set_var("COSTAR_MAX_HOPS", "-1");
    let cfg = CostarConfig::from_env();
    assert_eq!(cfg.data_dir, PathBuf::from("./data"));
    assert!(!cfg.mmap);
    assert!(cfg.lock_shared);
    assert_eq!(cfg.max_hops, None);

    // Imdb::open takes the directory from its argument and the rest from env.
    let dir = env::temp_dir().join(format!("costar-env-{}", std::process::id()));
    DatasetBuilder::new()
        .film("One", 2000, &["A", "B"])
        .film("Two", 2001, &["B", "C"])
        .film("Three", 2002, &["C", "D"])
        .write_to(&dir)?;

    env::set_var("COSTAR_DATA_DIR", "/nonexistent/costar");
    env::set_var("COSTAR_MMAP", "0");
    env::set_var("COSTAR_LOCK", "no");
    env::set_var("COSTAR_MAX_HOPS", "2");
    let db = Imdb::open(&dir)?;
    assert_eq!(db.config().data_dir, dir);
    assert!(!db.config().lock_shared);
    assert_eq!(db.root(), Some(dir.as_path()));

    let st = db.status();
    assert!(!st.mapped);
    assert_eq!(st.actors, Some(4));
    assert_eq!(st.films, Some(3));
    assert_eq!(st.root, Some(dir.display().to_string()));

    // A-D needs three hops; the env limit is two.
    assert!(db.shortest_path("A", "C").is_some());
    assert!(db.shortest_path("A", "D").is_none());

    clear_env();
    drop(db);
    let _ = std::fs::remove_dir_all(&dir);
    Ok(())
}
