use anyhow::Result;
use log::debug;
use serde_json::json;
use std::path::PathBuf;

use costar::{SearchOptions, SearchOutcome};

use super::util::{config_for, open_store};

pub fn exec(
    data: Option<PathBuf>,
    start: String,
    end: String,
    max_hops: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut cfg = config_for(data);
    if max_hops.is_some() {
        cfg = cfg.with_max_hops(max_hops);
    }
    let db = open_store(cfg)?;

    let opts = SearchOptions::default().with_max_hops(db.config().max_hops);
    let (outcome, stats) = db.shortest_path_with(&start, &end, &opts);
    debug!("search stats: {:?}", stats);

    if json {
        let path = match &outcome {
            SearchOutcome::Found(p) => serde_json::to_value(p)?,
            _ => serde_json::Value::Null,
        };
        let out = json!({
            "start": start,
            "end": end,
            "found": outcome.is_found(),
            "path": path,
            "stats": stats,
        });
        println!("{}", serde_json::to_string(&out)?);
        return Ok(());
    }

    match outcome {
        SearchOutcome::Found(p) => println!("{}", p),
        SearchOutcome::NoPath | SearchOutcome::Cancelled => println!("No Path found"),
    }
    Ok(())
}
