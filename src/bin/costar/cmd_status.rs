use anyhow::Result;
use std::path::PathBuf;

use super::util::{config_for, open_store};

pub fn exec(data: Option<PathBuf>, json: bool) -> Result<()> {
    let db = open_store(config_for(data))?;
    let st = db.status();

    if json {
        println!("{}", serde_json::to_string(&st)?);
        return Ok(());
    }

    let count = |c: Option<usize>| c.map_or_else(|| "unreadable".to_string(), |n| n.to_string());
    println!("root:    {}", st.root.as_deref().unwrap_or("(memory)"));
    println!("mode:    {}", if st.mapped { "mmap" } else { "ram" });
    println!("actors:  {} ({} B)", count(st.actors), st.actor_bytes);
    println!("films:   {} ({} B)", count(st.films), st.film_bytes);
    println!("ready:   {}", db.good());
    Ok(())
}
