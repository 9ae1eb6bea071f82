use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;

use costar::Film;

use super::util::{config_for, open_store};

pub fn exec(data: Option<PathBuf>, title: String, year: u16, json: bool) -> Result<()> {
    let db = open_store(config_for(data))?;
    let film = Film::new(title, year);
    let cast = db.cast(&film)?;

    if json {
        let out = json!({ "film": film, "found": cast.is_some(), "cast": cast });
        println!("{}", serde_json::to_string(&out)?);
        return Ok(());
    }

    match cast {
        Some(cast) => {
            println!("FOUND {}: {} actor(s)", film, cast.len());
            for a in cast {
                println!("\t{}", a);
            }
        }
        None => println!("NOT FOUND {}", film),
    }
    Ok(())
}
