use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;

use super::util::{config_for, open_store};

pub fn exec(data: Option<PathBuf>, actor: String, json: bool) -> Result<()> {
    let db = open_store(config_for(data))?;
    let films = db.credits(&actor)?;

    if json {
        let out = json!({ "actor": actor, "found": films.is_some(), "films": films });
        println!("{}", serde_json::to_string(&out)?);
        return Ok(());
    }

    match films {
        Some(films) => {
            println!("FOUND '{}': {} film(s)", actor, films.len());
            for f in films {
                println!("\t{}", f);
            }
        }
        None => println!("NOT FOUND '{}'", actor),
    }
    Ok(())
}
