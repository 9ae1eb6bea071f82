use anyhow::{anyhow, Result};
use std::path::PathBuf;

use super::util::{config_for, open_store};

pub fn exec(data: Option<PathBuf>, json: bool) -> Result<()> {
    let db = open_store(config_for(data))?;
    let r = db.doctor();

    if json {
        println!("{}", serde_json::to_string(&r)?);
    } else {
        println!("actors:          {}", r.actors_total);
        println!("films:           {}", r.films_total);
        if let Some(e) = &r.actor_table_error {
            println!("actor table:     {}", e);
        }
        if let Some(e) = &r.film_table_error {
            println!("film table:      {}", e);
        }
        println!("actor faults:    {}", r.actor_faults);
        println!("film faults:     {}", r.film_faults);
        println!("dangling refs:   {}", r.dangling_refs);
        println!("asymmetric refs: {}", r.asymmetric_refs);
        println!("unsorted:        actors={} films={}", r.unsorted_actors, r.unsorted_films);
        for s in &r.samples {
            println!("  - {}", s);
        }
    }

    if r.is_clean() {
        Ok(())
    } else {
        Err(anyhow!("doctor: data files have faults"))
    }
}
