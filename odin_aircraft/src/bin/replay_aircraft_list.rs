/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

#![allow(unused)]

use std::{fs::File, io::{BufRead,BufReader}};
use anyhow::Result;
use clap::Parser;
use odin_aircraft::{AircraftList, AircraftListConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "replay a recorded aircraft list polling log (one JSON response per line)")]
pub struct Args {
    /// pathname of RON config (defaults are used if not set)
    #[arg(short,long)]
    pub config: Option<String>,

    /// also print aircraft whose position did not change
    #[arg(short,long)]
    pub all: bool,

    pub log: String,
}

fn main()->Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AircraftListConfig::load( path)?,
        None => AircraftListConfig::default()
    };
    let mut list = AircraftList::new( config);

    let reader = BufReader::new( File::open( &args.log)?);
    for (i,line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue }

        let summary = list.apply_json( &line)?;
        println!("------- response {} at {}: {} new, {} updated", i, list.server_ticks(), summary.added.len(), summary.n_updated);

        for ac in list.iter() {
            if args.all || ac.position_changed() {
                println!("{ac}");
            }
        }

        if list.remove_stale( list.server_ticks()) > 0 {
            println!("dropped: {:?}", list.dropped_list());
        }
    }

    Ok(())
}
