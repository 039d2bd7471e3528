//! Compute GoldRush match keys for a directory of MARC-in-JSON files.
//!
//! Every `*.json` file in the directory is read as one record. Keys are
//! computed in parallel with Rayon and printed in file name order; files that
//! fail to load are reported with the loader's message.
//!
//! ```text
//! cargo run --example batch_keys -- path/to/records [--debug]
//! ```

use anyhow::{bail, Context, Result};
use goldrush::{matchkey_with_config, MatchKeyConfig, RULESET_VERSION};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(dir) = args.next() else {
        bail!("usage: batch_keys <directory> [--debug]");
    };
    let config = if args.any(|arg| arg == "--debug") {
        MatchKeyConfig::debug()
    } else {
        MatchKeyConfig::default()
    };

    let files = json_files(Path::new(&dir))?;
    println!("GoldRush {RULESET_VERSION}: {} records in {dir}", files.len());

    let results: Vec<(PathBuf, Result<String>)> = files
        .into_par_iter()
        .map(|path| {
            let key = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))
                .and_then(|json| {
                    matchkey_with_config(&json, &config)
                        .context("Input must be parseable MARC-in-JSON")
                });
            (path, key)
        })
        .collect();

    for (path, key) in results {
        println!("Processing {}", path.display());
        match key {
            Ok(key) => println!("{key}"),
            Err(err) => println!("{err:#}"),
        }
    }

    Ok(())
}

fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("listing {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    Ok(files)
}
