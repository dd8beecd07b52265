use log::{LevelFilter, warn};
use sortpolicy::core::{Ascending, Comparator, Descending};
use sortpolicy::demo::{generic_demo, render, strategy_demo, subclass_demo};
use sortpolicy::verify::check_order;
use std::error::Error;
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let runs: [(fn() -> Vec<i32>, &dyn Comparator); 3] = [
        (subclass_demo, &Ascending),
        (strategy_demo, &Descending),
        (generic_demo, &Ascending),
    ];

    let mut out = io::stdout().lock();
    for (demo, policy) in runs {
        let data = demo();
        if cfg!(debug_assertions) {
            if let Err(err) = check_order(&data, policy) {
                warn!("{err}");
            }
        }
        writeln!(out, "{}", render(&data))?;
    }

    Ok(())
}
