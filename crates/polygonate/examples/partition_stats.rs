//! Partition a random cloud under each wall policy and print shape stats.
//!
//! Usage:
//!   cargo run -p polygonate --example partition_stats -- [count] [seed]
//!
//! Prints the number of removable walls in the initial triangulation, then
//! per policy the polygon count and the side-count distribution.

use polygonate::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let count: usize = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(40);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(2020);

    let points = draw_points_uniform(
        ScatterCfg { count, extent: 1.0 },
        ReplayToken { seed, index: 0 },
    );

    match removable_walls(&points) {
        Ok(cands) => println!("{count} points (seed {seed}): {} removable walls", cands.len()),
        Err(e) => {
            eprintln!("triangulation failed: {e}");
            std::process::exit(1);
        }
    }

    let policies = [
        ("shortest", WallPolicy::Shortest),
        ("longest", WallPolicy::Longest),
        ("sharpest", WallPolicy::Sharpest),
    ];
    for (name, policy) in policies {
        match polygonate(&points, policy) {
            Ok(shapes) => {
                let mut sides: Vec<usize> = shapes.iter().map(|s| s.len()).collect();
                sides.sort_unstable();
                println!("{name:>8}: {} polygons, sides {sides:?}", shapes.len());
            }
            Err(e) => eprintln!("{name:>8}: {e}"),
        }
    }
}
