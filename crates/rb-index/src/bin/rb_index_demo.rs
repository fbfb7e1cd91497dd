//! `rb-index-demo` — builds a small tree and dumps it after each change.
//!
//! Usage:
//!   rb-index-demo
//!
//! Inserts 0..10, deletes 4, then deletes 9, printing the pre-order dump
//! after every step. Set `RUST_LOG=rb_index=trace` to watch the rotations.

use std::error::Error;
use std::io::{self, Write};

use rb_index::{print, RbTree};
use tracing_subscriber::EnvFilter;

const SEPARATOR: &str = "---------------";

fn run(out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let mut tree = RbTree::new();
    for k in 0..10 {
        tree.insert(k)?;
    }
    writeln!(out, "{}{SEPARATOR}", print::dump(&tree))?;

    for k in [4, 9] {
        if let Some(h) = tree.find(k) {
            tree.delete(h)?;
        }
        writeln!(out, "{}{SEPARATOR}", print::dump(&tree))?;
    }

    tree.verify()?;
    tree.destroy();
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&mut io::stdout().lock()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
