//! remark - forum comment query CLI
//!
//! Reads a JSON dataset and prints comments and participants the way a
//! forum page would display them.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create a data directory with a sample dataset
//! remark init --sample
//!
//! # Latest comments of an article
//! remark comments article a1
//!
//! # A user's comments, second page, as JSON
//! remark comments user u1 --page 2 --json
//!
//! # Recent commenters of an article
//! remark participants a1
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
