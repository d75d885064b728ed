//! Word Acceptance
//!
//! This example parses an automaton description and checks words against it.
//!
//! Key concepts:
//! - Parsing the description language into a descriptor and a table
//! - Accepted runs carry their path, rejected runs carry a reason
//! - Words with characters outside the alphabet are errors, not rejections
//!
//! Run with: cargo run --example word_acceptance [description-file] [words...]
//! Set RUST_LOG=dfa_sim=trace to see every simulation step.

use dfa_sim::{parse_automaton, AcceptanceResult};
use std::env;
use std::fs;
use stillwater::validation::Validation;
use tracing_subscriber::EnvFilter;

const ENDS_IN_B: &str = "EndsInB=({q0,q1},{a,b},Prog,q0,{q1})
Prog
(q0,a)=q0(q0,b)=q1
(q1,a)=q0(q1,b)=q1
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let (text, words): (String, Vec<String>) = match args.next() {
        Some(path) => (fs::read_to_string(path)?, args.collect()),
        None => (
            ENDS_IN_B.to_string(),
            ["", "a", "b", "ab", "abba", "abab", "abc"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        ),
    };

    let automaton = parse_automaton(&text)?;
    println!("=== {} ===\n", automaton.name());
    println!("{automaton}");

    for word in &words {
        match automaton.accepts(word) {
            Ok(AcceptanceResult::Accepted { path }) => println!("{word:?}: accepted via {path}"),
            Ok(AcceptanceResult::Rejected { reason }) => println!("{word:?}: rejected. {reason}"),
            Err(err) => println!("{word:?}: error. {err}"),
        }
    }

    match automaton.validate() {
        Validation::Success(_) => println!("\nDescription is consistent."),
        Validation::Failure(errors) => {
            println!("\nDescription has {} inconsistencies:", errors.len());
            for error in errors.iter() {
                println!("  - {error}");
            }
        }
    }

    Ok(())
}
