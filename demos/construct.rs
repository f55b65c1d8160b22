//! Example: enumerate constructions and size them first.
//!
//! Run with:
//! `cargo run --example construct`

use all_construct::{Constructor, WordBank};

fn main() {
    let bank = WordBank::new(["h", "ex", "hex", "ag", "ago", "ru", "auru", "rus", "go", "no", "o", "s"])
        .expect("demo bank has no empty words");
    let constructor = Constructor::new("hexagonosaurus", &bank).expect("demo target is non-empty");

    println!("Decompositions: {}", constructor.count());
    for decomposition in constructor.run().expect("no limit configured") {
        println!("  {}", decomposition.join(" | "));
    }

    // Sizing before materialising: "a" x 80 has ~3.8e16 decompositions.
    let bank = WordBank::new(["a", "aa"]).expect("demo bank has no empty words");
    let target = "a".repeat(80);
    let constructor = Constructor::new(&target, &bank).expect("demo target is non-empty");
    println!("a^80 over [a, aa]: {} decompositions (not materialised)", constructor.count());
}
