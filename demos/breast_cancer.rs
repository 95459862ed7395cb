//! Breast Cancer – Categorical Decision Tree Evaluation
//! ===================================================
//! Grow an ID3 tree on the nominal UCI breast-cancer dataset (recurrence
//! vs. no recurrence, nine categorical attributes) and report train,
//! cross-validation and test accuracy for a chosen pruning mode.
//!
//! Missing values (`?`) are filled with the most frequent value of the
//! attribute within the example's class before training.
//!
//! ```bash
//! cargo run --release --example breast_cancer -- breast-cancer.arff "2 NKG E" 42
//! ```
//!
//! Arguments, all optional: the ARFF path (default `breast-cancer.arff`),
//! the pruning mode (default `"2"`) and the seed (default `42`).

use arbor::arff::read_arff;
use arbor::impute::impute_mode_by_class;
use arbor::{Classifier, Config, PruningMode};
use std::env;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let path = args.first().map_or("breast-cancer.arff", String::as_str);
    let mode: PruningMode = args.get(1).map_or("2", String::as_str).parse()?;
    let seed: u64 = match args.get(2) {
        Some(s) => s.parse()?,
        None => 42,
    };

    let mut data = read_arff(path)?;
    let filled = impute_mode_by_class(&mut data);
    println!(
        "Loaded {} examples, {} attributes ({} missing values imputed).",
        data.len(),
        data.attributes.len(),
        filled
    );
    for attribute in &data.attributes {
        println!("    {}: {{{}}}", attribute, data.domain(attribute).join(", "));
    }

    let mut cfg = Config::from_mode(mode);
    cfg.seed = seed;
    let classifier = Classifier::new(cfg)?;
    let (tree, report) = classifier.evaluate(&data)?;

    println!("{}", report);
    println!();
    println!("Tree ({} nodes, depth {}):", tree.n_nodes(), tree.depth());
    print!("{}", tree);
    Ok(())
}
