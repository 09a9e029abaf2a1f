// Regression driver: fits Qdot = w * dT + b over the window heat-flow
// dataset with single-sample SGD, then renders the fit.
// The submission checker lives in the library; see `cargo run --example check`.
use gradlab::{load_columns, render_fit, train, SgdConfig};

const DATA_PATH: &str = "data/window_heat.csv";
const PLOT_PATH: &str = "fit.svg";
const RESULT_PATH: &str = "fit.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dataset = load_columns(DATA_PATH, "dT[C]", "Qdot[W]")?;
    println!("{} samples", dataset.len());

    let result = train(&dataset, &SgdConfig::default(), &mut rand::thread_rng());

    println!("{}", result.epochs);
    println!("fit: w = {:.4}, b = {:.4}", result.model.w, result.model.b);

    result.save_json(RESULT_PATH)?;
    render_fit(PLOT_PATH, &dataset, &result.model)?;
    println!("wrote {PLOT_PATH} and {RESULT_PATH}");

    Ok(())
}
