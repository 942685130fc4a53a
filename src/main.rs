use std::env;
use std::process;

use quadrant::misc::format_sig;
use quadrant::{estimate_pi, Precision, Real, DEFAULT_TRIALS};

fn main() {
    let trials = match env::args().nth(1) {
        Some(raw) => match raw.parse::<u64>() {
            Ok(n) => n,
            Err(err) => {
                eprintln!("invalid trial count '{}': {}", raw, err);
                process::exit(1);
            }
        },
        None => DEFAULT_TRIALS,
    };

    let est = match estimate_pi::<Real>(trials) {
        Ok(est) => est,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    println!(
        "Pi ({}) = {} (N={})",
        Real::LABEL,
        format_sig(est.value.widen(), Real::sig_digits()),
        est.trials
    );
    println!("Runtime = {:.4} seconds", est.runtime.as_secs_f64());
}
