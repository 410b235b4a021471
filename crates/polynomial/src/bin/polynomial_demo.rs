// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomial demo CLI
//!
//! Builds a polynomial from its coefficients and prints its canonical rendering.

use clap::Parser;
use num_bigint::BigInt;
use tracing::{debug, Level};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use zpoly::{Polynomial, PolynomialError};

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Print a polynomial with integer coefficients, e.g. x^3 + 5x - 4."
)]
struct Args {
    /// Coefficients, constant term first
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = vec![BigInt::from(-4), BigInt::from(5), BigInt::from(0), BigInt::from(1)]
    )]
    coefficients: Vec<BigInt>,

    /// Also print the value of the polynomial at this point
    #[arg(long, allow_hyphen_values = true)]
    at: Option<BigInt>,

    /// Also print the polynomial with coefficients reduced modulo this value
    #[arg(long, allow_hyphen_values = true)]
    modulus: Option<BigInt>,

    /// Also print the coefficient form P:(c_n ... c_0)
    #[arg(long, default_value_t = false)]
    coefficient_form: bool,

    /// Log level
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
}

fn setup_simple_tracing(log_level: Level) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PolynomialError> {
    let args = Args::parse();
    setup_simple_tracing(args.log_level);

    let poly = Polynomial::new(args.coefficients);
    debug!(degree = poly.degree(), "built polynomial");

    println!("{poly}");

    if args.coefficient_form {
        println!("{}", poly.to_coefficient_string());
    }

    if let Some(x) = args.at {
        println!("p({x}) = {}", poly.evaluate(&x));
    }

    if let Some(modulus) = args.modulus {
        let reduced = poly.reduce_coefficients(&modulus)?;
        println!("p mod {modulus} = {reduced}");
    }

    Ok(())
}
