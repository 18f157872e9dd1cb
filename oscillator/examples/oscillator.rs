use std::f64::consts::PI;

use common::{system::QuantumSystem, vector::Vector};
use oscillator::{system::Oscillator, wavefunction::try_harm_osc_wavefunction};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let oscillator = Oscillator::build()
        .omega(2.0 * PI * 6.5)
        .truncated_dim(10)
        .finalize()?;
    println!("{oscillator}");
    println!("eigenvalues: {:?}", oscillator.eigenvals_default());

    let losc = 1.0;
    let x = Vector::<f64, 21>::linspace(-4.0 * losc, 4.0 * losc);
    for n in 0..3 {
        let psi = try_harm_osc_wavefunction(n, &x, losc)?;
        println!("psi_{n}:");
        for (x_k, psi_k) in x.iter().zip(psi.iter()) {
            println!("{x_k:>6.2} {psi_k:>10.6}");
        }
    }

    Ok(())
}
