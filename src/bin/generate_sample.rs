use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Chen", "Dana", "Emeka", "Farah", "Gus", "Hana", "Ivan", "Jia", "Kofi",
    "Lena", "Mateo", "Nora", "Omar", "Priya", "Quinn", "Rosa", "Sami", "Tariq",
];
const CLASSES: &[(&str, f64, f64)] = &[("A", 78.0, 8.0), ("B", 70.0, 11.0), ("C", 64.0, 14.0)];

#[derive(Serialize)]
struct StudentRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Grade")]
    grade: f64,
    #[serde(rename = "Class")]
    class: &'static str,
}

/// Minimal deterministic PRNG: xoshiro256** (Blackman & Vigna, 2018), with
/// the state seeded by an LCG.
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_grades.csv"));

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;

    let mut rows = 0;
    for (c, &(class, mean, spread)) in CLASSES.iter().enumerate() {
        for (i, first) in FIRST_NAMES.iter().enumerate() {
            let grade = rng.gauss(mean, spread).clamp(0.0, 100.0);
            writer.serialize(StudentRow {
                name: format!("{first} {}", (b'A' + ((i + c * 7) % 26) as u8) as char),
                grade: (grade * 10.0).round() / 10.0,
                class,
            })?;
            rows += 1;
        }
    }
    writer.flush().context("flushing CSV writer")?;

    log::info!("Wrote {rows} students to {}", path.display());
    println!("Wrote {rows} students to {}", path.display());
    Ok(())
}
