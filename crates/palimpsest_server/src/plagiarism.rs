//! Plagiarism score placeholder.

use rand::Rng;

/// Returns a stand-in plagiarism percentage.
///
/// This is a placeholder, not a real check: a uniform random figure in
/// [0, 15], rounded to two decimals.
pub fn simulate_plagiarism_check() -> f64 {
    let score: f64 = rand::thread_rng().gen_range(0.0..=15.0);
    (score * 100.0).round() / 100.0
}
