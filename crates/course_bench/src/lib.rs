//! Seeded fixtures for the table benchmarks.

use course_core::CourseRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `n` ids drawn from `100_000..1_000_000`, reproducible for a given seed.
pub fn random_ids(n: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| rng.random_range(100_000u32..1_000_000).to_string())
        .collect()
}

/// Distinct sequential ids; `seed` only shuffles the prerequisite links.
pub fn catalog(n: usize, seed: u64) -> Vec<CourseRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let prereq = if i > 0 { rng.random_range(0..i).to_string() } else { String::new() };
            CourseRecord::new(i.to_string(), format!("Course {i}")).with_prerequisites(prereq, "")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_reproducible() {
        assert_eq!(random_ids(10, 1), random_ids(10, 1));
        let c = catalog(50, 3);
        assert_eq!(c.len(), 50);
        assert!(c[0].prerequisite1.is_empty());
        assert!(c.iter().skip(1).all(|r| !r.prerequisite1.is_empty()));
    }
}
