//! Random sampling helpers shared by every generator.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Build the run RNG.
///
/// With a seed the run is reproducible; without one it is seeded from OS
/// entropy so consecutive runs differ.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Pick one entry of a non-empty vocabulary table.
///
/// Panics on an empty slice; callers only pass the fixed tables from
/// [`crate::vocab`] or collections they have checked.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    items
        .choose(rng)
        .expect("vocabulary tables are never empty")
}

/// Uniform integer in `[lo, hi]`, with `hi` clamped up to `lo`.
///
/// Derived ranges such as `route_count / 10` can fall below their floor on
/// small devices; those collapse to the floor instead of failing.
pub fn rand_between<R: Rng + ?Sized>(rng: &mut R, lo: i64, hi: i64) -> i64 {
    if hi <= lo {
        lo
    } else {
        rng.gen_range(lo..=hi)
    }
}

/// Uniform float in `[lo, hi]`, with `hi` clamped up to `lo`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        lo
    } else {
        rng.gen_range(lo..=hi)
    }
}

/// Random dotted-quad address in `10.0.0.0/8`, each octet in 1..=254.
pub fn random_ten_net_ip<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "10.{}.{}.{}",
        rng.gen_range(1..=254),
        rng.gen_range(1..=254),
        rng.gen_range(1..=254)
    )
}

/// Round to `digits` decimal places.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rand_between_clamps_inverted_range() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(rand_between(&mut rng, 100, 60), 100);
        for _ in 0..100 {
            let v = rand_between(&mut rng, 5, 10);
            assert!((5..=10).contains(&v));
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = rng_from_seed(Some(7));
        let mut b = rng_from_seed(Some(7));
        let xs: Vec<u32> = (0..5).map(|_| a.gen()).collect();
        let ys: Vec<u32> = (0..5).map(|_| b.gen()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(0.123456, 4), 0.1235);
    }

    #[test]
    fn test_random_ten_net_ip() {
        let mut rng = StdRng::seed_from_u64(42);
        let ip: std::net::Ipv4Addr = random_ten_net_ip(&mut rng).parse().unwrap();
        assert_eq!(ip.octets()[0], 10);
    }
}
