use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Rng type every simulation run uses unless the caller brings its own.
/// ChaCha output is portable, so a seed replays the same run on any platform.
pub type SimRng = ChaCha8Rng;

pub fn seeded_rng(seed: u64) -> SimRng {
    SimRng::seed_from_u64(seed)
}

/// Uniform integer in `[min, max)`. Panics if the range is empty.
pub fn rand_int_between<R: Rng + ?Sized>(rng: &mut R, min: u64, max: u64) -> u64 {
    rng.gen_range(min..max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn same_seed_same_sequence() {
        let mut rng1 = seeded_rng(42);
        let mut rng2 = seeded_rng(42);

        let vals1: Vec<u64> = (0..10).map(|_| rand_int_between(&mut rng1, 0, 1000)).collect();
        let vals2: Vec<u64> = (0..10).map(|_| rand_int_between(&mut rng2, 0, 1000)).collect();
        assert_eq!(vals1, vals2);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut rng1 = seeded_rng(42);
        let mut rng2 = seeded_rng(43);

        let vals1: Vec<u64> = (0..10).map(|_| rng1.gen()).collect();
        let vals2: Vec<u64> = (0..10).map(|_| rng2.gen()).collect();
        assert_ne!(vals1, vals2);
    }

    #[test_case(0, 1; "single value")]
    #[test_case(10, 1000; "block window")]
    #[test_case(60, 86400; "jail seconds")]
    fn stays_in_half_open_range(min: u64, max: u64) {
        let mut rng = seeded_rng(7);
        for _ in 0..1000 {
            let v = rand_int_between(&mut rng, min, max);
            assert!(v >= min && v < max, "{v} not in [{min}, {max})");
        }
    }

    #[test]
    fn works_through_dyn_rng() {
        let mut rng = seeded_rng(1);
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        let v = rand_int_between(dyn_rng, 5, 6);
        assert_eq!(v, 5);
    }

    #[test]
    #[should_panic]
    fn empty_range_panics() {
        let mut rng = seeded_rng(1);
        rand_int_between(&mut rng, 5, 5);
    }
}
