use crate::error::Result;
use rand::Rng;
use rand::prelude::SeedableRng;
use rand_pcg::Pcg64;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs `task` `count` times, each with its own generator seeded from `rng`.
///
/// Seeds are drawn up front in order, so results are identical whether the
/// tasks run sequentially or on the rayon pool.
pub(crate) fn map_seeded<R, T, F>(rng: &mut R, count: usize, task: F) -> Result<Vec<T>>
where
    R: Rng,
    T: Send,
    F: Fn(&mut Pcg64) -> Result<T> + Sync + Send,
{
    let seeds: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    #[cfg(feature = "parallel")]
    let results = seeds
        .into_par_iter()
        .map(|seed| task(&mut Pcg64::seed_from_u64(seed)))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let results = seeds
        .into_iter()
        .map(|seed| task(&mut Pcg64::seed_from_u64(seed)))
        .collect();

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_same_master_seed_gives_same_outputs() {
        let draw = |seed| {
            let mut rng = Pcg64::seed_from_u64(seed);
            map_seeded(&mut rng, 8, |r| Ok(r.random_range(0..1000u32))).unwrap()
        };
        assert_eq!(draw(3), draw(3));
        assert_ne!(draw(3), draw(4));
    }

    #[test]
    fn test_outputs_follow_the_sequential_seed_stream() {
        // Tasks consume a varying number of draws, so any reordering of seeds
        // between the sequential and rayon paths would show up here.
        let task = |r: &mut Pcg64| {
            let draws = r.random_range(1..6);
            Ok((0..draws).map(|_| r.random_range(0..1000u32)).collect::<Vec<_>>())
        };

        let mut master = Pcg64::seed_from_u64(17);
        let actual = map_seeded(&mut master, 300, task).unwrap();

        let mut reference = Pcg64::seed_from_u64(17);
        let expected: Vec<Vec<u32>> = (0..300)
            .map(|_| reference.random::<u64>())
            .collect::<Vec<_>>()
            .into_iter()
            .map(|seed| task(&mut Pcg64::seed_from_u64(seed)).unwrap())
            .collect();
        assert_eq!(actual, expected);

        // The master generator advanced by exactly one draw per task.
        assert_eq!(master.random::<u64>(), reference.random::<u64>());
    }

    #[test]
    fn test_first_error_is_returned() {
        let mut rng = Pcg64::seed_from_u64(0);
        let result: Result<Vec<u32>> = map_seeded(&mut rng, 4, |_| Err(Error::DegenerateCandidate));
        assert!(matches!(result, Err(Error::DegenerateCandidate)));
    }
}
