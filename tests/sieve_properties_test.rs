use proptest::prelude::*;
use stem_leaf_plot::{generate_primes, group_by_stem};

fn is_prime(n: u64) -> bool {
    n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

proptest! {
    #[test]
    fn prop_sieve_is_exactly_the_primes(limit in 0i64..5_000) {
        let primes = generate_primes(limit).unwrap();

        prop_assert!(primes.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(primes.iter().all(|&p| p <= limit as u64 && is_prime(p)));

        let expected = (2..=limit.max(1) as u64).filter(|&n| is_prime(n)).count();
        prop_assert_eq!(primes.len(), expected);
    }

    #[test]
    fn prop_negative_limits_fail(limit in i64::MIN..0) {
        prop_assert!(generate_primes(limit).is_err());
    }

    #[test]
    fn prop_every_value_lands_under_its_stem(numbers in prop::collection::vec(0u64..100_000, 0..200)) {
        let map = group_by_stem(&numbers);

        for &n in &numbers {
            let leaves = map.leaves(n / 10);
            prop_assert!(leaves.is_some_and(|l| l.contains(&(n % 10))));
        }

        let total: usize = map.iter().map(|(_, leaves)| leaves.len()).sum();
        prop_assert_eq!(total, numbers.len());
        prop_assert!(map.iter().all(|(_, leaves)| leaves.iter().all(|&leaf| leaf < 10)));
    }

    #[test]
    fn prop_leaves_keep_input_order(numbers in prop::collection::vec(0u64..1_000, 0..100)) {
        let map = group_by_stem(&numbers);
        for (stem, leaves) in map.iter() {
            let expected: Vec<u64> = numbers
                .iter()
                .filter(|&&n| n / 10 == stem)
                .map(|&n| n % 10)
                .collect();
            prop_assert_eq!(leaves, expected.as_slice());
        }
    }
}
