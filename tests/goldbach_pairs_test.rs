use goldbach_viz::{goldbach_pairs, goldbach_pairs_with, is_prime, PrimePair, Sieve};

#[test]
fn test_primality_known_values() {
    assert!(is_prime(2));
    assert!(!is_prime(4));
    assert!(is_prime(17));
    assert!(!is_prime(1));
    assert!(!is_prime(0));
    assert!(!is_prime(-5));
}

#[test]
fn test_documented_pair_lists() {
    assert_eq!(goldbach_pairs(4), vec![PrimePair::new(2, 2)]);
    assert_eq!(
        goldbach_pairs(10),
        vec![PrimePair::new(3, 7), PrimePair::new(5, 5)]
    );

    let hundred = goldbach_pairs(100);
    assert_eq!(hundred.len(), 6);
    assert!(hundred.contains(&PrimePair::new(3, 97)));
    assert!(hundred.contains(&PrimePair::new(11, 89)));
}

/// 在測試範圍內每個偶數都至少有一組質數對
#[test]
fn test_every_even_number_has_a_pair() {
    let sieve = Sieve::new(20_000);
    for n in (4..=20_000).step_by(2) {
        let pairs = goldbach_pairs_with(&sieve, n);
        assert!(!pairs.is_empty(), "Goldbach counterexample at {}", n);
        for pair in &pairs {
            assert_eq!(pair.first + pair.second, n);
            assert!(pair.first <= pair.second);
            assert!(is_prime(pair.first) && is_prime(pair.second));
        }
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let first = goldbach_pairs(1_000);
    let second = goldbach_pairs(1_000);
    assert_eq!(first, second);
    assert_eq!(first.len(), 28);
}
