use num_bigint::BigUint;
use num_traits::One;
use persistence::PowerTable;

/// Reference implementation: plain repeated multiplication.
fn reference_power(base: u32, exponent: u32) -> BigUint {
    let mut value = BigUint::one();
    for _ in 0..exponent {
        value *= base;
    }
    value
}

#[test]
fn matches_repeated_multiplication() {
    let table = PowerTable::build(64);
    for base in 2..=9 {
        for exponent in 0..=64 {
            assert_eq!(
                *table.power(base, exponent),
                reference_power(base, exponent),
                "{base}^{exponent}"
            );
        }
    }
}

#[test]
fn zeroth_and_first_powers() {
    let table = PowerTable::build(8);
    for base in 2..=9u32 {
        assert_eq!(*table.power(base, 0), BigUint::one());
        assert_eq!(*table.power(base, 1), BigUint::from(base));
    }
}

#[test]
fn reports_build_depth() {
    assert_eq!(PowerTable::build(12).max_exponent(), 12);
    assert_eq!(PowerTable::build(0).max_exponent(), 0);
}
