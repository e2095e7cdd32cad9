use persistence::{Composition, Evaluator, PowerTable};

fn composition(twos: u32, threes: u32, sevens: u32, eights: u32, nines: u32) -> Composition {
    Composition {
        twos,
        threes,
        sevens,
        eights,
        nines,
    }
}

#[test]
fn two_three_collapses_in_one_step() {
    // 23 -> 6, single digit after one multiplication.
    let powers = PowerTable::build(16);
    let mut evaluator = Evaluator::new();
    let c = composition(1, 1, 0, 0, 0);
    assert_eq!(evaluator.evaluate(&c, &powers), 1);
    assert_eq!(evaluator.trace(&c, &powers), (1, vec!["23".to_string()]));
}

#[test]
fn single_digit_candidate_still_takes_one_step() {
    // The first multiplication always runs, so 7 -> 7 counts one step.
    let powers = PowerTable::build(16);
    let mut evaluator = Evaluator::new();
    assert_eq!(evaluator.evaluate(&composition(0, 0, 1, 0, 0), &powers), 1);
}

#[test]
fn record_number_reproduces_published_chain() {
    let powers = PowerTable::build(16);
    let mut evaluator = Evaluator::new();
    let c = composition(1, 0, 6, 6, 2);

    assert_eq!(evaluator.evaluate(&c, &powers), 11);

    let (steps, chain) = evaluator.trace(&c, &powers);
    assert_eq!(steps, 11);
    let expected = [
        "277777788888899",
        "4996238671872",
        "438939648",
        "4478976",
        "338688",
        "27648",
        "2688",
        "768",
        "336",
        "54",
        "20",
    ];
    assert_eq!(chain, expected);
}

#[test]
fn zero_digit_terminates_next_step() {
    // 78 -> 56 -> 30; the 0 digit makes the third product zero, so the
    // chain ends with two clean multiplications plus the zeroed one.
    let powers = PowerTable::build(16);
    let mut evaluator = Evaluator::new();
    let c = composition(0, 0, 1, 1, 0);

    let (steps, chain) = evaluator.trace(&c, &powers);
    assert_eq!(steps, 3);
    assert_eq!(chain, ["78", "56", "30"]);
}

#[test]
fn compositions_without_twos_or_threes_are_evaluated() {
    // 77 -> 49 -> 36 -> 18 -> 8.
    let powers = PowerTable::build(16);
    let mut evaluator = Evaluator::new();
    let c = composition(0, 0, 2, 0, 0);

    let (steps, chain) = evaluator.trace(&c, &powers);
    assert_eq!(steps, 4);
    assert_eq!(chain, ["77", "49", "36", "18"]);
}

#[test]
fn stripping_the_first_step_decrements_the_count() {
    let powers = PowerTable::build(16);
    let mut evaluator = Evaluator::new();
    let cases = [
        composition(1, 0, 6, 6, 2),
        composition(0, 0, 2, 0, 0),
        composition(0, 0, 1, 1, 0),
        composition(2, 1, 3, 2, 1),
    ];
    for c in cases {
        let steps = evaluator.evaluate(&c, &powers);
        assert!(steps > 1, "case should be multi-step: {c}");
        let first = evaluator.initial_product(&c, &powers);
        assert_eq!(evaluator.persistence_of(&first, &powers), steps - 1);
    }
}

#[test]
fn fast_and_verbose_paths_agree() {
    let powers = PowerTable::build(16);
    let mut evaluator = Evaluator::new();
    for c in [
        composition(1, 0, 6, 6, 2),
        composition(0, 1, 0, 2, 4),
        composition(2, 0, 5, 1, 3),
    ] {
        let fast = evaluator.evaluate(&c, &powers);
        let again = evaluator.evaluate(&c, &powers);
        let (verbose, chain) = evaluator.trace(&c, &powers);
        assert_eq!(fast, again);
        assert_eq!(fast, verbose);
        assert_eq!(chain.len() as u32, verbose, "one chain line per step");
    }
}
