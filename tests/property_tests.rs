use mortgage_calc::application::engine::MortgageEngine;
use mortgage_calc::domain::insurance::premium_rate;
use mortgage_calc::error::MortgageError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::thread;

mod common;

#[test]
fn test_every_valid_application_has_positive_payment() {
    let engine = MortgageEngine::new();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..2000 {
        let application = common::valid_application(&mut rng);
        let result = engine
            .calculate_payment(&application)
            .unwrap_or_else(|e| panic!("{application:?} rejected: {e}"));
        assert!(result.payment > Decimal::ZERO, "{application:?}");
        assert_eq!(result.payment, result.payment.round_dp(2));
    }
}

#[test]
fn test_premium_tiers_are_exhaustive_and_exclusive() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..5000 {
        let ratio = Decimal::new(rng.gen_range(0..10_000), 4);
        let in_tiers = [
            ratio < dec!(0.10),
            ratio >= dec!(0.10) && ratio < dec!(0.15),
            ratio >= dec!(0.15) && ratio < dec!(0.20),
        ];
        let matching = in_tiers.iter().filter(|hit| **hit).count();

        if ratio < dec!(0.2) {
            assert_eq!(matching, 1, "ratio {ratio}");
            assert!(premium_rate(ratio) > Decimal::ZERO);
        } else {
            assert_eq!(matching, 0, "ratio {ratio}");
            assert_eq!(premium_rate(ratio), Decimal::ZERO);
        }
    }
}

#[test]
fn test_insured_loans_pay_more_than_uninsured_principal() {
    let engine = MortgageEngine::new();
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..500 {
        let application = common::valid_application(&mut rng);
        let request = engine.validate(&application).unwrap();
        let premium = engine.insurance_premium(&request);

        if request.down_payment_ratio() >= dec!(0.2) {
            assert_eq!(premium, Decimal::ZERO);
        } else {
            assert!(premium > Decimal::ZERO);
            assert!(premium <= request.mortgage_amount() * dec!(0.04));
        }
    }
}

#[test]
fn test_calculation_is_idempotent() {
    let engine = MortgageEngine::new();
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..200 {
        let application = common::valid_application(&mut rng);
        let first = engine.calculate_payment(&application).unwrap();
        let second = engine.calculate_payment(&application).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_concurrent_callers_agree() {
    let engine = MortgageEngine::new();
    let mut rng = StdRng::seed_from_u64(13);
    let application = common::valid_application(&mut rng);
    let expected = engine.calculate_payment(&application).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let application = application.clone();
            thread::spawn(move || engine.calculate_payment(&application).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_validation_errors_are_deterministic() {
    let engine = MortgageEngine::new();
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..200 {
        let mut application = common::valid_application(&mut rng);
        application.down_payment = application.property_price * dec!(0.9);

        let first = engine.calculate_payment(&application);
        let second = engine.calculate_payment(&application);
        match (first, second) {
            (Err(MortgageError::Validation(a)), Err(MortgageError::Validation(b))) => {
                assert_eq!(a, b);
                assert!(a.starts_with("Down payment must be less than 80%"));
            }
            other => panic!("expected two validation errors, got {other:?}"),
        }
    }
}
