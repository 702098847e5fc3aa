//! tests for the bisection root finding algorithm
use eqsolve::root_finding::common::{RootFindingError, ToleranceReason};
use eqsolve::root_finding::bisection::{bisection, BisectionCfg, BisectionError};

type TestResult = Result<(), BisectionError>;

#[test]
fn finds_cubic_root() -> TestResult {
    let f   = |x: f64| x * x * x - x - 2.0;
    let res = bisection(f, 1.0, 2.0, BisectionCfg::new())?;

    assert!((res.root - 1.521_379_706_8).abs() < 1e-9);
    assert!(f(res.root).abs() < 1e-10);
    assert_eq!(res.tolerance, ToleranceReason::AbsFxReached);
    assert_eq!(res.iterations, 33);
    assert_eq!(res.evals, 35);
    assert_eq!(res.algorithm, "bisection");
    Ok(())
}

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let tol = 1e-10;

    let cfg = BisectionCfg::new()
        .with_tol(tol)
        .with_max_iter(60);

    let res = bisection(f, 0.0, 2.0, cfg)?;

    assert!((res.root - 2.0_f64.sqrt()).abs() <= tol);
    assert!(res.iterations > 0);
    let (left, right) = res.bracket();
    assert!(left <= res.root && res.root <= right);
    Ok(())
}

#[test]
fn finds_negative_5() -> TestResult {
    let f   = |x: f64| x + 5.0;
    let res = bisection(f, -10.0, 0.0, BisectionCfg::new())?;

    // -5 is the first midpoint
    assert_eq!(res.root, -5.0);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.tolerance, ToleranceReason::AbsFxReached);
    Ok(())
}

#[test]
fn width_tolerance_on_discontinuity() -> TestResult {
    let f   = |x: f64| if x < 0.3 { -1.0 } else { 1.0 };
    let tol = 1e-6;
    let cfg = BisectionCfg::new().with_tol(tol);
    let res = bisection(f, 0.0, 1.0, cfg)?;

    assert_eq!(res.tolerance, ToleranceReason::WidthTolReached);
    assert!((res.root - 0.3).abs() < 2.0 * tol);
    assert!((res.right - res.left) / 2.0 < tol);
    Ok(())
}

#[test]
fn no_sign_change_fails_before_iterating() -> TestResult {
    let mut calls = 0;
    let f = |x: f64| { calls += 1; x * x + 1.0 };
    let err = bisection(f, -1.0, 1.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(err, BisectionError::NoSignChange { a, b, .. } if a == -1.0 && b == 1.0));
    assert_eq!(calls, 2);
    Ok(())
}

#[test]
fn endpoint_root_is_no_sign_change() -> TestResult {
    let f   = |x: f64| x;
    let err = bisection(f, 0.0, 5.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(err, BisectionError::NoSignChange { fa, .. } if fa == 0.0));
    Ok(())
}

#[test]
fn budget_exhausted() -> TestResult {
    let f   = |x: f64| x - 1.0 / 3.0;
    let cfg = BisectionCfg::new()
        .with_tol(1e-12)
        .with_max_iter(10);
    let err = bisection(f, 0.0, 1.0, cfg).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::DidNotConverge { iterations: 10, last } if (last - 1.0 / 3.0).abs() < 1e-3
    ));
    Ok(())
}

#[test]
fn non_finite_eval() -> TestResult {
    let f   = |x: f64| x.sqrt() - 2.0;
    let err = bisection(f, -1.0, 5.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::Common(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == -1.0 && fx.is_nan()));
    Ok(())
}

#[test]
fn detects_invalid_bounds() -> TestResult {
    let f = |x: f64| x;

    let err = bisection(f, 2.0, 0.0, BisectionCfg::new()).unwrap_err();
    assert!(matches!(err, BisectionError::InvalidBounds { a: _, b: _ }));

    let err = bisection(f, f64::NAN, 1.0, BisectionCfg::new()).unwrap_err();
    assert!(matches!(err, BisectionError::InvalidBounds { .. }));
    Ok(())
}

#[test]
fn rejects_invalid_config() -> TestResult {
    let f = |x: f64| x;

    let err = bisection(f, -1.0, 2.0, BisectionCfg::new().with_tol(0.0)).unwrap_err();
    assert!(matches!(err, BisectionError::Common(RootFindingError::InvalidTolerance { .. })));

    let err = bisection(f, -1.0, 2.0, BisectionCfg::new().with_tol(f64::INFINITY)).unwrap_err();
    assert!(matches!(err, BisectionError::Common(RootFindingError::InvalidTolerance { .. })));

    let err = bisection(f, -1.0, 2.0, BisectionCfg::new().with_max_iter(0)).unwrap_err();
    assert!(matches!(err, BisectionError::Common(RootFindingError::InvalidMaxIter { got: 0 })));
    Ok(())
}

#[test]
fn defaults() {
    let cfg = BisectionCfg::default();
    assert_eq!(cfg.tol(), 1e-10);
    assert_eq!(cfg.max_iter(), 100);
}

#[test]
fn reruns_are_bit_identical() -> TestResult {
    let f  = |x: f64| x.cos() - x;
    let r1 = bisection(f, 0.0, 1.0, BisectionCfg::new())?;
    let r2 = bisection(f, 0.0, 1.0, BisectionCfg::new())?;

    assert_eq!(r1.root.to_bits(), r2.root.to_bits());
    assert_eq!(r1.iterations, r2.iterations);
    Ok(())
}
