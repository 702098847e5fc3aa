//! tests for jacobi iteration
use eqsolve::linear_systems::algorithms::Algorithm;
use eqsolve::linear_systems::jacobi::jacobi;
use eqsolve::linear_systems::{IterativeCfg, IterativeError, LinearSystemError, Matrix};

type TestResult = Result<(), IterativeError>;

fn dominant_system() -> Result<(Matrix, Vec<f64>), LinearSystemError> {
    let a = Matrix::from_rows(&[
        [ 4.0, -1.0,  0.0,  0.0],
        [-1.0,  4.0, -1.0,  0.0],
        [ 0.0, -1.0,  4.0, -1.0],
        [ 0.0,  0.0, -1.0,  3.0],
    ])?;
    Ok((a, vec![15.0, 10.0, 10.0, 10.0]))
}

#[test]
fn converges_on_dominant_system() -> TestResult {
    let (a, b) = dominant_system()?;
    let rep = jacobi(&a, &b, &[0.0; 4], IterativeCfg::new())?;

    assert_eq!(rep.algorithm(), "jacobi");
    assert!(rep.iterations() <= 100);
    assert!(rep.max_delta() < IterativeCfg::DEFAULT_TOL);
    for xi in rep.solution() {
        assert!((xi - 5.0).abs() < 1e-9, "xi = {xi}");
    }
    assert!(a.max_residual(rep.solution(), &b)? < 1e-8);
    Ok(())
}

#[test]
fn exact_guess_converges_in_one_sweep() -> TestResult {
    let (a, b) = dominant_system()?;
    let rep = jacobi(&a, &b, &[5.0; 4], IterativeCfg::new())?;

    assert_eq!(rep.iterations(), 1);
    assert_eq!(rep.into_solution(), vec![5.0; 4]);
    Ok(())
}

#[test]
fn budget_exhausted() -> TestResult {
    let (a, b) = dominant_system()?;
    let cfg = IterativeCfg::new().with_max_iter(3);
    let err = jacobi(&a, &b, &[0.0; 4], cfg).unwrap_err();

    assert!(matches!(
        err,
        IterativeError::DidNotConverge { algorithm: Algorithm::Jacobi, iterations: 3, .. }
    ));
    Ok(())
}

#[test]
fn diverges_without_dominance() -> TestResult {
    let a   = Matrix::from_rows(&[[1.0, 2.0], [3.0, 1.0]])?;
    let err = jacobi(&a, &[1.0, 1.0], &[0.0, 0.0], IterativeCfg::new()).unwrap_err();

    assert!(matches!(err, IterativeError::DidNotConverge { iterations: 100, .. }));
    Ok(())
}

#[test]
fn zero_diagonal_unchecked_never_converges() -> TestResult {
    let a   = Matrix::from_rows(&[[0.0, 1.0], [1.0, 2.0]])?;
    let cfg = IterativeCfg::new().with_max_iter(10);
    let err = jacobi(&a, &[1.0, 1.0], &[0.0, 0.0], cfg).unwrap_err();

    assert!(matches!(err, IterativeError::DidNotConverge { iterations: 10, max_delta, .. } if max_delta.is_nan()));
    Ok(())
}

#[test]
fn strict_rejects_zero_diagonal() -> TestResult {
    let a   = Matrix::from_rows(&[[0.0, 1.0], [1.0, 2.0]])?;
    let cfg = IterativeCfg::new().with_strict(true);
    let err = jacobi(&a, &[1.0, 1.0], &[0.0, 0.0], cfg).unwrap_err();

    assert!(matches!(
        err,
        IterativeError::Common(LinearSystemError::ZeroDiagonal { row: 0, .. })
    ));
    Ok(())
}

#[test]
fn rejects_invalid_config() -> TestResult {
    let (a, b) = dominant_system()?;
    let x0 = [0.0; 4];

    let err = jacobi(&a, &b, &x0, IterativeCfg::new().with_tol(0.0)).unwrap_err();
    assert!(matches!(err, IterativeError::Common(LinearSystemError::InvalidTolerance { .. })));

    let err = jacobi(&a, &b, &x0, IterativeCfg::new().with_tol(f64::NAN)).unwrap_err();
    assert!(matches!(err, IterativeError::Common(LinearSystemError::InvalidTolerance { .. })));

    let err = jacobi(&a, &b, &x0, IterativeCfg::new().with_max_iter(0)).unwrap_err();
    assert!(matches!(err, IterativeError::Common(LinearSystemError::InvalidMaxIter { got: 0 })));
    Ok(())
}

#[test]
fn rejects_guess_length_mismatch() -> TestResult {
    let (a, b) = dominant_system()?;
    let err = jacobi(&a, &b, &[0.0; 3], IterativeCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        IterativeError::Common(LinearSystemError::DimensionMismatch { expected: 4, got: 3 })
    ));
    Ok(())
}

#[test]
fn default_budget_matches_algorithm() {
    let cfg = IterativeCfg::default();
    assert_eq!(Algorithm::Jacobi.default_max_iter(), Some(IterativeCfg::DEFAULT_MAX_ITER));
    assert_eq!(Algorithm::Jacobi.default_max_iter(), Some(cfg.max_iter()));
    assert_eq!(Algorithm::GaussSeidel.default_max_iter(), Some(cfg.max_iter()));
    assert_eq!(Algorithm::Cramer.default_max_iter(), None);
    assert!(Algorithm::Jacobi.is_iterative());
    assert!(!Algorithm::LuDecomposition.is_iterative());
    assert_eq!(cfg.tol(), 1e-10);
    assert_eq!(Algorithm::GaussJordan.to_string(), "gauss_jordan");
}
