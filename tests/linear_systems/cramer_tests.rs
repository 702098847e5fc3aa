//! tests for cramer's rule
use approx::assert_relative_eq;
use eqsolve::linear_systems::cramer::{cramer, determinant};
use eqsolve::linear_systems::{CramerError, LinearSystemError, Matrix};

type TestResult = Result<(), CramerError>;

#[test]
fn solves_sample_system() -> TestResult {
    let a = Matrix::from_rows(&[[2.0, -1.0, 1.0], [3.0, 3.0, 9.0], [3.0, 3.0, 5.0]])?;
    let b = [2.0, -1.0, 4.0];
    let x = cramer(&a, &b)?;

    assert_relative_eq!(x[0], 20.0 / 9.0, epsilon = 1e-12);
    assert_relative_eq!(x[1], 43.0 / 36.0, epsilon = 1e-12);
    assert_relative_eq!(x[2], -1.25, epsilon = 1e-12);
    assert!(a.max_residual(&x, &b)? < 1e-8);
    Ok(())
}

#[test]
fn determinant_of_sample() -> TestResult {
    let a = Matrix::from_rows(&[[2.0, -1.0, 1.0], [3.0, 3.0, 9.0], [3.0, 3.0, 5.0]])?;
    assert_relative_eq!(determinant(&a), -36.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn singular_is_rejected() -> TestResult {
    let a   = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]])?;
    let err = cramer(&a, &[3.0, 6.0]).unwrap_err();

    assert!(matches!(err, CramerError::Singular { det } if det == 0.0));
    Ok(())
}

#[test]
fn near_singular_still_solved() -> TestResult {
    let a = Matrix::from_rows(&[[1.0, 1.0], [1.0, 1.0 + 1e-9]])?;
    let x = cramer(&a, &[2.0, 2.0 + 1e-9])?;

    assert!(determinant(&a) != 0.0);
    assert!(x.iter().all(|v| v.is_finite()));
    Ok(())
}

#[test]
fn does_not_mutate_inputs() -> TestResult {
    let a = Matrix::from_rows(&[[4.0, 1.0], [1.0, 3.0]])?;
    let b = vec![1.0, 2.0];
    let (a_before, b_before) = (a.clone(), b.clone());

    cramer(&a, &b)?;

    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
    Ok(())
}

#[test]
fn rejects_rhs_length_mismatch() -> TestResult {
    let a   = Matrix::identity(2)?;
    let err = cramer(&a, &[1.0]).unwrap_err();

    assert!(matches!(
        err,
        CramerError::Common(LinearSystemError::DimensionMismatch { expected: 2, got: 1 })
    ));
    Ok(())
}
