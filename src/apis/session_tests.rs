use crate::apis::session::{InputMode, Session, SolveOutcome, SolveState};
use crate::constants_config::SolverConfig;
use crate::errors::KinematicsError;
use crate::quantities::{QuantityId, QuantitySet, QuantityValue};
use crate::solver::Branch;

fn launch_session() -> Session {
    let mut session = Session::new();
    session.set_quantity(QuantityId::InitialSpeed, 20.0);
    session.set_quantity(QuantityId::Acceleration, -9.8);
    session
}

#[test]
fn test_resolve_publishes_derived_values() {
    crate::init_test_logger();
    let mut session = launch_session();
    assert_eq!(session.resolve(), SolveOutcome::Solved);
    assert!(session.is_solved());
    assert_eq!(session.state(), SolveState::Solved);
    assert!(session.error_message().is_empty());

    assert_eq!(session.quantity(QuantityId::InitialSpeed), QuantityValue::Provided(20.0));
    for id in [
        QuantityId::FinalSpeed,
        QuantityId::Time,
        QuantityId::Range,
        QuantityId::MaxHeight,
        QuantityId::AbsMaxHeight,
        QuantityId::ApexTime,
    ] {
        assert!(matches!(session.quantity(id), QuantityValue::Derived(_)), "{} should be derived", id);
    }
}

#[test]
fn test_resolve_is_idempotent() {
    let mut session = launch_session();
    let first = session.resolve();
    let snapshot = session.quantities().clone();
    let second = session.resolve();
    assert_eq!(first, second);
    assert_eq!(&snapshot, session.quantities());
}

#[test]
fn test_failure_leaves_values_untouched() {
    let mut session = launch_session();
    assert!(session.resolve().is_solved());
    let before = session.quantities().clone();

    session.set_quantity(QuantityId::FinalSpeed, 30.0);
    let mut expected = before.clone();
    expected.set(QuantityId::FinalSpeed, 30.0);

    let outcome = session.resolve();
    assert!(matches!(outcome, SolveOutcome::ValidationError { .. }));
    assert!(!session.is_solved());
    assert_eq!(session.state(), SolveState::Error);
    assert_eq!(session.quantities(), &expected);
    assert_eq!(Some(session.error_message()), outcome.message());
}

#[test]
fn test_out_of_range_message() {
    let mut session = Session::new();
    session.set_quantity(QuantityId::InitialSpeed, 1500.0);
    let outcome = session.resolve();
    let message = outcome.message().unwrap();
    assert!(message.contains("initial_speed") && message.contains("1500") && message.contains("[1, 1000]"));
}

#[test]
fn test_missing_dependency_outcome() {
    let mut session = Session::new();
    session.set_quantity(QuantityId::VInitialI, 10.0);
    assert_eq!(
        session.try_resolve().unwrap_err(),
        KinematicsError::MissingDependency { quantity: QuantityId::VInitialI, dependency: QuantityId::VInitialJ }
    );
}

#[test]
fn test_inconsistent_speeds_outcome() {
    let mut session = Session::new();
    session.set_quantity(QuantityId::InitialSpeed, 10.0);
    session.set_quantity(QuantityId::FinalSpeed, 20.0);
    assert!(matches!(session.try_resolve(), Err(KinematicsError::InconsistentDualEntry { .. })));
}

#[test]
fn test_speed_contradicting_final_vector_is_rejected() {
    let mut session = Session::new();
    session.set_quantity(QuantityId::InitialSpeed, 10.0);
    session.set_quantity(QuantityId::VFinalI, 15.0);
    session.set_quantity(QuantityId::VFinalJ, 20.0);
    session.set_quantity(QuantityId::Acceleration, -10.0);
    assert!(matches!(session.resolve(), SolveOutcome::ValidationError { .. }));
    assert_eq!(session.quantity(QuantityId::FinalSpeed), QuantityValue::Unset);
}

#[test]
fn test_insufficient_inputs_outcome() {
    let mut session = Session::new();
    session.set_quantity(QuantityId::InitialSpeed, 20.0);
    session.set_quantity(QuantityId::Angle, 30.0);
    assert_eq!(
        session.try_resolve().unwrap_err(),
        KinematicsError::InsufficientInputs { scalar_count: 2, vector_count: 0 }
    );
}

#[test]
fn test_impossible_result_outcome() {
    let mut session = Session::new();
    session.set_quantity(QuantityId::Acceleration, -100.0);
    session.set_quantity(QuantityId::Time, 10.0);
    session.set_quantity(QuantityId::Range, 10.0);
    let outcome = session.resolve();
    assert!(matches!(outcome, SolveOutcome::ImpossibleResult { .. }));
    assert!(outcome.message().unwrap().contains("max_height"));
    assert!(!session.is_solved());
    assert_eq!(session.state(), SolveState::ImpossibleResult);
    assert_eq!(session.quantity(QuantityId::MaxHeight), QuantityValue::Unset);
}

#[test]
fn test_no_branch_for_underspecified_motion() {
    let mut session = Session::new();
    session.set_quantity(QuantityId::InitialSpeed, 20.0);
    session.set_quantity(QuantityId::FinalSpeed, 20.0);
    match session.try_resolve() {
        Err(KinematicsError::NoBranchMatched { unknowns }) => assert_eq!(unknowns.len(), 4),
        other => panic!("Expected NoBranchMatched, got {:?}", other),
    }
}

#[test]
fn test_acceleration_time_and_angle_solve() {
    let mut session = Session::new();
    session.set_quantity(QuantityId::Acceleration, -10.0);
    session.set_quantity(QuantityId::Time, 2.0);
    session.set_quantity(QuantityId::Angle, 30.0);

    assert!(session.resolve().is_solved());
    assert!(matches!(session.quantity(QuantityId::InitialSpeed), QuantityValue::Derived(_)));
    approx::assert_relative_eq!(session.value(QuantityId::InitialSpeed).unwrap(), 20.0, max_relative = 1e-9);
    approx::assert_relative_eq!(session.value(QuantityId::FinalSpeed).unwrap(), 20.0, max_relative = 1e-9);
    approx::assert_relative_eq!(session.value(QuantityId::MaxHeight).unwrap(), 5.0, max_relative = 1e-9);
    approx::assert_relative_eq!(session.value(QuantityId::Range).unwrap(), 20.0 * 3.0_f64.sqrt(), max_relative = 1e-9);
}

#[test]
fn test_vector_mode_solves_from_components() {
    let mut session = Session::new();
    session.switch_mode(InputMode::Vector);
    session.set_quantity(QuantityId::VInitialI, 15.0);
    session.set_quantity(QuantityId::VInitialJ, 20.0);
    session.set_quantity(QuantityId::Acceleration, -10.0);

    assert!(session.resolve().is_solved());
    assert!(matches!(session.quantity(QuantityId::InitialSpeed), QuantityValue::Derived(_)));
    approx::assert_relative_eq!(session.value(QuantityId::InitialSpeed).unwrap(), 25.0, max_relative = 1e-12);
    approx::assert_relative_eq!(session.value(QuantityId::Time).unwrap(), 4.0, max_relative = 1e-9);
    approx::assert_relative_eq!(session.value(QuantityId::MaxHeight).unwrap(), 20.0, max_relative = 1e-9);
    approx::assert_relative_eq!(session.value(QuantityId::Range).unwrap(), 60.0, max_relative = 1e-9);
}

#[test]
fn test_changing_inputs_clears_stale_derived_values() {
    let mut session = Session::new();
    session.set_quantity(QuantityId::VInitialI, 15.0);
    session.set_quantity(QuantityId::VInitialJ, 20.0);
    session.set_quantity(QuantityId::Acceleration, -10.0);
    assert!(session.resolve().is_solved());

    session.unset_quantity(QuantityId::VInitialI);
    session.unset_quantity(QuantityId::VInitialJ);
    session.set_quantity(QuantityId::Angle, 30.0);
    session.set_quantity(QuantityId::Time, 2.0);
    session.set_quantity(QuantityId::MaxHeight, 5.0);
    let solution = session.try_resolve().unwrap();
    assert_eq!(solution.branch, Branch::FinalSpeedInitialSpeedRange);
    // the old 25 m/s speed was derived, so it neither blocks selection nor survives publishing
    approx::assert_relative_eq!(session.value(QuantityId::InitialSpeed).unwrap(), 20.0, max_relative = 1e-9);
    assert_eq!(session.quantity(QuantityId::Time), QuantityValue::Provided(2.0));
}

#[test]
fn test_reset_and_mode_switch() {
    let mut session = launch_session();
    session.resolve();
    session.reset();
    assert_eq!(session.state(), SolveState::Idle);
    assert!(!session.is_solved());
    assert_eq!(session.quantities(), &QuantitySet::new());

    session.set_quantity(QuantityId::Time, 3.0);
    session.switch_mode(InputMode::Scalar);
    assert_eq!(session.value(QuantityId::Time), Some(3.0));
    session.switch_mode(InputMode::Forces);
    assert_eq!(session.mode(), InputMode::Forces);
    assert_eq!(session.value(QuantityId::Time), None);
}

#[test]
fn test_custom_config_is_used() {
    let mut session = Session::with_config(SolverConfig::new(Some(4), None, None));
    session.set_quantity(QuantityId::InitialSpeed, 20.0);
    session.set_quantity(QuantityId::Acceleration, -9.8);
    assert!(matches!(session.try_resolve(), Err(KinematicsError::InsufficientInputs { .. })));
}
