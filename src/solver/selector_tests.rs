use std::collections::HashSet;
use std::f64::consts::FRAC_PI_6;
use crate::assert_float_eq;
use crate::constants_config::SolverConfig;
use crate::errors::KinematicsError;
use crate::quantities::{QuantityId, QuantitySet};
use crate::solver::{normalize, select, Branch, Control, UnknownMask};

fn set_with(values: &[(QuantityId, f64)]) -> QuantitySet {
    let mut set = QuantitySet::new();
    for &(id, value) in values {
        set.set(id, value);
    }
    set
}

#[test]
fn test_branches_cover_every_three_of_six_combination() {
    let masks: HashSet<_> = Branch::ALL.iter().map(|b| b.mask().controls()).collect();
    assert_eq!(masks.len(), 20);
    for branch in Branch::ALL {
        assert_eq!(branch.mask().len(), 3, "{:?} must solve for three quantities", branch);
        assert_eq!(Branch::for_unknowns(branch.mask()), Some(branch));
    }
}

#[test]
fn test_priority_order_starts_with_time_max_height_range() {
    assert_eq!(Branch::ALL[0], Branch::TimeMaxHeightRange);
    assert_eq!(Branch::ALL[19], Branch::InitialSpeedFinalSpeedAcceleration);
}

#[test]
fn test_mask_ignores_order() {
    let a = UnknownMask::of([Control::Range, Control::Time, Control::MaxHeight]);
    let b = UnknownMask::of([Control::Time, Control::MaxHeight, Control::Range]);
    assert_eq!(a, b);
    assert_eq!(Branch::for_unknowns(a), Some(Branch::TimeMaxHeightRange));
    assert_eq!(Branch::for_unknowns(UnknownMask::of([Control::Time])), None);
}

#[test]
fn test_theta_from_angle_in_degrees() {
    let set = set_with(&[(QuantityId::Angle, 30.0)]);
    let state = normalize(&set, &SolverConfig::default());
    assert_float_eq(state.theta, FRAC_PI_6, 1e-12, None);
}

#[test]
fn test_theta_prefers_initial_vector() {
    let set = set_with(&[
        (QuantityId::Angle, 30.0),
        (QuantityId::VInitialI, 10.0),
        (QuantityId::VInitialJ, 10.0),
    ]);
    let state = normalize(&set, &SolverConfig::default());
    assert_float_eq(state.theta, std::f64::consts::FRAC_PI_4, 1e-12, None);
}

#[test]
fn test_theta_falls_back_to_final_vector() {
    let set = set_with(&[(QuantityId::VFinalI, 3.0_f64.sqrt()), (QuantityId::VFinalJ, 1.0)]);
    let state = normalize(&set, &SolverConfig::default());
    assert_float_eq(state.theta, FRAC_PI_6, 1e-12, None);
}

#[test]
fn test_vector_supplies_both_speeds() {
    let set = set_with(&[
        (QuantityId::VInitialI, 3.0),
        (QuantityId::VInitialJ, 4.0),
        (QuantityId::Acceleration, -9.8),
    ]);
    let state = normalize(&set, &SolverConfig::default());
    assert_eq!(state.get(Control::InitialSpeed), Some(5.0));
    assert_eq!(state.get(Control::FinalSpeed), Some(5.0));
    assert!(state.is_derived(Control::InitialSpeed));
    assert_eq!(select(&state).unwrap(), Branch::TimeMaxHeightRange);
}

#[test]
fn test_lone_speed_is_mirrored_only_when_needed() {
    let two_known = set_with(&[(QuantityId::InitialSpeed, 20.0), (QuantityId::Acceleration, -9.8)]);
    let state = normalize(&two_known, &SolverConfig::default());
    assert_eq!(state.get(Control::FinalSpeed), Some(20.0));
    assert_eq!(select(&state).unwrap(), Branch::TimeMaxHeightRange);

    let three_known = set_with(&[
        (QuantityId::InitialSpeed, 20.0),
        (QuantityId::Acceleration, -9.8),
        (QuantityId::Time, 2.0),
    ]);
    let state = normalize(&three_known, &SolverConfig::default());
    assert_eq!(state.get(Control::FinalSpeed), None);
    assert_eq!(select(&state).unwrap(), Branch::RangeFinalSpeedMaxHeight);
}

#[test]
fn test_mirroring_can_be_disabled() {
    let set = set_with(&[(QuantityId::InitialSpeed, 20.0), (QuantityId::Acceleration, -9.8)]);
    let config = SolverConfig::new(None, None, Some(false));
    let state = normalize(&set, &config);
    match select(&state) {
        Err(KinematicsError::NoBranchMatched { unknowns }) => assert_eq!(
            unknowns,
            vec![QuantityId::FinalSpeed, QuantityId::Time, QuantityId::Range, QuantityId::MaxHeight]
        ),
        other => panic!("Expected NoBranchMatched, got {:?}", other),
    }
}

#[test]
fn test_overdetermined_input_matches_no_branch() {
    let set = set_with(&[
        (QuantityId::InitialSpeed, 20.0),
        (QuantityId::FinalSpeed, 20.0),
        (QuantityId::Acceleration, -9.8),
        (QuantityId::Time, 2.9),
        (QuantityId::Range, 40.0),
        (QuantityId::MaxHeight, 10.0),
    ]);
    let state = normalize(&set, &SolverConfig::default());
    assert!(state.unknowns().is_empty());
    assert_eq!(select(&state), Err(KinematicsError::NoBranchMatched { unknowns: vec![] }));
}

#[test]
fn test_speed_derived_from_angle_and_two_knowns() {
    // v = 20, θ = 30°, a = -10 gives t = 2, R = 20√3, H = 5
    let range = 20.0 * 3.0_f64.sqrt();
    let cases = [
        (QuantityId::Acceleration, -10.0, QuantityId::Time, 2.0, Branch::RangeFinalSpeedMaxHeight),
        (QuantityId::Acceleration, -10.0, QuantityId::Range, range, Branch::MaxHeightTimeFinalSpeed),
        (QuantityId::Acceleration, -10.0, QuantityId::MaxHeight, 5.0, Branch::FinalSpeedTimeRange),
        (QuantityId::Time, 2.0, QuantityId::Range, range, Branch::MaxHeightFinalSpeedAcceleration),
        (QuantityId::Time, 2.0, QuantityId::MaxHeight, 5.0, Branch::FinalSpeedAccelerationRange),
    ];
    for (first, first_value, second, second_value, branch) in cases {
        let set = set_with(&[(QuantityId::Angle, 30.0), (first, first_value), (second, second_value)]);
        let state = normalize(&set, &SolverConfig::default());
        assert!(state.is_derived(Control::InitialSpeed));
        assert_float_eq(state.get(Control::InitialSpeed).unwrap(), 20.0, 1e-9, Some(second.name()));
        assert_eq!(select(&state).unwrap(), branch);
    }
}

#[test]
fn test_speed_is_not_derived_without_enough_information() {
    let height_and_range = set_with(&[
        (QuantityId::Angle, 30.0),
        (QuantityId::Range, 40.0),
        (QuantityId::MaxHeight, 5.0),
    ]);
    let state = normalize(&height_and_range, &SolverConfig::default());
    assert_eq!(state.get(Control::InitialSpeed), None);
    assert!(matches!(select(&state), Err(KinematicsError::NoBranchMatched { .. })));

    let flat = set_with(&[(QuantityId::Angle, 0.0), (QuantityId::Acceleration, -10.0), (QuantityId::Time, 2.0)]);
    assert_eq!(normalize(&flat, &SolverConfig::default()).get(Control::InitialSpeed), None);

    let level = set_with(&[(QuantityId::Angle, 30.0), (QuantityId::Acceleration, -10.0), (QuantityId::Time, 2.0)]);
    let disabled = SolverConfig::new(None, None, Some(false));
    assert_eq!(normalize(&level, &disabled).get(Control::InitialSpeed), None);
}
