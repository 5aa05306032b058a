// src/quantities/registry.rs

use std::fmt;
use std::str::FromStr;
use crate::errors::KinematicsError;

/// Every physical quantity the resolver knows about.
///
/// The declaration order is the registry order: validation walks the quantities in this
/// order and reports the first violation it finds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuantityId {
    VInitialI,
    VInitialJ,
    VFinalI,
    VFinalJ,
    YInitial,
    Acceleration,
    Angle,
    Time,
    Range,
    AbsMaxHeight,
    MaxHeight,
    ApexTime,
    InitialSpeed,
    FinalSpeed,
    CoeffFriction,
    Force,
    Mass,
}

impl QuantityId {
    pub const ALL: [QuantityId; 17] = [
        QuantityId::VInitialI,
        QuantityId::VInitialJ,
        QuantityId::VFinalI,
        QuantityId::VFinalJ,
        QuantityId::YInitial,
        QuantityId::Acceleration,
        QuantityId::Angle,
        QuantityId::Time,
        QuantityId::Range,
        QuantityId::AbsMaxHeight,
        QuantityId::MaxHeight,
        QuantityId::ApexTime,
        QuantityId::InitialSpeed,
        QuantityId::FinalSpeed,
        QuantityId::CoeffFriction,
        QuantityId::Force,
        QuantityId::Mass,
    ];

    /// Stable identifier used in messages and by string-keyed collaborators.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Static metadata for this quantity.
    ///
    /// # Example
    /// ```
    /// use rs_kinematics::quantities::{Category, QuantityId};
    ///
    /// let spec = QuantityId::Acceleration.spec();
    /// assert_eq!(spec.min, -1000.0);
    /// assert_eq!(spec.max, -1.0);
    /// assert_eq!(spec.category, Category::Shared);
    /// ```
    pub fn spec(self) -> &'static QuantitySpec {
        &REGISTRY[self as usize]
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for QuantityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for QuantityId {
    type Err = KinematicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuantityId::ALL
            .iter()
            .copied()
            .find(|id| id.name() == s)
            .ok_or_else(|| KinematicsError::UnknownQuantity(s.to_string()))
    }
}

/// Which input table a quantity belongs to. `Shared` counts toward both kinematics tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    ScalarKinematics,
    VectorKinematics,
    Forces,
    Shared,
}

impl Category {
    pub fn counts_as_scalar(self) -> bool {
        matches!(self, Category::ScalarKinematics | Category::Shared)
    }

    pub fn counts_as_vector(self) -> bool {
        matches!(self, Category::VectorKinematics | Category::Shared)
    }
}

/// Immutable shape of a quantity: bounds, category and what must accompany it.
#[derive(Debug)]
pub struct QuantitySpec {
    pub id: QuantityId,
    pub name: &'static str,
    pub display_name: &'static str,
    pub default_value: Option<f64>,
    pub min: f64,
    pub max: f64,
    pub required: bool,
    pub category: Category,
    pub dependencies: &'static [QuantityId],
}

impl QuantitySpec {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

macro_rules! quantity {
    ($id:ident, $name:expr, $display:expr, $default:expr, [$min:expr, $max:expr], $required:expr, $category:ident, [$($dep:ident),*]) => {
        QuantitySpec {
            id: QuantityId::$id,
            name: $name,
            display_name: $display,
            default_value: $default,
            min: $min,
            max: $max,
            required: $required,
            category: Category::$category,
            dependencies: &[$(QuantityId::$dep),*],
        }
    };
}

/// Indexed by `QuantityId as usize`; entries must stay in declaration order.
static REGISTRY: [QuantitySpec; 17] = [
    quantity!(VInitialI, "v_initial_i_component", "Initial i Velocity (m/s)", None, [1.0, 1000.0], true, VectorKinematics, [VInitialJ]),
    quantity!(VInitialJ, "v_initial_j_component", "Initial j Velocity (m/s)", None, [1.0, 1000.0], true, VectorKinematics, [VInitialI]),
    quantity!(VFinalI, "v_final_i_component", "Final i Velocity (m/s)", None, [1.0, 1000.0], true, VectorKinematics, [VFinalJ]),
    quantity!(VFinalJ, "v_final_j_component", "Final j Velocity (m/s)", None, [1.0, 1000.0], true, VectorKinematics, [VFinalI]),
    quantity!(YInitial, "y_initial", "Initial Height (m)", None, [0.0, 1000.0], false, Shared, []),
    quantity!(Acceleration, "acc", "Y-Acceleration (m/s²)", None, [-1000.0, -1.0], true, Shared, []),
    quantity!(Angle, "angle", "Launch Angle (°)", Some(45.0), [0.0, 90.0], true, ScalarKinematics, []),
    quantity!(Time, "time", "Time (s)", None, [1.0, 1000.0], true, Shared, []),
    quantity!(Range, "range", "Distance (m)", None, [1.0, 1000.0], true, Shared, []),
    quantity!(AbsMaxHeight, "abs_max_height", "Absolute Maximum Height (m)", None, [1.0, 1000.0], false, Shared, []),
    quantity!(MaxHeight, "max_height", "Maximum Height (m)", None, [1.0, 1000.0], true, Shared, []),
    quantity!(ApexTime, "apex_time", "Time of Apex (s)", None, [1.0, 1000.0], false, Shared, []),
    quantity!(InitialSpeed, "initial_speed", "Initial Speed (m/s)", None, [1.0, 1000.0], true, ScalarKinematics, []),
    quantity!(FinalSpeed, "final_speed", "Final Speed (m/s)", None, [1.0, 1000.0], true, ScalarKinematics, []),
    quantity!(CoeffFriction, "coeff_friction", "Friction Coefficient (Mu)", None, [1.0, 1.0], true, Forces, [Force, Time, Mass]),
    quantity!(Force, "force", "Force (N)", None, [1.0, 1000.0], true, Forces, [Time, Mass]),
    quantity!(Mass, "mass", "Mass (kg)", None, [1.0, 1000.0], true, Forces, [Force, Time]),
];

/// Presence-tagged value slot. Only `Provided` values take part in validation; `Derived`
/// values are solver output and are recomputed on every resolve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum QuantityValue {
    #[default]
    Unset,
    Provided(f64),
    Derived(f64),
}

impl QuantityValue {
    pub fn value(self) -> Option<f64> {
        match self {
            QuantityValue::Unset => None,
            QuantityValue::Provided(v) | QuantityValue::Derived(v) => Some(v),
        }
    }

    pub fn provided(self) -> Option<f64> {
        match self {
            QuantityValue::Provided(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_provided(self) -> bool {
        matches!(self, QuantityValue::Provided(_))
    }
}

/// The mutable half of the registry: one value slot per quantity.
///
/// # Example
/// ```
/// use rs_kinematics::quantities::{QuantityId, QuantitySet};
///
/// let mut set = QuantitySet::new();
/// assert_eq!(set.value(QuantityId::Angle), Some(45.0));
/// set.set(QuantityId::InitialSpeed, 20.0);
/// assert_eq!(set.provided(QuantityId::InitialSpeed), Some(20.0));
/// set.reset();
/// assert_eq!(set.value(QuantityId::InitialSpeed), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QuantitySet {
    slots: [QuantityValue; 17],
}

impl Default for QuantitySet {
    fn default() -> Self {
        Self::new()
    }
}

impl QuantitySet {
    pub fn new() -> Self {
        let mut set = Self { slots: [QuantityValue::Unset; 17] };
        set.reset();
        set
    }

    /// Restores every quantity to its default value.
    pub fn reset(&mut self) {
        for id in QuantityId::ALL {
            self.slots[id.index()] = match id.spec().default_value {
                Some(value) => QuantityValue::Provided(value),
                None => QuantityValue::Unset,
            };
        }
    }

    pub fn get(&self, id: QuantityId) -> QuantityValue {
        self.slots[id.index()]
    }

    pub fn value(&self, id: QuantityId) -> Option<f64> {
        self.get(id).value()
    }

    pub fn provided(&self, id: QuantityId) -> Option<f64> {
        self.get(id).provided()
    }

    pub fn set(&mut self, id: QuantityId, value: f64) {
        self.slots[id.index()] = QuantityValue::Provided(value);
    }

    pub fn unset(&mut self, id: QuantityId) {
        self.slots[id.index()] = QuantityValue::Unset;
    }

    /// Writes solver output. Never overwrites a provided value.
    pub fn set_derived(&mut self, id: QuantityId, value: f64) {
        if !self.slots[id.index()].is_provided() {
            self.slots[id.index()] = QuantityValue::Derived(value);
        }
    }

    /// Drops every derived value, leaving provided values and unset slots alone.
    pub fn clear_derived(&mut self) {
        for slot in self.slots.iter_mut() {
            if let QuantityValue::Derived(_) = slot {
                *slot = QuantityValue::Unset;
            }
        }
    }

    /// Iterates `(id, value)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (QuantityId, QuantityValue)> + '_ {
        QuantityId::ALL.iter().map(move |&id| (id, self.get(id)))
    }
}
