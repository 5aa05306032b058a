// src/apis/batch.rs

use log::debug;
use rayon::prelude::*;
use crate::apis::session::{Session, SolveOutcome};

/// Resolves many independent sessions on the rayon thread pool.
///
/// Each session is still validated and solved on a single thread; only whole sessions run in
/// parallel, so no session is ever touched by two threads at once. Outcomes come back in the
/// same order as `sessions`.
///
/// # Example
/// ```
/// use rs_kinematics::apis::batch::resolve_all;
/// use rs_kinematics::apis::session::Session;
/// use rs_kinematics::quantities::QuantityId;
///
/// let mut sessions: Vec<Session> = (1..=4)
///     .map(|i| {
///         let mut session = Session::new();
///         session.set_quantity(QuantityId::InitialSpeed, 10.0 * i as f64);
///         session.set_quantity(QuantityId::Acceleration, -9.8);
///         session
///     })
///     .collect();
///
/// let outcomes = resolve_all(&mut sessions);
/// assert!(outcomes.iter().all(|outcome| outcome.is_solved()));
/// ```
pub fn resolve_all(sessions: &mut [Session]) -> Vec<SolveOutcome> {
    debug!("Resolving {} sessions in parallel", sessions.len());
    sessions.par_iter_mut().map(Session::resolve).collect()
}
