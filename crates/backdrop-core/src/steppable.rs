//! The contract every animated simulation implements.

/// A simulation advanced one unit at a time by an external driver.
///
/// `step` runs to completion and never blocks; pacing belongs to the caller.
pub trait Steppable {
    /// Short human-readable name, used in logs
    fn name(&self) -> &'static str;

    /// Advance by exactly one unit of work
    fn step(&mut self);

    /// Number of steps taken so far
    fn steps_taken(&self) -> u64;

    /// Whether further steps are no-ops
    fn is_completed(&self) -> bool {
        false
    }
}
