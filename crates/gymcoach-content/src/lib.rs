//! Static coaching content for the Gym Coach API.
//!
//! Each module builds one literal record. Builders are pure: every call
//! returns an identical value, so handlers can construct a fresh record
//! per request without caching.
//!
//! - [`diet::diet_guide`] -- four sample meals plus tips and hydration
//! - [`workouts::workout_catalog`] -- beginner, intermediate, and advanced programs
//! - [`recovery::recovery_toolkit`] -- sleep, mobility, and breathwork pillars

pub mod diet;
pub mod recovery;
pub mod workouts;

pub use diet::diet_guide;
pub use recovery::recovery_toolkit;
pub use workouts::workout_catalog;

/// Convert a slice of string literals into owned strings, keeping order.
fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}
