//! Fan-out/fan-in coordination for canopy.
//!
//! An operation that dispatches N independent concurrent sub-operations
//! waits on a single [`FanIn`] for their combined outcome: success once all
//! N report success, or the first reported failure. Used by the
//! synchronizer for sibling tree entries and by the integrity checker for
//! child objects.

pub mod fan_in;

pub use fan_in::{FanIn, Reporter};
