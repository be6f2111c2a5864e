//! Provider implementations

mod mock;

pub use mock::MockModelProvider;
