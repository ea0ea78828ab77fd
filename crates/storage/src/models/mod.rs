pub mod athlete;

pub use athlete::{Athlete, CategoryRef, TrainingCenterRef};
