//! Type-erased registry entries for feature slices.
//!
//! Each feature crate builds its state once at startup and hands it to the API state as an
//! [`InitializedSlice`]; handlers look it up again by type.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Feature state shareable across request handlers.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

/// A feature's state keyed by its concrete type.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), state: Box::new(state) }
    }
}
