//!
//! # Fluid custom resources
//!
//! Runtimes of the `data.fluid.io` API group.
//!
mod thin_runtime;

pub use self::thin_runtime::*;

pub const GROUP: &str = "data.fluid.io";
pub const V1ALPHA1: &str = "v1alpha1";
