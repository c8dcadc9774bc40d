//! Definitions of Send and Sync used by the Vellum value model
//!
//! When the single-threaded `rc` feature is enabled, [ValueSend] and [ValueSync] are empty traits
//! implemented for all types. With the `arc` feature they alias `Send` and `Sync`, so values that
//! cross the [Represent](crate::Represent) seam are thread-safe when the value graph itself is.

#[cfg(feature = "rc")]
mod traits {
    /// An empty trait for single-threaded contexts, implemented for all types
    pub trait ValueSend {}
    impl<T> ValueSend for T {}

    /// An empty trait for single-threaded contexts, implemented for all types
    pub trait ValueSync {}
    impl<T> ValueSync for T {}
}

#[cfg(not(feature = "rc"))]
mod traits {
    pub use Send as ValueSend;
    pub use Sync as ValueSync;
}

pub use traits::*;
