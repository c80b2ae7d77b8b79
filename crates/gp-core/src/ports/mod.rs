//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The page view only ever talks to the
//! catalog through [`ArtworkPageSourcePort`], so it can be driven by the HTTP
//! adapter in production and by in-memory doubles in tests.

pub mod artwork_source;
pub mod errors;

pub use artwork_source::ArtworkPageSourcePort;
pub use errors::TransportError;

#[cfg(any(test, feature = "testing"))]
pub use artwork_source::MockArtworkPageSource;
