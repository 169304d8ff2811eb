//! Sandboxed plugin core.
//!
//! Everything here runs without network access: parameter suggestion
//! filtering, validation, request URL construction, and the session state
//! machine. Fetches happen on the other side of the bridge protocol defined
//! in `shared`.

pub mod request;
pub mod session;
pub mod suggest;

pub use request::{build_url, validate, ParameterError, DEFAULT_AMOUNT};
pub use session::{Session, SessionEvent, SessionPhase, SubmitOutcome};
pub use suggest::{suggestions, Suggestion};
