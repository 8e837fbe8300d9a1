//! Domain Layer
//!
//! Path policy, session entity, decision function, and the resolver
//! interface. No I/O.

pub mod decision;
pub mod excluded_paths;
pub mod public_paths;
pub mod redirect;
pub mod resolver;
pub mod session;

pub use decision::{AccessDecision, decide};
pub use excluded_paths::ExcludedPaths;
pub use public_paths::PublicPaths;
pub use redirect::{LoginRoute, RedirectTarget, sanitize_return_path};
pub use resolver::SessionResolver;
pub use session::{Session, SessionStatus};
