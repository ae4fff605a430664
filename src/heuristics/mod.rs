//! Heuristic field inference.
//!
//! Fallback strategies used when no selector is supplied for a field or no
//! selector match was found. Each field has its own priority-ordered list of
//! independent strategies; the first strategy producing a non-empty result
//! wins. All of them are pure functions of the parsed document.

pub mod availability;
pub mod price;
pub mod title;

pub use availability::infer_availability;
pub use price::infer_price;
pub use title::infer_title;
