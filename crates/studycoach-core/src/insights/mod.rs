//! Pure study heuristics derived from persisted state.
//!
//! Both estimators are deterministic given their inputs and never fail:
//! invalid input degrades to a neutral or zero result, mirroring the
//! coercion policy of the state layer.

pub mod lock_in;
pub mod predict;

pub use lock_in::{compute_lock_in, FAR_HORIZON_DAYS, NEUTRAL_LOCK_IN};
pub use predict::{parse_score, predict_score, predict_score_raw};
