//! Care-log core: the reading store, the maintenance schedule, the water
//! evaluation rule and reminder countdown, and the session that ties them
//! together.

pub mod analysis;
pub mod error;
pub mod evaluator;
pub mod export;
pub mod reminder;
pub mod schedule;
pub mod session;
pub mod store;

pub use error::AxologError;
pub use evaluator::{evaluate_parameter, ParameterEvaluator, Tier};
pub use reminder::{days_until_due, DueTier, Reminder};
pub use session::{builder::SessionBuilder, dispatch::Outcome, state::Session};
pub use store::ReadingStore;
