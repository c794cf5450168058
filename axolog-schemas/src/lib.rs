//! Plain data types shared by the care-log core and the command-line app.

pub mod command;
pub mod file_formats;
pub mod label;
pub mod observation;
pub mod parameter;
pub mod profile;
pub mod task;

pub use command::Command;
pub use label::LabelError;
pub use observation::{FeedingType, HealthObservations, HealthTag, Observation};
pub use parameter::{ParameterKind, Range};
pub use profile::CareProfile;
pub use task::TaskKind;
