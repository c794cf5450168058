pub mod builder;
pub mod dispatch;
pub mod state;
