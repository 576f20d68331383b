pub mod api;
pub mod health;
pub mod invoke;
pub mod submissions;

pub use submissions::{list_submissions, reject_event, submit_submission};
