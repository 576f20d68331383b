mod messages;
mod requests;
mod types;

pub use messages::{confirmation_body, confirmation_message, listing_body, ABSENT_NAME};
pub use requests::SubmitRequest;
pub use types::{display_value, Submission, KEY_ATTRIBUTE, MESSAGE_ATTRIBUTE, NAME_ATTRIBUTE};
