pub mod contact;
pub mod submission;

pub use contact::{ContactRequest, ContactResponse};
pub use submission::SubmissionRecord;
