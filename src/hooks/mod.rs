pub mod use_submission;

pub use use_submission::{use_submission, SubmissionState, UseSubmissionHandle};
