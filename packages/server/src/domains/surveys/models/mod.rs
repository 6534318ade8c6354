pub mod survey;

pub use survey::{Survey, SurveyParams, SurveyStatus};
