//! Terminal presentation: the form prompts and the deployment log

mod form;
mod log;

pub use form::{InteractiveConfirm, prompt_config};
pub use log::EventLog;
