//! Application layer: use cases around the domain core
//!
//! Assessment history persistence and daily tips.

pub mod error;
pub mod error_ext;
pub mod history;
pub mod tips;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use history::{AssessmentHistory, AssessmentRecord, HistoryStore, DEFAULT_HISTORY_LIMIT};
pub use tips::{daily_tip, tip_for_date, HEALTH_TIPS};
