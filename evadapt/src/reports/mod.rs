//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod info;
mod output;
mod preview;
mod set;
mod stage;

pub use check::CheckReport;
pub use generate::{BakeReport, BakeResult, GenerateOutcome, GenerateReport};
pub use info::{DatabaseInfo, IdentifierInfo, InfoReport, MessagingInfo};
pub use output::{Report, TerminalOutput};
pub use preview::PreviewReport;
pub use set::SetReport;
pub use stage::StageReport;
