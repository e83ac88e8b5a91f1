pub mod report_log;
pub mod reports_model;

pub use report_log::ReportLog;
pub use reports_model::{NewPriceReport, PriceReport};
