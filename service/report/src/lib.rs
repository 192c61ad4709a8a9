mod export;
mod report;

pub use export::ExportServiceImpl;
pub use report::ReportServiceImpl;
