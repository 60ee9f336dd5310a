pub mod dashboard_service;
pub mod filter_service;
pub mod summary_service;

pub use dashboard_service::{Dashboard, DashboardOptions, DashboardService};
pub use filter_service::{FilterService, RecordFilter};
pub use summary_service::{ItemTotal, MonthlyPoint, Summary, SummaryService, TopItems};
