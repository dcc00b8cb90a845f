//! Export services

mod export_service;
mod record_service;
mod zone_service;

pub use export_service::ExportService;
pub use record_service::{PaginationCursor, RecordSetPaginator, DEFAULT_PAGE_SIZE};
pub use zone_service::ZoneService;
