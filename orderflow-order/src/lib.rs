pub mod priority;
pub mod export;
pub mod processors;
pub mod selector;
pub mod report;
pub mod service;
pub mod mock;

pub use priority::PriorityCalculator;
pub use export::{CsvFileExporter, FileExportError};
pub use processors::{
    ApiOrderProcessor, ExportOrderProcessor, OrderProcessor, SimpleOrderProcessor,
    UnknownOrderProcessor,
};
pub use selector::{ProcessorKind, ProcessorSelector};
pub use report::{BatchReport, OrderOutcome};
pub use service::{OrderProcessingService, ProcessingError};
