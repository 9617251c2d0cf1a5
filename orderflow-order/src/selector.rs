use orderflow_core::ApiClient;
use orderflow_shared::{OrderType, Thresholds, UserId};
use std::sync::Arc;

use crate::export::CsvFileExporter;
use crate::priority::PriorityCalculator;
use crate::processors::{
    ApiOrderProcessor, ExportOrderProcessor, OrderProcessor, SimpleOrderProcessor,
    UnknownOrderProcessor,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorKind {
    Export,
    Api,
    Simple,
    Unknown,
}

impl ProcessorKind {
    pub fn for_type(order_type: &OrderType) -> Self {
        match order_type {
            OrderType::Export => ProcessorKind::Export,
            OrderType::Api => ProcessorKind::Api,
            OrderType::Simple => ProcessorKind::Simple,
            OrderType::Unknown(_) => ProcessorKind::Unknown,
        }
    }
}

/// Holds one processor per kind for a single user's batch
pub struct ProcessorSelector {
    export: ExportOrderProcessor,
    api: ApiOrderProcessor,
    simple: SimpleOrderProcessor,
    unknown: UnknownOrderProcessor,
}

impl ProcessorSelector {
    pub fn new(
        exporter: Arc<CsvFileExporter>,
        api_client: Arc<dyn ApiClient>,
        thresholds: &Thresholds,
        user_id: UserId,
    ) -> Self {
        Self {
            export: ExportOrderProcessor::new(exporter, PriorityCalculator::new(thresholds), user_id),
            api: ApiOrderProcessor::new(api_client, thresholds),
            simple: SimpleOrderProcessor,
            unknown: UnknownOrderProcessor,
        }
    }

    pub fn select(&self, order_type: &OrderType) -> &dyn OrderProcessor {
        match ProcessorKind::for_type(order_type) {
            ProcessorKind::Export => &self.export,
            ProcessorKind::Api => &self.api,
            ProcessorKind::Simple => &self.simple,
            ProcessorKind::Unknown => &self.unknown,
        }
    }
}
