use orderflow_core::{BoxError, FileWriter};
use orderflow_shared::{Order, OrderId, OrderStatus, Priority, Thresholds, UserId};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

const HEADER: [&str; 6] = ["ID", "Type", "Amount", "Flag", "Status", "Priority"];
const HIGH_VALUE_NOTE: &str = "High value order";

/// Writes export orders as single-record CSV files
pub struct CsvFileExporter {
    writer: Arc<dyn FileWriter>,
    output_dir: PathBuf,
    high_value_threshold: f64,
}

impl CsvFileExporter {
    pub fn new(writer: Arc<dyn FileWriter>, output_dir: impl Into<PathBuf>, thresholds: &Thresholds) -> Self {
        Self {
            writer,
            output_dir: output_dir.into(),
            high_value_threshold: thresholds.high_value_threshold,
        }
    }

    /// Export one order and return the path it was written to
    pub async fn export_order_to_file(
        &self,
        order: &Order,
        priority: Priority,
        user_id: UserId,
    ) -> Result<PathBuf, FileExportError> {
        let path = self.output_dir.join(self.file_name(user_id, order.id));

        let contents = self
            .render(order, priority)
            .map_err(|source| FileExportError { path: path.clone(), source })?;

        self.writer
            .write(&path, &contents)
            .await
            .map_err(|source| FileExportError { path: path.clone(), source })?;

        debug!(order_id = order.id, path = %path.display(), "Order exported");
        Ok(path)
    }

    /// Header line plus the order record, with a note column for high-value orders
    pub fn render(&self, order: &Order, priority: Priority) -> Result<String, BoxError> {
        let mut header: Vec<&str> = HEADER.to_vec();
        let mut record = vec![
            order.id.to_string(),
            order.order_type.tag().to_string(),
            order.amount.to_string(),
            order.flag.to_string(),
            OrderStatus::Exported.to_string(),
            priority.to_string(),
        ];

        if self.is_high_value(order) {
            header.push("Note");
            record.push(HIGH_VALUE_NOTE.to_string());
        }

        let mut csv_writer = csv::WriterBuilder::new().from_writer(Vec::new());
        csv_writer.write_record(&header)?;
        csv_writer.write_record(&record)?;
        let bytes = csv_writer.into_inner().map_err(|e| e.into_error())?;

        Ok(String::from_utf8(bytes)?)
    }

    pub fn is_high_value(&self, order: &Order) -> bool {
        order.amount > self.high_value_threshold
    }

    fn file_name(&self, user_id: UserId, order_id: OrderId) -> String {
        // Format: orders_type_A_{user}_{order}_{unix_seconds}.csv
        let timestamp = chrono::Utc::now().timestamp();
        format!("orders_type_A_{}_{}_{}.csv", user_id, order_id, timestamp)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Can not export csv to {}: {source}", path.display())]
pub struct FileExportError {
    pub path: PathBuf,
    #[source]
    pub source: BoxError,
}
