use anyhow::Context;
use clap::Parser;
use orderflow_core::ApiClient;
use orderflow_order::{BatchReport, CsvFileExporter, OrderProcessingService};
use orderflow_shared::UserId;
use orderflow_store::app_config::Config;
use orderflow_store::{FsFileWriter, HttpApiClient, InMemoryOrderStore, OfflineApiClient};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "orderflow", about = "Process a user's pending orders")]
pub struct Cli {
    /// User whose orders are processed
    #[arg(long)]
    pub user: UserId,

    /// JSON array of orders, each with a `user_id`
    #[arg(long)]
    pub orders: PathBuf,

    /// Overrides `export.output_dir`
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

/// Run one batch and return its report
pub async fn run(cli: &Cli, config: &Config) -> anyhow::Result<BatchReport> {
    let store = InMemoryOrderStore::from_file(&cli.orders)
        .await
        .map_err(|e| anyhow::anyhow!(e))
        .with_context(|| format!("loading orders from {}", cli.orders.display()))?;

    let api_client: Arc<dyn ApiClient> = match &config.api.base_url {
        Some(url) => Arc::new(HttpApiClient::new(url, Duration::from_secs(config.api.timeout_seconds))?),
        None => Arc::new(OfflineApiClient),
    };

    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| config.export.output_dir.clone());
    let exporter = CsvFileExporter::new(Arc::new(FsFileWriter::new()), output_dir, &config.thresholds);

    let service = OrderProcessingService::new(Arc::new(store), api_client, exporter, config.thresholds);
    let report = service.run_batch(cli.user).await?;
    Ok(report)
}

/// One line per order, e.g. `12 exported high`
pub fn summarize(report: &BatchReport) -> String {
    let mut lines: Vec<String> = report
        .outcomes
        .iter()
        .map(|o| match o.priority {
            Some(p) => format!("{} {} {}", o.order_id, o.status, p),
            None => format!("{} {}", o.order_id, o.status),
        })
        .collect();
    lines.push(format!(
        "user {}: {}",
        report.user_id,
        if report.success { "ok" } else { "failed" }
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderflow_shared::OrderStatus;

    fn config() -> Config {
        Config {
            thresholds: Default::default(),
            export: Default::default(),
            api: Default::default(),
        }
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from(["orderflow", "--user", "3", "--orders", "orders.json"]).unwrap();
        assert_eq!(cli.user, 3);
        assert_eq!(cli.orders, PathBuf::from("orders.json"));
        assert!(cli.output_dir.is_none());

        assert!(Cli::try_parse_from(["orderflow", "--orders", "orders.json"]).is_err());
    }

    #[tokio::test]
    async fn test_run_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let orders = dir.path().join("orders.json");
        std::fs::write(
            &orders,
            r#"[
                {"user_id": 1, "id": 1, "type": "A", "amount": 300, "flag": true},
                {"user_id": 1, "id": 2, "type": "B", "amount": 10, "data": 80},
                {"user_id": 1, "id": 3, "type": "C", "amount": 10, "flag": false},
                {"user_id": 1, "id": 4, "type": "Z", "amount": 10},
                {"user_id": 2, "id": 5, "type": "C", "amount": 10, "flag": true}
            ]"#,
        )
        .unwrap();

        let export_dir = dir.path().join("exports");
        let cli = Cli {
            user: 1,
            orders,
            output_dir: Some(export_dir.clone()),
        };

        let report = run(&cli, &config()).await.unwrap();

        assert!(report.success);
        let statuses: Vec<_> = report.outcomes.iter().map(|o| o.status).collect();
        assert_eq!(
            statuses,
            vec![
                OrderStatus::Exported,
                OrderStatus::Processed,
                OrderStatus::InProgress,
                OrderStatus::UnknownType,
            ]
        );

        let files: Vec<_> = std::fs::read_dir(&export_dir).unwrap().collect();
        assert_eq!(files.len(), 1);
        let csv = std::fs::read_to_string(files[0].as_ref().unwrap().path()).unwrap();
        assert!(csv.ends_with("1,A,300,true,exported,high,High value order\n"));

        let summary = summarize(&report);
        assert!(summary.starts_with("1 exported high\n2 processed\n"));
        assert!(summary.ends_with("user 1: ok"));
    }

    #[tokio::test]
    async fn test_run_missing_orders_file() {
        let cli = Cli {
            user: 1,
            orders: PathBuf::from("/nonexistent/orders.json"),
            output_dir: None,
        };
        let err = run(&cli, &config()).await.unwrap_err();
        assert!(err.to_string().contains("loading orders from /nonexistent/orders.json"));
    }

    #[tokio::test]
    async fn test_run_keeps_every_export_file() {
        let dir = tempfile::tempdir().unwrap();
        let orders = dir.path().join("orders.json");
        std::fs::write(
            &orders,
            r#"[
                {"user_id": 1, "id": 1, "type": "A", "amount": 10, "flag": true},
                {"user_id": 1, "id": 2, "type": "A", "amount": 20, "flag": true}
            ]"#,
        )
        .unwrap();

        let export_dir = dir.path().join("exports");
        let cli = Cli {
            user: 1,
            orders,
            output_dir: Some(export_dir.clone()),
        };

        let report = run(&cli, &config()).await.unwrap();
        assert!(report.success);

        let mut contents: Vec<String> = std::fs::read_dir(&export_dir)
            .unwrap()
            .map(|entry| std::fs::read_to_string(entry.unwrap().path()).unwrap())
            .collect();
        contents.sort();
        assert_eq!(contents.len(), 2);
        assert!(contents[0].ends_with("1,A,10,true,exported,low\n"));
        assert!(contents[1].ends_with("2,A,20,true,exported,low\n"));
    }
}
