use std::{path::Path, process::ExitCode};

use tabled::Table;

use crate::{
    pipeline,
    report::{ConsoleReporter, Reporter},
    types::TrackTableRow,
};

pub async fn list(config_path: &Path) -> ExitCode {
    let reporter = ConsoleReporter::new();

    let Some(config) = super::load_config(config_path, &reporter).await else {
        return ExitCode::FAILURE;
    };

    let entries = match pipeline::load_entries(&config).await {
        Ok(entries) => entries,
        Err(e) => {
            reporter.error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    let table_rows: Vec<TrackTableRow> = entries
        .into_iter()
        .enumerate()
        .map(|(i, e)| TrackTableRow {
            position: i + 1,
            title: e.title,
            artist: e.artist,
        })
        .collect();

    let count = table_rows.len();
    println!("{}", Table::new(table_rows));
    reporter.info(&format!("{} tracks found in the export.", count));

    ExitCode::SUCCESS
}
