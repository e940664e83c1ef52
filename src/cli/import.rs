use std::{path::Path, process::ExitCode, sync::Arc};

use crate::{
    config::SpotifyEndpoints,
    pipeline,
    report::{ConsoleReporter, Reporter},
    spotify::SpotifyClient,
};

pub async fn import(config_path: &Path) -> ExitCode {
    let reporter = Arc::new(ConsoleReporter::new());

    let config = match super::load_config(config_path, &*reporter).await {
        Some(config) => config,
        None => return ExitCode::FAILURE,
    };

    let client = SpotifyClient::new(SpotifyEndpoints::from_env(), reporter.clone());

    match pipeline::run(&config, &client, &*reporter).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
