mod cli;
mod config;
mod logger;
mod render;

use anyhow::Context;
use clap::Parser;
use civic_client::{Authenticated, CivicClient, SessionState};
use civic_dashboard::{FetchStatus, IssuesDashboard, MapAdapter, MarkerLayer, SelectOrigin, ViewMode};
use shared::IssueId;

use cli::Cli;
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = Config::from_env().with_api_url(cli.api_url.clone());
    logger::init_logger_with_file(
        &config.log_level,
        config.log_json,
        config.log_dir.as_deref(),
    )?;
    tracing::info!(api_url = %config.api_url, "Civic console starting");

    let client = config
        .client_config()
        .build_client()
        .context("Failed to create API client")?;

    match client.restore_session() {
        Ok(admin) => {
            tracing::info!("Restored admin session");
            run_admin(admin, &cli).await
        }
        Err(anonymous) => match cli.credentials() {
            Some((email, password)) => {
                let admin = anonymous
                    .login(email, password)
                    .await
                    .context("Admin login failed")?;
                run_admin(admin, &cli).await
            }
            None => {
                tracing::warn!("No admin session, showing the public issue feed");
                show_dashboard(&anonymous, &cli).await
            }
        },
    }
}

async fn run_admin(client: CivicClient<Authenticated>, cli: &Cli) -> anyhow::Result<()> {
    let result = show_dashboard(&client, cli).await;
    if cli.logout {
        let client = client.logout().await;
        tracing::info!(
            has_stored_token = client.status().has_stored_token,
            "Admin session closed"
        );
    }
    result
}

async fn show_dashboard<S: SessionState>(client: &CivicClient<S>, cli: &Cli) -> anyhow::Result<()> {
    let adapter = MapAdapter::default();
    let mut dashboard = IssuesDashboard::new(adapter.config());
    let mut surface = MarkerLayer::new();
    adapter.mount(&mut surface);

    let mut command = match dashboard.refresh(client).await {
        FetchStatus::Loaded { count, viewport } => {
            tracing::info!(count, "Issues loaded");
            viewport
        }
        FetchStatus::Failed => None,
    };

    let view = ViewMode::from(cli.view);
    if let Some(c) = dashboard.set_view_mode(view) {
        command = Some(c);
    }
    if let Some(selection) = cli.filter_selection() {
        command = dashboard.apply_filters(selection);
    }
    if let Some(id) = &cli.select {
        match dashboard.select_by_id(&IssueId::new(id.as_str()), SelectOrigin::TableRow) {
            Ok(c) => command = c.or(command),
            Err(e) => tracing::warn!("{}", e),
        }
    }

    match view {
        ViewMode::Table => print!("{}", render::TableView(&dashboard)),
        ViewMode::Map => {
            adapter.sync(&mut surface, &dashboard, command);
            print!("{}", render::MapView(&surface));
        }
    }
    Ok(())
}
