//! Trailhead CLI Application
//!
//! Web server and command-line interface for the Trailhead course planner.

mod args;
mod cli;
mod renderer;
mod web;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use trailhead_core::{params::PlanningContext, PlannerBuilder};
use web::AppState;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        student_id,
        storage_timeout_secs,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .with_storage_timeout(Duration::from_secs(storage_timeout_secs))
        .build()
        .await
        .context("Failed to initialize planner")?;

    info!(
        "Trailhead started with database {}",
        planner.database_path().display()
    );

    let renderer = TerminalRenderer::new(!no_color);
    let context = PlanningContext::new(student_id.clone());

    match command {
        Some(Serve(args)) => web::run(AppState::new(planner, student_id), args.socket_addr()).await,
        Some(Import(args)) => Cli::new(planner, renderer, context).import(args).await,
        Some(Courses) => Cli::new(planner, renderer, context).list_courses().await,
        Some(Planner) => Cli::new(planner, renderer, context).show_planner().await,
        Some(Progress) | None => Cli::new(planner, renderer, context).show_progress().await,
    }
}
