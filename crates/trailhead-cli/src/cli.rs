//! Command handlers and argument wrappers
//!
//! Argument structs carry the clap-specific attributes and convert into core
//! parameter types; [`Cli`] runs a command against the planner and renders
//! the result through the terminal renderer.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use trailhead_core::{
    display::{Courses, ImportResult},
    params::{ImportSeed, PlanningContext},
    Planner,
};

use crate::renderer::TerminalRenderer;

/// Start the web server
#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "TRAILHEAD_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,
}

impl ServeArgs {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Replace the catalog and student records with a seed document
///
/// The seed is a JSON object with `classes` and `students` arrays in the
/// document shape of the two collections.
#[derive(Args)]
pub struct ImportArgs {
    #[arg(help = "Path of the JSON seed document")]
    pub file: PathBuf,
}

impl From<ImportArgs> for ImportSeed {
    fn from(val: ImportArgs) -> Self {
        ImportSeed { path: val.file }
    }
}

/// Terminal front end over the planner.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
    context: PlanningContext,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer, context: PlanningContext) -> Self {
        Self {
            planner,
            renderer,
            context,
        }
    }

    pub async fn import(&self, args: ImportArgs) -> Result<()> {
        let params = ImportSeed::from(args);
        let summary = self
            .planner
            .import_seed(&params)
            .await
            .context("Failed to import seed document")?;
        self.renderer
            .render(&ImportResult::new(summary, &params.path).to_string())
    }

    pub async fn list_courses(&self) -> Result<()> {
        let courses = self
            .planner
            .list_courses(None)
            .await
            .context("Failed to list courses")?;
        self.renderer.render(&format!("# Catalog\n\n{}", Courses(courses)))
    }

    pub async fn show_progress(&self) -> Result<()> {
        let view = self
            .planner
            .plan_ahead(&self.context)
            .await
            .context("Failed to load plan-ahead view")?;
        self.renderer.render(&view.to_string())
    }

    pub async fn show_planner(&self) -> Result<()> {
        let view = self
            .planner
            .planner_overview(&self.context)
            .await
            .context("Failed to load planner view")?;
        self.renderer.render(&view.to_string())
    }
}
