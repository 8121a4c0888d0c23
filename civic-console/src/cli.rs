use clap::{Parser, ValueEnum};
use civic_dashboard::ViewMode;
use shared::{FilterSelection, StatusFilter};

#[derive(Parser, Debug)]
#[command(name = "civic-console")]
#[command(about = "CivicConnect admin issues dashboard", long_about = None)]
pub struct Cli {
    /// Backend base URL (overrides CIVIC_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Status filter: pending, inProgress or resolved
    #[arg(short, long)]
    pub status: Option<StatusFilter>,

    /// Category filter, exact match
    #[arg(short, long)]
    pub category: Option<String>,

    /// Focus one issue by id
    #[arg(long, value_name = "ID")]
    pub select: Option<String>,

    /// Which view to render
    #[arg(long, value_enum, default_value_t = View::Table)]
    pub view: View,

    #[arg(long, env = "CIVIC_ADMIN_EMAIL")]
    pub email: Option<String>,

    #[arg(long, env = "CIVIC_ADMIN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Log out and forget the stored token when done
    #[arg(long)]
    pub logout: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Table,
    Map,
}

impl From<View> for ViewMode {
    fn from(view: View) -> Self {
        match view {
            View::Table => ViewMode::Table,
            View::Map => ViewMode::Map,
        }
    }
}

impl Cli {
    pub fn credentials(&self) -> Option<(&str, &str)> {
        Some((self.email.as_deref()?, self.password.as_deref()?))
    }

    /// `None` when no filter flag was given.
    pub fn filter_selection(&self) -> Option<FilterSelection> {
        if self.status.is_none() && self.category.is_none() {
            return None;
        }
        Some(FilterSelection {
            status: self.status,
            category: self.category.clone().filter(|c| !c.is_empty()),
        })
    }
}
