//! Nexus command-line front end for the voice-agent analytics
//! dashboard.

use std::path::PathBuf;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use nexus_analytics::TimeRange;
use nexus_auth::SignUpInput;
use nexus_core::models::call_log::{CallFilters, FILTER_ALL};
use nexus_core::route::RouteDecision;
use nexus_state::FileStore;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod views;

use app::{Access, App};
use config::{AppConfig, DEFAULT_STATE_PATH};

#[derive(Parser)]
#[command(name = "nexus")]
#[command(about = "Multi-tenant voice-agent analytics dashboard", long_about = None)]
struct Cli {
    /// File holding the persisted session, tenant selection, and
    /// preferences
    #[arg(long, env = "NEXUS_STATE_PATH", default_value = DEFAULT_STATE_PATH, global = true)]
    state: PathBuf,
    /// Seed for reproducible mock data and metrics
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum RangeArg {
    Today,
    Weekly,
    Monthly,
    Yearly,
    Custom,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with an email address
    Login {
        #[arg(long)]
        email: String,
    },
    /// Create an account and its workspace
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        workspace: String,
    },
    /// Request a password reset link
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
    /// Sign out and forget the persisted session
    Logout,
    /// Show the signed-in user and current workspace
    Whoami,
    /// List the available tenants
    Tenants,
    /// Change the current tenant
    SwitchTenant {
        #[arg(long)]
        id: String,
    },
    /// Show dashboard metrics for the current tenant
    Dashboard {
        #[arg(long, value_enum, default_value = "weekly")]
        range: RangeArg,
        /// Start of a custom range (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// End of a custom range (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// Browse the call history of the current tenant
    History {
        #[arg(long, default_value = "")]
        search: String,
        /// completed, missed, failed, or all
        #[arg(long, default_value = FILTER_ALL)]
        status: String,
        #[arg(long, default_value = FILTER_ALL)]
        brand: String,
        /// Earliest call date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Latest call date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<NaiveDate>,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show the details of one call
    Call {
        #[arg(long)]
        id: String,
    },
    /// List the voice agents of the current tenant
    Agents,
    /// Show tenant settings (admins only)
    Settings,
    /// Collapse or expand the sidebar
    ToggleSidebar,
    /// Show what the router does with a path
    Route {
        #[arg(long)]
        path: String,
    },
}

fn time_range(range: RangeArg, start: Option<NaiveDate>, end: Option<NaiveDate>) -> TimeRange {
    match range {
        RangeArg::Today => TimeRange::Today,
        RangeArg::Weekly => TimeRange::Weekly,
        RangeArg::Monthly => TimeRange::Monthly,
        RangeArg::Yearly => TimeRange::Yearly,
        RangeArg::Custom => TimeRange::custom(start, end, Utc::now().date_naive()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nexus=info".parse()?))
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.state, cli.seed);
    let store = FileStore::open(&config.state_path);
    let mut app = App::start(store, &config)?;

    match cli.command {
        Commands::Login { email } => {
            let user = app.login(&email).await?;
            println!("Signed in as {} ({:?}).", user.name, user.role);
        }
        Commands::Signup {
            email,
            name,
            workspace,
        } => {
            let (user, tenant) = app
                .sign_up(SignUpInput {
                    email,
                    name,
                    workspace_name: workspace,
                })
                .await?;
            println!("Welcome, {}. Workspace {} is ready.", user.name, tenant.name);
        }
        Commands::ForgotPassword { email } => {
            app.forgot_password(&email).await?;
            println!("If an account exists for {email}, a reset link is on its way.");
        }
        Commands::Logout => {
            app.logout();
            println!("Signed out.");
        }
        Commands::Whoami => match app.whoami().await {
            Some(user) => views::user(&user, app.current_tenant(), app.sidebar_collapsed()),
            None => println!("Not signed in."),
        },
        Commands::Tenants => views::tenants(app.tenants(), app.current_tenant()),
        Commands::SwitchTenant { id } => {
            let tenant = app
                .switch_tenant(&id)
                .with_context(|| format!("cannot switch to tenant {id}"))?;
            println!("Now viewing {} ({}).", tenant.name, tenant.id);
        }
        Commands::Dashboard { range, start, end } => {
            let range = time_range(range, start, end);
            match app.dashboard(&range).await? {
                Access::Granted(metrics) => views::dashboard(app.current_tenant(), &metrics),
                Access::Denied => views::access_denied(),
            }
        }
        Commands::History {
            search,
            status,
            brand,
            from,
            to,
            page,
        } => {
            let filters = CallFilters::from_form(&search, &status, &brand, from, to)?;
            match app.history(&filters, page).await? {
                Access::Granted((result, brands)) => {
                    views::history(app.current_tenant(), &filters, &result, &brands)
                }
                Access::Denied => views::access_denied(),
            }
        }
        Commands::Call { id } => {
            match app.call(&id).await? {
                Access::Granted(call) => views::call(&call),
                Access::Denied => views::access_denied(),
            }
        }
        Commands::Agents => {
            match app.agents().await? {
                Access::Granted(agents) => views::agents(app.current_tenant(), &agents),
                Access::Denied => views::access_denied(),
            }
        }
        Commands::Settings => match app.settings()? {
            Access::Granted(tenant) => views::settings(tenant),
            Access::Denied => views::access_denied(),
        },
        Commands::ToggleSidebar => {
            let collapsed = app.toggle_sidebar()?;
            println!("Sidebar {}.", if collapsed { "collapsed" } else { "expanded" });
        }
        Commands::Route { path } => match app.route(&path) {
            RouteDecision::Loading => println!("{path}: loading"),
            RouteDecision::Render(route) => println!("{path}: render {}", route.path()),
            RouteDecision::Redirect(route) => println!("{path}: redirect to {}", route.path()),
        },
    }

    Ok(())
}
