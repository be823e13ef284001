//! Application wiring: the injected stores, services, and mock data
//! behind every command.

use anyhow::{Context, bail};
use chrono::Utc;
use nexus_analytics::query;
use nexus_analytics::{
    DashboardMetrics, InMemoryAgentRepository, InMemoryCallLogRepository, MetricAggregator,
    MockDataset, TimeRange,
};
use nexus_auth::backend::seed_users;
use nexus_auth::{AuthAction, AuthService, MockAuthBackend, SignUpInput};
use nexus_core::models::agent::AgentStat;
use nexus_core::models::call_log::{CallFilters, CallLog};
use nexus_core::models::tenant::Tenant;
use nexus_core::models::user::User;
use nexus_core::repository::{AgentRepository, CallLogRepository, PaginatedResult, Pagination};
use nexus_core::route::{Route, RouteDecision, guard};
use nexus_core::can_access;
use nexus_state::{KeyValueStore, Preferences, SessionStore, TenantRegistry, UserDirectory};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::config::AppConfig;

/// What a protected view resolved to for the current user.
pub enum Access<T> {
    Granted(T),
    Denied,
}

pub struct App<S: KeyValueStore> {
    sessions: SessionStore<S>,
    tenants: TenantRegistry<S>,
    preferences: Preferences<S>,
    directory: UserDirectory<S>,
    auth: AuthService<MockAuthBackend>,
    calls: InMemoryCallLogRepository,
    agents: InMemoryAgentRepository,
    aggregator: MetricAggregator,
    page_size: usize,
    rng: StdRng,
}

impl<S: KeyValueStore> App<S> {
    /// Generate the mock data and restore persisted state.
    pub fn start(store: S, config: &AppConfig) -> anyhow::Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let data = MockDataset::generate(&mut rng, Utc::now(), &config.analytics);

        // Accounts from earlier signups must resolve, or their tokens
        // would be rejected on the next run.
        let directory = UserDirectory::new(store.clone());
        let mut users = seed_users();
        users.extend(directory.registered());
        let auth = AuthService::new(MockAuthBackend::with_users(users, config.auth.clone()));
        let mut sessions = SessionStore::new(store.clone());
        auth.restore(&mut sessions);
        let tenants = TenantRegistry::load(store.clone(), data.tenants.clone())
            .context("failed to load tenant registry")?;

        info!(
            authenticated = sessions.is_authenticated(),
            tenant_id = %tenants.current().id,
            "Nexus state restored"
        );

        Ok(Self {
            sessions,
            tenants,
            preferences: Preferences::new(store),
            directory,
            auth,
            calls: InMemoryCallLogRepository::new(data.calls.clone()),
            agents: InMemoryAgentRepository::new(data.agents.clone()),
            aggregator: MetricAggregator::new(&config.analytics),
            page_size: config.analytics.page_size,
            rng,
        })
    }

    pub fn current_tenant(&self) -> &Tenant {
        self.tenants.current()
    }

    pub fn tenants(&self) -> &[Tenant] {
        self.tenants.available()
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.preferences.sidebar_collapsed()
    }

    pub fn route(&self, path: &str) -> RouteDecision {
        guard(path, self.sessions.session())
    }

    pub async fn login(&mut self, email: &str) -> anyhow::Result<User> {
        self.auth
            .login(&mut self.sessions, email)
            .await
            .context(AuthAction::SignIn.failure_message())
    }

    pub async fn sign_up(&mut self, input: SignUpInput) -> anyhow::Result<(User, Tenant)> {
        let (user, tenant) = self
            .auth
            .sign_up(&mut self.sessions, &mut self.tenants, input)
            .await
            .context(AuthAction::SignUp.failure_message())?;
        self.directory
            .record(&user)
            .context(AuthAction::SignUp.failure_message())?;
        Ok((user, tenant))
    }

    pub async fn forgot_password(&mut self, email: &str) -> anyhow::Result<()> {
        self.auth
            .forgot_password(&mut self.sessions, email)
            .await
            .context(AuthAction::PasswordReset.failure_message())
    }

    pub fn logout(&mut self) {
        self.auth.logout(&mut self.sessions);
    }

    /// Confirm the persisted token is still accepted.
    pub async fn whoami(&mut self) -> Option<User> {
        self.auth.revalidate(&mut self.sessions).await
    }

    pub fn switch_tenant(&mut self, tenant_id: &str) -> anyhow::Result<&Tenant> {
        Ok(self.tenants.switch_tenant(tenant_id)?)
    }

    pub fn toggle_sidebar(&self) -> anyhow::Result<bool> {
        Ok(self.preferences.toggle_sidebar()?)
    }

    /// Run the route guard and the role check for a protected view.
    ///
    /// Returns `false` when the user is signed in but their role may
    /// not open the view.
    fn authorize(&self, route: Route) -> anyhow::Result<bool> {
        match self.route(route.path()) {
            RouteDecision::Render(_) => {}
            RouteDecision::Redirect(Route::Login) | RouteDecision::Loading => {
                bail!("not signed in; run `nexus login --email <address>` first")
            }
            RouteDecision::Redirect(other) => bail!("redirected to {}", other.path()),
        }

        Ok(match (self.sessions.user(), route.resource()) {
            (Some(user), Some(resource)) => can_access(user.role, resource),
            (_, None) => true,
            (None, Some(_)) => false,
        })
    }

    pub async fn dashboard(
        &mut self,
        range: &TimeRange,
    ) -> anyhow::Result<Access<DashboardMetrics>> {
        if !self.authorize(Route::Dashboard)? {
            return Ok(Access::Denied);
        }
        let agents = self.agents.list(&self.tenants.current().id).await?;
        let metrics =
            self.aggregator
                .aggregate(self.tenants.current(), range, &agents, &mut self.rng);
        Ok(Access::Granted(metrics))
    }

    pub async fn history(
        &self,
        filters: &CallFilters,
        page: usize,
    ) -> anyhow::Result<Access<(PaginatedResult<CallLog>, Vec<String>)>> {
        if !self.authorize(Route::History)? {
            return Ok(Access::Denied);
        }
        let tenant_id = &self.tenants.current().id;

        // Clamp against the real page count before fetching the window.
        let first = self
            .calls
            .search(tenant_id, filters, Pagination::new(1, self.page_size))
            .await?;
        let page = query::clamp_page(page, first.page_count());
        let result = if page == 1 {
            first
        } else {
            self.calls
                .search(tenant_id, filters, Pagination::new(page, self.page_size))
                .await?
        };
        let brands = self.calls.brands(tenant_id).await?;
        Ok(Access::Granted((result, brands)))
    }

    pub async fn call(&self, id: &str) -> anyhow::Result<Access<CallLog>> {
        if !self.authorize(Route::History)? {
            return Ok(Access::Denied);
        }
        let call = self.calls.get_by_id(&self.tenants.current().id, id).await?;
        Ok(Access::Granted(call))
    }

    pub async fn agents(&self) -> anyhow::Result<Access<Vec<AgentStat>>> {
        if !self.authorize(Route::Agents)? {
            return Ok(Access::Denied);
        }
        let agents = self.agents.list(&self.tenants.current().id).await?;
        Ok(Access::Granted(agents))
    }

    pub fn settings(&self) -> anyhow::Result<Access<&Tenant>> {
        if !self.authorize(Route::Settings)? {
            return Ok(Access::Denied);
        }
        Ok(Access::Granted(self.tenants.current()))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use nexus_analytics::AnalyticsConfig;
    use nexus_auth::AuthConfig;
    use nexus_state::MemoryStore;

    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            state_path: PathBuf::from("unused.json"),
            auth: AuthConfig::default().without_delays(),
            analytics: AnalyticsConfig::default(),
            seed: Some(99),
        }
    }

    fn test_app() -> App<MemoryStore> {
        App::start(MemoryStore::new(), &test_config()).unwrap()
    }

    fn signup_input() -> SignUpInput {
        SignUpInput {
            email: "founder@startup.io".into(),
            name: "Dana Founder".into(),
            workspace_name: "Dana's Lab".into(),
        }
    }

    #[tokio::test]
    async fn protected_views_require_login() {
        let app = test_app();
        assert!(app.agents().await.is_err());
        assert_eq!(
            app.route("/history"),
            RouteDecision::Redirect(Route::Login)
        );
    }

    #[tokio::test]
    async fn viewer_is_denied_settings_but_sees_history() {
        let mut app = test_app();
        app.login("viewer@nexus.ai").await.unwrap();

        assert!(matches!(app.settings().unwrap(), Access::Denied));
        let history = app.history(&CallFilters::default(), 1).await.unwrap();
        assert!(matches!(history, Access::Granted(_)));
    }

    #[tokio::test]
    async fn history_page_is_clamped_and_follows_tenant() {
        let mut app = test_app();
        app.login("admin@nexus.ai").await.unwrap();

        let Access::Granted((page, _)) = app.history(&CallFilters::default(), 99).await.unwrap()
        else {
            panic!("admin should see history");
        };
        assert_eq!(page.page, 3);
        assert!(page.items.iter().all(|c| c.tenant_id == "tenant_a"));

        app.switch_tenant("tenant_b").unwrap();
        let Access::Granted((page, _)) = app.history(&CallFilters::default(), 1).await.unwrap()
        else {
            panic!("admin should see history");
        };
        assert_eq!(page.total, 17);
        assert!(page.items.iter().all(|c| c.tenant_id == "tenant_b"));
    }

    #[tokio::test]
    async fn dashboard_uses_current_tenant_agents() {
        let mut app = test_app();
        app.login("admin@nexus.ai").await.unwrap();
        app.switch_tenant("tenant_c").unwrap();

        let Access::Granted(metrics) = app.dashboard(&TimeRange::Today).await.unwrap() else {
            panic!("admin should see the dashboard");
        };
        assert_eq!(metrics.active_agents, 0);
        assert!(metrics.total_calls < 195);
    }

    #[tokio::test]
    async fn failed_login_surfaces_static_message() {
        let mut app = test_app();
        let err = app.login("unknown@x.com").await.unwrap_err();
        assert_eq!(err.to_string(), AuthAction::SignIn.failure_message());
    }

    #[tokio::test]
    async fn signup_survives_restart() {
        let store = MemoryStore::new();
        let mut first = App::start(store.clone(), &test_config()).unwrap();
        let (user, tenant) = first.sign_up(signup_input()).await.unwrap();

        let mut second = App::start(store.clone(), &test_config()).unwrap();
        assert_eq!(second.current_tenant(), &tenant);
        assert_eq!(second.whoami().await.map(|u| u.id), Some(user.id.clone()));
        assert!(store.get(nexus_state::keys::SESSION_TOKEN).unwrap().is_some());

        second.logout();
        let again = second.login("founder@startup.io").await.unwrap();
        assert_eq!(again.id, user.id);

        let mut third = App::start(store, &test_config()).unwrap();
        assert_eq!(third.whoami().await.map(|u| u.id), Some(user.id));
        assert!(matches!(third.settings().unwrap(), Access::Granted(t) if t.id == tenant.id));
    }

    #[tokio::test]
    async fn failed_signup_leaves_nothing_behind() {
        let store = MemoryStore::new();
        let mut app = App::start(store.clone(), &test_config()).unwrap();
        let input = SignUpInput {
            workspace_name: " ".into(),
            ..signup_input()
        };

        let err = app.sign_up(input).await.unwrap_err();
        assert_eq!(err.to_string(), AuthAction::SignUp.failure_message());
        assert!(app.whoami().await.is_none());

        let mut next = App::start(store, &test_config()).unwrap();
        assert_eq!(next.current_tenant().id, "tenant_a");
        assert!(next.login("founder@startup.io").await.is_err());
    }
}
