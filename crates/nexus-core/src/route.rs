//! Navigable routes and the authentication guard in front of them.

use crate::access::Resource;
use crate::models::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Signup,
    ForgotPassword,
    Dashboard,
    History,
    Settings,
    Agents,
}

impl Route {
    /// Resolve a path. Unknown paths land on the dashboard.
    pub fn resolve(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            "/forgot-password" => Route::ForgotPassword,
            "/history" => Route::History,
            "/settings" => Route::Settings,
            "/agents" => Route::Agents,
            _ => Route::Dashboard,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::ForgotPassword => "/forgot-password",
            Route::Dashboard => "/",
            Route::History => "/history",
            Route::Settings => "/settings",
            Route::Agents => "/agents",
        }
    }

    pub fn is_public(self) -> bool {
        matches!(self, Route::Login | Route::Signup | Route::ForgotPassword)
    }

    /// The gated resource behind a protected route.
    pub fn resource(self) -> Option<Resource> {
        match self {
            Route::Dashboard => Some(Resource::Dashboard),
            Route::History => Some(Resource::CallHistory),
            Route::Settings => Some(Resource::Settings),
            Route::Agents => Some(Resource::Agents),
            Route::Login | Route::Signup | Route::ForgotPassword => None,
        }
    }
}

/// Outcome of running the guard for a requested path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session restoration is still in flight.
    Loading,
    Render(Route),
    Redirect(Route),
}

/// Decide what to show for `path` given the current session.
///
/// Unknown paths redirect to the dashboard, then protected routes
/// require an authenticated session.
pub fn guard(path: &str, session: &Session) -> RouteDecision {
    let route = Route::resolve(path);
    let canonical = path.trim_end_matches('/');
    if route == Route::Dashboard && !canonical.is_empty() {
        return RouteDecision::Redirect(Route::Dashboard);
    }
    if route.is_public() {
        return RouteDecision::Render(route);
    }
    if session.is_loading {
        return RouteDecision::Loading;
    }
    if session.is_authenticated {
        RouteDecision::Render(route)
    } else {
        RouteDecision::Redirect(Route::Login)
    }
}
