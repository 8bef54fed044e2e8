use serde::Serialize;

pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "to", rename_all = "snake_case")]
pub enum RouteDecision {
    Allow,
    Redirect(String),
}

/// Every route except the login page requires an authenticated session.
pub fn guard_route(path: &str, is_authenticated: bool) -> RouteDecision {
    if path == LOGIN_PATH || is_authenticated {
        RouteDecision::Allow
    } else {
        RouteDecision::Redirect(LOGIN_PATH.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_always_allowed() {
        assert_eq!(guard_route(LOGIN_PATH, false), RouteDecision::Allow);
        assert_eq!(guard_route(LOGIN_PATH, true), RouteDecision::Allow);
    }

    #[test]
    fn test_protected_routes() {
        assert_eq!(
            guard_route("/content/articles", false),
            RouteDecision::Redirect(LOGIN_PATH.to_string())
        );
        assert_eq!(guard_route("/content/articles", true), RouteDecision::Allow);
        assert_eq!(
            guard_route("/", false),
            RouteDecision::Redirect(LOGIN_PATH.to_string())
        );
    }
}
