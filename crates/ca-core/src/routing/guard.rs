use serde::{Deserialize, Serialize};

use super::Route;
use crate::session::Session;

/// What the shell should render for a requested route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Requested { route: Route },
    Login,
    Onboarding,
}

/// Pure (session, route) → view decision.
///
/// 纯函数：根据会话与路由决定视图。
pub struct RouteGuard;

impl RouteGuard {
    pub fn resolve(session: &Session, route: &Route) -> View {
        if route.is_public() {
            return View::Requested {
                route: route.clone(),
            };
        }
        if !session.is_authenticated() {
            return View::Login;
        }
        match route {
            Route::Onboarding => View::Onboarding,
            _ => View::Requested {
                route: route.clone(),
            },
        }
    }
}
