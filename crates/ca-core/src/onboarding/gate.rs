use crate::routing::Route;

/// What the onboarding gate wants for the route being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Stay,
    Redirect(Route),
}

/// Pure redirect decision for an authenticated user.
///
/// - On the onboarding route with a completed questionnaire: go to the dashboard.
/// - On any other guarded route without it: go to onboarding.
///
/// Public routes never redirect.
pub fn decide(completed: bool, route: &Route) -> GateDecision {
    if !route.is_guarded() {
        return GateDecision::Stay;
    }
    match (route, completed) {
        (Route::Onboarding, true) => GateDecision::Redirect(Route::Dashboard),
        (Route::Onboarding, false) => GateDecision::Stay,
        (_, false) => GateDecision::Redirect(Route::Onboarding),
        (_, true) => GateDecision::Stay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_user_leaves_onboarding() {
        assert_eq!(
            decide(true, &Route::Onboarding),
            GateDecision::Redirect(Route::Dashboard)
        );
        assert_eq!(decide(true, &Route::Dashboard), GateDecision::Stay);
    }

    #[test]
    fn pending_user_is_sent_to_onboarding() {
        assert_eq!(
            decide(false, &Route::Dashboard),
            GateDecision::Redirect(Route::Onboarding)
        );
        assert_eq!(
            decide(false, &Route::PatientDetail { id: "4".into() }),
            GateDecision::Redirect(Route::Onboarding)
        );
        assert_eq!(decide(false, &Route::Onboarding), GateDecision::Stay);
    }

    #[test]
    fn public_routes_never_redirect() {
        assert_eq!(decide(false, &Route::Login), GateDecision::Stay);
        assert_eq!(
            decide(
                true,
                &Route::NotFound {
                    path: "/nope".into()
                }
            ),
            GateDecision::Stay
        );
    }
}
