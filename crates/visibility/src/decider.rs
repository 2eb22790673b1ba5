//! VisibilityDecider - the visibility predicate and its override chain

use crate::RoleAllowList;
use shared::UserContext;

/// Override function applied to a computed visibility result.
///
/// Receives the result of the previous stage and may change it in either
/// direction. Overrides must be side-effect-free.
pub type OverrideFn = Box<dyn Fn(bool, &UserContext, &RoleAllowList) -> bool + Send + Sync>;

/// Decides whether a user may view a widget guarded by a role allow-list.
///
/// The decision itself is a pure function of its arguments; the only
/// configuration a decider carries is its ordered list of override
/// functions, intended to be registered once during initialization and
/// treated as append-only afterwards.
#[derive(Default)]
pub struct VisibilityDecider {
    /// Override chain, applied in registration order
    overrides: Vec<OverrideFn>,
}

impl VisibilityDecider {
    /// Create a decider with no overrides
    pub fn new() -> Self {
        Self {
            overrides: Vec::new(),
        }
    }

    /// Create a decider with an ordered list of override functions
    pub fn with_overrides(overrides: Vec<OverrideFn>) -> Self {
        Self { overrides }
    }

    /// Register an override.
    ///
    /// Overrides compose sequentially: each receives the previous stage's
    /// result, so the last registered override has the final word.
    pub fn register_override<F>(&mut self, f: F)
    where
        F: Fn(bool, &UserContext, &RoleAllowList) -> bool + Send + Sync + 'static,
    {
        self.overrides.push(Box::new(f));
    }

    /// Number of registered overrides
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Compute whether `user` may view a widget guarded by `allow_list`.
    ///
    /// With no restriction configured everyone may view. Once roles have
    /// been selected the posture flips to deny, and the checks below try to
    /// disprove it. The unauthenticated gate is evaluated before the bypass
    /// capability: an anonymous user is denied even if the capability flag
    /// is somehow set.
    pub fn can_view(&self, user: &UserContext, allow_list: &RoleAllowList) -> bool {
        let mut can_view = true;

        if !allow_list.is_unrestricted() {
            can_view = false;

            if user.authenticated {
                if user.can_bypass_restrictions {
                    can_view = true;
                } else {
                    // Any single matching role is enough; plain OR over the
                    // selection, so iteration order cannot change the outcome.
                    for role in allow_list.roles() {
                        if user.has_role(role) {
                            can_view = true;
                        }
                    }
                }
            }
        }

        // The override chain always runs last, also for unrestricted widgets.
        self.overrides
            .iter()
            .fold(can_view, |result, f| f(result, user, allow_list))
    }
}

impl std::fmt::Debug for VisibilityDecider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisibilityDecider")
            .field("overrides", &self.overrides.len())
            .finish()
    }
}
