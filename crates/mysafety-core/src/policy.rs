// Copyright 2024 MySafety Platform
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Decision values, request context, and the [`Authorizer`] trait.
//!
//! Policy Enforcement Points (route handlers, UI guards) depend on
//! [`Authorizer`] rather than on a concrete policy, so a plain policy and an
//! audited one are interchangeable. Evaluation is synchronous and pure: the
//! caller's role is always passed in explicitly.

use crate::errors::PermissionDenied;
use crate::types::{Action, Caller, Resource, Role};
use serde::{Deserialize, Serialize};

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// The operation is permitted.
    Allow,
    /// The operation is not permitted.
    Deny,
}

impl Decision {
    /// Returns `true` for [`Decision::Allow`].
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Allow)
    }
}

impl From<bool> for Decision {
    fn from(allowed: bool) -> Self {
        if allowed {
            Decision::Allow
        } else {
            Decision::Deny
        }
    }
}

/// The (role, resource, action) triple a decision is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessRequest {
    /// Role of the caller.
    pub role: Role,
    /// Resource being accessed.
    pub resource: Resource,
    /// Operation being attempted.
    pub action: Action,
}

impl AccessRequest {
    /// Creates a new request.
    pub fn new(role: Role, resource: Resource, action: Action) -> Self {
        Self {
            role,
            resource,
            action,
        }
    }
}

/// A decision together with the name of the rule that produced it.
///
/// `rule` is `None` when nothing matched and the default deny applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// The decision.
    pub decision: Decision,
    /// Name of the matching rule, if any.
    pub rule: Option<&'static str>,
}

impl Evaluation {
    /// An allow produced by the named rule.
    pub fn allowed_by(rule: &'static str) -> Self {
        Self {
            decision: Decision::Allow,
            rule: Some(rule),
        }
    }

    /// The default deny.
    pub fn denied() -> Self {
        Self {
            decision: Decision::Deny,
            rule: None,
        }
    }
}

/// Decides whether a role may perform an action on a resource.
///
/// Implementors only provide [`evaluate`](Authorizer::evaluate); the other
/// entry points are derived from it and must not be overridden with
/// different semantics.
pub trait Authorizer: Send + Sync {
    /// Evaluates the request and reports which rule decided it.
    fn evaluate(&self, request: &AccessRequest) -> Evaluation;

    /// Returns the decision for `(role, resource, action)`. Never fails.
    fn decide(&self, role: Role, resource: Resource, action: Action) -> Decision {
        self.evaluate(&AccessRequest::new(role, resource, action)).decision
    }

    /// Fail-fast variant of [`decide`](Authorizer::decide).
    ///
    /// # Errors
    /// Returns [`PermissionDenied`] carrying the denied action and resource.
    fn require(&self, role: Role, resource: Resource, action: Action) -> Result<(), PermissionDenied> {
        match self.decide(role, resource, action) {
            Decision::Allow => Ok(()),
            Decision::Deny => Err(PermissionDenied { action, resource }),
        }
    }

    /// [`decide`](Authorizer::decide) using the caller's role.
    fn decide_for(&self, caller: &Caller, resource: Resource, action: Action) -> Decision {
        self.decide(caller.role, resource, action)
    }

    /// [`require`](Authorizer::require) using the caller's role.
    ///
    /// # Errors
    /// Returns [`PermissionDenied`] when the caller's role is denied.
    fn require_for(&self, caller: &Caller, resource: Resource, action: Action) -> Result<(), PermissionDenied> {
        self.require(caller.role, resource, action)
    }
}

impl<A: Authorizer + ?Sized> Authorizer for std::sync::Arc<A> {
    fn evaluate(&self, request: &AccessRequest) -> Evaluation {
        (**self).evaluate(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    /// Allows reads only, so the provided methods can be checked in isolation.
    struct ReadOnly;

    impl Authorizer for ReadOnly {
        fn evaluate(&self, request: &AccessRequest) -> Evaluation {
            if request.action == Action::Read {
                Evaluation::allowed_by("read-only")
            } else {
                Evaluation::denied()
            }
        }
    }

    #[test]
    fn decision_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Decision::Allow).unwrap(), "\"allow\"");
        assert_eq!(serde_json::to_string(&Decision::Deny).unwrap(), "\"deny\"");
        assert_eq!(Decision::from(true), Decision::Allow);
        assert!(!Decision::from(false).is_allowed());
    }

    #[test]
    fn require_mirrors_decide() {
        let authz = ReadOnly;
        assert_eq!(authz.require(Role::Employee, Resource::Sites, Action::Read), Ok(()));
        assert_eq!(
            authz.require(Role::Employee, Resource::Sites, Action::Delete),
            Err(PermissionDenied {
                action: Action::Delete,
                resource: Resource::Sites,
            })
        );
    }

    #[test]
    fn caller_variants_use_the_callers_role() {
        let authz = ReadOnly;
        let caller = Caller::new(Uuid::new_v4(), Uuid::new_v4(), Role::Supervisor);
        assert_eq!(authz.decide_for(&caller, Resource::Hazards, Action::Read), Decision::Allow);
        assert!(authz.require_for(&caller, Resource::Hazards, Action::Update).is_err());
    }

    #[test]
    fn access_request_deserializes_from_wire_names() {
        let request: AccessRequest = serde_json::from_str(
            r#"{"role":"employee","resource":"sitePersonnel","action":"read"}"#,
        )
        .unwrap();
        assert_eq!(
            request,
            AccessRequest::new(Role::Employee, Resource::SitePersonnel, Action::Read)
        );
    }

    #[test]
    fn arc_delegates() {
        let authz: std::sync::Arc<dyn Authorizer> = std::sync::Arc::new(ReadOnly);
        assert_eq!(
            authz.evaluate(&AccessRequest::new(Role::Employee, Resource::Teams, Action::Read)),
            Evaluation::allowed_by("read-only")
        );
    }
}
