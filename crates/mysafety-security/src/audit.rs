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

//! Audit logging of authorization decisions.

use mysafety_core::{
    AccessRequest, Action, Authorizer, Caller, Decision, Evaluation, PermissionDenied, Resource,
};
use tracing::field::display;

const DEFAULT_DENY: &str = "default-deny";

/// Wraps an [`Authorizer`] and emits one `tracing` event per decision.
///
/// Allows are logged at `DEBUG`, denials at `WARN`. The decision itself is
/// passed through untouched.
#[derive(Debug, Clone)]
pub struct AuditedAuthorizer<A> {
    inner: A,
}

impl<A: Authorizer> AuditedAuthorizer<A> {
    /// Wraps `inner`.
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    /// The wrapped authorizer.
    pub fn inner(&self) -> &A {
        &self.inner
    }
}

fn record(request: &AccessRequest, evaluation: &Evaluation, caller: Option<&Caller>) {
    let rule = evaluation.rule.unwrap_or(DEFAULT_DENY);
    let user_id = caller.map(|c| display(c.user_id));
    let tenant_id = caller.map(|c| display(c.tenant_id));

    match evaluation.decision {
        Decision::Allow => tracing::debug!(
            role = %request.role,
            resource = %request.resource,
            action = %request.action,
            rule,
            user_id,
            tenant_id,
            "Access allowed"
        ),
        Decision::Deny => tracing::warn!(
            role = %request.role,
            resource = %request.resource,
            action = %request.action,
            rule,
            user_id,
            tenant_id,
            "Access denied"
        ),
    }
}

impl<A: Authorizer> Authorizer for AuditedAuthorizer<A> {
    fn evaluate(&self, request: &AccessRequest) -> Evaluation {
        let evaluation = self.inner.evaluate(request);
        record(request, &evaluation, None);
        evaluation
    }

    fn decide_for(&self, caller: &Caller, resource: Resource, action: Action) -> Decision {
        let request = AccessRequest::new(caller.role, resource, action);
        let evaluation = self.inner.evaluate(&request);
        record(&request, &evaluation, Some(caller));
        evaluation.decision
    }

    fn require_for(&self, caller: &Caller, resource: Resource, action: Action) -> Result<(), PermissionDenied> {
        match self.decide_for(caller, resource, action) {
            Decision::Allow => Ok(()),
            Decision::Deny => Err(PermissionDenied { action, resource }),
        }
    }
}
