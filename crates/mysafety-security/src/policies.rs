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

//! Role-based access control policy.
//!
//! The policy is an ordered list of allow rules. Rules are tried top to
//! bottom and the first match allows the request; if none match the request
//! is denied. The team-access rule sits last and is checked for every role,
//! so it can allow requests that a role's own rules do not cover.

use mysafety_core::{AccessRequest, Action, Authorizer, Evaluation, Resource, Role};
use std::fmt;

/// A single named allow rule.
#[derive(Clone, Copy)]
pub struct Rule {
    name: &'static str,
    predicate: fn(&AccessRequest) -> bool,
}

impl Rule {
    /// Creates a rule that allows every request matching `predicate`.
    pub const fn new(name: &'static str, predicate: fn(&AccessRequest) -> bool) -> Self {
        Self { name, predicate }
    }

    /// Stable rule name, reported in [`Evaluation::rule`] and audit logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this rule applies to the request.
    pub fn matches(&self, request: &AccessRequest) -> bool {
        (self.predicate)(request)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

const SUPERVISOR_WRITABLE: &[Resource] = &[Resource::Hazards, Resource::Inspections, Resource::Teams];
const EMPLOYEE_HIDDEN: &[Resource] = &[Resource::Users, Resource::SitePersonnel];
const SUBCONTRACTOR_READABLE: &[Resource] = &[Resource::Hazards, Resource::Permits, Resource::Teams];
const TEAM_ACTIONS: &[Action] = &[Action::Read, Action::Update];

fn super_admin(r: &AccessRequest) -> bool {
    r.role == Role::SuperAdmin
}

fn safety_officer(r: &AccessRequest) -> bool {
    r.role == Role::SafetyOfficer
}

fn supervisor_read(r: &AccessRequest) -> bool {
    r.role == Role::Supervisor && r.action == Action::Read
}

fn supervisor_write(r: &AccessRequest) -> bool {
    r.role == Role::Supervisor
        && matches!(r.action, Action::Create | Action::Update)
        && SUPERVISOR_WRITABLE.contains(&r.resource)
}

fn employee_read(r: &AccessRequest) -> bool {
    r.role == Role::Employee && r.action == Action::Read && !EMPLOYEE_HIDDEN.contains(&r.resource)
}

fn employee_report_hazard(r: &AccessRequest) -> bool {
    r.role == Role::Employee && r.action == Action::Create && r.resource == Resource::Hazards
}

fn subcontractor_read(r: &AccessRequest) -> bool {
    r.role == Role::Subcontractor
        && r.action == Action::Read
        && SUBCONTRACTOR_READABLE.contains(&r.resource)
}

fn subcontractor_report_hazard(r: &AccessRequest) -> bool {
    r.role == Role::Subcontractor && r.action == Action::Create && r.resource == Resource::Hazards
}

// Role-independent; must stay after every role rule.
fn team_access(r: &AccessRequest) -> bool {
    r.resource == Resource::Teams && TEAM_ACTIONS.contains(&r.action)
}

static RULES: &[Rule] = &[
    Rule::new("super-admin", super_admin),
    Rule::new("safety-officer", safety_officer),
    Rule::new("supervisor-read", supervisor_read),
    Rule::new("supervisor-write", supervisor_write),
    Rule::new("employee-read", employee_read),
    Rule::new("employee-report-hazard", employee_report_hazard),
    Rule::new("subcontractor-read", subcontractor_read),
    Rule::new("subcontractor-report-hazard", subcontractor_report_hazard),
    Rule::new("team-access", team_access),
];

/// The MySafety role-based authorization policy.
///
/// Stateless and pure: identical inputs always produce identical decisions,
/// and a single instance can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct AuthorizationPolicy {
    rules: &'static [Rule],
}

impl AuthorizationPolicy {
    /// Creates the policy with the standard rule set.
    pub fn new() -> Self {
        Self { rules: RULES }
    }

    /// The ordered rule list, first match wins.
    pub fn rules(&self) -> &[Rule] {
        self.rules
    }
}

impl Default for AuthorizationPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Authorizer for AuthorizationPolicy {
    fn evaluate(&self, request: &AccessRequest) -> Evaluation {
        self.rules
            .iter()
            .find(|rule| rule.matches(request))
            .map(|rule| Evaluation::allowed_by(rule.name))
            .unwrap_or_else(Evaluation::denied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mysafety_core::Decision;

    fn rule_for(role: Role, resource: Resource, action: Action) -> Option<&'static str> {
        AuthorizationPolicy::new()
            .evaluate(&AccessRequest::new(role, resource, action))
            .rule
    }

    #[test]
    fn rule_names_are_unique() {
        let policy = AuthorizationPolicy::new();
        let mut names: Vec<_> = policy.rules().iter().map(Rule::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), policy.rules().len());
    }

    #[test]
    fn team_access_is_last() {
        let policy = AuthorizationPolicy::new();
        assert_eq!(policy.rules().last().map(Rule::name), Some("team-access"));
    }

    #[test]
    fn admin_roles_short_circuit() {
        assert_eq!(rule_for(Role::SuperAdmin, Resource::Teams, Action::Read), Some("super-admin"));
        assert_eq!(
            rule_for(Role::SafetyOfficer, Resource::Users, Action::Delete),
            Some("safety-officer")
        );
    }

    #[test]
    fn supervisor_rows() {
        assert_eq!(rule_for(Role::Supervisor, Resource::Users, Action::Read), Some("supervisor-read"));
        assert_eq!(
            rule_for(Role::Supervisor, Resource::Inspections, Action::Update),
            Some("supervisor-write")
        );
        assert_eq!(rule_for(Role::Supervisor, Resource::Teams, Action::Create), Some("supervisor-write"));
        assert_eq!(rule_for(Role::Supervisor, Resource::Hazards, Action::Delete), None);
        assert_eq!(rule_for(Role::Supervisor, Resource::Permits, Action::Create), None);
    }

    #[test]
    fn employee_rows() {
        assert_eq!(rule_for(Role::Employee, Resource::Training, Action::Read), Some("employee-read"));
        assert_eq!(rule_for(Role::Employee, Resource::Users, Action::Read), None);
        assert_eq!(
            rule_for(Role::Employee, Resource::Hazards, Action::Create),
            Some("employee-report-hazard")
        );
        assert_eq!(rule_for(Role::Employee, Resource::Incidents, Action::Create), None);
    }

    #[test]
    fn subcontractor_rows() {
        assert_eq!(
            rule_for(Role::Subcontractor, Resource::Permits, Action::Read),
            Some("subcontractor-read")
        );
        assert_eq!(rule_for(Role::Subcontractor, Resource::Sites, Action::Read), None);
        assert_eq!(
            rule_for(Role::Subcontractor, Resource::Hazards, Action::Create),
            Some("subcontractor-report-hazard")
        );
    }

    #[test]
    fn team_access_applies_after_role_rules_fall_through() {
        // Employee reads of teams are caught by the employee rule first.
        assert_eq!(rule_for(Role::Employee, Resource::Teams, Action::Read), Some("employee-read"));
        assert_eq!(rule_for(Role::Employee, Resource::Teams, Action::Update), Some("team-access"));
        assert_eq!(
            rule_for(Role::Subcontractor, Resource::Teams, Action::Update),
            Some("team-access")
        );
        assert_eq!(rule_for(Role::Subcontractor, Resource::Teams, Action::Delete), None);
        assert_eq!(rule_for(Role::Employee, Resource::Teams, Action::Create), None);
    }

    #[test]
    fn default_deny_has_no_rule() {
        let evaluation = AuthorizationPolicy::new()
            .evaluate(&AccessRequest::new(Role::Employee, Resource::Users, Action::Delete));
        assert_eq!(evaluation.decision, Decision::Deny);
        assert_eq!(evaluation.rule, None);
    }
}
