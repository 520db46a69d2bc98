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

//! Precomputed (role, resource, action) decision table.
//!
//! Built by evaluating an [`Authorizer`] over every combination, so it always
//! agrees with the authorizer it was built from. UI guards use
//! [`PermissionMatrix::grants_for`] to decide which controls to show.

use mysafety_core::{Action, Authorizer, Decision, MySafetyError, Resource, Role};
use serde::Serialize;

const ROLES: usize = Role::ALL.len();
const RESOURCES: usize = Resource::ALL.len();
const ACTIONS: usize = Action::ALL.len();

/// The actions a role may perform on one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grant {
    /// The resource.
    pub resource: Resource,
    /// Allowed actions, in declaration order.
    pub actions: Vec<Action>,
}

/// Every grant held by one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleGrants {
    /// The role.
    pub role: Role,
    /// Resources with at least one allowed action.
    pub grants: Vec<Grant>,
}

/// Exhaustive decision table for every role, resource and action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionMatrix {
    cells: [[[Decision; ACTIONS]; RESOURCES]; ROLES],
}

impl PermissionMatrix {
    /// Evaluates `authorizer` for all combinations.
    pub fn build<A: Authorizer + ?Sized>(authorizer: &A) -> Self {
        let mut cells = [[[Decision::Deny; ACTIONS]; RESOURCES]; ROLES];
        for &role in Role::ALL {
            for &resource in Resource::ALL {
                for &action in Action::ALL {
                    cells[role as usize][resource as usize][action as usize] =
                        authorizer.decide(role, resource, action);
                }
            }
        }

        let matrix = Self { cells };
        tracing::debug!(allowed = matrix.allowed_count(), "Built permission matrix");
        matrix
    }

    /// Table lookup for a single cell.
    pub fn decision(&self, role: Role, resource: Resource, action: Action) -> Decision {
        self.cells[role as usize][resource as usize][action as usize]
    }

    /// Number of allowed cells across the whole table.
    pub fn allowed_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .filter(|d| d.is_allowed())
            .count()
    }

    /// The resources `role` can touch and what it may do with each.
    pub fn grants_for(&self, role: Role) -> RoleGrants {
        let grants = Resource::ALL
            .iter()
            .filter_map(|&resource| {
                let actions: Vec<Action> = Action::ALL
                    .iter()
                    .copied()
                    .filter(|&action| self.decision(role, resource, action).is_allowed())
                    .collect();
                (!actions.is_empty()).then_some(Grant { resource, actions })
            })
            .collect();
        RoleGrants { role, grants }
    }

    /// Serializes the grants of every role as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`MySafetyError::SerdeError`] if serialization fails.
    pub fn to_json(&self) -> Result<String, MySafetyError> {
        let all: Vec<RoleGrants> = Role::ALL.iter().map(|&role| self.grants_for(role)).collect();
        Ok(serde_json::to_string_pretty(&all)?)
    }
}
