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

//! Common type definitions used throughout MySafety.

use crate::errors::MySafetyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a user account.
pub type UserId = Uuid;

/// Unique identifier for a tenant (an isolated customer organization).
pub type TenantId = Uuid;

/// Generates `ALL`, `as_str`, `Display` and `FromStr` for a closed enum whose
/// wire names match its serde representation.
macro_rules! wire_names {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// The camelCase name used on the wire and in logs.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = MySafetyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok($ty::$variant),)+
                    other => Err(MySafetyError::validation_error(
                        $kind,
                        &format!("unknown {} '{}'", $kind, other),
                    )),
                }
            }
        }
    };
}

/// Authorization label assigned to a user. A user holds exactly one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    /// Platform administrator with unrestricted access.
    SuperAdmin,
    /// Tenant-level safety lead with unrestricted access inside their tenant.
    SafetyOfficer,
    /// Crew lead who can record hazards and inspections and manage teams.
    Supervisor,
    /// Regular staff member.
    Employee,
    /// External contractor with a narrow read surface.
    Subcontractor,
}

wire_names!(Role, "role", {
    SuperAdmin => "superAdmin",
    SafetyOfficer => "safetyOfficer",
    Supervisor => "supervisor",
    Employee => "employee",
    Subcontractor => "subcontractor",
});

/// Category of domain data subject to access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    /// User accounts.
    Users,
    /// Work sites.
    Sites,
    /// Assignments of people to sites.
    SitePersonnel,
    /// Teams and their membership.
    Teams,
    /// Hazard reports.
    Hazards,
    /// Safety inspections.
    Inspections,
    /// Work permits.
    Permits,
    /// Incident reports.
    Incidents,
    /// Training records.
    Training,
}

wire_names!(Resource, "resource", {
    Users => "users",
    Sites => "sites",
    SitePersonnel => "sitePersonnel",
    Teams => "teams",
    Hazards => "hazards",
    Inspections => "inspections",
    Permits => "permits",
    Incidents => "incidents",
    Training => "training",
});

/// One of the four CRUD operations being authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Create a new record.
    Create,
    /// Read existing records.
    Read,
    /// Modify an existing record.
    Update,
    /// Remove a record.
    Delete,
}

wire_names!(Action, "action", {
    Create => "create",
    Read => "read",
    Update => "update",
    Delete => "delete",
});

/// The authenticated actor on whose behalf an operation is requested.
///
/// Obtained from the session/identity layer and passed explicitly to the
/// authorizer. Tenant scoping of the data itself happens elsewhere; the
/// tenant is carried here so decisions can be attributed in audit logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    /// The user's account ID.
    pub user_id: UserId,
    /// The tenant the user belongs to.
    pub tenant_id: TenantId,
    /// The single role assigned to the user.
    pub role: Role,
}

impl Caller {
    /// Creates a caller from its identity and role.
    pub fn new(user_id: UserId, tenant_id: TenantId, role: Role) -> Self {
        Self {
            user_id,
            tenant_id,
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_serde() {
        for role in Role::ALL {
            let json = serde_json::to_string(role).unwrap();
            assert_eq!(json, format!("\"{}\"", role));
        }
        for resource in Resource::ALL {
            let json = serde_json::to_string(resource).unwrap();
            assert_eq!(json, format!("\"{}\"", resource));
        }
        for action in Action::ALL {
            let json = serde_json::to_string(action).unwrap();
            assert_eq!(json, format!("\"{}\"", action));
        }
    }

    #[test]
    fn camel_case_names() {
        assert_eq!(Role::SuperAdmin.as_str(), "superAdmin");
        assert_eq!(Role::SafetyOfficer.as_str(), "safetyOfficer");
        assert_eq!(Resource::SitePersonnel.as_str(), "sitePersonnel");
        assert_eq!(Action::Delete.to_string(), "delete");
    }

    #[test]
    fn parse_known_values() {
        assert_eq!("subcontractor".parse::<Role>().unwrap(), Role::Subcontractor);
        assert_eq!("sitePersonnel".parse::<Resource>().unwrap(), Resource::SitePersonnel);
        assert_eq!("update".parse::<Action>().unwrap(), Action::Update);
    }

    #[test]
    fn parse_rejects_unknown_and_wrong_case() {
        let err = "admin".parse::<Role>().unwrap_err();
        match err {
            MySafetyError::ValidationError { context, message } => {
                assert_eq!(context, "role");
                assert!(message.contains("admin"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!("SuperAdmin".parse::<Role>().is_err());
        assert!("site_personnel".parse::<Resource>().is_err());
        assert!("READ".parse::<Action>().is_err());
    }

    #[test]
    fn all_lists_are_complete() {
        assert_eq!(Role::ALL.len(), 5);
        assert_eq!(Resource::ALL.len(), 9);
        assert_eq!(Action::ALL.len(), 4);
    }

    #[test]
    fn caller_deserializes_from_camel_case_role() {
        let user_id = Uuid::new_v4();
        let tenant_id = Uuid::new_v4();
        let json = serde_json::json!({
            "user_id": user_id,
            "tenant_id": tenant_id,
            "role": "safetyOfficer",
        });
        let caller: Caller = serde_json::from_value(json).unwrap();
        assert_eq!(caller, Caller::new(user_id, tenant_id, Role::SafetyOfficer));
    }
}
