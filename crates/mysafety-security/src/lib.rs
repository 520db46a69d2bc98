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


#![warn(missing_docs)]

//! Authorization for MySafety.
//!
//! This crate provides:
//! - The role-based [`AuthorizationPolicy`], an ordered list of allow rules
//! - A precomputed [`PermissionMatrix`] for UI guards and auditing
//! - An [`AuditedAuthorizer`] decorator that logs every decision

pub mod audit;
pub mod matrix;
pub mod policies;

pub use audit::AuditedAuthorizer;
pub use matrix::{Grant, PermissionMatrix, RoleGrants};
pub use mysafety_core::{Authorizer, Decision, Evaluation, PermissionDenied};
pub use policies::{AuthorizationPolicy, Rule};
