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

#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Core MySafety types and traits shared across the platform.
//!
//! The access-control vocabulary lives here: the closed [`Role`], [`Resource`]
//! and [`Action`] enumerations, the authenticated [`Caller`], and the
//! [`Authorizer`] trait that policy implementations and decorators share.

pub mod errors;
pub mod policy;
pub mod types;

pub use errors::{MySafetyError, PermissionDenied};
pub use policy::{AccessRequest, Authorizer, Decision, Evaluation};
pub use types::{Action, Caller, Resource, Role, TenantId, UserId};
