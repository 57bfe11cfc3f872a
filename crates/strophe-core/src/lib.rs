// Copyright 2025 eraflo
//
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

//! # Strophe Core
//!
//! Foundational crate for the strophe game-state runtime: the [`State`]
//! lifecycle contract, the [`StateMachine`] that owns the current state and
//! the per-variant instance cache, and the application-owned [`GameServices`]
//! locator the machine is registered into.
//!
//! The whole crate assumes a single cooperative thread of execution driven
//! by the host's frame loop; nothing here locks, suspends, or yields.

#![warn(missing_docs)]

pub mod machine;
pub mod services;
pub mod state;

pub use machine::StateMachine;
pub use services::GameServices;
pub use state::{State, StateContext, StateKey};
