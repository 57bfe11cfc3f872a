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

//! # Strophe Runtime
//!
//! The external driver for the strophe state machine: explicit two-phase
//! startup (bootstrap, then a frame loop), fixed-timestep pacing, and
//! configuration loading. There are no implicit lifecycle hooks: the
//! application's entry point constructs a [`Runtime`] and calls
//! [`Runtime::run`].

pub mod clock;
pub mod config;
pub mod runtime;

pub use clock::FrameClock;
pub use config::{ConfigError, RuntimeConfig};
pub use runtime::Runtime;
