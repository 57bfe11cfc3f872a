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

//! The state lifecycle contract and compile-time variant identity.

use std::any::TypeId;
use std::collections::VecDeque;
use std::fmt;

/// One mode of game behavior.
///
/// Every callback defaults to a no-op, so concrete states override only the
/// hooks they care about. All three run to completion synchronously on the
/// frame-loop thread before control returns to the driver.
///
/// # Example
///
/// ```rust
/// use strophe_core::{State, StateContext};
///
/// #[derive(Default)]
/// struct Loading { frames: u32 }
///
/// impl State for Loading {
///     fn update(&mut self, _dt: f32, _ctx: &mut StateContext<'_>) {
///         self.frames += 1;
///     }
/// }
/// ```
pub trait State {
    /// Short display name used by the transition diagnostics.
    fn name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Called exactly once per activation period, immediately after this
    /// state becomes current and after the previous state's [`exit`]
    /// completed.
    ///
    /// [`exit`]: State::exit
    fn enter(&mut self, _ctx: &mut StateContext<'_>) {}

    /// Called once per external frame tick while this state is current.
    ///
    /// `dt` is the seconds elapsed since the previous tick.
    fn update(&mut self, _dt: f32, _ctx: &mut StateContext<'_>) {}

    /// Called exactly once per activation period, immediately before this
    /// state stops being current and before the next state's [`enter`] runs.
    ///
    /// [`enter`]: State::enter
    fn exit(&mut self, _ctx: &mut StateContext<'_>) {}
}

/// Compile-time identity of a state variant.
///
/// A key carries the variant's [`TypeId`], its display name, and a
/// monomorphized factory for the cache-miss path. The `Default` bound on
/// [`StateKey::of`] is what makes a non-constructible variant a compile
/// error instead of a runtime failure: there is no reflection fallback.
///
/// Two keys built for the same variant always compare equal.
#[derive(Clone, Copy)]
pub struct StateKey {
    id: TypeId,
    name: &'static str,
    build: fn() -> Box<dyn State>,
}

impl StateKey {
    /// Builds the key for the state variant `S`.
    #[must_use]
    pub fn of<S>() -> Self
    where
        S: State + Default + 'static,
    {
        Self {
            id: TypeId::of::<S>(),
            name: short_type_name(std::any::type_name::<S>()),
            build: || Box::new(S::default()),
        }
    }

    /// The variant's type identity. Used as the instance-cache key.
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The variant's display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Constructs a fresh boxed instance of the variant.
    pub(crate) fn build(&self) -> Box<dyn State> {
        (self.build)()
    }
}

impl PartialEq for StateKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for StateKey {}

impl fmt::Debug for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateKey({})", self.name)
    }
}

/// Handed to every lifecycle hook.
///
/// A running state may itself request a transition ("re-entrant" requests).
/// Requests queue up here and the owning [`StateMachine`] processes them
/// synchronously, in the order issued, once the in-flight hook and
/// transition step have completed, still inside the same `change_state` or
/// `tick` call. The machine's same-variant short-circuit stops exact
/// self-re-requests; longer cycles are the states' own responsibility.
///
/// [`StateMachine`]: crate::StateMachine
pub struct StateContext<'a> {
    requests: &'a mut VecDeque<StateKey>,
}

impl<'a> StateContext<'a> {
    pub(crate) fn new(requests: &'a mut VecDeque<StateKey>) -> Self {
        Self { requests }
    }

    /// Queues a transition to the state variant `S`.
    pub fn change_state<S>(&mut self)
    where
        S: State + Default + 'static,
    {
        self.request(StateKey::of::<S>());
    }

    /// Queues a transition to an already-built variant key.
    pub fn request(&mut self, key: StateKey) {
        self.requests.push_back(key);
    }
}

/// Strips the module path off a `std::any::type_name` result.
pub(crate) fn short_type_name(full: &'static str) -> &'static str {
    full.rsplit("::").next().unwrap_or(full)
}
