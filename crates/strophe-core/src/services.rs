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

//! An application-owned service locator for game-runtime singletons.
//!
//! [`GameServices`] replaces the classic engine-global "find the manager by
//! scanning the world" lookup: the application's bootstrap routine builds
//! one `GameServices`, registers long-lived objects like the
//! [`StateMachine`](crate::StateMachine) into it, and hands it by reference
//! to whatever code needs those objects. A missing service is then an
//! explicit `None` the caller branches on, not a process-wide surprise.

use std::any::{Any, TypeId};
use std::collections::HashMap;

/// A type-keyed map of the services a game owns for the life of the process.
///
/// Entries are stored as `Box<dyn Any>` and retrieved by their concrete
/// type. The map is exclusively owned and accessed by the single frame-loop
/// thread, so there is no synchronization and no `Send`/`Sync` requirement
/// on the services themselves.
///
/// # Example
///
/// ```rust
/// use strophe_core::GameServices;
///
/// struct ScoreBoard { best: u32 }
///
/// let mut services = GameServices::new();
/// services.insert(ScoreBoard { best: 9001 });
///
/// let board = services.get::<ScoreBoard>().unwrap();
/// assert_eq!(board.best, 9001);
/// ```
#[derive(Default)]
pub struct GameServices {
    services: HashMap<TypeId, Box<dyn Any>>,
}

impl GameServices {
    /// Creates an empty locator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            services: HashMap::new(),
        }
    }

    /// Registers a service, keyed by `T`'s [`TypeId`].
    ///
    /// If a service of the same type was already registered, it is replaced.
    pub fn insert<T: 'static>(&mut self, service: T) {
        self.services.insert(TypeId::of::<T>(), Box::new(service));
    }

    /// Retrieves a shared reference to a previously registered service.
    ///
    /// Returns `None` if no service of type `T` has been registered. The
    /// lookup never creates anything.
    #[must_use]
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.services
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }

    /// Retrieves a mutable reference to a previously registered service.
    ///
    /// The frame loop mutates the state machine through this path every
    /// frame, so it is as first-class as [`get`](GameServices::get).
    #[must_use]
    pub fn get_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.services
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut::<T>())
    }

    /// Returns `true` if a service of type `T` is registered.
    #[must_use]
    pub fn contains<T: 'static>(&self) -> bool {
        self.services.contains_key(&TypeId::of::<T>())
    }

    /// Returns the number of registered services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Returns `true` if no services are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FrameBudget {
        millis: f32,
    }

    struct SaveSlots {
        names: Vec<String>,
    }

    #[test]
    fn test_insert_and_get() {
        let mut services = GameServices::new();
        services.insert(FrameBudget { millis: 16.6 });

        let budget = services.get::<FrameBudget>().unwrap();
        assert!((budget.millis - 16.6).abs() < f32::EPSILON);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let services = GameServices::new();
        assert!(services.get::<FrameBudget>().is_none());
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut services = GameServices::new();
        services.insert(SaveSlots { names: Vec::new() });

        services
            .get_mut::<SaveSlots>()
            .unwrap()
            .names
            .push("slot-1".to_string());

        assert_eq!(services.get::<SaveSlots>().unwrap().names, ["slot-1"]);
    }

    #[test]
    fn test_multiple_services() {
        let mut services = GameServices::new();
        services.insert(FrameBudget { millis: 16.6 });
        services.insert(SaveSlots { names: Vec::new() });

        assert_eq!(services.len(), 2);
        assert!(services.contains::<FrameBudget>());
        assert!(services.contains::<SaveSlots>());
    }

    #[test]
    fn test_replace_service() {
        let mut services = GameServices::new();
        services.insert(FrameBudget { millis: 33.3 });
        services.insert(FrameBudget { millis: 16.6 });

        let budget = services.get::<FrameBudget>().unwrap();
        assert!((budget.millis - 16.6).abs() < f32::EPSILON);
        assert_eq!(services.len(), 1);
    }

    #[test]
    fn test_default_is_empty() {
        let services = GameServices::default();
        assert!(services.is_empty());
    }
}
