// SPDX-License-Identifier: MIT

//! Who is performing the current step

use crate::gate::error::GateError;
use std::env;

/// Environment variable read by [`EnvActorProvider`]
pub const ACTOR_ENV: &str = "STEPGATE_ACTOR";

/// Identity reported when no actor can be determined
pub const SYSTEM_ACTOR: &str = "system";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: String,
}

impl Actor {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn system() -> Self {
        Self::new(SYSTEM_ACTOR)
    }

    pub fn is_system(&self) -> bool {
        self.id == SYSTEM_ACTOR
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Source of the authenticated actor
pub trait ActorProvider: Send + Sync {
    fn current_actor(&self) -> Result<Actor, GateError>;
}

/// Reads the actor id from an environment variable
#[derive(Debug, Clone)]
pub struct EnvActorProvider {
    var: String,
}

impl EnvActorProvider {
    pub fn new() -> Self {
        Self::with_var(ACTOR_ENV)
    }

    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvActorProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ActorProvider for EnvActorProvider {
    fn current_actor(&self) -> Result<Actor, GateError> {
        match env::var(&self.var) {
            Ok(id) if !id.trim().is_empty() => Ok(Actor::new(id.trim())),
            Ok(_) => Err(GateError::config(format!("{} is blank", self.var))),
            Err(e) => Err(GateError::config(format!("{}: {}", self.var, e))),
        }
    }
}

/// Current actor, or the system actor when the lookup fails
pub fn current_actor_or_system(provider: &dyn ActorProvider) -> Actor {
    provider.current_actor().unwrap_or_else(|e| {
        log::warn!("Could not determine current actor, using '{}': {}", SYSTEM_ACTOR, e);
        Actor::system()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingProvider;

    impl ActorProvider for FailingProvider {
        fn current_actor(&self) -> Result<Actor, GateError> {
            Err(GateError::other("directory unavailable"))
        }
    }

    #[test]
    fn test_env_provider() {
        env::set_var("STEPGATE_TEST_ACTOR_SET", " jdoe ");
        let provider = EnvActorProvider::with_var("STEPGATE_TEST_ACTOR_SET");
        assert_eq!(provider.current_actor().unwrap(), Actor::new("jdoe"));
    }

    #[test]
    fn test_env_provider_missing() {
        let provider = EnvActorProvider::with_var("STEPGATE_TEST_ACTOR_UNSET");
        assert!(matches!(
            provider.current_actor(),
            Err(GateError::Config(_))
        ));
        assert!(current_actor_or_system(&provider).is_system());
    }

    #[test]
    fn test_fallback_to_system() {
        let actor = current_actor_or_system(&FailingProvider);
        assert_eq!(actor, Actor::system());
        assert_eq!(actor.to_string(), "system");
    }
}
