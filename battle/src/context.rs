//! Per-battle context threaded through the interpreter and the selector

use std::sync::Arc;

use geniusect_dex::{Dex, to_id};

use crate::ai::SelectorConfig;
use crate::hooks::{BattleHooks, NoHooks};

/// Everything a battle needs from outside its own state
///
/// Cloning is cheap; the dex and hooks are shared. One context is built per
/// battle and passed by reference into every call.
#[derive(Clone)]
pub struct BattleContext {
    /// Username the bot plays under
    pub username: String,
    pub dex: Arc<dyn Dex>,
    pub hooks: Arc<dyn BattleHooks>,
    pub config: SelectorConfig,
}

impl BattleContext {
    pub fn new(username: impl Into<String>, dex: Arc<dyn Dex>) -> Self {
        Self {
            username: username.into(),
            dex,
            hooks: Arc::new(NoHooks),
            config: SelectorConfig::default(),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn BattleHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn with_config(mut self, config: SelectorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn dex(&self) -> &dyn Dex {
        self.dex.as_ref()
    }

    /// Whether a protocol username is the bot's (compared by normalized id)
    pub fn is_bot_username(&self, username: &str) -> bool {
        let id = to_id(username);
        !id.is_empty() && id == to_id(&self.username)
    }
}

impl std::fmt::Debug for BattleContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleContext")
            .field("username", &self.username)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geniusect_dex::LocalDex;

    #[test]
    fn test_is_bot_username() {
        let ctx = BattleContext::new("Geniusect Bot", Arc::new(LocalDex::new()));
        assert!(ctx.is_bot_username("geniusectbot"));
        assert!(ctx.is_bot_username(" Geniusect-Bot"));
        assert!(!ctx.is_bot_username("Geniusect"));
        assert!(!ctx.is_bot_username(""));
    }
}
