//! Process-wide plugin registration.
//!
//! Scroll triggers and text animation are opt-in, registered once at
//! start-up. Registering again is a no-op.

use std::collections::BTreeSet;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Plugin {
    ScrollTrigger,
    Text,
}

#[derive(Debug, Default)]
pub struct PluginRegistry {
    installed: BTreeSet<Plugin>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the plugins that were newly installed by this call.
    pub fn register(&mut self, plugins: &[Plugin]) -> Vec<Plugin> {
        plugins
            .iter()
            .copied()
            .filter(|plugin| self.installed.insert(*plugin))
            .collect()
    }

    pub fn is_registered(&self, plugin: Plugin) -> bool {
        self.installed.contains(&plugin)
    }
}

static GLOBAL: Mutex<PluginRegistry> = Mutex::new(PluginRegistry {
    installed: BTreeSet::new(),
});

/// Register `plugins` with the global registry.
pub fn register_plugins(plugins: &[Plugin]) -> Vec<Plugin> {
    let mut registry = GLOBAL.lock().unwrap_or_else(PoisonError::into_inner);
    let fresh = registry.register(plugins);
    for plugin in &fresh {
        tracing::debug!(?plugin, "motion plugin registered");
    }
    fresh
}

pub fn is_registered(plugin: Plugin) -> bool {
    GLOBAL
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .is_registered(plugin)
}

/// Everything the page uses. Safe to call from every entry point.
pub fn init() {
    register_plugins(&[Plugin::ScrollTrigger, Plugin::Text]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn local_registry_is_idempotent() {
        let mut registry = PluginRegistry::new();
        assert_eq!(registry.register(&[Plugin::ScrollTrigger]), vec![Plugin::ScrollTrigger]);
        assert!(registry.register(&[Plugin::ScrollTrigger]).is_empty());
        assert_eq!(
            registry.register(&[Plugin::ScrollTrigger, Plugin::Text]),
            vec![Plugin::Text]
        );
        assert!(registry.is_registered(Plugin::Text));
    }

    #[test]
    #[serial]
    fn global_init_can_run_twice() {
        init();
        init();
        assert!(is_registered(Plugin::ScrollTrigger));
        assert!(is_registered(Plugin::Text));
        assert!(register_plugins(&[Plugin::Text]).is_empty());
    }
}
