//! A map-backed router for wiring test modules

use alloc::collections::BTreeMap;

use icm_core::router::{Module, ModuleId, Router};
use icm_core_types::packet::Payload;
use icm_primitives::prelude::*;

/// Routes payload type tags to boxed modules.
pub struct MockRouter<P: Payload> {
    routes: BTreeMap<ModuleId, Box<dyn Module<P>>>,
    type_tags: BTreeMap<String, ModuleId>,
}

impl<P: Payload> MockRouter<P> {
    pub fn new() -> Self {
        Self {
            routes: BTreeMap::new(),
            type_tags: BTreeMap::new(),
        }
    }

    /// Registers `module` under `module_id` and binds `type_tag` to it.
    pub fn add_route(&mut self, module_id: ModuleId, type_tag: &str, module: Box<dyn Module<P>>) {
        self.type_tags.insert(type_tag.to_string(), module_id.clone());
        self.routes.insert(module_id, module);
    }
}

impl<P: Payload> Default for MockRouter<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Payload> Router<P> for MockRouter<P> {
    fn get_route(&self, module_id: &ModuleId) -> Option<&dyn Module<P>> {
        self.routes.get(module_id).map(|m| m.as_ref())
    }

    fn get_route_mut(&mut self, module_id: &ModuleId) -> Option<&mut dyn Module<P>> {
        // `.map(|m| m.as_mut())` runs into a borrow-checker limitation with
        // boxed trait objects, so expand it out manually.
        match self.routes.get_mut(module_id) {
            Some(m) => Some(m.as_mut()),
            None => None,
        }
    }

    fn lookup_module(&self, type_tag: &str) -> Option<ModuleId> {
        self.type_tags.get(type_tag).cloned()
    }
}
