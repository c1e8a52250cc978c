//! Class and interface declarations, and lookups across the hierarchy.
//!
//! Declarations are stored by name; the hierarchy is an explicit walk over
//! the stored declarations following `superclass` links. Walks carry a visited
//! set so a cyclic hierarchy that slipped past validation cannot loop.

use std::rc::Rc;

use plar_ir::{ClassDecl, FunctionDecl, InterfaceDecl};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::errors::{
    inheritance_cycle, interface_not_found, interface_not_implemented, superclass_not_found,
    EvalError,
};

/// Registered classes and interfaces. Last registration for a name wins.
#[derive(Clone, Debug, Default)]
pub struct ClassRegistry {
    classes: FxHashMap<String, Rc<ClassDecl>>,
    interfaces: FxHashMap<String, Rc<InterfaceDecl>>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        ClassRegistry::default()
    }

    pub fn define_class(&mut self, decl: Rc<ClassDecl>) {
        tracing::debug!(class = %decl.name, "registering class");
        self.classes.insert(decl.name.clone(), decl);
    }

    pub fn define_interface(&mut self, decl: Rc<InterfaceDecl>) {
        tracing::debug!(interface = %decl.name, "registering interface");
        self.interfaces.insert(decl.name.clone(), decl);
    }

    pub fn class(&self, name: &str) -> Option<&Rc<ClassDecl>> {
        self.classes.get(name)
    }

    pub fn interface(&self, name: &str) -> Option<&Rc<InterfaceDecl>> {
        self.interfaces.get(name)
    }

    /// Whether `name` names a registered class or interface.
    pub fn is_known_type(&self, name: &str) -> bool {
        self.classes.contains_key(name) || self.interfaces.contains_key(name)
    }

    /// Check a class declaration against the registry.
    ///
    /// The superclass must be registered and must not lead back to the class
    /// itself; every implemented interface must be registered, and each of
    /// its methods must be declared on the class or on some ancestor.
    pub fn validate_class(&self, decl: &ClassDecl) -> Result<(), EvalError> {
        if let Some(superclass) = &decl.superclass {
            if !self.classes.contains_key(superclass) {
                return Err(superclass_not_found(&decl.name, superclass));
            }
            let mut current = Some(superclass.as_str());
            let mut seen = FxHashSet::default();
            while let Some(name) = current {
                if name == decl.name || !seen.insert(name) {
                    return Err(inheritance_cycle(&decl.name));
                }
                current = self
                    .class(name)
                    .and_then(|class| class.superclass.as_deref());
            }
        }

        for interface_name in &decl.interfaces {
            let interface = self
                .interface(interface_name)
                .ok_or_else(|| interface_not_found(interface_name))?;
            for required in &interface.methods {
                let provided = decl.method(&required.name).is_some()
                    || decl
                        .superclass
                        .as_deref()
                        .and_then(|base| self.find_method(base, &required.name))
                        .is_some();
                if !provided {
                    return Err(interface_not_implemented(
                        &decl.name,
                        interface_name,
                        &required.name,
                    ));
                }
            }
        }
        Ok(())
    }

    /// The class named `name` followed by its ancestors, nearest first.
    ///
    /// Stops at the first unregistered name or repeated class.
    pub fn ancestors(&self, name: &str) -> Vec<Rc<ClassDecl>> {
        let mut chain: Vec<Rc<ClassDecl>> = Vec::new();
        let mut current = self.classes.get(name);
        while let Some(class) = current {
            if chain.iter().any(|seen| seen.name == class.name) {
                break;
            }
            chain.push(Rc::clone(class));
            current = class
                .superclass
                .as_deref()
                .and_then(|base| self.classes.get(base));
        }
        chain
    }

    /// Resolve a method starting at class `name` and walking up.
    pub fn find_method(&self, name: &str, method: &str) -> Option<Rc<FunctionDecl>> {
        self.ancestors(name)
            .iter()
            .find_map(|class| class.method(method).cloned())
    }
}
