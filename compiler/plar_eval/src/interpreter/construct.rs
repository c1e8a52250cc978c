//! Object construction for `novo Classe(args)`.

use plar_ir::VarDecl;

use super::Interpreter;
use crate::environment::{LocalScope, Scope};
use crate::errors::{
    class_not_found, declared_type_mismatch, recursion_limit, EvalError, EvalResult,
};
use crate::value::{new_object, Heap, ObjectValue};
use crate::Value;

/// Name of the constructor method.
pub const CONSTRUCTOR: &str = "inicializar";

impl Interpreter {
    /// Allocate an instance of `class_name`, run field initializers and the
    /// constructor.
    ///
    /// Ancestor fields are materialized base-most first and never overwrite a
    /// field that is already present; the class's own fields are then always
    /// assigned. Initializers run with `este` bound to the new object, so a
    /// forward reference reads `nulo`. `inicializar` is looked up through the
    /// hierarchy; without one the arguments are ignored.
    ///
    /// Construction counts as one call level, so a field initializer that
    /// instantiates its own class hits the recursion limit.
    pub(crate) fn construct(&mut self, class_name: &str, args: Vec<Value>) -> EvalResult {
        if self.call_depth >= self.config.max_call_depth {
            return Err(recursion_limit(self.config.max_call_depth));
        }
        let env = self.env.clone();
        let mut frame = self.scoped_at(env);
        frame.call_depth += 1;
        frame.build_instance(class_name, args)
    }

    fn build_instance(&mut self, class_name: &str, args: Vec<Value>) -> EvalResult {
        let class = self
            .registry
            .class(class_name)
            .cloned()
            .ok_or_else(|| class_not_found(class_name))?;
        let object = new_object(ObjectValue::new(
            class.name.clone(),
            class.superclass.clone(),
            class.interfaces.clone(),
        ));

        let ancestors = self.registry.ancestors(&class.name);
        for ancestor in ancestors.iter().skip(1).rev() {
            for field in &ancestor.fields {
                if !object.has_field(&field.name) {
                    self.init_field(&object, field)?;
                }
            }
        }
        for field in &class.fields {
            self.init_field(&object, field)?;
        }

        if let Some(constructor) = self.registry.find_method(&class.name, CONSTRUCTOR) {
            let scope = Scope::with_parent(self.globals.clone()).with_this(object.clone());
            self.invoke(&constructor, scope, args)?;
        }
        Ok(Value::Object(object))
    }

    fn init_field(&mut self, object: &Heap<ObjectValue>, field: &VarDecl) -> Result<(), EvalError> {
        let scope = LocalScope::new(Scope::with_parent(self.globals.clone()).with_this(object.clone()));
        let value = self.with_scope(scope, |scoped| scoped.eval_expr(&field.init))?;
        if let Some(ty) = &field.ty {
            if !value.matches_type(ty) {
                return Err(declared_type_mismatch(&field.name, ty, value.type_name())
                    .with_span(field.span));
            }
        }
        object.set_field(&field.name, value);
        Ok(())
    }
}
