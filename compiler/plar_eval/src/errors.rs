//! Runtime errors raised by the evaluator.
//!
//! Every error carries a typed [`EvalErrorKind`], the rendered message and,
//! once it has passed through an expression or statement, the source span it
//! came from. Construct errors through the `#[cold]` factory functions below
//! rather than building the struct by hand, so kinds and messages stay in sync.

use std::fmt;

use plar_ir::Span;

use crate::Value;

/// Result of evaluating an expression or calling a function.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
///
/// The `Display` impl produces the Portuguese message shown to script authors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Names and calls
    UndefinedVariable {
        name: String,
    },
    UndefinedFunction {
        name: String,
    },
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    NotCallable {
        type_name: String,
    },
    ThisOutsideMethod,

    // Types and operators
    TypeMismatch {
        expected: String,
        got: String,
    },
    InvalidBinaryOp {
        op: String,
        left: String,
        right: String,
    },
    LogicalOperands {
        op: String,
    },
    InvalidUnaryOp {
        op: String,
        type_name: String,
    },
    ConditionNotLogic {
        construct: String,
        got: String,
    },

    // Arithmetic
    DivisionByZero,
    ModuloByZero,
    IntegerOverflow {
        operation: String,
    },

    // Indexing and member access
    IndexOutOfBounds {
        index: i64,
        len: usize,
    },
    InvalidIndex {
        receiver: String,
        index: String,
    },
    NotAnObject {
        type_name: String,
    },
    InvalidAssignmentTarget,

    // Classes and interfaces
    ClassNotFound {
        name: String,
    },
    InterfaceNotFound {
        name: String,
    },
    SuperclassNotFound {
        class: String,
        superclass: String,
    },
    MethodNotFound {
        method: String,
        class: String,
    },
    InterfaceNotImplemented {
        class: String,
        interface: String,
        method: String,
    },
    InheritanceCycle {
        class: String,
    },

    // Declared types
    DeclaredTypeMismatch {
        name: String,
        expected: String,
        got: String,
    },
    ReturnTypeMismatch {
        function: String,
        expected: String,
        got: String,
    },
    InvalidReturnType {
        function: String,
        ty: String,
    },

    // Execution
    SignalOutsideConstruct {
        signal: String,
    },
    RecursionLimit {
        limit: usize,
    },
    WrongArgType {
        function: String,
        expected: String,
        got: String,
    },
    File {
        message: String,
    },
    Thrown {
        message: String,
    },
    Custom {
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "identificador nao resolvido: {name}"),
            Self::UndefinedFunction { name } => write!(f, "funcao nao encontrada: {name}"),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => write!(
                f,
                "{name} espera no maximo {expected} argumento(s), recebeu {got}"
            ),
            Self::NotCallable { type_name } => {
                write!(f, "valor do tipo {type_name} nao pode ser chamado")
            }
            Self::ThisOutsideMethod => write!(f, "`este` usado fora de um metodo"),

            Self::TypeMismatch { expected, got } => {
                write!(f, "tipo incompativel: esperado {expected}, encontrado {got}")
            }
            Self::InvalidBinaryOp { op, left, right } => {
                write!(f, "operador `{op}` nao se aplica a {left} e {right}")
            }
            Self::LogicalOperands { op } => {
                write!(f, "operandos de `{op}` devem ser Logico")
            }
            Self::InvalidUnaryOp { op, type_name } => {
                write!(f, "operador `{op}` nao se aplica a {type_name}")
            }
            Self::ConditionNotLogic { construct, got } => {
                write!(f, "condicao de `{construct}` deve ser Logico, encontrado {got}")
            }

            Self::DivisionByZero => write!(f, "divisao por zero"),
            Self::ModuloByZero => write!(f, "modulo por zero"),
            Self::IntegerOverflow { operation } => {
                write!(f, "estouro de inteiro em {operation}")
            }

            Self::IndexOutOfBounds { index, len } => {
                write!(f, "indice {index} fora dos limites (tamanho {len})")
            }
            Self::InvalidIndex { receiver, index } => {
                write!(f, "nao e possivel indexar {receiver} com {index}")
            }
            Self::NotAnObject { type_name } => {
                write!(f, "tentativa de acessar propriedade de um nao objeto ({type_name})")
            }
            Self::InvalidAssignmentTarget => write!(f, "alvo de atribuicao invalido"),

            Self::ClassNotFound { name } => write!(f, "classe nao encontrada: {name}"),
            Self::InterfaceNotFound { name } => write!(f, "interface nao encontrada: {name}"),
            Self::SuperclassNotFound { class, superclass } => write!(
                f,
                "superclasse {superclass} de {class} nao encontrada"
            ),
            Self::MethodNotFound { method, class } => {
                write!(f, "metodo {method} nao encontrado na classe {class}")
            }
            Self::InterfaceNotImplemented {
                class,
                interface,
                method,
            } => write!(
                f,
                "classe {class} nao implementa o metodo {method} da interface {interface}"
            ),
            Self::InheritanceCycle { class } => {
                write!(f, "heranca ciclica envolvendo a classe {class}")
            }

            Self::DeclaredTypeMismatch {
                name,
                expected,
                got,
            } => write!(
                f,
                "tipo incompativel para {name}: esperado {expected}, encontrado {got}"
            ),
            Self::ReturnTypeMismatch {
                function,
                expected,
                got,
            } => write!(
                f,
                "retorno de {function} deve ser {expected}, encontrado {got}"
            ),
            Self::InvalidReturnType { function, ty } => {
                write!(f, "tipo de retorno invalido em {function}: {ty}")
            }

            Self::SignalOutsideConstruct { signal } => {
                write!(f, "`{signal}` fora de um contexto valido")
            }
            Self::RecursionLimit { limit } => {
                write!(f, "limite de recursao excedido ({limit} chamadas)")
            }
            Self::WrongArgType {
                function,
                expected,
                got,
            } => write!(
                f,
                "{function} espera argumento {expected}, recebeu {got}"
            ),
            Self::File { message } => write!(f, "erro de arquivo: {message}"),
            Self::Thrown { message } | Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Runtime error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Equals `kind.to_string()` for factory-created errors.
    pub message: String,
    pub span: Option<Span>,
}

impl EvalError {
    /// Create an error with just a message (`Custom` kind).
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        EvalError {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
            span: None,
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span: None,
        }
    }

    /// Attach a source span unless one is already present.
    ///
    /// The innermost span wins: an error raised deep inside an expression
    /// keeps pointing at the sub-expression that failed.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Names and calls

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    })
}

#[cold]
pub fn this_outside_method() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ThisOutsideMethod)
}

// Types and operators

#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

#[cold]
pub fn invalid_binary_op(op: &str, left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidBinaryOp {
        op: op.to_string(),
        left: left.to_string(),
        right: right.to_string(),
    })
}

#[cold]
pub fn logical_operands(op: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::LogicalOperands { op: op.to_string() })
}

#[cold]
pub fn invalid_unary_op(op: &str, type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidUnaryOp {
        op: op.to_string(),
        type_name: type_name.to_string(),
    })
}

#[cold]
pub fn condition_not_logic(construct: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ConditionNotLogic {
        construct: construct.to_string(),
        got: got.to_string(),
    })
}

// Arithmetic

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

// Indexing and member access

#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds { index, len })
}

#[cold]
pub fn invalid_index(receiver: &str, index: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidIndex {
        receiver: receiver.to_string(),
        index: index.to_string(),
    })
}

#[cold]
pub fn not_an_object(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAnObject {
        type_name: type_name.to_string(),
    })
}

#[cold]
pub fn invalid_assignment_target() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidAssignmentTarget)
}

// Classes and interfaces

#[cold]
pub fn class_not_found(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ClassNotFound {
        name: name.to_string(),
    })
}

#[cold]
pub fn interface_not_found(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InterfaceNotFound {
        name: name.to_string(),
    })
}

#[cold]
pub fn superclass_not_found(class: &str, superclass: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::SuperclassNotFound {
        class: class.to_string(),
        superclass: superclass.to_string(),
    })
}

#[cold]
pub fn method_not_found(method: &str, class: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MethodNotFound {
        method: method.to_string(),
        class: class.to_string(),
    })
}

#[cold]
pub fn interface_not_implemented(class: &str, interface: &str, method: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InterfaceNotImplemented {
        class: class.to_string(),
        interface: interface.to_string(),
        method: method.to_string(),
    })
}

#[cold]
pub fn inheritance_cycle(class: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InheritanceCycle {
        class: class.to_string(),
    })
}

// Declared types

#[cold]
pub fn declared_type_mismatch(name: &str, expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DeclaredTypeMismatch {
        name: name.to_string(),
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

#[cold]
pub fn return_type_mismatch(function: &str, expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ReturnTypeMismatch {
        function: function.to_string(),
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

#[cold]
pub fn invalid_return_type(function: &str, ty: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidReturnType {
        function: function.to_string(),
        ty: ty.to_string(),
    })
}

// Execution

#[cold]
pub fn signal_outside_construct(signal: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::SignalOutsideConstruct {
        signal: signal.to_string(),
    })
}

#[cold]
pub fn recursion_limit(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { limit })
}

#[cold]
pub fn wrong_arg_type(function: &str, expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgType {
        function: function.to_string(),
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// Wrap a failure raised while importing or doing file I/O.
#[cold]
pub fn file_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::File {
        message: message.into(),
    })
}

/// Error raised by script code through `jogarErro`.
#[cold]
pub fn thrown(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Thrown {
        message: message.into(),
    })
}

#[cfg(test)]
mod tests;
