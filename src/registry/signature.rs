//! Function signatures for the surface function registry

/// Signature of a registered function: its name and fixed arity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionSignature {
    /// Function name as it appears in expressions
    pub name: &'static str,
    /// Required argument count
    pub arity: usize,
}

impl FunctionSignature {
    /// Create a new signature
    pub const fn new(name: &'static str, arity: usize) -> Self {
        Self { name, arity }
    }
}
