//! Closure values.

use std::fmt;

use fwjs_ir::{ExprId, Name, SharedArena, StringLookup};

use crate::Environment;

/// A function value paired with the frame it was created in.
///
/// `env` is shared, not copied: assignments made to that frame after the
/// closure was created are visible the next time it runs.
pub struct ClosureValue {
    /// Parameter names in declared order.
    pub params: Vec<Name>,
    /// Body expression, an index into `arena`.
    pub body: ExprId,
    /// The tree the body lives in.
    pub arena: SharedArena,
    /// Frame live at creation time.
    pub env: Environment,
}

impl ClosureValue {
    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Render as `function(p1,p2) {...};`.
    pub fn signature(&self, names: &dyn StringLookup) -> String {
        let params: Vec<&str> = self.params.iter().map(|p| names.lookup(*p)).collect();
        format!("function({}) {{...}};", params.join(","))
    }
}

// The captured frame may hold this closure, so it is never printed.
impl fmt::Debug for ClosureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosureValue")
            .field("params", &self.params)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}
