//! Complexity data produced by the external complexity analyzers.

/// The complexity of one method.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MethodComplexity {
    /// The method's name.
    pub name: String,
    /// The method's complexity score.
    pub complexity: u32,
}

/// File-level complexity with a per-method breakdown.
///
/// Produced once per content version by each of the cognitive and cyclomatic
/// analyzers; the document cache stores the two results independently.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ComplexityData {
    /// The whole-file complexity total.
    pub file_complexity: u32,
    /// Per-method complexity scores.
    pub methods: Vec<MethodComplexity>,
}

impl ComplexityData {
    /// Creates complexity data from a file total and per-method scores.
    pub fn new(file_complexity: u32, methods: Vec<MethodComplexity>) -> Self {
        Self {
            file_complexity,
            methods,
        }
    }
}
