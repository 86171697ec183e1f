/*!
The type-erased contract every registered argument satisfies.

The parser drives arguments entirely through [`Argument`], so the registry
can hold a heterogeneous, ordered collection without knowing the value types
involved. Typed access happens at the edges: registration and value
retrieval downcast through [`as_any`][Argument::as_any] to the concrete
[`TypedArgument`][crate::typed::TypedArgument].
*/

use core::any::Any;

use crate::error::ParseError;

/// The parse state of a single registered argument, recomputed as values
/// arrive and inspected during the validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentStatus {
    /// The argument is fulfilled (has values, or a default covers it).
    Success,

    /// No value arrived and there is no default.
    NoArgument,

    /// A value arrived but failed type coercion.
    InvalidArgument,

    /// Fewer values arrived than the argument's minimum, and there is no
    /// default.
    Insufficient,
}

/// The uniform capability interface over every registered argument,
/// regardless of its value type.
pub trait Argument {
    fn long_name(&self) -> &str;
    fn short_name(&self) -> Option<char>;
    fn description(&self) -> &str;

    /// The help-output type hint for this argument's value type. Empty for
    /// flags.
    fn type_hint(&self) -> &'static str;

    fn is_positional(&self) -> bool;
    fn is_multi_value(&self) -> bool;
    fn is_flag(&self) -> bool;
    fn has_default(&self) -> bool;
    fn minimum_values(&self) -> usize;

    fn status(&self) -> ArgumentStatus;

    /// How many values have been parsed into this argument so far.
    fn values_set(&self) -> usize;

    /// The textual rendering of the default value, used in help output.
    fn default_text(&self) -> &str;

    /**
    Consume this argument's value from the argument vector, starting at the
    token at `position`. Returns the number of argv positions consumed: 1,
    or 2 when the value came from the following token.
    */
    fn consume(&mut self, argv: &[&str], position: usize) -> Result<usize, ParseError>;

    /// Reset all parse state, restoring the default-derived status.
    fn clear(&mut self);

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
