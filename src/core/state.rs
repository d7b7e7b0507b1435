//! Core State trait for state machine states.
//!
//! Any state a machine can be in implements this trait, which exposes
//! pure accessors used for logging and history tracking.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are small immutable values describing the
/// current position in a state machine.
///
/// # Required Traits
///
/// - `Clone`: states are copied into history records
/// - `PartialEq`: states are compared to detect no-op transitions
/// - `Debug`: states are debuggable for diagnostics
/// - `Serialize` + `Deserialize`: history can be rendered as JSON
///
/// # Example
///
/// ```rust
/// use runstate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.label(), "Open");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Plain name of the state.
    fn name(&self) -> &str;

    /// Human-readable label for log output.
    ///
    /// Defaults to [`State::name`].
    fn label(&self) -> &str {
        self.name()
    }

    /// Check if this is a final (terminal) state.
    ///
    /// Final states are completion points where no further transitions
    /// are expected.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
