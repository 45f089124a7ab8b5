//! Validated domain types shared by the metric and seat generators
//!
//! These newtypes keep raw strings and floats out of the generator APIs so that
//! invalid configuration is rejected when it enters the system.

use nutype::nutype;
#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};

/// A seat assignee's login, the stable key for activity tracking
///
/// Templates are opaque, so any non-blank login is accepted.
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Login(String);

/// Identifier of the editor/plugin combination that produced a seat's last activity
///
/// Examples: `vscode/1.96.2/copilot/1.254.0`, `copilot-chat-platform`.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 255),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct EditorId(String);

/// Fractional per-tick change applied by the `grow` and `decline` trends
///
/// Must stay above -1.0 so that `(1 + rate)` never reaches zero.
#[nutype(
    validate(finite, greater = -1.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct GrowthRate(f64);

impl GrowthRate {
    /// Magnitude of the rate, used by `decline` regardless of the configured sign
    pub fn magnitude(&self) -> f64 {
        self.into_inner().abs()
    }
}

/// Fractional noise amplitude applied by the `stable` trend
#[nutype(
    validate(finite, greater_or_equal = 0.0, less_or_equal = 1.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct Volatility(f64);
