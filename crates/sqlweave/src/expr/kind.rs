//! Marker types naming the result kind of an expression.
//!
//! Kinds are compile-time only: `Expr<Integer>` and `Expr<Float>` serialize
//! identically, but functions accept and return the kind they are defined for.

/// A result kind. Implemented by the markers in this module.
pub trait Kind: Send + Sync + 'static {}

/// Kinds accepted by the numeric function family (`avg`, `sum`, `abs`, ...).
pub trait Numeric: Kind {}

macro_rules! kinds {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $name;

            impl Kind for $name {}
        )*
    };
}

kinds!(
    /// 64-bit signed integer.
    Integer,
    /// 64-bit floating point.
    Float,
    Bool,
    Text,
    Interval,
    Date,
    Time,
    Timestamp,
    /// Result kind of functions whose operands may be of any kind.
    Any,
);

impl Numeric for Integer {}
impl Numeric for Float {}
