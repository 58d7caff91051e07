//! Macros for ergonomic state machine construction.

/// Generate a state kind enum together with its `StateKind` implementation.
///
/// The enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug` and
/// serde's `Serialize`/`Deserialize`, so the calling crate needs `serde`.
///
/// # Example
///
/// ```
/// use vaultline::core::StateKind;
/// use vaultline::state_kind;
///
/// state_kind! {
///     pub enum Locomotion {
///         Idle,
///         Run,
///         Vault,
///     }
/// }
///
/// assert_eq!(Locomotion::Vault.name(), "Vault");
/// ```
#[macro_export]
macro_rules! state_kind {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateKind for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
