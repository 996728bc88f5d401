//! Macros for declaring simple state enums.

/// Declare a fieldless state enum and its `State` implementation.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Debug`,
/// `Serialize` and `Deserialize`; each variant's name is its identifier.
///
/// # Example
///
/// ```
/// use statewise::core::State;
/// use statewise::state_enum;
///
/// state_enum! {
///     pub enum Barrier {
///         Raised,
///         Lowered,
///         Stuck,
///     }
///     error: [Stuck]
/// }
///
/// assert_eq!(Barrier::Lowered.name(), "Lowered");
/// assert!(Barrier::Stuck.is_error());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            #[allow(unreachable_patterns)]
            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
