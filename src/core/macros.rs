//! Macros for ergonomic state declaration.

/// Generate a `State` implementation for a simple fieldless enum.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
/// `Debug` and the serde traits. Variants listed under `transient:` report
/// `is_transient() == true`.
///
/// # Example
///
/// ```
/// use snake_act::state_enum;
/// use snake_act::core::State;
///
/// state_enum! {
///     pub enum PumpState {
///         Off,
///         Priming,
///         Pumping,
///     }
///     transient: [Priming]
/// }
///
/// assert_eq!(PumpState::Priming.name(), "Priming");
/// assert!(PumpState::Priming.is_transient());
/// assert!(PumpState::Off.is_settled());
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

        $(transient: [$($transient:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
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

            fn is_transient(&self) -> bool {
                match self {
                    $($(Self::$transient => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
