//! Generates port error enums with `thiserror` messages and snake_case
//! constructors.
//!
//! Every field becomes an `impl Into<T>` parameter, so adapters can write
//! `Error::query("…")` or `Error::rejected(validation_error)` directly.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    pub fn [<$variant:snake>]($($($field: impl Into<$ty>),*)?) -> Self {
                        Self::$variant { $($($field: $field.into()),*)? }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;
