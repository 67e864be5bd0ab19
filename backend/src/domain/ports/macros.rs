//! `define_port_error!` declares the error enum of a driven port.
//!
//! Each variant lists its fields and a `thiserror` message. The macro derives
//! the usual traits and adds one snake_case constructor per variant whose
//! parameters take `impl Into<T>`, so adapters can write
//! `ArticlePersistenceError::query(err.to_string())`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@build $variant [] [] $( $field : $ty, )*);
    };

    (@build $variant:ident [$($params:tt)*] [$($inits:tt)*]) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@build $variant:ident [$($params:tt)*] [$($inits:tt)*] $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @build
            $variant
            [$($params)* $field: impl Into<$ty>,]
            [$($inits)* $field: $field.into(),]
            $($rest)*
        );
    };

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
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum ShelfError {
            Jammed => "shelf is jammed",
            Missing { slot: String } => "nothing in slot {slot}",
            Overfull { slot: String, count: u32 } => "slot {slot} holds {count}",
        }
    }

    #[test]
    fn unit_variant_gets_nullary_constructor() {
        assert_eq!(ShelfError::jammed(), ShelfError::Jammed);
        assert_eq!(ShelfError::jammed().to_string(), "shelf is jammed");
    }

    #[test]
    fn string_fields_accept_str() {
        let err = ShelfError::missing("a1");
        assert_eq!(err.to_string(), "nothing in slot a1");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = ShelfError::overfull("b2", 9_u32);
        assert_eq!(
            err,
            ShelfError::Overfull {
                slot: "b2".to_owned(),
                count: 9
            }
        );
    }
}
