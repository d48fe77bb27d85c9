//! Declaration macro for constant registries.

/// Declare a registry enum keyed by wire strings.
///
/// Each variant gets a `KEY => "description"` pair. The enum serializes as its
/// key and implements `ConstantRegistry`.
macro_rules! constant_registry {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $registry:tt {
            $( $variant:ident = $key:tt => $description:tt, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
            schemars::JsonSchema,
        )]
        $vis enum $name {
            $(
                #[doc = $description]
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl swimdesk_validation::ConstantRegistry for $name {
            const NAME: &'static str = $registry;
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const KEYS: &'static [&'static str] = &[$($key),+];

            fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }

            fn description(self) -> &'static str {
                match self {
                    $(Self::$variant => $description,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str(swimdesk_validation::ConstantRegistry::key(*self))
            }
        }
    };
}

pub(crate) use constant_registry;
