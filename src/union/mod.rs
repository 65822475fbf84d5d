// closed key unions: the compile-time counterpart of EnumLike
use crate::core::map::EnumLike;

/// A fieldless enum whose variants cover a fixed key set.
///
/// Implemented by the [`key_union!`](crate::key_union) macro. `KEYS` lists
/// the keys in declaration order; `from_key` is the runtime boundary guard.
pub trait KeyUnion: Copy + Sized + 'static {
    /// The full key set, declaration order.
    const KEYS: &'static [&'static str];

    /// The key this variant stands for.
    fn as_key(&self) -> &'static str;

    /// Parse a runtime string into a variant. `None` for anything outside
    /// the key set.
    fn from_key(key: &str) -> Option<Self>;

    fn is_member(key: &str) -> bool {
        Self::from_key(key).is_some()
    }

    /// The identity mapping over `KEYS`.
    fn mapping() -> EnumLike {
        EnumLike::from_keys(Self::KEYS)
    }
}

/// Declare a fieldless enum over a fixed key set.
///
/// ```
/// enumlike_core::key_union! {
///     pub enum Status {
///         Pending => "pending",
///         Completed => "completed",
///         Failed => "failed",
///     }
/// }
/// ```
///
/// The enum gets [`KeyUnion`], `Display`, `FromStr` and `TryFrom<&str>`
/// (both erroring with `KeyError::UnknownKey`), plus a string-shaped serde
/// form. Deserializing an unknown string is rejected with the declared key
/// set in the error.
#[macro_export]
macro_rules! key_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $key:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $crate::union::KeyUnion for $name {
            const KEYS: &'static [&'static str] = &[$($key),+];

            fn as_key(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }

            fn from_key(key: &str) -> ::std::option::Option<Self> {
                match key {
                    $($key => ::std::option::Option::Some(Self::$variant),)+
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::union::KeyUnion::as_key(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::types::KeyError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::union::KeyUnion>::from_key(s).ok_or_else(|| {
                    $crate::core::types::KeyError::UnknownKey { key: s.to_string() }
                })
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::core::types::KeyError;

            fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str($crate::union::KeyUnion::as_key(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let key = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::union::KeyUnion>::from_key(&key).ok_or_else(|| {
                    <D::Error as ::serde::de::Error>::unknown_variant(
                        &key,
                        <Self as $crate::union::KeyUnion>::KEYS,
                    )
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::KeyError;

    crate::key_union! {
        pub enum Status {
            Pending => "pending",
            Completed => "completed",
            Failed => "failed",
        }
    }

    //a call site typed against the union only accepts declared variants
    fn advance(status: Status) -> &'static str {
        status.as_key()
    }

    #[test]
    fn keys_follow_declaration_order() {
        assert_eq!(Status::KEYS, ["pending", "completed", "failed"]);
    }

    #[test]
    fn from_key_parses_members_and_rejects_the_rest() {
        assert_eq!(Status::from_key("pending"), Some(Status::Pending));
        assert_eq!(Status::from_key("invalid"), None);
    }

    #[test]
    fn is_member_guards_the_boundary() {
        assert!(Status::is_member("completed"));
        assert!(!Status::is_member("invalid"));
    }

    #[test]
    fn mapping_matches_the_identity_mapping_over_keys() {
        let m = Status::mapping();

        assert_eq!(m, EnumLike::from_keys(["pending", "completed", "failed"]));
        assert_eq!(m.get("pending"), Some("pending"));
        assert!(m.require("completed").is_ok());
    }

    #[test]
    fn typed_call_sites_only_accept_declared_variants() {
        assert_eq!(advance(Status::Pending), "pending");

        let parsed: Status = "completed".parse().unwrap();
        assert_eq!(advance(parsed), "completed");
    }

    #[test]
    fn display_prints_the_key() {
        assert_eq!(Status::Completed.to_string(), "completed");
    }

    #[test]
    fn from_str_rejects_a_key_outside_the_set() {
        let err = "invalid".parse::<Status>().unwrap_err();

        match err {
            KeyError::UnknownKey { key } => assert_eq!(key, "invalid"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn try_from_str_parses_declared_keys() {
        assert_eq!(Status::try_from("failed").unwrap(), Status::Failed);
        assert!(Status::try_from("nope").is_err());
    }

    #[test]
    fn serializes_as_the_bare_key_string() {
        assert_eq!(serde_json::to_string(&Status::Failed).unwrap(), "\"failed\"");

        let s: Status = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(s, Status::Pending);
    }

    #[test]
    fn deserializing_an_unknown_key_reports_the_declared_set() {
        let err = serde_json::from_str::<Status>("\"invalid\"").unwrap_err();
        let msg = err.to_string();

        assert!(msg.contains("invalid"), "should name the offending key: {}", msg);
        assert!(msg.contains("pending"), "should list the declared keys: {}", msg);
    }
}
