// roomlist/roomlist-utils
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Declares a string-backed identifier newtype.
///
/// The generated type is transparent for serde, compares by value and prints its inner string
/// unchanged. Crates using this macro need `serde` with the `derive` feature.
#[macro_export]
macro_rules! id_string {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(Debug, Eq, PartialEq, Hash, Clone, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            #[allow(dead_code)]
            pub fn into_inner(self) -> String {
                self.0
            }

            #[allow(dead_code)]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<T> From<T> for $t
        where
            T: Into<String>,
        {
            fn from(s: T) -> $t {
                $t(s.into())
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $t {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($t(s.to_string()))
            }
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    id_string!(
        /// Identifier used by the tests below.
        SampleId
    );

    #[test]
    fn test_id_string_round_trips_through_display() {
        let id = SampleId::from("!room:example.org");
        assert_eq!(id.to_string(), "!room:example.org");
        assert_eq!(id.as_str(), "!room:example.org");
        assert_eq!(id.into_inner(), "!room:example.org".to_string());
    }

    #[test]
    fn test_id_string_parses_any_string() {
        let id: SampleId = "abc".parse().unwrap();
        assert_eq!(id, SampleId::from(String::from("abc")));
    }
}
