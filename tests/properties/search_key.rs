//! Property tests for search key derivation.

use proptest::prelude::*;

use recipe_explorer::domain::value_objects::SearchKey;

fn segment() -> impl Strategy<Value = String> {
    "[0-9]{1,4}(-[0-9]{1,4}){0,2}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the key is the last path segment, whatever the query string
    /// and trailing slash look like.
    #[test]
    fn property_key_is_last_segment(
        key in segment(),
        trailing_slash in any::<bool>(),
        query in proptest::option::of("[a-z0-9=&-]{0,12}"),
    ) {
        let mut url = format!("https://recipe.example.com/category/{}", key);
        if trailing_slash {
            url.push('/');
        }
        if let Some(q) = query {
            url.push('?');
            url.push_str(&q);
        }

        let derived = SearchKey::from_url(&url);
        prop_assert_eq!(derived.as_str(), key.as_str());
    }

    /// PROPERTY: a derived key never contains '/' or '?' and derivation never
    /// panics on arbitrary input.
    #[test]
    fn property_key_has_no_separators(url in ".{0,64}") {
        let key = SearchKey::from_url(&url);
        prop_assert!(!key.as_str().contains('/'));
        prop_assert!(!key.as_str().contains('?'));
    }
}
