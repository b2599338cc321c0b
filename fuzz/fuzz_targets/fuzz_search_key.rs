#![no_main]

use libfuzzer_sys::fuzz_target;
use recipe_explorer::SearchKey;

fuzz_target!(|data: &[u8]| {
    if let Ok(url) = std::str::from_utf8(data) {
        let key = SearchKey::from_url(url);
        assert!(!key.as_str().contains('/'));
        assert!(!key.as_str().contains('?'));
    }
});
