//! Property-based tests for URL construction
//!
//! Uses proptest to check slash handling for every base/route combination.

use proptest::prelude::*;
use teamgrade::api::{Params, build_url};

proptest! {
    /// Base and route join with exactly one slash
    #[test]
    fn joins_with_single_slash(
        host in "[a-z]{1,10}(\\.[a-z]{2,3})?",
        trailing in any::<bool>(),
        leading in any::<bool>(),
        route in "[a-z]{1,8}(/[a-z0-9]{1,5}){0,2}"
    ) {
        let base = format!("https://{host}{}", if trailing { "/" } else { "" });
        let path = format!("{}{route}", if leading { "/" } else { "" });

        let url = build_url(Some(&base), &path, &Params::new()).unwrap();

        prop_assert_eq!(&url, &format!("https://{host}/{route}"));
        prop_assert!(!url.trim_start_matches("https://").contains("//"));
    }

    /// Params are appended after `?` in insertion order
    #[test]
    fn params_follow_route(id in 0i64..10_000, ordered in any::<bool>()) {
        let params = Params::new().with("ordered", ordered).with("projectId", id);

        let url = build_url(Some("http://api"), "teams", &params).unwrap();

        prop_assert_eq!(url, format!("http://api/teams?ordered={ordered}&projectId={id}"));
    }
}

#[test]
fn test_empty_base_is_rejected() {
    assert!(build_url(Some(""), "teams", &Params::new()).is_err());
    assert!(build_url(None, "teams", &Params::new()).is_err());
}
