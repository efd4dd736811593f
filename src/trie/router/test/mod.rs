//! Tests for the path router.

#[cfg(test)]
mod tests {
    use crate::error::InputError;
    use crate::trie::router::code::*;

    #[test]
    fn test_given_lookups() {
        let mut router = Router::new("root handler", "not found handler");
        router.add_handler("/home/about", "about handler").unwrap();

        let cases = [
            ("/", "root handler"),
            ("/home", "not found handler"),
            ("/home/about", "about handler"),
            ("/home/about/", "about handler"),
            ("/home/about/me", "not found handler"),
        ];

        for (path, expected) in cases {
            assert_eq!(*router.lookup(path), expected, "path {}", path);
        }
    }

    #[test]
    fn test_handlers_on_every_other_depth() {
        let mut router = Router::new("good".to_string(), "error".to_string());

        let mut full_path = String::new();
        for depth in 0..5 {
            full_path.push_str(&format!("/path{}", depth));
            if depth % 2 == 0 {
                router
                    .add_handler(&full_path, "good".to_string())
                    .unwrap();
            }
        }

        let mut full_path = String::new();
        for depth in 0..5 {
            full_path.push_str(&format!("/path{}", depth));
            let expected = if depth % 2 == 0 { "good" } else { "error" };
            assert_eq!(router.lookup(&full_path), expected, "path {}", full_path);
        }
    }

    #[test]
    fn test_leading_and_trailing_slashes() {
        let mut router = Router::new("good", "error");

        for leading in 0..3 {
            for trailing in 0..3 {
                let path = format!(
                    "{}some/middle/content{}",
                    "/".repeat(leading),
                    "/".repeat(trailing)
                );
                router.add_handler(&path, "good").unwrap();
                assert_eq!(*router.lookup(&path), "good", "path {}", path);
            }
        }

        // All spellings normalize to the same route
        assert_eq!(*router.lookup("some/middle/content"), "good");
    }

    #[test]
    fn test_all_slash_paths_rejected_on_insert() {
        let mut router = Router::new("root", "error");
        for path in ["", "/", "//", "///"] {
            assert_eq!(
                router.add_handler(path, "x"),
                Err(InputError::EmptyPath),
                "path {:?}",
                path
            );
        }
    }

    #[test]
    fn test_all_slash_paths_resolve_to_root_on_lookup() {
        let router = Router::new("root", "error");
        for path in ["", "/", "//", "///"] {
            assert_eq!(*router.lookup(path), "root", "path {:?}", path);
        }
    }

    #[test]
    fn test_inner_empty_segments_are_preserved() {
        let mut router = Router::new("root", "error");
        router.add_handler("a//b", "double").unwrap();

        assert_eq!(*router.lookup("a//b"), "double");
        // A single slash spells a different route
        assert_eq!(*router.lookup("a/b"), "error");
    }

    #[test]
    fn test_route_trie_find_without_router() {
        let mut trie = RouteTrie::new("root");
        trie.insert("/api/v1/users", "users").unwrap();

        assert_eq!(trie.find("/api/v1/users"), Some(&"users"));
        assert_eq!(trie.find("/api/v1"), None);
        assert_eq!(trie.find("/api/v2/users"), None);
        assert_eq!(trie.find("/"), Some(&"root"));
    }

    #[test]
    fn test_route_trie_node_navigation() {
        let mut trie = RouteTrie::new("root");
        trie.insert("/home/about", "about").unwrap();

        // The intermediate node exists but carries no handler
        let home = trie.root().child("home").unwrap();
        assert_eq!(home.handler(), None);
        assert_eq!(trie.find("/home"), None);

        let about = home.child("about").unwrap();
        assert_eq!(about.handler(), Some(&"about"));
        assert!(about.child("me").is_none());
    }

    #[test]
    fn test_overwriting_a_handler() {
        let mut router = Router::new("root", "error");
        router.add_handler("/a", "first").unwrap();
        router.add_handler("/a", "second").unwrap();
        assert_eq!(*router.lookup("/a"), "second");
    }

    #[test]
    fn test_non_string_handlers() {
        let mut router: Router<u32> = Router::new(0, u32::MAX);
        router.add_handler("/answers/deep", 42).unwrap();

        assert_eq!(*router.lookup("/answers/deep"), 42);
        assert_eq!(*router.lookup("/answers"), u32::MAX);
        assert_eq!(*router.lookup("/"), 0);
    }

    #[test]
    fn test_arena_matches_original() {
        let routes: Vec<String> = ["/a", "/a/b", "/a/b/c", "/x/y", "/x//y"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let lookups: Vec<String> = [
            "/a", "/a/", "a", "/a/b", "/a/b/c/", "/x/y", "/x//y", "/nope", "/", "//",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        assert_eq!(
            router_original(&routes, &lookups),
            router_arena(&routes, &lookups)
        );
    }
}
