//! Original implementation: owned-child route trie and router facade.
//!
//! Paths are normalized by stripping leading and trailing slashes and
//! splitting on `/`. Inner empty segments (`a//b`) are kept as real
//! segments, so insert and lookup always agree.

use std::collections::HashMap;

use crate::error::InputError;

/// A route trie node: segment-keyed children plus an optional handler.
#[derive(Debug)]
pub struct RouteTrieNode<H> {
    children: HashMap<String, RouteTrieNode<H>>,
    handler: Option<H>,
}

impl<H> RouteTrieNode<H> {
    fn empty() -> Self {
        Self {
            children: HashMap::new(),
            handler: None,
        }
    }

    /// Handler registered exactly at this node, if any
    pub fn handler(&self) -> Option<&H> {
        self.handler.as_ref()
    }

    /// Child for the given path segment, if any
    pub fn child(&self, segment: &str) -> Option<&RouteTrieNode<H>> {
        self.children.get(segment)
    }
}

/// Segment-keyed trie storing routes and their handlers.
///
/// The root carries the handler for `/`, installed at construction.
#[derive(Debug)]
pub struct RouteTrie<H> {
    root: RouteTrieNode<H>,
}

impl<H> RouteTrie<H> {
    pub fn new(root_handler: H) -> Self {
        let mut root = RouteTrieNode::empty();
        root.handler = Some(root_handler);
        Self { root }
    }

    /// The root node (carries the handler for `/`)
    pub fn root(&self) -> &RouteTrieNode<H> {
        &self.root
    }

    /// Insert a handler at the end of the segment chain for `full_path`,
    /// creating intermediate nodes as needed.
    ///
    /// # Errors
    /// [`InputError::EmptyPath`] if the path has no non-slash characters.
    pub fn insert(&mut self, full_path: &str, handler: H) -> Result<(), InputError> {
        let trimmed = full_path.trim_matches('/');
        if trimmed.is_empty() {
            return Err(InputError::EmptyPath);
        }

        let mut node = &mut self.root;
        for segment in trimmed.split('/') {
            node = node
                .children
                .entry(segment.to_string())
                .or_insert_with(RouteTrieNode::empty);
        }
        node.handler = Some(handler);

        Ok(())
    }

    /// Walk the chain for `full_path` and return the handler at its end.
    /// A path with no non-slash characters resolves to the root handler.
    pub fn find(&self, full_path: &str) -> Option<&H> {
        let trimmed = full_path.trim_matches('/');
        if trimmed.is_empty() {
            return self.root.handler.as_ref();
        }

        let mut node = &self.root;
        for segment in trimmed.split('/') {
            node = node.children.get(segment)?;
        }
        node.handler.as_ref()
    }
}

/// Path router: a route trie plus a fallback handler for misses.
///
/// # Example
/// ```
/// use algo_workbench::trie::router::Router;
///
/// let mut router = Router::new("root handler", "not found handler");
/// router.add_handler("/home/about", "about handler").unwrap();
///
/// assert_eq!(*router.lookup("/home/about/"), "about handler");
/// assert_eq!(*router.lookup("/home"), "not found handler");
/// ```
#[derive(Debug)]
pub struct Router<H> {
    trie: RouteTrie<H>,
    error_handler: H,
}

impl<H> Router<H> {
    pub fn new(root_handler: H, error_handler: H) -> Self {
        Self {
            trie: RouteTrie::new(root_handler),
            error_handler,
        }
    }

    /// Register `handler` for `full_path`.
    ///
    /// # Errors
    /// [`InputError::EmptyPath`] if the path has no non-slash characters.
    pub fn add_handler(&mut self, full_path: &str, handler: H) -> Result<(), InputError> {
        self.trie.insert(full_path, handler)
    }

    /// Resolve `full_path` to its handler, falling back to the error
    /// handler when no node or no handler exists at the terminal node.
    pub fn lookup(&self, full_path: &str) -> &H {
        self.trie.find(full_path).unwrap_or(&self.error_handler)
    }
}

impl super::PathRoutes for Router<String> {
    fn with_handlers(root_handler: String, error_handler: String) -> Self {
        Router::new(root_handler, error_handler)
    }

    fn add(&mut self, path: &str, handler: String) -> Result<(), InputError> {
        self.add_handler(path, handler)
    }

    fn route(&self, path: &str) -> &str {
        self.lookup(path)
    }
}
