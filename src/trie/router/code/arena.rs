//! Arena variant of the route trie.

use std::collections::HashMap;

use crate::error::InputError;

const ROOT: usize = 0;

#[derive(Debug)]
struct Node<H> {
    children: HashMap<String, usize>,
    handler: Option<H>,
}

impl<H> Node<H> {
    fn empty() -> Self {
        Self {
            children: HashMap::new(),
            handler: None,
        }
    }
}

/// Path router over arena-indexed nodes.
#[derive(Debug)]
pub struct ArenaRouter<H> {
    nodes: Vec<Node<H>>,
    error_handler: H,
}

impl<H> ArenaRouter<H> {
    pub fn new(root_handler: H, error_handler: H) -> Self {
        let mut root = Node::empty();
        root.handler = Some(root_handler);
        Self {
            nodes: vec![root],
            error_handler,
        }
    }

    /// Register `handler` for `full_path`.
    ///
    /// # Errors
    /// [`InputError::EmptyPath`] if the path has no non-slash characters.
    pub fn add_handler(&mut self, full_path: &str, handler: H) -> Result<(), InputError> {
        let trimmed = full_path.trim_matches('/');
        if trimmed.is_empty() {
            return Err(InputError::EmptyPath);
        }

        let mut index = ROOT;
        for segment in trimmed.split('/') {
            index = match self.nodes[index].children.get(segment).copied() {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::empty());
                    self.nodes[index]
                        .children
                        .insert(segment.to_string(), child);
                    child
                }
            };
        }
        self.nodes[index].handler = Some(handler);

        Ok(())
    }

    /// Resolve `full_path` to its handler, falling back to the error
    /// handler on any miss.
    pub fn lookup(&self, full_path: &str) -> &H {
        match self.find(full_path) {
            Some(handler) => handler,
            None => &self.error_handler,
        }
    }

    fn find(&self, full_path: &str) -> Option<&H> {
        let trimmed = full_path.trim_matches('/');
        if trimmed.is_empty() {
            return self.nodes[ROOT].handler.as_ref();
        }

        let mut index = ROOT;
        for segment in trimmed.split('/') {
            index = *self.nodes[index].children.get(segment)?;
        }
        self.nodes[index].handler.as_ref()
    }
}

impl super::PathRoutes for ArenaRouter<String> {
    fn with_handlers(root_handler: String, error_handler: String) -> Self {
        ArenaRouter::new(root_handler, error_handler)
    }

    fn add(&mut self, path: &str, handler: String) -> Result<(), InputError> {
        self.add_handler(path, handler)
    }

    fn route(&self, path: &str) -> &str {
        self.lookup(path)
    }
}
