//! Flat key composition and the traversal context stack.

/// Separator between the segments of a flat configuration key.
pub const KEY_DELIMITER: &str = ":";

/// Join `segments` and `terminal` with [`KEY_DELIMITER`].
///
/// # Examples
///
/// ```
/// use ortho_config_xml::compose_key;
///
/// assert_eq!(compose_key(&["Bob"], "(Default)"), "Bob:(Default)");
/// assert_eq!(compose_key::<&str>(&[], "Top"), "Top");
/// ```
#[must_use]
pub fn compose_key<S: AsRef<str>>(segments: &[S], terminal: &str) -> String {
    let mut key = String::new();
    for segment in segments {
        key.push_str(segment.as_ref());
        key.push_str(KEY_DELIMITER);
    }
    key.push_str(terminal);
    key
}

/// Path from the document root to the element being interpreted.
///
/// Providers and parser strategies thread one of these through their
/// traversal explicitly; nothing about it is global, so strategies can be
/// exercised in isolation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseContext {
    segments: Vec<String>,
}

impl ParseContext {
    /// Empty context, as seen by top-level elements.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Push a segment before descending.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Pop the innermost segment on the way back out.
    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    /// Current segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments on the stack.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.segments.len()
    }

    /// `true` when no segment has been pushed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Key for `terminal` beneath the current path.
    #[must_use]
    pub fn compose_key(&self, terminal: &str) -> String {
        compose_key(&self.segments, terminal)
    }

    /// Run `f` with `segment` pushed, popping it again however `f` returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use ortho_config_xml::ParseContext;
    ///
    /// let mut ctx = ParseContext::new();
    /// let key = ctx.with_segment("Bob", |inner| inner.compose_key("(Default)"));
    /// assert_eq!(key, "Bob:(Default)");
    /// assert!(ctx.is_empty());
    /// ```
    pub fn with_segment<T>(&mut self, segment: impl Into<String>, f: impl FnOnce(&mut Self) -> T) -> T {
        let depth = self.segments.len();
        self.push(segment);
        let outcome = f(self);
        self.segments.truncate(depth);
        outcome
    }
}
