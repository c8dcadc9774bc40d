use vellum_memory::Address;

/// A helper for building the serializer's output
///
/// Alongside the output string, the context tracks the identities of the containers on the active
/// encode path. Containers push their identity before encoding their entries and pop it on the
/// way out, so a revisited identity always means the path has looped back to an ancestor.
pub(crate) struct EncodeContext {
    result: String,
    indent_width: u8,
    parent_containers: Vec<Address>,
}

impl EncodeContext {
    pub fn new(indent_width: u8) -> Self {
        Self {
            result: String::default(),
            indent_width,
            parent_containers: Vec::default(),
        }
    }

    /// Appends to the end of the output
    pub fn append<'a>(&mut self, s: impl Into<StringBuilderAppend<'a>>) {
        s.into().append(&mut self.result);
    }

    /// Returns the resulting string and consumes the context
    pub fn result(self) -> String {
        self.result
    }

    /// Returns true if the given ID is present in the parent container list
    pub fn is_in_parents(&self, id: Address) -> bool {
        self.parent_containers
            .iter()
            .any(|parent_id| *parent_id == id)
    }

    /// Adds the given ID to the parents list
    ///
    /// Containers should call this before encoding their contained values.
    pub fn push_container(&mut self, id: Address) {
        self.parent_containers.push(id);
    }

    /// Pops the previously added parent ID
    ///
    /// Containers should call this after encoding their contained values, whether or not the
    /// encoding succeeded.
    pub fn pop_container(&mut self) {
        self.parent_containers.pop();
    }

    /// Returns true if indentation is enabled
    pub fn is_pretty(&self) -> bool {
        self.indent_width > 0
    }

    /// Starts a new line indented for the current nesting depth
    ///
    /// Does nothing in compact mode.
    pub fn newline_and_indent(&mut self) {
        self.newline_with_depth(self.parent_containers.len());
    }

    /// Starts a new line indented for the parent's nesting depth, used for closing brackets
    ///
    /// Does nothing in compact mode.
    pub fn newline_and_indent_parent(&mut self) {
        self.newline_with_depth(self.parent_containers.len().saturating_sub(1));
    }

    fn newline_with_depth(&mut self, depth: usize) {
        if self.indent_width > 0 {
            self.append('\n');
            self.append(" ".repeat(depth * self.indent_width as usize));
        }
    }
}

/// Types that can be appended to [EncodeContext]
pub(crate) enum StringBuilderAppend<'a> {
    Char(char),
    Str(&'a str),
    String(String),
}

impl From<char> for StringBuilderAppend<'_> {
    fn from(value: char) -> Self {
        StringBuilderAppend::Char(value)
    }
}

impl<'a> From<&'a str> for StringBuilderAppend<'a> {
    fn from(value: &'a str) -> Self {
        StringBuilderAppend::Str(value)
    }
}

impl From<String> for StringBuilderAppend<'_> {
    fn from(value: String) -> Self {
        StringBuilderAppend::String(value)
    }
}

impl StringBuilderAppend<'_> {
    fn append(self, string: &mut String) {
        match self {
            StringBuilderAppend::Char(c) => string.push(c),
            StringBuilderAppend::Str(s) => string.push_str(s),
            StringBuilderAppend::String(s) => string.push_str(&s),
        }
    }
}
