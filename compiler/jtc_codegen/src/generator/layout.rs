//! Statement layout state.
//!
//! Newlines and indentation are decided between sibling statements, so the
//! flags live on the generator instead of in `Cx`.

/// Kind of statement being started.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum StmtShape {
    If,
    Other,
}

/// Layout flags shared by sibling statements.
#[derive(Copy, Clone, Default, Debug)]
pub(crate) struct Layout {
    /// The last thing printed was a declaration.
    pub(crate) is_declaration: bool,
    /// The current line has text and no newline yet.
    pub(crate) is_open_line: bool,
    /// The next statement is the body of a control construct.
    pub(crate) is_nested: bool,
    /// The next statement is the `else` branch of an if-else.
    pub(crate) is_if_else: bool,
}

/// What `start` asks the printer to do before the statement.
#[derive(Copy, Clone, Default, Debug)]
pub(crate) struct Lead {
    pub(crate) newline: bool,
    pub(crate) blank: bool,
    pub(crate) incr: bool,
    /// `else if`: continue on the `else` line instead of indenting.
    pub(crate) joins_else: bool,
    /// Decrement indentation when the statement ends.
    pub(crate) nested: bool,
}

impl Layout {
    /// Begin a statement.
    pub(crate) fn start(&mut self, shape: StmtShape) -> Lead {
        let mut lead = Lead::default();
        if self.is_if_else && shape == StmtShape::If {
            self.is_nested = false;
            lead.joins_else = true;
        } else {
            lead.newline = self.is_open_line;
            lead.blank = self.is_declaration;
            lead.incr = self.is_nested;
        }
        self.is_open_line = false;
        lead.nested = self.is_nested;
        self.is_nested = false;
        lead
    }

    /// The next statement is a control-construct body.
    pub(crate) fn prepare_nested(&mut self) {
        self.is_declaration = false;
        self.is_open_line = true;
        self.is_nested = true;
        self.is_if_else = false;
    }

    /// Finish a statement. Returns whether indentation must be decremented.
    pub(crate) fn end(&mut self, lead: Lead) -> bool {
        self.is_declaration = false;
        lead.nested
    }

    /// Finish a declaration; the next statement is separated by a blank line.
    pub(crate) fn end_declaration(&mut self, lead: Lead) -> bool {
        self.is_declaration = true;
        lead.nested
    }

    /// State after a closing brace.
    pub(crate) fn close_brace(&mut self) {
        self.is_open_line = true;
        self.is_nested = false;
        self.is_if_else = false;
    }

    /// State after an opening brace.
    pub(crate) fn open_brace(&mut self) {
        *self = Layout::default();
    }
}
