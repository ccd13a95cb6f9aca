use gobstones_lang_syntax::{HashMap, Ident, Position};

use crate::result::{LintError, LintResult, LocalKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub kind: LocalKind,
    pub span: Position,
}

/// The bindings introduced directly by one program body, routine body or loop body.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: HashMap<String, Binding>,
}

/// What kind of body the statement pass is currently walking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyKind {
    Program,
    Procedure(String),
    Function(String),
}

/// Context threaded through the statement pass of a single body.
pub struct Ctx {
    pub body_kind: BodyKind,
    /// The innermost open scope
    scope: Scope,
    /// Enclosing scopes, the first entry is the scope of the body itself
    outer: Vec<Scope>,
    /// Number of blocks entered below the outermost block of the body
    depth: usize,
    /// Position of the return statement in tail position, if one was found
    pub tail_return: Option<Position>,
}

impl Ctx {
    pub fn empty(body_kind: BodyKind) -> Self {
        Self { body_kind, scope: Scope::default(), outer: vec![], depth: 0, tail_return: None }
    }

    /// Lookup in the chain of open scopes, innermost first.
    pub fn lookup(&self, name: &str) -> Option<&Binding> {
        std::iter::once(&self.scope)
            .chain(self.outer.iter().rev())
            .find_map(|scope| scope.bindings.get(name))
    }

    /// Bind `name` in the innermost scope.
    ///
    /// Assigning to a name that is already a variable anywhere in the chain does not introduce a
    /// new binding. Any other repeated name is a conflict between the existing and the new binding.
    pub fn bind(&mut self, name: &Ident, kind: LocalKind) -> LintResult {
        match self.lookup(&name.id) {
            Some(Binding { kind: LocalKind::Variable, .. }) if kind == LocalKind::Variable => {
                Ok(())
            }
            Some(existing) => Err(Box::new(LintError::LocalNameConflict {
                name: name.id.clone(),
                existing_kind: existing.kind,
                existing: existing.span,
                new_kind: kind,
                new: name.span,
            })),
            None => {
                log::trace!("Binding {} {} at {}", kind, name.id, name.span);
                let binding = Binding { kind, span: name.span };
                self.scope.bindings.insert(name.id.clone(), binding);
                Ok(())
            }
        }
    }

    /// Execute `f` under a fresh scope which only contains `name`.
    pub fn bind_single<T, F>(&mut self, name: &Ident, kind: LocalKind, f: F) -> LintResult<T>
    where
        F: FnOnce(&mut Ctx) -> LintResult<T>,
    {
        self.push_scope();
        let res = self.bind(name, kind).and_then(|()| f(self));
        self.pop_scope();
        res
    }

    /// Execute `f` inside a nested block.
    pub fn nested<T, F>(&mut self, f: F) -> LintResult<T>
    where
        F: FnOnce(&mut Ctx) -> LintResult<T>,
    {
        self.depth += 1;
        let res = f(self);
        self.depth -= 1;
        res
    }

    /// Whether the statement pass is inside the outermost block of the body.
    pub fn at_top_level(&self) -> bool {
        self.depth == 0
    }

    fn push_scope(&mut self) {
        log::debug!("Entering scope at level {}", self.outer.len() + 1);
        let enclosing = std::mem::take(&mut self.scope);
        self.outer.push(enclosing);
    }

    /// Close the innermost scope. The scope of the body itself is never closed.
    fn pop_scope(&mut self) {
        if let Some(enclosing) = self.outer.pop() {
            self.scope = enclosing;
        }
        log::debug!("Leaving scope at level {}", self.outer.len() + 1);
    }
}
