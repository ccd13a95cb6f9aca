//! Builders for syntax trees in tests.
//!
//! Positions are `(line, column)` pairs, chosen to match where a parser would place the node in
//! the source snippet quoted above each test.

use gobstones_lang_syntax::*;

type At = (u32, u32);

pub fn module(definitions: Vec<Decl>) -> Module {
    Module { definitions }
}

pub fn ident(name: &str, at: At) -> Ident {
    Ident::new(at, name)
}

fn body(at: At, stmts: Vec<Stmt>) -> Block {
    Block { span: at.into(), stmts }
}

pub fn program(at: At, stmts: Vec<Stmt>) -> Decl {
    Decl::Program(Program { span: at.into(), interactive: false, body: body(at, stmts) })
}

pub fn interactive_program(at: At, stmts: Vec<Stmt>) -> Decl {
    Decl::Program(Program { span: at.into(), interactive: true, body: body(at, stmts) })
}

pub fn procedure(name: &str, at: At, params: Vec<Ident>, stmts: Vec<Stmt>) -> Decl {
    Decl::Procedure(Procedure {
        span: at.into(),
        name: ident(name, at),
        params,
        body: body(at, stmts),
    })
}

pub fn function(name: &str, at: At, params: Vec<Ident>, stmts: Vec<Stmt>) -> Decl {
    Decl::Function(Function {
        span: at.into(),
        name: ident(name, at),
        params,
        body: body(at, stmts),
    })
}

pub fn record(name: &str, at: At, fields: Vec<Ident>) -> Decl {
    let body = TypeBody::Record { fields };
    Decl::Type(TypeDecl { span: at.into(), name: ident(name, at), body })
}

pub fn variant(name: &str, at: At, cases: Vec<Ctor>) -> Decl {
    let body = TypeBody::Variant { cases };
    Decl::Type(TypeDecl { span: at.into(), name: ident(name, at), body })
}

pub fn case(name: &str, at: At, fields: Vec<Ident>) -> Ctor {
    Ctor { span: at.into(), name: ident(name, at), fields }
}

pub fn num(at: At, value: i64) -> Exp {
    Exp::Number(NumLit { span: at.into(), value })
}

/// `return (1)`
pub fn ret(at: At) -> Stmt {
    Stmt::Return(Return { span: at.into(), result: vec![num(at, 1)] })
}

/// `name := 1`
pub fn assign(name: &str, at: At) -> Stmt {
    Stmt::Assign(Assign { span: at.into(), name: ident(name, at), value: num(at, 1) })
}

/// `let (n1, ..., nk) := 1`
pub fn let_tuple(at: At, names: Vec<Ident>) -> Stmt {
    Stmt::AssignTuple(AssignTuple { span: at.into(), names, value: num(at, 1) })
}

/// `foreach index in [] { ... }`
pub fn foreach(at: At, index: Ident, stmts: Vec<Stmt>) -> Stmt {
    Stmt::Foreach(Foreach {
        span: at.into(),
        index,
        range: Exp::List(List { span: at.into(), elems: vec![] }),
        body: body(at, stmts),
    })
}

/// `{ ... }`
pub fn block(at: At, stmts: Vec<Stmt>) -> Stmt {
    Stmt::Block(body(at, stmts))
}

/// `if (True) { ... } else { ... }`
pub fn if_else(at: At, then_stmts: Vec<Stmt>, else_stmts: Option<Vec<Stmt>>) -> Stmt {
    Stmt::If(If {
        span: at.into(),
        cond: Exp::Call(Call { span: at.into(), name: ident("True", at), args: vec![] }),
        then_branch: body(at, then_stmts),
        else_branch: else_stmts.map(|stmts| body(at, stmts)),
    })
}

/// `while (True) { ... }`
pub fn while_(at: At, stmts: Vec<Stmt>) -> Stmt {
    Stmt::While(While {
        span: at.into(),
        cond: Exp::Call(Call { span: at.into(), name: ident("True", at), args: vec![] }),
        body: body(at, stmts),
    })
}

/// `repeat (1) { ... }`
pub fn repeat(at: At, stmts: Vec<Stmt>) -> Stmt {
    Stmt::Repeat(Repeat { span: at.into(), times: num(at, 1), body: body(at, stmts) })
}

/// `switch (1) { _ -> { ... } }`
pub fn switch(at: At, stmts: Vec<Stmt>) -> Stmt {
    Stmt::Switch(Switch {
        span: at.into(),
        subject: num(at, 1),
        branches: vec![SwitchBranch {
            pattern: Pattern::Wildcard { span: at.into() },
            body: body(at, stmts),
        }],
    })
}

/// `P()`
pub fn call(name: &str, at: At) -> Stmt {
    Stmt::ProcedureCall(ProcedureCall { span: at.into(), name: ident(name, at), args: vec![] })
}
