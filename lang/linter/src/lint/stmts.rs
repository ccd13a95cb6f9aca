use gobstones_lang_syntax::*;

use super::*;

/// Check the body of a program or routine.
///
/// The parameters seed the outermost scope. After the walk, procedures must not have returned
/// and functions must have returned in tail position.
pub fn lint_body(body_kind: BodyKind, params: &[Ident], body: &Block) -> LintResult {
    let mut ctx = Ctx::empty(body_kind);
    for param in params {
        ctx.bind(param, LocalKind::Parameter)?;
    }
    lint_stmts(&body.stmts, &mut ctx)?;

    match (&ctx.body_kind, ctx.tail_return) {
        (BodyKind::Procedure(name), Some(_)) => {
            Err(Box::new(LintError::ProcedureShouldNotHaveReturn { name: name.clone() }))
        }
        (BodyKind::Function(name), None) => {
            Err(Box::new(LintError::FunctionShouldHaveReturn { name: name.clone() }))
        }
        _ => Ok(()),
    }
}

/// Check a sequence of statements.
///
/// A return statement is accepted only as the last statement of the outermost block.
fn lint_stmts(stmts: &[Stmt], ctx: &mut Ctx) -> LintResult {
    let last = stmts.len().saturating_sub(1);
    for (i, stmt) in stmts.iter().enumerate() {
        match stmt {
            Stmt::Return(ret) if ctx.at_top_level() && i == last => {
                ctx.tail_return = Some(ret.span);
            }
            _ => stmt.lint(ctx)?,
        }
    }
    Ok(())
}

impl Lint for Block {
    fn lint(&self, ctx: &mut Ctx) -> LintResult {
        ctx.nested(|ctx| lint_stmts(&self.stmts, ctx))
    }
}

impl Lint for Stmt {
    fn lint(&self, ctx: &mut Ctx) -> LintResult {
        match self {
            Stmt::Block(block) => block.lint(ctx),
            Stmt::Return(ret) => ret.lint(ctx),
            Stmt::Assign(assign) => assign.lint(ctx),
            Stmt::AssignTuple(assign) => assign.lint(ctx),
            Stmt::If(if_) => if_.lint(ctx),
            Stmt::While(while_) => while_.body.lint(ctx),
            Stmt::Repeat(repeat) => repeat.body.lint(ctx),
            Stmt::Foreach(foreach) => foreach.lint(ctx),
            Stmt::Switch(switch) => switch.branches.lint(ctx),
            Stmt::ProcedureCall(_) => Ok(()),
        }
    }
}

impl Lint for Return {
    fn lint(&self, _ctx: &mut Ctx) -> LintResult {
        Err(Box::new(LintError::ReturnStatementNotAllowedHere { span: self.span }))
    }
}

impl Lint for Assign {
    fn lint(&self, ctx: &mut Ctx) -> LintResult {
        ctx.bind(&self.name, LocalKind::Variable)
    }
}

impl Lint for AssignTuple {
    fn lint(&self, ctx: &mut Ctx) -> LintResult {
        let mut seen = HashSet::default();
        for name in &self.names {
            if !seen.insert(name.as_str()) {
                return Err(Box::new(LintError::RepeatedVariableInTupleAssignment {
                    name: name.id.clone(),
                }));
            }
        }
        self.names.iter().try_for_each(|name| ctx.bind(name, LocalKind::Variable))
    }
}

impl Lint for If {
    fn lint(&self, ctx: &mut Ctx) -> LintResult {
        self.then_branch.lint(ctx)?;
        self.else_branch.lint(ctx)
    }
}

impl Lint for Foreach {
    fn lint(&self, ctx: &mut Ctx) -> LintResult {
        let Foreach { index, body, .. } = self;
        ctx.bind_single(index, LocalKind::Index, |ctx| body.lint(ctx))
    }
}

impl Lint for SwitchBranch {
    fn lint(&self, ctx: &mut Ctx) -> LintResult {
        self.body.lint(ctx)
    }
}

#[cfg(test)]
mod lint_stmts_tests {
    use crate::test_util::*;
    use crate::{LintError, SymbolTable, lint};

    use super::*;

    fn lint_err(module: Module) -> LintError {
        *lint(&module).unwrap_err()
    }

    fn lint_ok(module: Module) -> SymbolTable {
        lint(&module).unwrap()
    }

    fn conflict(
        name: &str,
        existing_kind: LocalKind,
        existing: (u32, u32),
        new_kind: LocalKind,
        new: (u32, u32),
    ) -> LintError {
        LintError::LocalNameConflict {
            name: name.to_owned(),
            existing_kind,
            existing: existing.into(),
            new_kind,
            new: new.into(),
        }
    }

    #[test]
    fn reject_procedure_with_return() {
        // program {}
        // procedure P() { }
        // procedure Q() { return (1) }
        let err = lint_err(module(vec![
            program((1, 1), vec![]),
            procedure("P", (2, 1), vec![], vec![]),
            procedure("Q", (3, 1), vec![], vec![ret((3, 17))]),
        ]));
        assert_eq!(err, LintError::ProcedureShouldNotHaveReturn { name: "Q".to_owned() });
    }

    #[test]
    fn reject_function_without_return() {
        // program {}
        // function f() { return (1) }
        // function g() { }
        let err = lint_err(module(vec![
            program((1, 1), vec![]),
            function("f", (2, 1), vec![], vec![ret((2, 16))]),
            function("g", (3, 1), vec![], vec![]),
        ]));
        assert_eq!(err, LintError::FunctionShouldHaveReturn { name: "g".to_owned() });
    }

    #[test]
    fn accept_return_in_program() {
        // program { return (1) }
        let symbol_table = lint_ok(module(vec![program((1, 1), vec![ret((1, 11))])]));
        assert!(symbol_table.program().is_some());
    }

    #[test]
    fn accept_return_in_interactive_program() {
        // interactive program { return (1) }
        let symbol_table = lint_ok(module(vec![interactive_program((1, 1), vec![ret((1, 23))])]));
        assert!(symbol_table.program().is_some());
    }

    #[test]
    fn reject_return_in_the_middle_of_program() {
        // program {
        //   return (1)
        //   return (2)
        // }
        let err = lint_err(module(vec![program((1, 1), vec![ret((2, 3)), ret((3, 3))])]));
        assert_eq!(err, LintError::ReturnStatementNotAllowedHere { span: Position::new(2, 3) });
    }

    #[test]
    fn reject_return_in_the_middle_of_function() {
        // program {}
        // function foo() {
        //   return (1)
        //   return (2)
        // }
        let err = lint_err(module(vec![
            program((1, 1), vec![]),
            function("foo", (2, 1), vec![], vec![ret((3, 3)), ret((4, 3))]),
        ]));
        assert_eq!(err.message_id(), "return-statement-not-allowed-here");
    }

    #[test]
    fn reject_statement_after_return() {
        // program {}
        // function foo() {
        //   return (1)
        //   x := 2
        // }
        let err = lint_err(module(vec![
            program((1, 1), vec![]),
            function("foo", (2, 1), vec![], vec![ret((3, 3)), assign("x", (4, 3))]),
        ]));
        assert_eq!(err, LintError::ReturnStatementNotAllowedHere { span: Position::new(3, 3) });
    }

    #[test]
    fn reject_return_in_nested_block() {
        // program {
        //   {
        //     return (1)
        //   }
        // }
        let err = lint_err(module(vec![program((1, 1), vec![block((2, 3), vec![ret((3, 5))])])]));
        assert_eq!(err, LintError::ReturnStatementNotAllowedHere { span: Position::new(3, 5) });
    }

    #[test]
    fn reject_return_nested_in_any_compound_statement() {
        // function f() {
        //   <compound> { return (1) }
        //   return (2)
        // }
        // program {}
        let compounds = vec![
            if_else((2, 3), vec![ret((2, 17))], None),
            if_else((2, 3), vec![], Some(vec![ret((2, 30))])),
            while_((2, 3), vec![ret((2, 20))]),
            repeat((2, 3), vec![ret((2, 16))]),
            foreach((2, 3), ident("i", (2, 11)), vec![ret((2, 20))]),
            switch((2, 3), vec![ret((2, 25))]),
        ];
        for compound in compounds {
            let err = lint_err(module(vec![
                function("f", (1, 1), vec![], vec![compound, ret((3, 3))]),
                program((5, 1), vec![]),
            ]));
            assert_eq!(err.message_id(), "return-statement-not-allowed-here");
        }
    }

    #[test]
    fn reject_function_with_return_only_in_nested_block() {
        // function f() {
        //   if (True) { return (1) }
        // }
        // program {}
        let err = lint_err(module(vec![
            function("f", (1, 1), vec![], vec![if_else((2, 3), vec![ret((2, 15))], None)]),
            program((4, 1), vec![]),
        ]));
        assert_eq!(err.message_id(), "return-statement-not-allowed-here");
    }

    #[test]
    fn accept_compound_statements_without_return() {
        // procedure P() {
        //   if (True) { x := 1 } else { P() }
        //   while (True) { y := 1 }
        //   repeat (1) { z := 1 }
        //   switch (1) { _ -> { x := 2 } }
        // }
        // program { P() }
        let symbol_table = lint_ok(module(vec![
            procedure(
                "P",
                (1, 1),
                vec![],
                vec![
                    if_else((2, 3), vec![assign("x", (2, 15))], Some(vec![call("P", (2, 31))])),
                    while_((3, 3), vec![assign("y", (3, 18))]),
                    repeat((4, 3), vec![assign("z", (4, 16))]),
                    switch((5, 3), vec![assign("x", (5, 23))]),
                ],
            ),
            program((7, 1), vec![call("P", (7, 11))]),
        ]));
        assert!(symbol_table.procedure_definition("P").is_some());
    }

    #[test]
    fn reject_repeated_parameters_in_a_function() {
        // function f(x, y, x) { return (1) }
        // program {}
        let err = lint_err(module(vec![
            function(
                "f",
                (1, 1),
                vec![ident("x", (1, 12)), ident("y", (1, 15)), ident("x", (1, 18))],
                vec![ret((1, 23))],
            ),
            program((2, 1), vec![]),
        ]));
        assert_eq!(
            err,
            conflict("x", LocalKind::Parameter, (1, 12), LocalKind::Parameter, (1, 18))
        );
    }

    #[test]
    fn reject_repeated_parameters_in_a_procedure() {
        // procedure P(bar, foo, foo) {}
        // program {}
        let err = lint_err(module(vec![
            procedure(
                "P",
                (1, 1),
                vec![ident("bar", (1, 13)), ident("foo", (1, 18)), ident("foo", (1, 23))],
                vec![],
            ),
            program((2, 1), vec![]),
        ]));
        assert_eq!(
            err,
            conflict("foo", LocalKind::Parameter, (1, 18), LocalKind::Parameter, (1, 23))
        );
    }

    #[test]
    fn accept_repeated_parameters_in_different_routines() {
        // function f(x,y) { return (1) }
        // procedure P(x) { }
        // function g(x,y) { return (2) }
        // procedure Q(x,y,z) { }
        // program {}
        let symbol_table = lint_ok(module(vec![
            function(
                "f",
                (1, 1),
                vec![ident("x", (1, 12)), ident("y", (1, 14))],
                vec![ret((1, 19))],
            ),
            procedure("P", (2, 1), vec![ident("x", (2, 13))], vec![]),
            function(
                "g",
                (3, 1),
                vec![ident("x", (3, 12)), ident("y", (3, 14))],
                vec![ret((3, 19))],
            ),
            procedure(
                "Q",
                (4, 1),
                vec![ident("x", (4, 13)), ident("y", (4, 15)), ident("z", (4, 17))],
                vec![],
            ),
            program((5, 1), vec![]),
        ]));
        assert_eq!(symbol_table.function_parameters("f"), vec!["x", "y"]);
        assert_eq!(symbol_table.function_parameters("g"), vec!["x", "y"]);
        assert_eq!(symbol_table.procedure_parameters("P"), vec!["x"]);
        assert_eq!(symbol_table.procedure_parameters("Q"), vec!["x", "y", "z"]);
        assert!(symbol_table.procedure_parameters("R").is_empty());
    }

    #[test]
    fn reject_repeated_indices_in_nested_foreach() {
        // program {
        //   foreach i in [] {
        //     foreach i in [] {
        //     }
        //   }
        // }
        let err = lint_err(module(vec![program(
            (1, 1),
            vec![foreach(
                (2, 3),
                ident("i", (2, 11)),
                vec![foreach((3, 5), ident("i", (3, 13)), vec![])],
            )],
        )]));
        assert_eq!(err, conflict("i", LocalKind::Index, (2, 11), LocalKind::Index, (3, 13)));
    }

    #[test]
    fn allow_repeated_indices_in_independent_foreach() {
        // program {
        //   foreach i in [] {
        //   }
        //   foreach i in [] {
        //   }
        // }
        let symbol_table = lint_ok(module(vec![program(
            (1, 1),
            vec![
                foreach((2, 3), ident("i", (2, 11)), vec![]),
                foreach((4, 3), ident("i", (4, 11)), vec![]),
            ],
        )]));
        assert!(symbol_table.program().is_some());
    }

    #[test]
    fn reject_index_named_as_a_parameter() {
        // procedure P(i) {
        //   foreach i in [] {}
        // }
        // program {}
        let err = lint_err(module(vec![
            procedure(
                "P",
                (1, 1),
                vec![ident("i", (1, 13))],
                vec![foreach((2, 3), ident("i", (2, 11)), vec![])],
            ),
            program((4, 1), vec![]),
        ]));
        assert_eq!(err, conflict("i", LocalKind::Parameter, (1, 13), LocalKind::Index, (2, 11)));
    }

    #[test]
    fn reject_index_named_as_a_variable() {
        // program {
        //   x := 1
        //   foreach x in [] {}
        // }
        let err = lint_err(module(vec![program(
            (1, 1),
            vec![assign("x", (2, 3)), foreach((3, 3), ident("x", (3, 11)), vec![])],
        )]));
        assert_eq!(err, conflict("x", LocalKind::Variable, (2, 3), LocalKind::Index, (3, 11)));
    }

    #[test]
    fn variables_of_a_loop_body_end_with_the_loop() {
        // program {
        //   foreach i in [] { x := 1 }
        //   foreach x in [] {}
        // }
        let symbol_table = lint_ok(module(vec![program(
            (1, 1),
            vec![
                foreach((2, 3), ident("i", (2, 11)), vec![assign("x", (2, 21))]),
                foreach((3, 3), ident("x", (3, 11)), vec![]),
            ],
        )]));
        assert!(symbol_table.program().is_some());
    }

    #[test]
    fn plain_blocks_do_not_open_a_scope() {
        // program {
        //   { x := 1 }
        //   foreach x in [] {}
        // }
        let err = lint_err(module(vec![program(
            (1, 1),
            vec![
                block((2, 3), vec![assign("x", (2, 5))]),
                foreach((3, 3), ident("x", (3, 11)), vec![]),
            ],
        )]));
        assert_eq!(err, conflict("x", LocalKind::Variable, (2, 5), LocalKind::Index, (3, 11)));
    }

    #[test]
    fn allow_repeated_assignments_to_a_local_variable() {
        // program {
        //   x := 1
        //   x := 2
        // }
        let symbol_table =
            lint_ok(module(vec![program((1, 1), vec![assign("x", (2, 3)), assign("x", (3, 3))])]));
        assert!(symbol_table.program().is_some());
    }

    #[test]
    fn allow_reassignment_inside_a_loop() {
        // program {
        //   x := 1
        //   foreach i in [] { x := 2 }
        // }
        let symbol_table = lint_ok(module(vec![program(
            (1, 1),
            vec![
                assign("x", (2, 3)),
                foreach((3, 3), ident("i", (3, 11)), vec![assign("x", (3, 21))]),
            ],
        )]));
        assert!(symbol_table.program().is_some());
    }

    #[test]
    fn allow_tuple_reassignment_of_variables() {
        // program {
        //   x := 1
        //   let (x, y) := 1
        //   let (y, x) := 1
        // }
        let symbol_table = lint_ok(module(vec![program(
            (1, 1),
            vec![
                assign("x", (2, 3)),
                let_tuple((3, 3), vec![ident("x", (3, 8)), ident("y", (3, 11))]),
                let_tuple((4, 3), vec![ident("y", (4, 8)), ident("x", (4, 11))]),
            ],
        )]));
        assert!(symbol_table.program().is_some());
    }

    #[test]
    fn reject_assignment_to_parameter() {
        // procedure P(x) {
        //   x := 1
        // }
        // program {
        // }
        let err = lint_err(module(vec![
            procedure("P", (1, 1), vec![ident("x", (1, 13))], vec![assign("x", (2, 3))]),
            program((4, 1), vec![]),
        ]));
        assert_eq!(err, conflict("x", LocalKind::Parameter, (1, 13), LocalKind::Variable, (2, 3)));
    }

    #[test]
    fn reject_assignment_to_index() {
        // program {
        //   foreach i in [] {
        //     i := i + 1
        //   }
        // }
        let err = lint_err(module(vec![program(
            (1, 1),
            vec![foreach((2, 3), ident("i", (2, 11)), vec![assign("i", (3, 5))])],
        )]));
        assert_eq!(err, conflict("i", LocalKind::Index, (2, 11), LocalKind::Variable, (3, 5)));
    }

    #[test]
    fn reject_tuple_assignment_to_parameter() {
        // function f(x,y) {
        //   let (y,x) := 1
        //   return (x)
        // }
        // program {
        // }
        let err = lint_err(module(vec![
            function(
                "f",
                (1, 1),
                vec![ident("x", (1, 12)), ident("y", (1, 14))],
                vec![let_tuple((2, 3), vec![ident("y", (2, 8)), ident("x", (2, 10))]), ret((3, 3))],
            ),
            program((5, 1), vec![]),
        ]));
        assert_eq!(err, conflict("y", LocalKind::Parameter, (1, 14), LocalKind::Variable, (2, 8)));
    }

    #[test]
    fn reject_tuple_assignment_to_index() {
        // program {
        //   foreach i in [] {
        //     let (x,i) := 1
        //   }
        // }
        let err = lint_err(module(vec![program(
            (1, 1),
            vec![foreach(
                (2, 3),
                ident("i", (2, 11)),
                vec![let_tuple((3, 5), vec![ident("x", (3, 10)), ident("i", (3, 12))])],
            )],
        )]));
        assert_eq!(err, conflict("i", LocalKind::Index, (2, 11), LocalKind::Variable, (3, 12)));
    }

    #[test]
    fn reject_repeated_names_in_tuple_assignment() {
        // program {
        //   let (x,y,x) := 1
        // }
        let err = lint_err(module(vec![program(
            (1, 1),
            vec![let_tuple(
                (2, 3),
                vec![ident("x", (2, 8)), ident("y", (2, 10)), ident("x", (2, 12))],
            )],
        )]));
        assert_eq!(err, LintError::RepeatedVariableInTupleAssignment { name: "x".to_owned() });
    }

    #[test]
    fn repeated_tuple_names_are_reported_before_conflicts() {
        // procedure P(x) {
        //   let (x,x) := 1
        // }
        // program {}
        let err = lint_err(module(vec![
            procedure(
                "P",
                (1, 1),
                vec![ident("x", (1, 13))],
                vec![let_tuple((2, 3), vec![ident("x", (2, 8)), ident("x", (2, 10))])],
            ),
            program((4, 1), vec![]),
        ]));
        assert_eq!(err, LintError::RepeatedVariableInTupleAssignment { name: "x".to_owned() });
    }
}
