use scriptparse::ast::Function;
use scriptparse::ast::expression::{Chain, ChainLink, Expression, InfixOperator};
use scriptparse::ast::statement::{Assign, Assignment, Statement, VarDecl};
use scriptparse::parse;

fn parse_program(input: &str) -> Vec<Statement> {
    match parse(input) {
        Ok(program) => program.statements,
        Err(err) => panic!("parsing failed: {err}"),
    }
}

fn parse_single(input: &str) -> Statement {
    let mut statements = parse_program(input);
    assert_eq!(statements.len(), 1, "expected one statement in {input:?}");
    statements.remove(0)
}

fn var(name: &str) -> Expression {
    Expression::variable(name)
}

fn call(name: &str, args: Vec<Expression>) -> Expression {
    Expression::Chain(Chain {
        object: Box::new(var(name)),
        links: vec![ChainLink::Call(args)],
    })
}

#[test]
fn parse_empty_program() {
    assert!(parse_program("").is_empty());
    assert!(parse_program("  \n\n ").is_empty());
}

#[test]
fn parse_named_function() {
    let stmt = parse_single("function add(a, b) { return a + b; }");

    if let Statement::Function(Function { name, params, body }) = stmt {
        assert_eq!(name.as_deref(), Some("add"));
        assert_eq!(params, vec!["a", "b"]);
        assert_eq!(body.len(), 1);
        if let Statement::Return(ret) = &body[0] {
            assert_eq!(
                ret.value,
                Some(Expression::infix(InfixOperator::Add, var("a"), var("b")))
            );
        } else {
            panic!("expected return statement");
        }
    } else {
        panic!("expected function");
    }
}

#[test]
fn parse_anonymous_function() {
    let stmt = parse_single("function() {}");
    assert_eq!(
        stmt,
        Statement::Function(Function {
            name: None,
            params: vec![],
            body: vec![],
        })
    );
}

#[test]
fn parse_var_decl() {
    assert_eq!(
        parse_single("var a, b;"),
        Statement::VarDecl(VarDecl {
            names: vec!["a".to_string(), "b".to_string()],
        })
    );
    assert_eq!(
        parse_single("let x;"),
        Statement::VarDecl(VarDecl {
            names: vec!["x".to_string()],
        })
    );
}

#[test]
fn var_keyword_does_not_match_identifier_prefix() {
    let stmt = parse_single("variable = 1;");
    assert_eq!(
        stmt,
        Statement::Assign(Assign {
            assigns: vec![Assignment {
                target: var("variable"),
                value: Expression::number(1),
            }],
        })
    );
}

#[test]
fn parse_assign_with_declaration_keyword() {
    let stmt = parse_single("var x = 1, y = 'two';");
    assert_eq!(
        stmt,
        Statement::Assign(Assign {
            assigns: vec![
                Assignment {
                    target: var("x"),
                    value: Expression::number(1),
                },
                Assignment {
                    target: var("y"),
                    value: Expression::string("two"),
                },
            ],
        })
    );
}

#[test]
fn parse_assign_to_property_and_index() {
    let stmt = parse_single("a.b[0] = c;");
    if let Statement::Assign(assign) = stmt {
        assert_eq!(assign.assigns.len(), 1);
        assert_eq!(
            assign.assigns[0].target,
            Expression::Chain(Chain {
                object: Box::new(var("a")),
                links: vec![
                    ChainLink::Property("b".to_string()),
                    ChainLink::Index(Expression::number(0)),
                ],
            })
        );
        assert_eq!(assign.assigns[0].value, var("c"));
    } else {
        panic!("expected assignment");
    }
}

#[test]
fn parse_return_with_and_without_value() {
    if let Statement::Return(ret) = parse_single("return 42;") {
        assert_eq!(ret.value, Some(Expression::number(42)));
    } else {
        panic!("expected return");
    }

    if let Statement::Return(ret) = parse_single("return;") {
        assert_eq!(ret.value, None);
    } else {
        panic!("expected return");
    }
}

#[test]
fn parse_throw() {
    if let Statement::Throw(throw) = parse_single("throw new Error('boom');") {
        assert!(matches!(throw.value, Expression::New(_)));
    } else {
        panic!("expected throw");
    }
}

#[test]
fn parse_try_catch() {
    let stmt = parse_single("try { risky(); } catch (e) { log(e); }");
    if let Statement::TryCatch(try_catch) = stmt {
        assert_eq!(
            try_catch.try_block,
            vec![Statement::Expression(call("risky", vec![]))]
        );
        assert_eq!(try_catch.catch_arg.as_deref(), Some("e"));
        assert_eq!(
            try_catch.catch_block,
            vec![Statement::Expression(call("log", vec![var("e")]))]
        );
    } else {
        panic!("expected try/catch");
    }
}

#[test]
fn parse_try_catch_without_binding() {
    if let Statement::TryCatch(try_catch) = parse_single("try {} catch {}") {
        assert!(try_catch.try_block.is_empty());
        assert_eq!(try_catch.catch_arg, None);
        assert!(try_catch.catch_block.is_empty());
    } else {
        panic!("expected try/catch");
    }
}

#[test]
fn if_keyword_takes_precedence_over_expression() {
    let stmt = parse_single("if (a == 1) { foo(); }");
    if let Statement::If(if_stmt) = stmt {
        assert_eq!(
            if_stmt.condition,
            Expression::infix(InfixOperator::Eq, var("a"), Expression::number(1))
        );
        assert_eq!(
            if_stmt.then_block,
            vec![Statement::Expression(call("foo", vec![]))]
        );
        assert_eq!(if_stmt.else_block, None);
    } else {
        panic!("expected if statement, got {stmt:?}");
    }
}

#[test]
fn parse_if_else() {
    let stmt = parse_single("if (x) {\n  a();\n} else {\n  b();\n  c();\n}");
    if let Statement::If(if_stmt) = stmt {
        assert_eq!(if_stmt.then_block.len(), 1);
        assert_eq!(if_stmt.else_block.map(|block| block.len()), Some(2));
    } else {
        panic!("expected if statement");
    }
}

#[test]
fn parse_while() {
    let stmt = parse_single("while (i < 10) { i += 1; }");
    if let Statement::While(while_stmt) = stmt {
        assert_eq!(
            while_stmt.condition,
            Expression::infix(InfixOperator::Lt, var("i"), Expression::number(10))
        );
        assert_eq!(
            while_stmt.body,
            vec![Statement::Expression(Expression::infix(
                InfixOperator::AddAssign,
                var("i"),
                Expression::number(1)
            ))]
        );
    } else {
        panic!("expected while statement");
    }
}

#[test]
fn keywords_are_not_identifier_prefixes() {
    assert!(matches!(parse_single("iffy = 1;"), Statement::Assign(_)));
    assert_eq!(
        parse_single("returned;"),
        Statement::Expression(var("returned"))
    );
    assert_eq!(
        parse_single("whileLoop();"),
        Statement::Expression(call("whileLoop", vec![]))
    );
}

#[test]
fn failed_assignment_falls_back_to_declaration() {
    // The assignment rule reads `var x` before failing on `;`
    assert_eq!(
        parse_single("var x;"),
        Statement::VarDecl(VarDecl {
            names: vec!["x".to_string()],
        })
    );
}

#[test]
fn failed_assignment_falls_back_to_expression_statement() {
    // The assignment rule reads the whole call before failing on `;`
    assert_eq!(
        parse_single("foo(1);"),
        Statement::Expression(call("foo", vec![Expression::number(1)]))
    );
}

#[test]
fn parse_multiple_statements() {
    let statements = parse_program("var x;\nx = 1;\n\nprint(x);\n");
    assert_eq!(statements.len(), 3);
    assert!(matches!(&statements[0], Statement::VarDecl(_)));
    assert!(matches!(&statements[1], Statement::Assign(_)));
    assert!(matches!(&statements[2], Statement::Expression(_)));
}

#[test]
fn parse_nested_blocks() {
    let source = r#"
function outer(a) {
  if (a) {
    while (a) {
      a = next(a);
    }
  }
  return function inner() { return a; };
}
"#;
    let stmt = parse_single(source);
    if let Statement::Function(outer) = stmt {
        assert_eq!(outer.body.len(), 2);
        if let Statement::Return(ret) = &outer.body[1] {
            assert!(matches!(
                &ret.value,
                Some(Expression::Function(Function { name: Some(name), .. })) if name == "inner"
            ));
        } else {
            panic!("expected return");
        }
    } else {
        panic!("expected function");
    }
}
