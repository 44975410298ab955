//! Pretty printer
//!
//! Renders the AST back to source text. Re-parsing the output gives back an
//! equal tree: left operands of infix operations and chain bases are
//! parenthesised wherever the grammar would otherwise read them differently.

use std::fmt::{self, Display};

use crate::ast::expression::{Chain, ChainLink, Expression};
use crate::ast::statement::Statement;
use crate::ast::{Function, Program};
use crate::parser::{is_ident_char, is_ident_start};

const INDENT: &str = "  ";

struct Formatter {
    buffer: String,
    indent_level: usize,
}

impl Formatter {
    fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }

    fn write_str(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    fn write_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn finish(self) -> String {
        self.buffer
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        for stmt in &self.statements {
            format_statement(stmt, &mut formatter);
        }
        f.write_str(&formatter.finish())
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        format_statement(self, &mut formatter);
        let text = formatter.finish();
        f.write_str(text.strip_suffix('\n').unwrap_or(&text))
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        format_expression(self, &mut formatter);
        f.write_str(&formatter.finish())
    }
}

/// Writes one statement on its own line(s), including the trailing newline.
fn format_statement(stmt: &Statement, fmt: &mut Formatter) {
    fmt.write_indent();
    match stmt {
        Statement::Comment(comment) if comment.content.contains('\n') => {
            fmt.write_str("/*");
            fmt.write_str(&comment.content);
            fmt.write_str("*/");
        }
        Statement::Comment(comment) => {
            fmt.write_str("//");
            fmt.write_str(&comment.content);
        }
        Statement::Function(function) => format_function(function, fmt),
        Statement::VarDecl(decl) => {
            fmt.write_str("var ");
            fmt.write_str(&decl.names.join(", "));
            fmt.write_str(";");
        }
        Statement::Assign(assign) => {
            for (i, assignment) in assign.assigns.iter().enumerate() {
                if i > 0 {
                    fmt.write_str(", ");
                }
                match &assignment.target {
                    target @ (Expression::Variable(_) | Expression::Chain(_)) => {
                        format_expression(target, fmt)
                    }
                    target => format_parenthesized(target, fmt),
                }
                fmt.write_str(" = ");
                format_expression(&assignment.value, fmt);
            }
            fmt.write_str(";");
        }
        Statement::Return(ret) => {
            fmt.write_str("return");
            if let Some(value) = &ret.value {
                fmt.write_str(" ");
                format_expression(value, fmt);
            }
            fmt.write_str(";");
        }
        Statement::Throw(throw) => {
            fmt.write_str("throw ");
            format_expression(&throw.value, fmt);
            fmt.write_str(";");
        }
        Statement::TryCatch(try_catch) => {
            fmt.write_str("try ");
            format_block(&try_catch.try_block, fmt);
            fmt.write_str(" catch ");
            if let Some(arg) = &try_catch.catch_arg {
                fmt.write_str("(");
                fmt.write_str(arg);
                fmt.write_str(") ");
            }
            format_block(&try_catch.catch_block, fmt);
        }
        Statement::If(if_stmt) => {
            fmt.write_str("if (");
            format_expression(&if_stmt.condition, fmt);
            fmt.write_str(") ");
            format_block(&if_stmt.then_block, fmt);
            if let Some(else_block) = &if_stmt.else_block {
                fmt.write_str(" else ");
                format_block(else_block, fmt);
            }
        }
        Statement::While(while_stmt) => {
            fmt.write_str("while (");
            format_expression(&while_stmt.condition, fmt);
            fmt.write_str(") ");
            format_block(&while_stmt.body, fmt);
        }
        // A leading `function` would be read back as a function statement
        Statement::Expression(expr) if starts_with_function(expr) => {
            fmt.write_str("(");
            format_expression(expr, fmt);
            fmt.write_str(");");
        }
        Statement::Expression(expr) => {
            format_expression(expr, fmt);
            fmt.write_str(";");
        }
    }
    fmt.write_newline();
}

fn format_block(stmts: &[Statement], fmt: &mut Formatter) {
    if stmts.is_empty() {
        fmt.write_str("{}");
        return;
    }

    fmt.write_str("{");
    fmt.write_newline();
    fmt.indent();
    for stmt in stmts {
        format_statement(stmt, fmt);
    }
    fmt.dedent();
    fmt.write_indent();
    fmt.write_str("}");
}

fn format_function(function: &Function, fmt: &mut Formatter) {
    fmt.write_str("function");
    if let Some(name) = &function.name {
        fmt.write_str(" ");
        fmt.write_str(name);
    }
    fmt.write_str("(");
    fmt.write_str(&function.params.join(", "));
    fmt.write_str(") ");
    format_block(&function.body, fmt);
}

fn format_expression(expr: &Expression, fmt: &mut Formatter) {
    match expr {
        Expression::Number(num) => fmt.write_str(&num.value.to_string()),
        Expression::String(s) => format_string(&s.value, fmt),
        Expression::Array(array) => {
            fmt.write_str("[");
            format_list(&array.elements, fmt);
            fmt.write_str("]");
        }
        Expression::Object(object) => {
            fmt.write_str("{");
            for (i, (key, value)) in object.entries.iter().enumerate() {
                if i > 0 {
                    fmt.write_str(", ");
                }
                if is_identifier(key) {
                    fmt.write_str(key);
                } else {
                    format_string(key, fmt);
                }
                fmt.write_str(": ");
                format_expression(value, fmt);
            }
            fmt.write_str("}");
        }
        Expression::Not(not) => {
            fmt.write_str("!");
            format_expression(&not.expr, fmt);
        }
        Expression::Variable(var) => fmt.write_str(&var.name),
        Expression::New(new) => {
            fmt.write_str("new ");
            format_expression(&new.object, fmt);
        }
        Expression::Chain(chain) => format_chain(chain, fmt),
        Expression::InfixOp(infix) => {
            if is_operand(&infix.left) {
                format_expression(&infix.left, fmt);
            } else {
                format_parenthesized(&infix.left, fmt);
            }
            fmt.write_str(" ");
            fmt.write_str(infix.op.symbol());
            fmt.write_str(" ");
            format_expression(&infix.right, fmt);
        }
        Expression::Function(function) => format_function(function, fmt),
    }
}

fn format_chain(chain: &Chain, fmt: &mut Formatter) {
    match chain.object.as_ref() {
        Expression::Variable(var) => fmt.write_str(&var.name),
        object => format_parenthesized(object, fmt),
    }

    for link in &chain.links {
        match link {
            ChainLink::Call(args) => {
                fmt.write_str("(");
                format_list(args, fmt);
                fmt.write_str(")");
            }
            ChainLink::Index(index) => {
                fmt.write_str("[");
                format_expression(index, fmt);
                fmt.write_str("]");
            }
            ChainLink::Property(name) => {
                fmt.write_str(".");
                fmt.write_str(name);
            }
        }
    }
}

fn format_list(exprs: &[Expression], fmt: &mut Formatter) {
    for (i, expr) in exprs.iter().enumerate() {
        if i > 0 {
            fmt.write_str(", ");
        }
        format_expression(expr, fmt);
    }
}

fn format_parenthesized(expr: &Expression, fmt: &mut Formatter) {
    fmt.write_str("(");
    format_expression(expr, fmt);
    fmt.write_str(")");
}

fn format_string(value: &str, fmt: &mut Formatter) {
    fmt.write_str("\"");
    fmt.write_str(&value.replace('"', "\\\""));
    fmt.write_str("\"");
}

/// Whether `expr` can stand unparenthesised on the left of an infix operator.
fn is_operand(expr: &Expression) -> bool {
    matches!(
        expr,
        Expression::Number(_)
            | Expression::String(_)
            | Expression::Array(_)
            | Expression::Variable(_)
            | Expression::Chain(_)
            | Expression::Function(_)
    )
}

/// Whether the printed form of `expr` begins with the `function` keyword.
fn starts_with_function(expr: &Expression) -> bool {
    match expr {
        Expression::Function(_) => true,
        Expression::InfixOp(infix) => is_operand(&infix.left) && starts_with_function(&infix.left),
        _ => false,
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(is_ident_start) && chars.all(is_ident_char)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::expression::InfixOperator;
    use crate::ast::statement::{Assign, Assignment, Comment};

    #[test]
    fn test_left_nested_infix_is_parenthesized() {
        let expr = Expression::infix(
            InfixOperator::Add,
            Expression::infix(
                InfixOperator::Add,
                Expression::variable("a"),
                Expression::variable("b"),
            ),
            Expression::variable("c"),
        );
        assert_eq!(expr.to_string(), "(a + b) + c");
    }

    #[test]
    fn test_right_nested_infix_is_flat() {
        let expr = Expression::infix(
            InfixOperator::Add,
            Expression::variable("a"),
            Expression::infix(
                InfixOperator::Add,
                Expression::variable("b"),
                Expression::variable("c"),
            ),
        );
        assert_eq!(expr.to_string(), "a + b + c");
    }

    #[test]
    fn test_string_escapes_double_quote() {
        assert_eq!(Expression::string("say \"hi\"").to_string(), r#""say \"hi\"""#);
    }

    #[test]
    fn test_comment_forms() {
        let line = Statement::Comment(Comment {
            content: " note".to_string(),
        });
        assert_eq!(line.to_string(), "// note");

        let block = Statement::Comment(Comment {
            content: " a\n b ".to_string(),
        });
        assert_eq!(block.to_string(), "/* a\n b */");
    }

    #[test]
    fn test_leading_function_expression_is_wrapped() {
        let function = Expression::Function(Function {
            name: None,
            params: vec![],
            body: vec![],
        });
        let stmt = Statement::Expression(Expression::infix(
            InfixOperator::Add,
            function,
            Expression::number(1),
        ));
        assert_eq!(stmt.to_string(), "(function() {} + 1);");
    }

    #[test]
    fn test_literal_assignment_target_is_parenthesized() {
        let stmt = Statement::Assign(Assign {
            assigns: vec![Assignment {
                target: Expression::number(1),
                value: Expression::number(2),
            }],
        });
        assert_eq!(stmt.to_string(), "(1) = 2;");
    }

    #[test]
    fn test_empty_block() {
        let stmt = Statement::Function(Function {
            name: Some("f".to_string()),
            params: vec!["a".to_string(), "b".to_string()],
            body: vec![],
        });
        assert_eq!(stmt.to_string(), "function f(a, b) {}");
    }
}
