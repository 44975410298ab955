use scriptparse::ast::Program;
use scriptparse::ast::statement::Statement;
use scriptparse::parse;

const EMITTER: &str = include_str!("fixtures/emitter.js");

fn parse_program(input: &str) -> Program {
    parse(input).unwrap_or_else(|err| panic!("parsing failed: {err}\n{input}"))
}

fn assert_round_trip(source: &str) {
    let program = parse_program(source);
    let printed = program.to_string();
    let reparsed = parse_program(&printed);
    assert_eq!(program, reparsed, "printed source was:\n{printed}");
}

#[test]
fn fixture_parses() {
    let program = parse_program(EMITTER);
    assert_eq!(program.len(), 9);
    assert!(matches!(program.statements[0], Statement::Comment(_)));
    assert!(matches!(program.statements[1], Statement::Comment(_)));
    assert!(matches!(program.statements[2], Statement::Function(_)));
    assert!(matches!(program.statements[5], Statement::Assign(_)));
    assert!(matches!(program.statements[8], Statement::If(_)));
}

#[test]
fn fixture_round_trips() {
    assert_round_trip(EMITTER);
}

#[test]
fn printed_fixture_is_stable() {
    let once = parse_program(EMITTER).to_string();
    let twice = parse_program(&once).to_string();
    assert_eq!(once, twice);
}

#[test]
fn left_grouping_survives_printing() {
    assert_round_trip("x = (a + b) + c;");
    assert_round_trip("x = (!a) == b;");
    assert_round_trip("x = (new Foo()) + 1;");
    assert_round_trip("x = ({a: 1}) == y;");
}

#[test]
fn chain_bases_survive_printing() {
    assert_round_trip("(a.b)(c);");
    assert_round_trip("(a + b).c;");
    assert_round_trip("(f)[0](1).g;");
}

#[test]
fn strings_and_keys_survive_printing() {
    assert_round_trip(r#"x = ['it\'s', "say \"hi\"", {plain: 1, "with space": 2}];"#);
}

#[test]
fn function_expression_statement_survives_printing() {
    assert_round_trip("(function() { return 1; });");
    assert_round_trip("(function() {} + 1);");
}

#[test]
fn parenthesised_assignment_targets_survive_printing() {
    assert_round_trip("(1) = 2;");
    assert_round_trip("(a + b) = c, (x).y = 1;");
}

#[test]
fn declarations_and_control_flow_survive_printing() {
    assert_round_trip(
        "var a, b;\nlet c = 1;\ntry { a(); } catch { b(); }\nwhile (c < 3) { c += 1; }\nreturn;\n",
    );
}
