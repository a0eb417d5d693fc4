use rill::{
    ast::{Expr, LiteralValue, Statement},
    error::ParseError,
    parse,
};

fn parse_clean(source: &str) -> Vec<Statement> {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected parse errors: {errors:?}");
    program.statements
}

fn statement_display(source: &str) -> String {
    let statements = parse_clean(source);
    assert_eq!(statements.len(), 1, "expected one statement in: {source}");
    statements[0].to_string()
}

#[test]
fn operator_precedence() {
    let cases = [("1 + 2 * 3;", "(1 + (2 * 3));"),
                 ("a + b + c;", "((a + b) + c);"),
                 ("a * b / c;", "((a * b) / c);"),
                 ("-a * b;", "((-a) * b);"),
                 ("!true == false;", "((!true) == false);"),
                 ("a + b < c * d;", "((a + b) < (c * d));"),
                 ("a < b and c > d or e == f;", "(((a < b) and (c > d)) or (e == f));"),
                 ("a <= b != c >= d;", "((a <= b) != (c >= d));"),
                 ("fib(n - 1) + fib(n - 2);", "(fib((n - 1)) + fib((n - 2)));")];

    for (source, expected) in cases {
        assert_eq!(statement_display(source), expected, "source: {source}");
    }
}

#[test]
fn grouping_overrides_precedence() {
    assert_eq!(statement_display("(1 + 2) * 3;"), "((1 + 2) * 3);");
    // Parentheses leave no node behind; redundant ones vanish entirely.
    assert_eq!(statement_display("((x));"), "x;");
}

#[test]
fn statement_dispatch() {
    let statements = parse_clean("var x = 1; \
                                  x = 2; \
                                  if x { } else { } \
                                  while x { x = x - 1; } \
                                  fun f(a) { return a; } \
                                  print x; \
                                  1 + 1; \
                                  { var y = 2; } \
                                  return;");
    assert_eq!(statements.len(), 9);
    assert!(matches!(statements[0], Statement::VariableDeclaration { .. }));
    assert!(matches!(statements[1], Statement::Assignment { .. }));
    assert!(matches!(statements[2], Statement::If { .. }));
    assert!(matches!(statements[3], Statement::While { .. }));
    assert!(matches!(statements[4], Statement::Function(_)));
    assert!(matches!(statements[5], Statement::Print { .. }));
    assert!(matches!(statements[6], Statement::Expression { .. }));
    assert!(matches!(statements[7], Statement::Block(_)));
    assert!(matches!(statements[8], Statement::Return { value: None, .. }));
}

#[test]
fn assignment_needs_the_equal_lookahead() {
    // 'x == 1' must stay an expression statement, not become an assignment.
    let statements = parse_clean("x == 1;");
    assert!(matches!(&statements[0],
                     Statement::Expression { expr: Expr::BinaryOp { .. },
                                             .. }));
}

#[test]
fn variable_declaration_shape() {
    let statements = parse_clean("var answer = 42;");
    let Statement::VariableDeclaration { name, value, line } = &statements[0] else {
        panic!("expected a declaration");
    };
    assert_eq!(name, "answer");
    assert_eq!(*line, 1);
    assert_eq!(value,
               &Expr::Literal { value: LiteralValue::Number(42.0),
                                line:  1, });
}

#[test]
fn function_declaration_shape() {
    let statements = parse_clean("fun add(a, b) { return a + b; }");
    let Statement::Function(def) = &statements[0] else {
        panic!("expected a function declaration");
    };
    assert_eq!(def.name, "add");
    assert_eq!(def.params, vec!["a", "b"]);
    assert_eq!(def.body.statements.len(), 1);
}

#[test]
fn parameter_list_allows_a_trailing_comma() {
    let statements = parse_clean("fun f(a, b,) { }");
    let Statement::Function(def) = &statements[0] else {
        panic!("expected a function declaration");
    };
    assert_eq!(def.params, vec!["a", "b"]);
}

#[test]
fn argument_list_allows_a_trailing_comma() {
    let statements = parse_clean("f(1, 2,);");
    let Statement::Expression { expr: Expr::FunctionCall { arguments, .. },
                                .. } = &statements[0]
    else {
        panic!("expected a call");
    };
    assert_eq!(arguments.len(), 2);
}

#[test]
fn empty_argument_list() {
    let statements = parse_clean("f();");
    let Statement::Expression { expr: Expr::FunctionCall { arguments, .. },
                                .. } = &statements[0]
    else {
        panic!("expected a call");
    };
    assert!(arguments.is_empty());
}

#[test]
fn if_condition_needs_no_parentheses_but_accepts_them() {
    let bare = parse_clean("if x < 1 { }");
    let grouped = parse_clean("if (x < 1) { }");
    assert_eq!(bare, grouped);
}

#[test]
fn duplicate_parameter_is_reported() {
    let (program, errors) = parse("fun f(a, a) { }");
    assert!(matches!(errors.as_slice(), [ParseError::DuplicateParameter { .. }]),
            "errors: {errors:?}");
    // The declaration itself still parses.
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn missing_semicolon_recovers_at_the_next_one() {
    let (program, errors) = parse("var x = 1 var y = 2; var z = 3;");
    assert!(!errors.is_empty());
    // Recovery swallows up to and including the next ';', so the second
    // declaration is lost but the third survives.
    assert_eq!(program.statements.len(), 2);
    assert!(matches!(&program.statements[0],
                     Statement::VariableDeclaration { name, .. } if name == "x"));
    assert!(matches!(&program.statements[1],
                     Statement::VariableDeclaration { name, .. } if name == "z"));
}

#[test]
fn missing_initializer_expression_is_reported() {
    let (program, errors) = parse("var x = ;");
    assert!(!errors.is_empty());
    assert!(program.statements.is_empty());
}

#[test]
fn calling_a_non_identifier_is_reported() {
    let (_, errors) = parse("1(2);");
    assert!(matches!(errors.as_slice(), [ParseError::CalleeNotIdentifier { .. }]),
            "errors: {errors:?}");
}

#[test]
fn unclosed_block_is_reported() {
    let (_, errors) = parse("{ var x = 1;");
    assert!(errors.iter()
                  .any(|e| matches!(e, ParseError::ExpectedToken { expected, .. } if expected == "'}'")),
            "errors: {errors:?}");
}

#[test]
fn errors_accumulate_across_statements() {
    let (_, errors) = parse("var = 1; fun f(a, a) { } var x = ;");
    assert!(errors.len() >= 3, "errors: {errors:?}");
}

#[test]
fn lexical_errors_surface_in_the_parser_error_list() {
    let (_, errors) = parse("var x = \"oops");
    assert!(errors.iter()
                  .any(|e| matches!(e, ParseError::UnterminatedString { .. })),
            "errors: {errors:?}");
}

#[test]
fn empty_source_is_an_empty_program() {
    let (program, errors) = parse("");
    assert!(errors.is_empty());
    assert!(program.statements.is_empty());
}

#[test]
fn display_output_reparses_to_the_same_program() {
    let source = "fun fib(n) { if n < 2 { return n; } return fib(n - 1) + fib(n - 2); } \
                  var limit = 10; \
                  while limit > 0 { limit = limit - 1; } \
                  print fib(7); \
                  return fib(7) == 13;";
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "errors: {errors:?}");

    let printed = program.to_string();
    let (reparsed, errors) = parse(&printed);
    assert!(errors.is_empty(), "printed form failed to parse: {printed}\n{errors:?}");
    assert_eq!(reparsed.to_string(), printed);
}
