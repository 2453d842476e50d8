//! End-to-end tests through the driver: source text in, rendered result out.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use monkey_eval::{buffer_handler, Object, SharedPrintHandler};
use monkeyc::commands::{render_parse, render_tokens, repl, PROMPT};
use monkeyc::{run_source, Outcome, Session};
use pretty_assertions::assert_eq;

fn session() -> (Session, SharedPrintHandler) {
    let output = buffer_handler();
    (Session::with_print_handler(output.clone()), output)
}

fn render(source: &str) -> Option<String> {
    let (mut session, _) = session();
    run_source(source, &mut session).render()
}

fn run_repl(input: &str) -> (String, String) {
    let (mut session, printed) = session();
    let mut out = Vec::new();
    repl(input.as_bytes(), &mut out, &mut session).unwrap();
    (String::from_utf8(out).unwrap(), printed.get_output())
}

#[test]
fn test_values_render_as_inspect() {
    assert_eq!(render("1 + 2 * 3").as_deref(), Some("7"));
    assert_eq!(render(r#""a" + "b""#).as_deref(), Some("ab"));
    assert_eq!(render("[1, 2][1]").as_deref(), Some("2"));
    assert_eq!(render(r#"{"k": [true]}"#).as_deref(), Some("{k: [true]}"));
    assert_eq!(render("fn(x) { x * 2 }").as_deref(), Some("fn(x) { (x * 2) }"));
    assert_eq!(render("let x = 5;").as_deref(), Some("5"));
}

#[test]
fn test_empty_input_renders_nothing() {
    assert_eq!(render(""), None);
    assert_eq!(render("   "), None);
    assert_eq!(render("let m = macro() { quote(1) };"), None);
}

#[test]
fn test_evaluation_error_is_a_value() {
    let (mut session, _) = session();
    let outcome = run_source("5 + true; 10", &mut session);
    assert!(outcome.is_failure());
    assert_eq!(
        outcome.render().as_deref(),
        Some("Error: unknown operation: Integer + Boolean")
    );
    let Outcome::Value(Object::Error(message)) = outcome else {
        panic!("expected an error value");
    };
    assert_eq!(&*message, "unknown operation: Integer + Boolean");
}

#[test]
fn test_parse_errors_skip_evaluation() {
    let (mut session, printed) = session();
    let outcome = run_source(r#"puts("never"); let x 5; let = 1;"#, &mut session);
    let Outcome::ParseErrors(messages) = &outcome else {
        panic!("expected parse errors, got {outcome:?}");
    };
    assert_eq!(
        messages,
        &vec![
            "expected `=`, got integer".to_string(),
            "expected identifier, got `=`".to_string(),
        ]
    );
    assert_eq!(
        outcome.render().as_deref(),
        Some("expected `=`, got integer\nexpected identifier, got `=`")
    );
    assert_eq!(printed.get_output(), "");
}

#[test]
fn test_macro_error_outcome() {
    let outcome = {
        let (mut session, _) = session();
        run_source("let m = macro() { 1 }; m();", &mut session)
    };
    assert!(matches!(outcome, Outcome::Macro(_)));
    assert_eq!(
        outcome.render().as_deref(),
        Some("macro m must return a quoted expression, got Integer")
    );
}

#[test]
fn test_session_keeps_bindings_and_macros() {
    let (mut session, printed) = session();
    run_source("let x = 10;", &mut session);
    run_source(
        "let unless = macro(c, a, b) { quote(if (!(unquote(c))) { unquote(a) } else { unquote(b) }) };",
        &mut session,
    );
    let outcome = run_source(r#"unless(x > 5, puts("small"), puts("big"))"#, &mut session);

    assert_eq!(outcome.render().as_deref(), Some("null"));
    assert_eq!(printed.get_output(), "big\n");
    assert_eq!(session.env().get("unless"), None);
    assert!(session.macro_env().get("unless").is_some());
}

#[test]
fn test_closures_across_inputs() {
    let (mut session, _) = session();
    run_source("let newAdder = fn(x) { fn(y) { x + y } };", &mut session);
    run_source("let add2 = newAdder(2);", &mut session);
    assert_eq!(
        run_source("add2(3)", &mut session).render().as_deref(),
        Some("5")
    );
}

#[test]
fn test_repl_prompts_and_prints() {
    let (out, printed) = run_repl("let a = 2;\na * 21\n\nputs(a)\n");
    assert_eq!(
        out,
        format!("{PROMPT}2\n{PROMPT}42\n{PROMPT}{PROMPT}null\n{PROMPT}")
    );
    assert_eq!(printed, "2\n");
}

#[test]
fn test_repl_reports_errors_and_continues() {
    let (out, _) = run_repl("let = 1\n1 + 1\nmissing\n");
    assert_eq!(
        out,
        format!(
            "{PROMPT}expected identifier, got `=`\n{PROMPT}2\n{PROMPT}Error: unknown identifier: missing\n{PROMPT}"
        )
    );
}

#[test]
fn test_render_tokens() {
    assert_eq!(
        render_tokens("let x = 5;"),
        "Let \"let\" @ 0..3\n\
         Ident \"x\" @ 4..5\n\
         Assign \"=\" @ 6..7\n\
         Int \"5\" @ 8..9\n\
         Semicolon \";\" @ 9..10\n\
         Eof \"\" @ 10..10\n"
    );
}

#[test]
fn test_render_parse() {
    assert_eq!(
        render_parse("let x = 1 + 2 * 3; x"),
        "let x = (1 + (2 * 3));\nx\n"
    );
    assert_eq!(
        render_parse("let x 5;"),
        "<invalid>\nerrors:\n  6..7: expected `=`, got integer\n"
    );
}

#[test]
fn test_outcome_failure_flags() {
    assert!(!Outcome::Empty.is_failure());
    assert!(!Outcome::Value(Object::Null).is_failure());
    assert!(Outcome::ParseErrors(vec![]).is_failure());
}
