//! Shared builders for the JSON program documents, so the tests read
//! as programs instead of as punctuation.

#![allow(dead_code)]

use sable_runtime::{load_str, Interpreter, RuntimeError, ScriptedInput};

pub fn run_with_input(source: &str, input_text: &str) -> Result<String, RuntimeError> {
    let program = load_str(source).expect("program should load");
    let mut input = ScriptedInput::from_text(input_text);
    let mut output = String::new();
    Interpreter::new(program, &mut input, &mut output)
        .run()
        .map(|()| output)
}

pub fn run_program(source: &str) -> Result<String, RuntimeError> {
    run_with_input(source, "")
}

pub fn lit(class: &str, value: &str) -> String {
    format!(r#"{{"literal":{{"class":"{class}","value":"{value}"}}}}"#)
}

pub fn var(name: &str) -> String {
    format!(r#"{{"variable":{{"name":"{name}"}}}}"#)
}

pub fn send(receiver: &str, selector: &str, args: &[String]) -> String {
    let arguments = args
        .iter()
        .enumerate()
        .map(|(i, arg)| format!(r#"{{"order":{},"expr":{arg}}}"#, i + 1))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        r#"{{"send":{{"selector":"{selector}","receiver":{receiver},"arguments":[{arguments}]}}}}"#
    )
}

pub fn block(params: &[&str], statements: &[(&str, String)]) -> String {
    let parameters = params
        .iter()
        .enumerate()
        .map(|(i, name)| format!(r#"{{"order":{},"name":"{name}"}}"#, i + 1))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        r#"{{"block":{{"parameters":[{parameters}],"statements":[{}]}}}}"#,
        statement_list(statements)
    )
}

/// A single-class program: `Main` with one `run` method.
pub fn main_run(statements: &[(&str, String)]) -> String {
    format!(
        r#"{{"classes":[{{"name":"Main","parent":"Object","methods":[{{
            "selector":"run",
            "block":{{"parameters":[],"statements":[{}]}}
        }}]}}]}}"#,
        statement_list(statements)
    )
}

fn statement_list(statements: &[(&str, String)]) -> String {
    statements
        .iter()
        .enumerate()
        .map(|(i, (target, expr))| {
            format!(r#"{{"order":{},"target":"{target}","expr":{expr}}}"#, i + 1)
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// `<expr> asString print`.
pub fn show(expr: &str) -> String {
    send(&send(expr, "asString", &[]), "print", &[])
}
