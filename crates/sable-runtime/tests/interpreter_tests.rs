//! End-to-end evaluation: programs go in as JSON documents, output
//! comes back out of a captured sink.

mod common;

use common::{block, lit, main_run, run_program, run_with_input, send, show, var};
use pretty_assertions::assert_eq;
use sable_runtime::RuntimeError;

#[test]
fn test_string_literal_prints_decoded_escapes() {
    let source = main_run(&[(
        "x",
        send(&lit("String", r"one\\ntwo\\tend"), "print", &[]),
    )]);
    assert_eq!(run_program(&source).unwrap(), "one\ntwo\tend");
}

#[test]
fn test_arithmetic_chain() {
    // (3 plus: 4) multiplyBy: 2
    let sum = send(&lit("Integer", "3"), "plus:", &[lit("Integer", "4")]);
    let product = send(&sum, "multiplyBy:", &[lit("Integer", "2")]);
    let source = main_run(&[("x", show(&product))]);
    assert_eq!(run_program(&source).unwrap(), "14");
}

#[test]
fn test_variables_hold_assigned_values() {
    let source = main_run(&[
        ("x", lit("Integer", "40")),
        ("y", send(&var("x"), "plus:", &[lit("Integer", "2")])),
        ("z", show(&var("y"))),
    ]);
    assert_eq!(run_program(&source).unwrap(), "42");
}

#[test]
fn test_unknown_identifier_faults() {
    let source = main_run(&[("x", var("ghost"))]);
    let err = run_program(&source).unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownIdentifier { .. }));
    assert_eq!(err.exit_code(), 53);
}

#[test]
fn test_does_not_understand_faults() {
    let fresh = send(&lit("class", "Object"), "new", &[]);
    let source = main_run(&[("x", send(&fresh, "frobnicate", &[]))]);
    let err = run_program(&source).unwrap_err();
    assert!(matches!(err, RuntimeError::DoesNotUnderstand { .. }));
    assert_eq!(err.exit_code(), 54);
}

#[test]
fn test_attribute_write_then_read() {
    let source = main_run(&[
        ("box", send(&lit("class", "Object"), "new", &[])),
        // A keyword send outside the method tables sets an attribute
        // and answers the receiver.
        ("same", send(&var("box"), "label:", &[lit("String", "hi")])),
        ("value", send(&var("same"), "label", &[])),
        ("out", send(&var("value"), "print", &[])),
    ]);
    assert_eq!(run_program(&source).unwrap(), "hi");
}

#[test]
fn test_attribute_read_miss_is_does_not_understand() {
    let source = main_run(&[
        ("box", send(&lit("class", "Object"), "new", &[])),
        ("value", send(&var("box"), "label", &[])),
    ]);
    let err = run_program(&source).unwrap_err();
    assert!(matches!(err, RuntimeError::DoesNotUnderstand { .. }));
}

#[test]
fn test_block_invocation_binds_parameters() {
    let body = block(
        &["n"],
        &[("m", send(&var("n"), "plus:", &[lit("Integer", "1")]))],
    );
    let source = main_run(&[
        ("b", body),
        ("r", send(&var("b"), "value:", &[lit("Integer", "5")])),
        ("out", show(&var("r"))),
    ]);
    assert_eq!(run_program(&source).unwrap(), "6");
}

#[test]
fn test_value_send_with_argument_to_zero_arity_block_writes_attribute() {
    // `value:` is not the invocation selector of an arity-0 block, so
    // it lands on the attribute fallback and answers the receiver.
    let body = block(&[], &[]);
    let source = main_run(&[
        ("b", body),
        ("r", send(&var("b"), "value:", &[lit("Integer", "7")])),
        ("out", show(&send(&var("r"), "identicalTo:", &[var("b")]))),
    ]);
    assert_eq!(run_program(&source).unwrap(), "true");
}

#[test]
fn test_value_send_without_argument_to_one_arity_block_is_dnu() {
    let body = block(&["n"], &[]);
    let source = main_run(&[
        ("b", body),
        ("r", send(&var("b"), "value", &[])),
    ]);
    let err = run_program(&source).unwrap_err();
    assert!(matches!(err, RuntimeError::DoesNotUnderstand { .. }));
    assert_eq!(err.exit_code(), 54);
}

#[test]
fn test_block_does_not_see_enclosing_variables() {
    // Only the receiver crosses the invocation boundary.
    let body = block(&[], &[("y", var("x"))]);
    let source = main_run(&[
        ("x", lit("Integer", "1")),
        ("b", body),
        ("r", send(&var("b"), "value", &[])),
    ]);
    let err = run_program(&source).unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownIdentifier { name } if name == "x"));
}

#[test]
fn test_times_repeat_passes_iteration_number() {
    let body = block(&["i"], &[("s", show(&var("i")))]);
    let source = main_run(&[(
        "r",
        send(&lit("Integer", "3"), "timesRepeat:", &[body]),
    )]);
    assert_eq!(run_program(&source).unwrap(), "123");
}

#[test]
fn test_print_answers_the_calling_frames_self() {
    let source = main_run(&[
        ("a", send(&lit("String", "z"), "print", &[])),
        ("b", send(&var("a"), "identicalTo:", &[var("self")])),
        ("c", show(&var("b"))),
    ]);
    assert_eq!(run_program(&source).unwrap(), "ztrue");
}

#[test]
fn test_boolean_singletons_are_identical() {
    let first = send(&lit("class", "True"), "new", &[]);
    let second = send(&lit("class", "True"), "new", &[]);
    let source = main_run(&[
        ("x", send(&first, "identicalTo:", &[second])),
        ("out", show(&var("x"))),
    ]);
    assert_eq!(run_program(&source).unwrap(), "true");
}

#[test]
fn test_fresh_instances_are_not_identical() {
    let first = send(&lit("class", "Object"), "new", &[]);
    let second = send(&lit("class", "Object"), "new", &[]);
    let source = main_run(&[
        ("x", send(&first, "identicalTo:", &[second])),
        ("out", show(&var("x"))),
    ]);
    assert_eq!(run_program(&source).unwrap(), "false");
}

#[test]
fn test_from_copies_matching_primitive_state() {
    let copied = send(
        &lit("class", "Integer"),
        "from:",
        &[lit("Integer", "5")],
    );
    let source = main_run(&[("x", show(&copied))]);
    assert_eq!(run_program(&source).unwrap(), "5");
}

#[test]
fn test_from_plain_object_source_keeps_defaults() {
    let fresh = send(&lit("class", "Object"), "new", &[]);
    let copied = send(&lit("class", "Integer"), "from:", &[fresh]);
    let source = main_run(&[("x", show(&copied))]);
    assert_eq!(run_program(&source).unwrap(), "0");
}

#[test]
fn test_from_mismatched_source_is_value_fault() {
    let copied = send(
        &lit("class", "String"),
        "from:",
        &[lit("Integer", "5")],
    );
    let source = main_run(&[("x", copied)]);
    let err = run_program(&source).unwrap_err();
    assert!(matches!(err, RuntimeError::CopySourceMismatch { .. }));
    assert_eq!(err.exit_code(), 55);
}

#[test]
fn test_unknown_class_receiver_is_type_fault() {
    let source = main_run(&[("x", send(&lit("class", "Ghost"), "new", &[]))]);
    let err = run_program(&source).unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownClass { .. }));
    assert_eq!(err.exit_code(), 53);
}

#[test]
fn test_class_receiver_rejects_instance_selectors() {
    let source = main_run(&[("x", send(&lit("class", "Integer"), "plus:", &[lit("Integer", "1")]))]);
    let err = run_program(&source).unwrap_err();
    assert!(matches!(err, RuntimeError::ClassDoesNotUnderstand { .. }));
    assert_eq!(err.exit_code(), 54);
}

#[test]
fn test_malformed_integer_literal_faults_where_used() {
    let source = main_run(&[("x", lit("Integer", "abc"))]);
    let err = run_program(&source).unwrap_err();
    assert!(matches!(err, RuntimeError::MalformedLiteral { .. }));
    assert_eq!(err.exit_code(), 53);
}

#[test]
fn test_unknown_literal_class_faults() {
    let source = main_run(&[("x", lit("Float", "1.5"))]);
    let err = run_program(&source).unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownLiteralClass { .. }));
}

#[test]
fn test_string_read_consumes_input_lines() {
    let source = main_run(&[
        ("line", send(&lit("class", "String"), "read", &[])),
        ("out", send(&var("line"), "print", &[])),
    ]);
    assert_eq!(run_with_input(&source, "hello\n").unwrap(), "hello");
}

#[test]
fn test_string_read_on_exhausted_input_faults() {
    let source = main_run(&[("line", send(&lit("class", "String"), "read", &[]))]);
    let err = run_with_input(&source, "").unwrap_err();
    assert!(matches!(err, RuntimeError::InputExhausted));
    assert_eq!(err.exit_code(), 56);
}

#[test]
fn test_missing_main_class() {
    let err = run_program(r#"{"classes": []}"#).unwrap_err();
    assert!(matches!(err, RuntimeError::MissingMain));
    assert_eq!(err.exit_code(), 51);
}

#[test]
fn test_run_with_parameters_is_rejected() {
    let source = r#"{"classes":[{"name":"Main","parent":"Object","methods":[{
        "selector":"run",
        "block":{"parameters":[{"order":1,"name":"x"}],"statements":[]}
    }]}]}"#;
    let err = run_program(source).unwrap_err();
    assert!(matches!(err, RuntimeError::MissingRun));
    assert_eq!(err.exit_code(), 52);
}

#[test]
fn test_circular_inheritance_faults_at_instantiation() {
    let fresh = send(&lit("class", "Twisted"), "new", &[]);
    let source = format!(
        r#"{{"classes":[
            {{"name":"Twisted","parent":"Knot","methods":[]}},
            {{"name":"Knot","parent":"Twisted","methods":[]}},
            {{"name":"Main","parent":"Object","methods":[{{
                "selector":"run",
                "block":{{"parameters":[],"statements":[
                    {{"order":1,"target":"x","expr":{fresh}}}
                ]}}
            }}]}}
        ]}}"#
    );
    let err = run_program(&source).unwrap_err();
    assert!(matches!(err, RuntimeError::CircularInheritance { .. }));
    assert_eq!(err.exit_code(), 50);
}

#[test]
fn test_super_send_skips_own_method_table() {
    let source = r#"{"classes":[
        {"name":"Greeter","parent":"Object","methods":[{
            "selector":"name",
            "block":{"parameters":[],"statements":[
                {"order":1,"target":"n",
                 "expr":{"literal":{"class":"String","value":"base"}}}
            ]}
        }]},
        {"name":"LoudGreeter","parent":"Greeter","methods":[
            {"selector":"name",
             "block":{"parameters":[],"statements":[
                {"order":1,"target":"n",
                 "expr":{"literal":{"class":"String","value":"loud"}}}
             ]}},
            {"selector":"parentName",
             "block":{"parameters":[],"statements":[
                {"order":1,"target":"n",
                 "expr":{"send":{"selector":"name",
                                  "receiver":{"variable":{"name":"super"}},
                                  "arguments":[]}}}
             ]}}
        ]},
        {"name":"Main","parent":"Object","methods":[{
            "selector":"run",
            "block":{"parameters":[],"statements":[
                {"order":1,"target":"g",
                 "expr":{"send":{"selector":"new",
                                  "receiver":{"literal":{"class":"class","value":"LoudGreeter"}},
                                  "arguments":[]}}},
                {"order":2,"target":"a",
                 "expr":{"send":{"selector":"print",
                                  "receiver":{"send":{"selector":"name",
                                                      "receiver":{"variable":{"name":"g"}},
                                                      "arguments":[]}},
                                  "arguments":[]}}},
                {"order":3,"target":"b",
                 "expr":{"send":{"selector":"print",
                                  "receiver":{"send":{"selector":"parentName",
                                                      "receiver":{"variable":{"name":"g"}},
                                                      "arguments":[]}},
                                  "arguments":[]}}}
            ]}
        }]}
    ]}"#;
    assert_eq!(run_program(source).unwrap(), "loudbase");
}

#[test]
fn test_while_true_counts_down_through_self_attributes() {
    // Both blocks capture the Main instance, so the condition and the
    // body share state through its attributes.
    let count = send(&var("self"), "count", &[]);
    let condition = block(
        &[],
        &[("c", send(&count, "greaterThan:", &[lit("Integer", "0")]))],
    );
    let body = block(
        &[],
        &[
            ("p", show(&count)),
            (
                "q",
                send(
                    &var("self"),
                    "count:",
                    &[send(&count, "minus:", &[lit("Integer", "1")])],
                ),
            ),
        ],
    );
    let source = main_run(&[
        ("seed", send(&var("self"), "count:", &[lit("Integer", "3")])),
        ("r", send(&condition, "whileTrue:", &[body])),
    ]);
    assert_eq!(run_program(&source).unwrap(), "321");
}

#[test]
fn test_user_method_with_arguments() {
    let source = r#"{"classes":[
        {"name":"Adder","parent":"Object","methods":[{
            "selector":"sum:with:",
            "block":{"parameters":[
                {"order":1,"name":"a"},{"order":2,"name":"b"}
            ],"statements":[
                {"order":1,"target":"t",
                 "expr":{"send":{"selector":"plus:",
                                  "receiver":{"variable":{"name":"a"}},
                                  "arguments":[{"order":1,"expr":{"variable":{"name":"b"}}}]}}}
            ]}
        }]},
        {"name":"Main","parent":"Object","methods":[{
            "selector":"run",
            "block":{"parameters":[],"statements":[
                {"order":1,"target":"adder",
                 "expr":{"send":{"selector":"new",
                                  "receiver":{"literal":{"class":"class","value":"Adder"}},
                                  "arguments":[]}}},
                {"order":2,"target":"r",
                 "expr":{"send":{"selector":"sum:with:",
                                  "receiver":{"variable":{"name":"adder"}},
                                  "arguments":[
                                    {"order":1,"expr":{"literal":{"class":"Integer","value":"20"}}},
                                    {"order":2,"expr":{"literal":{"class":"Integer","value":"22"}}}
                                  ]}}},
                {"order":3,"target":"out",
                 "expr":{"send":{"selector":"print",
                                  "receiver":{"send":{"selector":"asString",
                                                      "receiver":{"variable":{"name":"r"}},
                                                      "arguments":[]}},
                                  "arguments":[]}}}
            ]}
        }]}
    ]}"#;
    assert_eq!(run_program(source).unwrap(), "42");
}
