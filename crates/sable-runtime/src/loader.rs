//! Ingestion adapter
//!
//! One-shot conversion of the externally supplied JSON program
//! document into the abstract syntax model. Purely structural:
//! parameters, statements and call arguments are reordered by their
//! declared index, methods re-declaring a selector overwrite the
//! earlier declaration, and that is the extent of the logic here.

use std::collections::HashMap;
use std::rc::Rc;

use serde::Deserialize;

use crate::ast::{Assignment, Block, ClassDecl, Expr, Literal, MethodDecl, Send};
use crate::error::LoadError;
use crate::program::Program;

#[derive(Debug, Deserialize)]
struct ProgramDoc {
    language: Option<String>,
    description: Option<String>,
    #[serde(default)]
    classes: Vec<ClassDoc>,
}

#[derive(Debug, Deserialize)]
struct ClassDoc {
    name: String,
    parent: Option<String>,
    #[serde(default)]
    methods: Vec<MethodDoc>,
}

#[derive(Debug, Deserialize)]
struct MethodDoc {
    selector: String,
    block: BlockDoc,
}

#[derive(Debug, Deserialize)]
struct BlockDoc {
    /// Optional explicit arity; must agree with the parameter count.
    arity: Option<usize>,
    #[serde(default)]
    parameters: Vec<ParameterDoc>,
    #[serde(default)]
    statements: Vec<StatementDoc>,
}

#[derive(Debug, Deserialize)]
struct ParameterDoc {
    order: u32,
    name: String,
}

#[derive(Debug, Deserialize)]
struct StatementDoc {
    order: u32,
    target: String,
    expr: ExprDoc,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ExprDoc {
    Literal(LiteralDoc),
    Variable(VariableDoc),
    Send(SendDoc),
    Block(Box<BlockDoc>),
}

#[derive(Debug, Deserialize)]
struct LiteralDoc {
    class: String,
    value: String,
}

#[derive(Debug, Deserialize)]
struct VariableDoc {
    name: String,
}

#[derive(Debug, Deserialize)]
struct SendDoc {
    selector: String,
    receiver: Box<ExprDoc>,
    #[serde(default)]
    arguments: Vec<ArgumentDoc>,
}

#[derive(Debug, Deserialize)]
struct ArgumentDoc {
    order: u32,
    expr: ExprDoc,
}

/// Load a program table from a JSON document.
pub fn load_str(source: &str) -> Result<Program, LoadError> {
    let doc: ProgramDoc = serde_json::from_str(source)?;

    let mut classes = HashMap::new();
    for class_doc in doc.classes {
        let class = convert_class(class_doc)?;
        classes.insert(class.name.clone(), class);
    }

    let mut program = Program::new(classes);
    program.language = doc.language;
    program.description = doc.description;
    Ok(program)
}

fn convert_class(doc: ClassDoc) -> Result<ClassDecl, LoadError> {
    let parent = doc.parent.ok_or_else(|| LoadError::MissingParent {
        name: doc.name.clone(),
    })?;

    let mut class = ClassDecl::new(doc.name.clone(), Some(parent));
    for method in doc.methods {
        let body = convert_block(&doc.name, method.block)?;
        class.methods.insert(
            method.selector.clone(),
            MethodDecl {
                selector: method.selector,
                body: Rc::new(body),
            },
        );
    }
    Ok(class)
}

fn convert_block(class: &str, mut doc: BlockDoc) -> Result<Block, LoadError> {
    doc.parameters.sort_by_key(|p| p.order);
    doc.statements.sort_by_key(|s| s.order);

    if let Some(declared) = doc.arity {
        if declared != doc.parameters.len() {
            return Err(LoadError::ArityMismatch {
                class: class.to_string(),
                declared,
                params: doc.parameters.len(),
            });
        }
    }

    let params = doc.parameters.into_iter().map(|p| p.name).collect();
    let statements = doc
        .statements
        .into_iter()
        .map(|s| {
            Ok(Assignment {
                target: s.target,
                expr: convert_expr(class, s.expr)?,
            })
        })
        .collect::<Result<Vec<_>, LoadError>>()?;

    Ok(Block { params, statements })
}

fn convert_expr(class: &str, doc: ExprDoc) -> Result<Expr, LoadError> {
    Ok(match doc {
        ExprDoc::Literal(lit) => Expr::Literal(Literal {
            class: lit.class,
            value: lit.value,
        }),
        ExprDoc::Variable(var) => Expr::Variable(var.name),
        ExprDoc::Send(send) => {
            let mut arguments = send.arguments;
            arguments.sort_by_key(|a| a.order);
            let args = arguments
                .into_iter()
                .map(|a| convert_expr(class, a.expr))
                .collect::<Result<Vec<_>, LoadError>>()?;
            Expr::Send(Send {
                selector: send.selector,
                receiver: Box::new(convert_expr(class, *send.receiver)?),
                args,
            })
        }
        ExprDoc::Block(block) => Expr::Block(Rc::new(convert_block(class, *block)?)),
    })
}
