use crate::helpers::Program;
use insta::assert_snapshot;
use nameres::{Binder, Context, FunctionKind, IdentTarget, Line, ResolveError};

#[test]
fn duplicate_names_in_one_scope_are_rejected() -> Result<(), anyhow::Error> {
    let mut ctx = Context::new();
    let mut binder = Binder::new(&mut ctx);
    let block = binder.declare_block();
    let guard = binder.enter_scope(block);
    binder.declare_function("count", FunctionKind::Plain, Line(6))?;
    let outcome = binder.declare_variable("count", Line(7));
    binder.exit_scope(guard);

    let error = outcome.unwrap_err();
    assert_eq!(
        error,
        ResolveError::DuplicateIdentifier {
            name: "count".into(),
            line: Line(7),
        }
    );
    assert_snapshot!(error.to_string(), @"line 7: Tried to create an identifier 'count' that already exists on the block");
    // The rejected declaration left nothing behind.
    assert_eq!(ctx.scope(block).len(), 1);
    Ok(())
}

#[test]
fn create_ident_checks_the_target_scope() -> Result<(), anyhow::Error> {
    let mut ctx = Context::new();
    let root = ctx.root();
    let x = ctx.create_variable("x", Line(1));
    ctx.create_ident(Some(root), IdentTarget::Variable(x), "x", Line(1))?;
    let outcome = ctx.create_ident(Some(root), IdentTarget::Variable(x), "x", Line(2));
    assert!(matches!(
        outcome,
        Err(ResolveError::DuplicateIdentifier { line: Line(2), .. })
    ));
    Ok(())
}

#[test]
fn the_same_name_in_different_scopes_does_not_conflict() -> Result<(), anyhow::Error> {
    let mut program = Program::new()?;
    let area_body = program.body(program.area);
    let mut binder = Binder::new(&mut program.ctx);
    let guard = binder.enter_scope(area_body);
    let shadow = binder.declare_variable("origin", Line(8));
    binder.exit_scope(guard);
    assert!(shadow.is_ok());
    Ok(())
}

#[test]
fn operator_identifiers_never_join_a_scope() -> Result<(), anyhow::Error> {
    let mut ctx = Context::new();
    let mut binder = Binder::new(&mut ctx);
    let (_, plus) = binder.declare_operator("+", Line(1))?;
    let (_, other_plus) = binder.declare_operator("+", Line(2))?;

    assert_ne!(plus, other_plus);
    assert_eq!(ctx.ident(plus).scope(), None);
    assert!(ctx.find_ident(ctx.root(), "+").is_none());
    Ok(())
}

#[test]
fn builtins_are_found_from_a_module() -> Result<(), anyhow::Error> {
    let program = Program::new()?;
    let module_scope = program.body(program.geometry);
    assert!(program.ctx.scope(module_scope).find("Int").is_none());
    assert_eq!(
        program.ctx.find_ident(module_scope, "Int"),
        Some(program.int_ident())
    );
    Ok(())
}

#[test]
fn names_escalate_from_nested_scopes_of_the_same_file() -> Result<(), anyhow::Error> {
    let mut program = Program::new()?;
    let area_body = program.body(program.area);
    let mut binder = Binder::new(&mut program.ctx);
    let guard = binder.enter_scope(area_body);
    let block = binder.declare_block();
    binder.exit_scope(guard);

    let ctx = &program.ctx;
    assert_eq!(ctx.find_ident(block, "Int"), Some(program.int_ident()));
    assert_eq!(
        ctx.find_ident(block, "origin"),
        Some(program.variable_ident(program.origin))
    );
    Ok(())
}

#[test]
fn local_declarations_shadow_the_root() -> Result<(), anyhow::Error> {
    let mut program = Program::new()?;
    let area_body = program.body(program.area);
    let mut binder = Binder::new(&mut program.ctx);
    let guard = binder.enter_scope(area_body);
    let local = binder.declare_variable("Int", Line(9))?;
    binder.exit_scope(guard);

    let found = program.ctx.find_ident(area_body, "Int");
    assert_eq!(found, Some(program.variable_ident(local)));
    assert_ne!(found, Some(program.int_ident()));
    Ok(())
}

#[test]
fn enclosing_function_bodies_are_not_searched() -> Result<(), anyhow::Error> {
    // Only the scope itself, its module and the root take part in simple-name lookup.
    let mut program = Program::new()?;
    let area_body = program.body(program.area);
    let mut binder = Binder::new(&mut program.ctx);
    let guard = binder.enter_scope(area_body);
    let block = binder.declare_block();
    binder.exit_scope(guard);

    assert!(program.ctx.find_ident(block, "width").is_none());
    assert!(program.ctx.find_ident(area_body, "width").is_some());
    Ok(())
}

#[test]
fn scopes_without_a_file_only_see_their_own_names() -> Result<(), anyhow::Error> {
    let program = Program::new()?;
    let constructor = program.ctx.tclass(program.int).constructor();
    let constructor_body = program.body(constructor);
    assert_eq!(program.ctx.scope(constructor_body).filepath(), None);
    assert!(program.ctx.find_ident(constructor_body, "pkg").is_none());
    Ok(())
}

#[test]
fn unknown_names_are_absent() -> Result<(), anyhow::Error> {
    let program = Program::new()?;
    let area_body = program.body(program.area);
    assert!(program.ctx.find_ident(area_body, "nope").is_none());
    Ok(())
}

#[test]
fn scopes_remember_declaration_order() -> Result<(), anyhow::Error> {
    let program = Program::new()?;
    let ctx = &program.ctx;
    let names: Vec<_> = ctx
        .scope(ctx.root())
        .idents()
        .map(|ident| ctx.ident(ident).name())
        .collect();
    assert_eq!(names, vec!["Int", "pkg"]);

    let module_names: Vec<_> = ctx
        .scope(program.body(program.geometry))
        .idents()
        .map(|ident| ctx.ident(ident).name())
        .collect();
    assert_eq!(module_names, vec!["origin", "area"]);
    Ok(())
}

#[test]
fn modules_own_their_file_scope() -> Result<(), anyhow::Error> {
    let program = Program::new()?;
    let ctx = &program.ctx;
    let module_scope = program.body(program.geometry);
    let filepath = ctx.scope(module_scope).filepath().unwrap();
    assert_eq!(ctx.filepath(filepath).module_scope(), Some(module_scope));
    assert_eq!(
        ctx.filepath(filepath).path(),
        std::path::Path::new("pkg/geometry.dn")
    );
    // Nested bodies inherit the file.
    assert_eq!(
        ctx.scope(program.body(program.area)).filepath(),
        Some(filepath)
    );
    Ok(())
}
