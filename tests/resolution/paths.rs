use crate::helpers::Program;
use nameres::{Binder, FunctionKind, Line};

#[test]
fn qualified_paths_descend_through_sub_scopes() -> Result<(), anyhow::Error> {
    let mut program = Program::new()?;
    let root = program.ctx.root();
    let area = program.function_ident(program.area);

    let found = program.resolve(root, "pkg.geometry.area");
    let direct = program.ctx.scope(program.body(program.geometry)).find("area");
    assert_eq!(found, Some(area));
    assert_eq!(found, direct);
    Ok(())
}

#[test]
fn paths_start_in_the_given_scope() -> Result<(), anyhow::Error> {
    let mut program = Program::new()?;
    let pkg_body = program.body(program.pkg);
    let area_body = program.body(program.area);
    assert_eq!(
        program.resolve(pkg_body, "geometry.area"),
        Some(program.function_ident(program.area))
    );
    assert_eq!(
        program.resolve(area_body, "width"),
        Some(program.variable_ident(program.width))
    );
    Ok(())
}

#[test]
fn unresolved_paths_are_retried_from_the_root() -> Result<(), anyhow::Error> {
    let mut program = Program::new()?;
    let area_body = program.body(program.area);
    assert_eq!(
        program.resolve(area_body, "pkg.geometry.origin"),
        Some(program.variable_ident(program.origin))
    );
    assert_eq!(
        program.resolve(area_body, "Int"),
        Some(program.int_ident())
    );
    Ok(())
}

#[test]
fn paths_do_not_escalate_through_the_module() -> Result<(), anyhow::Error> {
    let mut program = Program::new()?;
    let area_body = program.body(program.area);
    // A simple-name lookup would find it in the module scope...
    assert!(program.ctx.find_ident(area_body, "origin").is_some());
    // ...but a path is an explicit address: only the scope itself and the root are tried.
    assert!(program.resolve(area_body, "origin").is_none());
    Ok(())
}

#[test]
fn aliases_do_not_affect_resolution() -> Result<(), anyhow::Error> {
    let mut program = Program::new()?;
    let root = program.ctx.root();
    assert_eq!(
        program.resolve(root, "pkg.geometry.area as surface"),
        Some(program.function_ident(program.area))
    );
    assert!(program.resolve(root, "surface").is_none());
    Ok(())
}

#[test]
fn variables_expose_no_sub_scope() -> Result<(), anyhow::Error> {
    let mut program = Program::new()?;
    let root = program.ctx.root();
    assert!(program.resolve(root, "pkg.geometry.origin.x").is_none());
    Ok(())
}

#[test]
fn a_missing_segment_fails_the_whole_path() -> Result<(), anyhow::Error> {
    let mut program = Program::new()?;
    let root = program.ctx.root();
    assert!(program.resolve(root, "pkg.shapes.area").is_none());
    assert!(program.resolve(root, "nowhere.geometry").is_none());
    Ok(())
}

#[test]
fn paths_stop_at_functions_without_members() -> Result<(), anyhow::Error> {
    let mut program = Program::new()?;
    let root = program.ctx.root();
    let mut binder = Binder::new(&mut program.ctx);
    let (_, plus) = binder.declare_operator("+", Line(1))?;
    binder.declare_function("helper", FunctionKind::Plain, Line(2))?;
    assert_eq!(program.ctx.ident_sub_scope(plus), None);

    // `helper` has an empty body: the path fails inside it, then again from the root.
    assert!(program.resolve(root, "helper.x").is_none());
    Ok(())
}
