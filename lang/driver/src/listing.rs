use std::fmt::Write;

use gobstones_lang_linter::SymbolTable;
use gobstones_lang_syntax::Ident;

/// A human-readable listing of all definitions in a symbol table.
///
/// Entries are sorted by name within each namespace, so the listing does not depend on the order
/// of definitions in the source.
pub fn symbol_listing(symbol_table: &SymbolTable) -> String {
    let mut out = String::new();
    // Writing to a `String` cannot fail.
    let _ = write_listing(&mut out, symbol_table);
    out
}

fn write_listing(out: &mut String, symbol_table: &SymbolTable) -> std::fmt::Result {
    match symbol_table.program() {
        Some(program) if program.interactive => {
            writeln!(out, "interactive program at {}", program.span)?
        }
        Some(program) => writeln!(out, "program at {}", program.span)?,
        None => writeln!(out, "no program")?,
    }
    for procedure in symbol_table.procedures() {
        writeln!(out, "procedure {}({})", procedure.name, params(&procedure.params))?;
    }
    for function in symbol_table.functions() {
        writeln!(out, "function {}({})", function.name, params(&function.params))?;
    }
    for typ in symbol_table.types() {
        writeln!(out, "type {} ({})", typ.name, typ.kind())?;
        for ctor in symbol_table.type_constructors(typ.name.as_str()) {
            let fields = symbol_table.constructor_fields(ctor).join(", ");
            writeln!(out, "  {ctor}({fields})")?;
        }
    }
    for field in symbol_table.field_names() {
        let sites: Vec<_> = symbol_table
            .field_descriptor(field)
            .iter()
            .map(|desc| format!("{}.{}#{}", desc.type_name, desc.ctor_name, desc.index))
            .collect();
        writeln!(out, "field {field}: {}", sites.join(", "))?;
    }
    Ok(())
}

fn params(params: &[Ident]) -> String {
    params.iter().map(Ident::as_str).collect::<Vec<_>>().join(", ")
}
