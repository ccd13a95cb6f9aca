use gobstones_lang_syntax::*;

use crate::{LintError, LintResult};

use super::{CtorMeta, FieldDescriptor, FunctionMeta, SymbolTable, TypeMeta};

impl SymbolTable {
    pub fn set_program(&mut self, program: &Program) -> LintResult {
        match &self.program {
            Some(first) => Err(Box::new(LintError::ProgramAlreadyDefined {
                first: first.span,
                second: program.span,
            })),
            None => {
                self.program = Some(program.clone());
                Ok(())
            }
        }
    }

    pub fn define_procedure(&mut self, procedure: &Procedure) -> LintResult {
        let Procedure { span, name, .. } = procedure;
        match self.procedures.get(&name.id) {
            Some(first) => Err(Box::new(LintError::ProcedureAlreadyDefined {
                name: name.id.clone(),
                first: first.span,
                second: *span,
            })),
            None => {
                self.procedures.insert(name.id.clone(), procedure.clone());
                Ok(())
            }
        }
    }

    pub fn define_function(&mut self, function: &Function) -> LintResult {
        let Function { span, name, body, .. } = function;
        match self.functions.get(&name.id) {
            Some(first) => Err(Box::new(LintError::FunctionAlreadyDefined {
                name: name.id.clone(),
                first: first.decl.span,
                second: *span,
            })),
            None => {
                let has_return = body.tail_return().is_some();
                let meta = FunctionMeta { decl: function.clone(), has_return };
                self.functions.insert(name.id.clone(), meta);
                Ok(())
            }
        }
    }

    /// Register a type together with its constructors and their fields.
    ///
    /// All constructors and fields are checked before anything is registered, so a failing
    /// definition leaves the table untouched.
    pub fn define_type(&mut self, typ: &TypeDecl) -> LintResult {
        let TypeDecl { span, name, .. } = typ;
        if let Some(first) = self.types.get(&name.id) {
            return Err(Box::new(LintError::TypeAlreadyDefined {
                name: name.id.clone(),
                first: first.decl.span,
                second: *span,
            }));
        }

        let ctors = typ.constructors();
        let mut siblings: HashMap<&str, Position> = HashMap::default();
        for ctor in &ctors {
            let first = self
                .ctors
                .get(&ctor.name.id)
                .map(|meta| meta.decl.span)
                .or_else(|| siblings.get(ctor.name.as_str()).copied());
            if let Some(first) = first {
                return Err(Box::new(LintError::ConstructorAlreadyDefined {
                    name: ctor.name.id.clone(),
                    first,
                    second: ctor.span,
                }));
            }
            siblings.insert(ctor.name.as_str(), ctor.span);
            check_fields(ctor)?;
        }

        for ctor in &ctors {
            for (index, field) in ctor.fields.iter().enumerate() {
                self.fields.entry(field.id.clone()).or_default().push(FieldDescriptor {
                    type_name: name.id.clone(),
                    ctor_name: ctor.name.id.clone(),
                    index,
                });
            }
        }
        let ctor_names = ctors.iter().map(|ctor| ctor.name.id.clone()).collect();
        for ctor in ctors {
            let meta = CtorMeta { type_name: name.id.clone(), decl: ctor };
            self.ctors.insert(meta.decl.name.id.clone(), meta);
        }
        self.types.insert(name.id.clone(), TypeMeta { decl: typ.clone(), ctors: ctor_names });
        Ok(())
    }
}

fn check_fields(ctor: &Ctor) -> LintResult {
    let mut seen = HashSet::default();
    for field in &ctor.fields {
        if !seen.insert(field.as_str()) {
            return Err(Box::new(LintError::RepeatedFieldName {
                ctor: ctor.name.id.clone(),
                field: field.id.clone(),
            }));
        }
    }
    Ok(())
}
