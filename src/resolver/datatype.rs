use crate::error::internal_error;
use crate::resolver::{Context, Datatype, FunctionKind, IdentId, IdentTarget};

impl Context {
    /// The datatype an identifier denotes.
    ///
    /// Variables report `None` until type inference has set their type.
    pub fn ident_datatype(&self, ident: IdentId) -> Option<Datatype> {
        match self.ident(ident).target() {
            IdentTarget::Function(function_id) => {
                let function = self.function(function_id);
                let datatype = match function.kind() {
                    FunctionKind::Plain
                    | FunctionKind::UnitTest
                    | FunctionKind::Final
                    | FunctionKind::Destructor
                    | FunctionKind::Package
                    | FunctionKind::Module
                    | FunctionKind::Iterator
                    | FunctionKind::Struct
                    | FunctionKind::Generator => Datatype::Function(function_id),
                    FunctionKind::Enum => Datatype::EnumClass(function_id),
                    FunctionKind::Constructor => match function.tclass() {
                        Some(tclass) => Datatype::Tclass(tclass),
                        None => internal_error("Constructor without a class template"),
                    },
                    FunctionKind::Operator => internal_error("Operator identifiers have no datatype"),
                };
                Some(datatype)
            }
            IdentTarget::Variable(variable) => self.variable(variable).datatype().cloned(),
        }
    }
}
