use crate::ast::{Constant, Expr, ExprLet, LetBinding, ValueName, Visitor};

/// Reconstructs canonical source text from a tree: constants as their
/// literal text, `let [rec] name = value in body` with single spaces.
/// Original formatting is not preserved, but the output always re-parses.
#[derive(Debug, Default)]
pub struct PrettyPrinter {
    output: String,
}

impl PrettyPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn print(expr: &Expr) -> String {
        let mut printer = PrettyPrinter::new();
        expr.accept(&mut printer);
        printer.output
    }
}

impl Visitor for PrettyPrinter {
    fn visit_constant(&mut self, constant: &Constant) {
        self.output.push_str(&constant.kind.to_string());
    }

    fn visit_value_name(&mut self, value_name: &ValueName) {
        self.output.push_str(&value_name.token.lexeme);
    }

    fn visit_let_binding(&mut self, let_binding: &LetBinding) {
        let_binding.name.accept(self);
        self.output.push_str(" = ");
        let_binding.value.accept(self);
    }

    fn visit_expr_constant(&mut self, constant: &Constant) {
        constant.accept(self);
    }

    fn visit_expr_let(&mut self, expr_let: &ExprLet) {
        self.output.push_str("let ");
        if expr_let.rec {
            self.output.push_str("rec ");
        }
        expr_let.binding.accept(self);
        self.output.push_str(" in ");
        expr_let.body.accept(self);
    }
}
