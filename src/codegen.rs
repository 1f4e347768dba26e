use crate::expand::PublicDecl;

/// Renders expanded declarations back to the native surface syntax
pub struct DeclGenerator {
    output: String,
}

impl DeclGenerator {
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    pub fn generate(&mut self, declarations: &[PublicDecl]) -> String {
        for declaration in declarations {
            self.generate_declaration(declaration);
        }
        self.output.clone()
    }

    fn generate_declaration(&mut self, declaration: &PublicDecl) {
        // A declaration with no names declares nothing
        if declaration.names.is_empty() {
            return;
        }

        self.output.push_str("public ");
        for (i, name) in declaration.names.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.output.push_str(name);
        }
        self.output.push('\n');
    }
}

impl Default for DeclGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceLocation;

    fn decl(names: &[&str]) -> PublicDecl {
        PublicDecl {
            names: names.iter().map(|n| n.to_string()).collect(),
            location: SourceLocation::new(1, 1),
        }
    }

    #[test]
    fn test_single_declaration() {
        let mut codegen = DeclGenerator::new();
        assert_eq!(codegen.generate(&[decl(&["foo"])]), "public foo\n");
    }

    #[test]
    fn test_names_keep_order_and_sigils() {
        let mut codegen = DeclGenerator::new();
        assert_eq!(
            codegen.generate(&[decl(&["foo", "@bar", "baz"])]),
            "public foo, @bar, baz\n"
        );
    }

    #[test]
    fn test_empty_declaration_renders_nothing() {
        let mut codegen = DeclGenerator::new();
        assert_eq!(codegen.generate(&[decl(&[])]), "");
    }
}
