//! Syntactic kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! syntax_kinds {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Type tag of a syntax tree node.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[repr(u16)]
        pub enum SyntaxKind {
            $(
                #[serde(rename = $name)]
                $variant,
            )+
        }

        impl SyntaxKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [SyntaxKind] = &[$(SyntaxKind::$variant),+];

            /// Kebab-case name, identical to the serialized form.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(SyntaxKind::$variant => $name,)+
                }
            }
        }
    };
}

syntax_kinds! {
    File => "file",
    PackageDirective => "package-directive",
    ImportList => "import-list",
    ImportDirective => "import-directive",
    ClassDeclaration => "class-declaration",
    ObjectDeclaration => "object-declaration",
    ClassBody => "class-body",
    PrimaryConstructor => "primary-constructor",
    SecondaryConstructor => "secondary-constructor",
    FunctionDeclaration => "function-declaration",
    PropertyDeclaration => "property-declaration",
    TypeParameterList => "type-parameter-list",
    ParameterList => "parameter-list",
    Parameter => "parameter",
    TypeReference => "type-reference",
    Block => "block",
    ReturnExpression => "return-expression",
    CallExpression => "call-expression",
    ArgumentList => "argument-list",
    Argument => "argument",
    LambdaExpression => "lambda-expression",
    StringTemplate => "string-template",
    ModifierList => "modifier-list",
    AnnotationEntry => "annotation-entry",
    Identifier => "identifier",
    Whitespace => "whitespace",
    Comment => "comment",
}

impl SyntaxKind {
    /// Kinds that introduce a named declaration.
    pub fn is_declaration(self) -> bool {
        matches!(
            self,
            SyntaxKind::ClassDeclaration
                | SyntaxKind::ObjectDeclaration
                | SyntaxKind::FunctionDeclaration
                | SyntaxKind::PropertyDeclaration
                | SyntaxKind::SecondaryConstructor
        )
    }

    pub fn is_trivia(self) -> bool {
        matches!(self, SyntaxKind::Whitespace | SyntaxKind::Comment)
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
