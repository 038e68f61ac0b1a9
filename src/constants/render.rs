//! Constants Module Rendering
//!
//! A [`ModuleDocument`] lists the bindings of one generated module; its
//! `Display` impl serializes it. Rendering is pure: the same identifiers
//! always give the same bytes.
//!
//! Layout of a non-empty module:
//!
//! ```text
//! /**
//!  * @typedef {(ENEMY_BOSS | PLAYER)} TypeEntity An entity.
//!  */
//!
//! /**
//!  * The 'ENEMY_BOSS' entity.
//!  * @type {'enemy-boss'}
//!  * @constant
//!  */
//! const ENEMY_BOSS = 'enemy-boss';
//!
//! ...
//!
//! export {
//!
//!     ENEMY_BOSS,
//!     PLAYER
//! };
//! ```

use std::fmt;

use crate::constants::category::Category;
use crate::constants::symbol::symbol_name;

/// Indentation of entries in the export list.
const EXPORT_INDENT: &str = "    ";

/// One `const` binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Binding name.
    pub symbol: String,
    /// Raw identifier the binding evaluates to.
    pub value: String,
}

impl Binding {
    /// Bind the symbol name of `identifier` to the identifier itself.
    pub fn new(identifier: &str) -> Self {
        Self {
            symbol: symbol_name(identifier),
            value: identifier.to_string(),
        }
    }
}

/// A generated constants module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDocument {
    pub category: Category,
    pub bindings: Vec<Binding>,
}

impl ModuleDocument {
    /// Build the document for already sorted identifiers.
    pub fn new(category: Category, identifiers: &[String]) -> Self {
        Self {
            category,
            bindings: identifiers.iter().map(|id| Binding::new(id)).collect(),
        }
    }

    /// Names in the export list, in binding order.
    pub fn exports(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|binding| binding.symbol.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Serialize to module source.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_typedef(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let union: Vec<&str> = self.exports().collect();
        writeln!(f, "/**")?;
        writeln!(
            f,
            " * @typedef {{({})}} {} {}",
            union.join(" | "),
            self.category.type_name(),
            self.category.type_description()
        )?;
        writeln!(f, " */")
    }

    fn write_binding(&self, f: &mut fmt::Formatter<'_>, binding: &Binding) -> fmt::Result {
        let literal = string_literal(&binding.value);
        writeln!(f, "/**")?;
        writeln!(
            f,
            " * The '{}' {}.",
            binding.symbol,
            self.category.noun()
        )?;
        writeln!(f, " * @type {{{}}}", literal)?;
        writeln!(f, " * @constant")?;
        writeln!(f, " */")?;
        writeln!(f, "const {} = {};", binding.symbol, literal)
    }

    fn write_exports(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .exports()
            .map(|symbol| format!("{}{}", EXPORT_INDENT, symbol))
            .collect();
        writeln!(f, "export {{")?;
        writeln!(f)?;
        writeln!(f, "{}", entries.join(",\n"))?;
        writeln!(f, "}};")
    }
}

impl fmt::Display for ModuleDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "export {{}};");
        }

        self.write_typedef(f)?;
        for binding in &self.bindings {
            writeln!(f)?;
            self.write_binding(f, binding)?;
        }
        writeln!(f)?;
        self.write_exports(f)
    }
}

/// Single-quoted string literal evaluating to `value`.
fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('\'');
    for c in value.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '\'' => literal.push_str("\\'"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            _ => literal.push(c),
        }
    }
    literal.push('\'');
    literal
}

/// Render the module for sorted `identifiers` of `category`.
pub fn render_module(category: Category, identifiers: &[String]) -> String {
    ModuleDocument::new(category, identifiers).render()
}
