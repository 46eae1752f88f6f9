//! Document renderer: flattens a module's doc tree into text.
//!
//! Links to types and members are replaced by formatted link markup; links
//! to modules and inclusion tags splice the referenced module's rendering in
//! place. Each module's references resolve against that module's own
//! imports, so an included module renders the same wherever it appears.

use crate::base::{DocGenConfig, join_name};
use crate::error::DocGenError;
use crate::hir::{ModuleHandle, ResolveResult, ResolvedSymbol, Resolver, SymbolTable};
use crate::parser::parse_signature;
use crate::syntax::{DocNode, DocSource, DocTree};

use super::include_stack::IncludeStack;
use super::links::LinkFormatter;

/// Renders modules using a symbol table, a doc source and a link formatter.
pub struct Renderer<'a> {
    symbols: &'a dyn SymbolTable,
    docs: &'a dyn DocSource,
    links: &'a dyn LinkFormatter,
    config: &'a DocGenConfig,
}

/// Per-module state while walking its tree.
struct ModuleScope<'m, 'a> {
    module: &'m ModuleHandle,
    resolver: Resolver<'a>,
}

impl<'a> Renderer<'a> {
    pub fn new(
        symbols: &'a dyn SymbolTable,
        docs: &'a dyn DocSource,
        links: &'a dyn LinkFormatter,
        config: &'a DocGenConfig,
    ) -> Self {
        Self {
            symbols,
            docs,
            links,
            config,
        }
    }

    /// Render `module` into a fresh buffer.
    pub fn render_module(&self, module: &ModuleHandle) -> Result<String, DocGenError> {
        let mut buffer = String::new();
        let mut stack = IncludeStack::new();
        self.render(module, &mut stack, &mut buffer)?;
        Ok(buffer)
    }

    /// Render `module` into `buffer` with `module` entered on `stack`.
    pub fn render(
        &self,
        module: &ModuleHandle,
        stack: &mut IncludeStack,
        buffer: &mut String,
    ) -> Result<(), DocGenError> {
        stack.scoped(module, |stack| self.render_entered(module, stack, buffer))
    }

    fn render_entered(
        &self,
        module: &ModuleHandle,
        stack: &mut IncludeStack,
        buffer: &mut String,
    ) -> Result<(), DocGenError> {
        let Some(tree) = self.docs.doc_tree(module) else {
            tracing::debug!("[RENDER] No documentation for '{}'", module.qualified_name);
            return Ok(());
        };
        tracing::trace!(
            "[RENDER] Rendering '{}' at depth {}",
            module.qualified_name,
            stack.depth()
        );

        let scope = ModuleScope {
            module,
            resolver: Resolver::new(self.symbols, module, self.config),
        };
        for node in &tree.nodes {
            self.render_node(&scope, node, stack, buffer)?;
        }
        Ok(())
    }

    fn render_node(
        &self,
        scope: &ModuleScope<'_, 'a>,
        node: &DocNode,
        stack: &mut IncludeStack,
        buffer: &mut String,
    ) -> Result<(), DocGenError> {
        match node {
            DocNode::Text(body) => buffer.push_str(body),
            DocNode::Container(children) => {
                for child in children {
                    self.render_node(scope, child, stack, buffer)?;
                }
            }
            DocNode::Link { signature, label } => {
                self.render_link(scope, signature, label, stack, buffer)?;
            }
            DocNode::Inclusion(target) => {
                let module = &scope.module.qualified_name;
                let target = target.trim();
                let qualified = join_name(module, target);
                let Some(included) = self.symbols.lookup_module(&qualified) else {
                    return Err(DocGenError::missing_module(module, qualified));
                };
                self.render(&included, stack, buffer)?;
            }
        }
        Ok(())
    }

    fn render_link(
        &self,
        scope: &ModuleScope<'_, 'a>,
        signature: &str,
        label: &[DocNode],
        stack: &mut IncludeStack,
        buffer: &mut String,
    ) -> Result<(), DocGenError> {
        let module = &scope.module.qualified_name;
        let reference = parse_signature(signature)
            .map_err(|source| DocGenError::malformed_signature(module, signature, source))?;

        let resolved = match scope.resolver.resolve(&reference)? {
            ResolveResult::Found(resolved) => resolved,
            ResolveResult::NotFound => {
                return Err(DocGenError::unresolved_link(module, signature));
            }
        };

        let destination = match &resolved {
            ResolvedSymbol::Module(included) => {
                tracing::debug!(
                    "[RENDER] '{}' includes '{}'",
                    module,
                    included.qualified_name
                );
                return self.render(included, stack, buffer);
            }
            ResolvedSymbol::Type(ty) => self.links.type_link(ty),
            ResolvedSymbol::Method { owner, method } => self.links.method_link(owner, method),
            ResolvedSymbol::Field { owner, field } => self.links.field_link(owner, field),
        };

        let text = DocTree::plain_text(label);
        let text = match text.trim() {
            "" => resolved.simple_name(),
            trimmed => trimmed,
        };
        buffer.push_str(&self.links.compose(&destination, text));
        Ok(())
    }
}
