use std::cell::RefCell;
use std::rc::Rc;

use ig_core::ImGuardError;
use rhai::{Dynamic, Engine, Map, AST};

use crate::backend::UiBackend;
use crate::context::UiContext;

mod bindings;
mod frame;
#[cfg(test)]
mod scripted_tests;

pub const DEFAULT_ENTRY_FN: &str = "update";
pub const SCOPE_DEPTH_FN: &str = "ScopeDepth";

pub(crate) type SharedContext<B> = Rc<RefCell<UiContext<B>>>;

pub struct ScriptedUiOptions<B: UiBackend> {
    pub source: String,
    pub entry_fn: Option<String>,
    /// Operation cap for one entry call. `0` means unlimited.
    pub max_operations: Option<u64>,
    pub backend: B,
}

/// A rhai script driving one [`UiContext`]. Each frame calls the entry
/// function with a persistent state map bound as `this`.
pub struct ScriptedUi<B: UiBackend + 'static> {
    engine: Engine,
    ast: AST,
    entry_fn: String,
    context: SharedContext<B>,
    state: Dynamic,
}

impl<B: UiBackend + 'static> ScriptedUi<B> {
    pub fn new(options: ScriptedUiOptions<B>) -> Result<Self, ImGuardError> {
        let ScriptedUiOptions {
            source,
            entry_fn,
            max_operations,
            backend,
        } = options;

        let widgets = backend.widget_names().to_vec();
        bindings::check_widget_names(&widgets)?;
        let entry_fn = entry_fn.unwrap_or_else(|| DEFAULT_ENTRY_FN.to_string());
        let context = Rc::new(RefCell::new(UiContext::new(backend)));

        let mut engine = Engine::new();
        engine.set_strict_variables(true);
        if let Some(limit) = max_operations {
            engine.set_max_operations(limit);
        }
        bindings::register_all(&mut engine, &context, &widgets);

        let ast = engine.compile(&source).map_err(|error| {
            ImGuardError::new(
                "RUNTIME_SCRIPT_COMPILE",
                format!("Script compile failed: {}", error),
            )
        })?;
        let has_entry = ast
            .iter_functions()
            .any(|function| function.name == entry_fn && function.params.is_empty());
        if !has_entry {
            return Err(ImGuardError::new(
                "RUNTIME_ENTRY_MISSING",
                format!(
                    "Script does not define entry function \"{}()\" without parameters.",
                    entry_fn
                ),
            ));
        }

        log::debug!(
            "scripted ui ready: entry \"{}\", {} widget binding(s)",
            entry_fn,
            widgets.len()
        );
        Ok(Self {
            engine,
            ast,
            entry_fn,
            context,
            state: Dynamic::from_map(Map::new()),
        })
    }

    pub fn entry_fn(&self) -> &str {
        &self.entry_fn
    }

    /// State map the entry function sees as `this`.
    pub fn state(&self) -> &Dynamic {
        &self.state
    }

    pub fn context(&self) -> std::cell::Ref<'_, UiContext<B>> {
        self.context.borrow()
    }

    pub fn with_backend<R>(&self, f: impl FnOnce(&B) -> R) -> R {
        f(self.context.borrow().backend())
    }

    pub fn with_backend_mut<R>(&self, f: impl FnOnce(&mut B) -> R) -> R {
        f(self.context.borrow_mut().backend_mut())
    }
}
