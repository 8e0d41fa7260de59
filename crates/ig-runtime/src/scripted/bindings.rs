use std::rc::Rc;

use ig_core::{BeginOp, EndOp, ImGuardError, PairingTable};
use rhai::{Dynamic, Engine, EvalAltResult, INT};

use super::{SharedContext, SCOPE_DEPTH_FN};
use crate::backend::UiBackend;
use crate::helpers::rhai_bridge::{dynamic_args_to_uivalues, script_error, uivalue_to_dynamic};

type BindingResult<T> = Result<T, Box<EvalAltResult>>;

/// Frame calls the driver owns. Scripts never see them.
pub(super) const FRAME_FNS: [&str; 3] = ["NewFrame", "EndFrame", "Render"];

pub(super) fn check_widget_names(widgets: &[String]) -> Result<(), ImGuardError> {
    let table = PairingTable::global();
    for widget in widgets {
        let reserved = widget == SCOPE_DEPTH_FN
            || FRAME_FNS.contains(&widget.as_str())
            || table.op_names().any(|name| name == widget);
        if reserved {
            return Err(ImGuardError::new(
                "RUNTIME_WIDGET_RESERVED",
                format!(
                    "Backend widget \"{}\" conflicts with a reserved scope binding.",
                    widget
                ),
            ));
        }
    }
    Ok(())
}

pub(super) fn register_all<B: UiBackend + 'static>(
    engine: &mut Engine,
    context: &SharedContext<B>,
    widgets: &[String],
) {
    let table = PairingTable::global();
    for pairing in table.begins() {
        register_begin(engine, context, pairing.op);
    }
    for pairing in table.ends() {
        register_end(engine, context, pairing.op, pairing.counted);
    }
    for widget in widgets {
        register_widget(engine, context, widget);
    }

    let depth_context = Rc::clone(context);
    engine.register_fn(SCOPE_DEPTH_FN, move || -> INT {
        depth_context.borrow().guard().depth() as INT
    });
}

fn register_begin<B: UiBackend + 'static>(
    engine: &mut Engine,
    context: &SharedContext<B>,
    op: BeginOp,
) {
    let name = op.name();

    let ctx = Rc::clone(context);
    engine.register_fn(name, move || begin_binding(&ctx, op, Vec::new()));
    let ctx = Rc::clone(context);
    engine.register_fn(name, move |a: Dynamic| begin_binding(&ctx, op, vec![a]));
    let ctx = Rc::clone(context);
    engine.register_fn(name, move |a: Dynamic, b: Dynamic| {
        begin_binding(&ctx, op, vec![a, b])
    });
    let ctx = Rc::clone(context);
    engine.register_fn(name, move |a: Dynamic, b: Dynamic, c: Dynamic| {
        begin_binding(&ctx, op, vec![a, b, c])
    });
    let ctx = Rc::clone(context);
    engine.register_fn(
        name,
        move |a: Dynamic, b: Dynamic, c: Dynamic, d: Dynamic| {
            begin_binding(&ctx, op, vec![a, b, c, d])
        },
    );
}

fn register_end<B: UiBackend + 'static>(
    engine: &mut Engine,
    context: &SharedContext<B>,
    op: EndOp,
    counted: bool,
) {
    let ctx = Rc::clone(context);
    engine.register_fn(op.name(), move || end_binding(&ctx, op, 1));
    if counted {
        let ctx = Rc::clone(context);
        engine.register_fn(op.name(), move |count: INT| {
            if count < 0 {
                return Err(script_error(ImGuardError::new(
                    "RUNTIME_END_COUNT",
                    format!("{}(count) expects a non-negative count.", op),
                )));
            }
            end_binding(&ctx, op, count as usize)
        });
    }
}

fn register_widget<B: UiBackend + 'static>(
    engine: &mut Engine,
    context: &SharedContext<B>,
    widget: &str,
) {
    let name: Rc<str> = Rc::from(widget);

    let (ctx, id) = (Rc::clone(context), Rc::clone(&name));
    engine.register_fn(widget, move || widget_binding(&ctx, &id, Vec::new()));
    let (ctx, id) = (Rc::clone(context), Rc::clone(&name));
    engine.register_fn(widget, move |a: Dynamic| widget_binding(&ctx, &id, vec![a]));
    let (ctx, id) = (Rc::clone(context), Rc::clone(&name));
    engine.register_fn(widget, move |a: Dynamic, b: Dynamic| {
        widget_binding(&ctx, &id, vec![a, b])
    });
    let (ctx, id) = (Rc::clone(context), Rc::clone(&name));
    engine.register_fn(widget, move |a: Dynamic, b: Dynamic, c: Dynamic| {
        widget_binding(&ctx, &id, vec![a, b, c])
    });
    let (ctx, id) = (Rc::clone(context), Rc::clone(&name));
    engine.register_fn(
        widget,
        move |a: Dynamic, b: Dynamic, c: Dynamic, d: Dynamic| {
            widget_binding(&ctx, &id, vec![a, b, c, d])
        },
    );
}

fn begin_binding<B: UiBackend>(
    context: &SharedContext<B>,
    op: BeginOp,
    args: Vec<Dynamic>,
) -> BindingResult<bool> {
    let args = dynamic_args_to_uivalues(args).map_err(script_error)?;
    context
        .borrow_mut()
        .begin(op, &args)
        .map_err(script_error)
}

fn end_binding<B: UiBackend>(
    context: &SharedContext<B>,
    op: EndOp,
    count: usize,
) -> BindingResult<()> {
    let mut context = context.borrow_mut();
    let result = if count == 1 {
        context.end(op)
    } else {
        context.end_many(op, count)
    };
    result.map_err(script_error)
}

fn widget_binding<B: UiBackend>(
    context: &SharedContext<B>,
    widget: &str,
    args: Vec<Dynamic>,
) -> BindingResult<Dynamic> {
    let args = dynamic_args_to_uivalues(args).map_err(script_error)?;
    let value = context
        .borrow_mut()
        .widget(widget, &args)
        .map_err(script_error)?;
    Ok(uivalue_to_dynamic(&value))
}
