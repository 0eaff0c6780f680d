//! Substitutes a composition's selected values into the template text.
//!
//! Resolution is fail-soft: a placeholder with no matching dimension, or a
//! dimension with no values yet, stays verbatim in the output and is
//! reported in a diagnostics list rather than raised. Partial templates are
//! a normal authoring state.
//!
//! A selected pack entry is itself a template: it is rendered in place
//! against the same dimension set, with a stack guard so mutually
//! referencing packs terminate instead of looping.

use std::ops::Range;

use serde::Serialize;

use crate::engine::view::LockView;
use crate::parser::{Segment, Template};
use crate::types::CompositionId;

/// Depth cap for nested pack rendering.
const MAX_DEPTH: usize = 16;

/// One substitution performed during resolution, for highlighting.
///
/// `range` indexes into the resolved text; the slice it spans equals
/// `value`. For a pack dimension the range covers the fully rendered entry,
/// nested substitutions included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Substitution {
    /// Dimension that was substituted.
    pub name: String,
    /// Text the placeholder was replaced with.
    pub value: String,
    /// Byte range of `value` within the resolved text.
    pub range: Range<usize>,
}

/// The outcome of resolving one composition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Resolved {
    /// Template text with every recognized placeholder substituted.
    pub text: String,
    /// One substitution per placeholder occurrence. A pack's nested
    /// substitutions precede the enclosing pack's own entry.
    pub substitutions: Vec<Substitution>,
    /// Names left verbatim: unknown, empty, or cyclic. Deduplicated.
    pub unresolved: Vec<String>,
}

/// Tracks in-progress pack renders for cycle detection, plus depth.
///
/// Same contract as a call stack: entering an already-active name, or
/// exceeding the depth cap, refuses the render and the placeholder stays
/// verbatim.
struct RenderStack {
    active: Vec<String>,
}

impl RenderStack {
    fn new() -> Self {
        Self { active: Vec::new() }
    }

    fn enter(&mut self, name: &str) -> bool {
        if self.active.len() >= MAX_DEPTH || self.active.iter().any(|n| n == name) {
            return false;
        }
        self.active.push(name.to_string());
        true
    }

    fn leave(&mut self) {
        self.active.pop();
    }
}

pub(crate) fn resolve_view(view: &LockView<'_>, id: CompositionId) -> Resolved {
    let selected = view.selected(id);
    let mut resolved = Resolved {
        text: String::new(),
        substitutions: Vec::new(),
        unresolved: Vec::new(),
    };
    let mut stack = RenderStack::new();

    render(
        view.space().template(),
        view,
        &selected,
        &mut resolved,
        &mut stack,
    );
    resolved
}

fn render(
    template: &Template,
    view: &LockView<'_>,
    selected: &[Option<&str>],
    resolved: &mut Resolved,
    stack: &mut RenderStack,
) {
    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => resolved.text.push_str(text),
            Segment::Placeholder { name } => {
                render_placeholder(name, view, selected, resolved, stack);
            }
        }
    }
}

fn render_placeholder(
    name: &str,
    view: &LockView<'_>,
    selected: &[Option<&str>],
    resolved: &mut Resolved,
    stack: &mut RenderStack,
) {
    let space = view.space();

    let Some(pos) = space.position(name) else {
        leave_verbatim(name, resolved);
        return;
    };
    let Some(value) = selected.get(pos).copied().flatten() else {
        // Defined, but no values yet mid-edit: no substitution.
        leave_verbatim(name, resolved);
        return;
    };

    let dim = &space.dimensions()[pos];
    if !dim.is_pack() {
        let start = resolved.text.len();
        resolved.text.push_str(value);
        resolved.substitutions.push(Substitution {
            name: name.to_string(),
            value: value.to_string(),
            range: start..resolved.text.len(),
        });
        return;
    }

    // Pack: the selected entry is a template of its own. Effective values
    // may be a locked, reordered subset, so map the entry text back to its
    // full index to find the pre-scanned entry template.
    let entry_template = dim
        .index_of(value)
        .and_then(|full_index| space.entry_templates(name).map(|t| &t[full_index]));
    let Some(entry_template) = entry_template else {
        leave_verbatim(name, resolved);
        return;
    };

    if !stack.enter(name) {
        leave_verbatim(name, resolved);
        return;
    }
    let start = resolved.text.len();
    render(entry_template, view, selected, resolved, stack);
    stack.leave();

    let rendered = resolved.text[start..].to_string();
    resolved.substitutions.push(Substitution {
        name: name.to_string(),
        value: rendered,
        range: start..resolved.text.len(),
    });
}

/// Keep the placeholder as literal text and note the name once.
fn leave_verbatim(name: &str, resolved: &mut Resolved) {
    resolved.text.push_str("__");
    resolved.text.push_str(name);
    resolved.text.push_str("__");
    if !resolved.unresolved.iter().any(|n| n == name) {
        resolved.unresolved.push(name.to_string());
    }
}
