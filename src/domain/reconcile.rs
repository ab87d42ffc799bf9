// Reconciliation of placeholder layout ids with saved widget ids
use super::layout::{Layout, LayoutEntry};
use super::widget::Widget;
use std::collections::HashSet;

/// Relabel a placeholder entry with the id of the widget saved at `index`.
///
/// Entries that already carry a durable id are returned as is. So is a
/// placeholder whose `index` has no saved widget; that case is logged.
pub fn reassign_layout_id(
    saved_widgets: &[Widget],
    entry: &LayoutEntry,
    index: usize,
) -> LayoutEntry {
    if !entry.is_placeholder() {
        return entry.clone();
    }

    match saved_widgets.get(index) {
        Some(widget) => relabel(widget, entry),
        None => {
            tracing::warn!(
                "No saved widget at position {} for layout entry {} ({} widgets saved)",
                index,
                entry.i,
                saved_widgets.len()
            );
            entry.clone()
        }
    }
}

/// Reconcile a whole layout against the widgets returned by a save.
///
/// A placeholder is matched to the widget that echoed it back as `temp_id`;
/// without such a widget the entry's position in the layout is used. A
/// widget claimed by `temp_id` is never handed out by position, so every
/// new id maps back to exactly one widget.
pub fn reconcile_layout(saved_widgets: &[Widget], layout: &[LayoutEntry]) -> Layout {
    let correlated_index = |entry: &LayoutEntry| {
        saved_widgets
            .iter()
            .position(|w| w.temp_id.as_deref() == Some(entry.i.as_str()))
    };

    let claimed: HashSet<usize> = layout
        .iter()
        .filter(|entry| entry.is_placeholder())
        .filter_map(correlated_index)
        .collect();

    layout
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            if !entry.is_placeholder() {
                return entry.clone();
            }

            if let Some(position) = correlated_index(entry) {
                return relabel(&saved_widgets[position], entry);
            }

            if claimed.contains(&index) {
                tracing::warn!(
                    "Saved widget at position {} belongs to another entry; leaving {} unchanged",
                    index,
                    entry.i
                );
                return entry.clone();
            }

            reassign_layout_id(saved_widgets, entry, index)
        })
        .collect()
}

fn relabel(widget: &Widget, entry: &LayoutEntry) -> LayoutEntry {
    LayoutEntry {
        i: format!("{}-{}", widget.id, entry.i),
        ..entry.clone()
    }
}
