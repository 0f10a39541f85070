use crate::core::{
    colors::get_lane_colored,
    command_init::CommandContext,
    error::Result,
    graph::{layout_graph, CommitGraph, GraphNode},
    output::write_hint,
};
use colored::*;
use std::io::Write;

/// Draw the commit graph newest first, one row per commit.
///
/// With `filter`, only matching commits are printed; lanes keep their columns.
pub fn execute_graph(
    context: &CommandContext,
    filter: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let graph = layout_graph(&context.state, &context.config.default_branch);
    if graph.nodes.is_empty() {
        write_hint(out, "No commits yet")?;
        return Ok(());
    }

    let nodes = graph.filter(filter.unwrap_or_default());
    if nodes.is_empty() {
        write_hint(out, "No commits match the filter")?;
        return Ok(());
    }

    for node in nodes {
        writeln!(out, "{}", render_row(&graph, node))?;
    }
    Ok(())
}

/// `* | a1b2c3d (HEAD -> main, feature) message`
pub fn render_row(graph: &CommitGraph, node: &GraphNode) -> String {
    let columns = graph.nodes.iter().map(|n| n.lane).max().unwrap_or(0) + 1;

    let lanes: Vec<String> = (0..columns)
        .map(|lane| {
            if lane == node.lane {
                let mark = if node.is_head { "@" } else { "*" };
                get_lane_colored(node.color, mark).to_string()
            } else if passes_through(graph, lane, node.row) {
                get_lane_colored(lane_color_of(graph, lane), "|").to_string()
            } else {
                " ".to_string()
            }
        })
        .collect();

    let mut row = format!("{} {}", lanes.join(" "), node.id.yellow());

    let labels: Vec<String> = graph
        .labels_at(&node.id)
        .into_iter()
        .map(|label| {
            let text = if label.is_current {
                format!("HEAD -> {}", label.name)
            } else {
                label.name.clone()
            };
            get_lane_colored(label.color, &text).to_string()
        })
        .collect();
    if !labels.is_empty() {
        row.push_str(&format!(" ({})", labels.join(", ")));
    }

    row.push(' ');
    row.push_str(&node.message);
    row
}

/// Whether an edge runs down `lane` across `row` without a commit on it.
fn passes_through(graph: &CommitGraph, lane: usize, row: usize) -> bool {
    graph
        .edges
        .iter()
        .any(|e| e.to_lane == lane && e.from_row < row && row < e.to_row)
}

fn lane_color_of(graph: &CommitGraph, lane: usize) -> &'static str {
    graph
        .lanes
        .get(lane)
        .map(|l| l.color)
        .unwrap_or(crate::core::graph::lane_color(lane))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        engine::{create_branch, create_commit, switch_branch},
        snapshot::Snapshot,
        state::{RepoState, DEFAULT_BRANCH},
    };

    fn state_with_feature() -> RepoState {
        let base = RepoState::default();
        let state = create_commit(&base, "root", Snapshot::new()).resolve(&base);
        let state = create_branch(&state, "feature").resolve(&state);
        let state = switch_branch(&state, "feature").resolve(&state);
        create_commit(&state, "work", Snapshot::new()).resolve(&state)
    }

    #[test]
    fn test_row_shows_id_labels_and_message() {
        colored::control::set_override(false);
        let state = state_with_feature();
        let graph = layout_graph(&state, DEFAULT_BRANCH);

        let top = &graph.nodes[0];
        let row = render_row(&graph, top);
        assert!(row.starts_with('@'));
        assert!(row.contains(&top.id));
        assert!(row.contains("(HEAD -> feature)"));
        assert!(row.ends_with(" work"));

        let root = &graph.nodes[1];
        let row = render_row(&graph, root);
        assert!(row.contains("main"));
        assert!(row.ends_with(" root"));
    }
}
