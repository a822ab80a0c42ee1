//! Command dispatch: maps parsed arguments onto the traversal algorithms.

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, MinAlgorithm, SumAlgorithm, Traversal};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::display::TreeDisplay;
use crate::fixture::{label_tree, numeric_tree};
use crate::{queue, recursive, stack};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Demo) | None => _demo(),
        Some(Commands::Traverse { order }) => _traverse(*order),
        Some(Commands::Search {
            target,
            numeric,
            recursive,
        }) => _search(target, *numeric, *recursive),
        Some(Commands::Sum { algorithm }) => _sum(*algorithm),
        Some(Commands::Min { algorithm }) => _min(*algorithm),
        Some(Commands::MaxPathSum) => _max_path_sum(),
        Some(Commands::Leaves) => _leaves(),
        Some(Commands::Paths) => _paths(),
        Some(Commands::Tree) => _tree(),
        Some(Commands::Completion { shell }) => _completion(*shell),
    }
}

/// Runs every algorithm once against the sample trees, one result per line.
#[instrument]
fn _demo() -> CliResult<()> {
    let labels = label_tree();
    let numbers = numeric_tree();

    output::header("Depth-first walk (stack, printing)");
    stack::print_depth_first(&labels);

    output::header("Collected traversals");
    output::detail(&format!("stack:     {:?}", stack::depth_first_values(&labels)));
    output::detail(&format!(
        "recursive: {:?}",
        recursive::depth_first_values(&labels)
    ));
    output::detail(&format!("breadth:   {:?}", queue::breadth_first_values(&labels)));

    output::header("Membership");
    output::detail(&format!("'B' breadth-first: {}", queue::includes(&labels, &'B')));
    output::detail(&format!(
        "'B' recursive:     {}",
        recursive::includes(&labels, &'B')
    ));

    output::header("Sum");
    output::detail(&format!("recursive:     {}", recursive::sum(&numbers)));
    output::detail(&format!("breadth-first: {}", queue::sum(&numbers)));

    output::header("Minimum");
    output::detail(&format!("stack:     {}", fmt_option(stack::min_value(&numbers))));
    output::detail(&format!("queue:     {}", fmt_option(queue::min_value(&numbers))));
    output::detail(&format!(
        "recursive: {}",
        fmt_option(recursive::min_value(&numbers))
    ));

    output::header("Max root-to-leaf path sum");
    output::detail(&fmt_option(recursive::max_path_sum(&numbers)));

    Ok(())
}

#[instrument]
fn _traverse(order: Traversal) -> CliResult<()> {
    let tree = label_tree();
    let values = match order {
        Traversal::Stack => stack::depth_first_values(&tree),
        Traversal::Recursive => recursive::depth_first_values(&tree),
        Traversal::BreadthFirst => queue::breadth_first_values(&tree),
    };
    debug!("order: {:?}, values: {:?}", order, values);
    for value in values {
        output::info(&value);
    }
    Ok(())
}

#[instrument]
fn _search(target: &str, numeric: bool, use_recursive: bool) -> CliResult<()> {
    let found = if numeric {
        let target: i64 = target
            .parse()
            .map_err(|_| CliError::InvalidArgs(format!("not a numeric value: {}", target)))?;
        let tree = numeric_tree();
        if use_recursive {
            recursive::includes(&tree, &target)
        } else {
            queue::includes(&tree, &target)
        }
    } else {
        let target = single_char(target)?;
        let tree = label_tree();
        if use_recursive {
            recursive::includes(&tree, &target)
        } else {
            queue::includes(&tree, &target)
        }
    };
    output::info(&found);
    Ok(())
}

#[instrument]
fn _sum(algorithm: SumAlgorithm) -> CliResult<()> {
    let tree = numeric_tree();
    let total = match algorithm {
        SumAlgorithm::Recursive => recursive::sum(&tree),
        SumAlgorithm::BreadthFirst => queue::sum(&tree),
    };
    output::info(&total);
    Ok(())
}

#[instrument]
fn _min(algorithm: MinAlgorithm) -> CliResult<()> {
    let tree = numeric_tree();
    let smallest = match algorithm {
        MinAlgorithm::Stack => stack::min_value(&tree),
        MinAlgorithm::Queue => queue::min_value(&tree),
        MinAlgorithm::Recursive => recursive::min_value(&tree),
    };
    output::info(&fmt_option(smallest));
    Ok(())
}

#[instrument]
fn _max_path_sum() -> CliResult<()> {
    let tree = numeric_tree();
    output::info(&fmt_option(recursive::max_path_sum(&tree)));
    Ok(())
}

#[instrument]
fn _leaves() -> CliResult<()> {
    let tree = label_tree();
    if let Some(root) = &tree {
        for leaf in root.leaf_values() {
            output::info(leaf);
        }
    }
    Ok(())
}

#[instrument]
fn _paths() -> CliResult<()> {
    let tree = label_tree();
    for path in recursive::root_to_leaf_paths(&tree) {
        let rendered: Vec<String> = path.iter().map(|v| v.to_string()).collect();
        output::info(&rendered.join(" -> "));
    }
    Ok(())
}

#[instrument]
fn _tree() -> CliResult<()> {
    print!("{}", label_tree().to_tree_string());
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}

fn single_char(target: &str) -> CliResult<char> {
    let mut chars = target.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(CliError::InvalidArgs(format!(
            "label target must be a single character: {}",
            target
        ))),
    }
}

fn fmt_option<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "none".to_string(),
    }
}
