use std::env;
use std::process;

use sssp_suite::benchmark::{compare, repeat};
use sssp_suite::graph::{dimacs, generators, AdjacencyList, Graph};
use sssp_suite::timing::{as_millis_f64, timed};
use sssp_suite::Algorithm;

struct Options {
    path: Option<String>,
    source: usize,
    repeat: usize,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        path: None,
        source: 1,
        repeat: 1,
    };
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--source" => {
                let value = args.next().ok_or("--source needs a value")?;
                options.source = value
                    .parse()
                    .map_err(|_| format!("invalid source '{}'", value))?;
            }
            "--repeat" => {
                let value = args.next().ok_or("--repeat needs a value")?;
                options.repeat = value
                    .parse()
                    .map_err(|_| format!("invalid repeat count '{}'", value))?;
            }
            "-h" | "--help" => {
                return Err("usage: benchmark [graph.gr] [--source N] [--repeat K]".to_string())
            }
            path => options.path = Some(path.to_string()),
        }
    }

    Ok(options)
}

// Runs every engine on one graph and prints a comparison table
fn report(label: &str, graph: &AdjacencyList<i64>, source: usize, repeats: usize) {
    println!(
        "\n{}: {} nodes, {} arcs, source {}",
        label,
        graph.node_count(),
        graph.arc_count(),
        source
    );

    let comparison = compare(graph, source, &Algorithm::ALL);
    println!(
        "{:<10} | {:>12} | {:>14} | {:>10}",
        "Algorithm", "Time (ms)", "Relaxations", "Reachable"
    );
    println!("{}", "-".repeat(56));
    for row in comparison.summary() {
        match row.error {
            None => println!(
                "{:<10} | {:>12.3} | {:>14} | {:>10}",
                row.algorithm.name(),
                row.elapsed.map(as_millis_f64).unwrap_or_default(),
                row.relaxations.unwrap_or_default(),
                row.reachable.unwrap_or_default()
            ),
            Some(error) => println!("{:<10} | failed: {}", row.algorithm.name(), error),
        }
    }
    println!(
        "All successful engines agree: {}",
        if comparison.agree() { "yes" } else { "NO" }
    );
    if let Some(fastest) = comparison.fastest() {
        println!("Fastest: {}", fastest);
    }

    if repeats > 1 {
        let sources: Vec<usize> = graph.nodes().take(repeats).collect();
        println!("\nMean over {} sources:", sources.len());
        for algorithm in Algorithm::ALL {
            match repeat(graph, algorithm, &sources) {
                Ok(run) => println!(
                    "{:<10} | {:>12.3} ms | {:>14.1} relaxations",
                    algorithm.name(),
                    as_millis_f64(run.mean_elapsed()),
                    run.mean_relaxations()
                ),
                Err(e) => println!("{:<10} | failed: {}", algorithm.name(), e),
            }
        }
    }
}

fn main() {
    env_logger::init();

    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(2);
        }
    };

    if let Some(path) = &options.path {
        let (graph, load_time) = timed(|| dimacs::load_file::<i64, _>(path));
        let graph = match graph {
            Ok(graph) => graph,
            Err(e) => {
                eprintln!("failed to load {}: {}", path, e);
                process::exit(1);
            }
        };
        println!("Loaded {} in {:.1} ms", path, as_millis_f64(load_time));
        report(path, &graph, options.source, options.repeat);
        return;
    }

    // Random graphs of growing size, four arcs per node on average
    let sizes = [1_000, 10_000, 100_000];
    for &size in &sizes {
        match generators::random_graph(size, size * 4, 100, Some(size as u64)) {
            Ok(graph) => report(
                &format!("random graph ({} nodes)", size),
                &graph,
                options.source,
                options.repeat,
            ),
            Err(e) => eprintln!("failed to generate graph of {} nodes: {}", size, e),
        }
    }
}
