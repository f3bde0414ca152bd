use colored::Colorize;
use lazy_sssp::ShortestPathEngine;
use std::collections::HashMap;

fn create_sample_graph() -> HashMap<&'static str, HashMap<&'static str, f64>> {
    HashMap::from([
        ("A", HashMap::from([("B", 5.0), ("C", 10.0)])),
        ("B", HashMap::from([("A", 5.0), ("D", 3.0)])),
        ("C", HashMap::from([("A", 10.0), ("D", 2.0)])),
        ("D", HashMap::from([("B", 3.0), ("C", 2.0), ("E", 4.0)])),
        ("E", HashMap::from([("D", 4.0)])),
    ])
}

fn main() {
    env_logger::init();

    let graph = create_sample_graph();
    let engine = ShortestPathEngine::new();

    for start in ["A", "E"] {
        let (table, stats) = match engine.compute_with_stats(&graph, &start) {
            Ok(result) => result,
            Err(err) => {
                println!("\n{} {}", "error:".red().bold(), err);
                continue;
            }
        };

        println!("\n{}", format!("Shortest paths from vertex {}:", start).bold());
        for (vertex, distance) in table.sorted_by_distance() {
            let line = format!("  {} -> {}: {}", start, vertex, distance);
            if *vertex == start {
                println!("{}", line.green());
            } else {
                println!("{}", line);
            }
        }
        println!(
            "  {}",
            format!(
                "{} pushes, {} pops, {} stale",
                stats.pushes, stats.pops, stats.stale_pops
            )
            .dimmed()
        );
    }

    match engine.compute(&graph, &"Z") {
        Ok(_) => println!("{}", "unexpected: Z resolved".red()),
        Err(err) => println!("\n{} {}", "error:".red().bold(), err),
    }
}
