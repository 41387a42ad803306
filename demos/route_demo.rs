use colored::Colorize;
use crosspath::ingest::parse_csv;
use crosspath::{RouteGraph, RouteOutcome, RouteSession};
use ordered_float::OrderedFloat;

/// Small intercity network in the upstream export's CSV schema
const NETWORK: &str = "\
Order,Destination,Distance
Madrid,Zaragoza,312
Zaragoza,Barcelona,296
Madrid,Valencia,357
Valencia,Barcelona,349
Barcelona,Girona,100
Madrid,Sevilla,534
Sevilla,Granada,252
Granada,Valencia,492
";

fn print_side(outcome: &RouteOutcome<OrderedFloat<f64>>) {
    match outcome {
        RouteOutcome::Found { distance, path } => {
            println!("  distance: {} km", distance.into_inner());
            println!("  path:     {}", path.join(" -> "));
        }
        RouteOutcome::Unreachable => println!("  {}", "no route exists".yellow()),
        RouteOutcome::InvalidInput => println!("  {}", "unknown city".red()),
    }
}

fn show_query(session: &RouteSession<OrderedFloat<f64>>, start: &str, end: &str) {
    println!();
    println!("{}", format!("=== {} -> {} ===", start, end).bold());

    let comparison = session.query(start, end);

    println!("{}", "Dijkstra".green().bold());
    match &comparison.dijkstra {
        Ok(outcome) => print_side(outcome),
        Err(e) => println!("  {}", format!("computation error: {}", e).red()),
    }

    println!("{}", "Floyd-Warshall".cyan().bold());
    match &comparison.floyd_warshall {
        Ok(outcome) => print_side(outcome),
        Err(e) => println!("  {}", format!("computation error: {}", e).red()),
    }
}

fn main() {
    let records = parse_csv(NETWORK).expect("demo network is well-formed");
    let graph: RouteGraph<OrderedFloat<f64>> = RouteGraph::from_records(&records);

    println!("{}", "Crosspath route demo".bold());
    println!("cities: {}", graph.node_labels().join(", "));

    let session = RouteSession::new(graph);

    show_query(&session, "Madrid", "Girona");
    show_query(&session, "Girona", "Madrid");
    show_query(&session, "Sevilla", "Barcelona");
    show_query(&session, "Madrid", "Bilbao");
}
