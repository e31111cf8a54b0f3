use std::{collections::BTreeMap, error::Error};

use graphene::{core::marker::Undirected, core::weight::uf64, Graph};

// Junction id, longitude, latitude.
const NODES: &str = "\
1,14.4378,50.0755
2,16.3738,48.2082
3,17.1077,48.1486
4,11.5820,48.1351
5,11.0767,49.4521
6,11.2558,43.7696
7,12.4964,41.9028
";

// Road segments between junctions.
const EDGES: &str = "\
1,3
1,5
1,2
3,2
5,4
2,4
2,6
4,6
6,7
";

const EARTH_RADIUS_KM: f64 = 6371.0;

fn parse_nodes(input: &str) -> Result<BTreeMap<u32, (f64, f64)>, Box<dyn Error>> {
    let mut nodes = BTreeMap::new();

    for line in input.lines().filter(|line| !line.is_empty()) {
        let mut fields = line.split(',');
        let mut next = || fields.next().ok_or_else(|| format!("malformed node record: {line}"));

        let id = next()?.parse()?;
        let lon = next()?.parse()?;
        let lat = next()?.parse()?;

        nodes.insert(id, (lon, lat));
    }

    Ok(nodes)
}

fn parse_edges(input: &str, graph: &mut Graph<u32, Undirected>) -> Result<(), Box<dyn Error>> {
    for line in input.lines().filter(|line| !line.is_empty()) {
        let (tail, head) = line
            .split_once(',')
            .ok_or_else(|| format!("malformed edge record: {line}"))?;

        graph.add_edge(tail.parse()?, head.parse()?);
    }

    Ok(())
}

fn haversine((lon1, lat1): (f64, f64), (lon2, lat2): (f64, f64)) -> f64 {
    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());
    let dlat = lat2 - lat1;
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

fn main() -> Result<(), Box<dyn Error>> {
    let nodes = parse_nodes(NODES)?;

    let mut graph = Graph::new_undirected();
    parse_edges(EDGES, &mut graph)?;

    let km = |u: &u32, v: &u32| match (nodes.get(u), nodes.get(v)) {
        (Some(&u), Some(&v)) => uf64::new_unchecked(haversine(u, v)),
        _ => uf64::INFINITY,
    };

    let line_string = |path: &[u32]| {
        let coords = path
            .iter()
            .filter_map(|id| nodes.get(id))
            .map(|(lon, lat)| format!("{lon} {lat}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("LINESTRING ({coords})")
    };

    // Every route starting at junction 1.
    for path in graph
        .shortest_paths(&1, km)
        .into_iter()
        .filter(|path| path.len() > 1)
    {
        println!("{path:?}: {}", line_string(&path));
    }

    let route = graph.shortest_path(&1, &7, km);
    println!("route 1 -> 7: {}", line_string(&route));

    Ok(())
}
