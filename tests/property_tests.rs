use algo_demo::graph::{dijkstra, prim_mst, WeightedGraph};
use algo_demo::huffman::{build_code_tree, build_frequency_table, encode, generate_code_table};
use algo_demo::sorting::quicksort;
use proptest::prelude::*;

fn node_name(index: usize) -> String {
    format!("n{}", index)
}

// Connected undirected graph: a path through all nodes plus random extra
// edges on top.
fn connected_graph() -> impl Strategy<Value = WeightedGraph> {
    (2usize..7, prop::collection::vec((0usize..7, 0usize..7, 0.0f64..10.0), 0..10)).prop_map(
        |(node_count, extra_edges)| {
            let mut graph = WeightedGraph::new();
            for index in 1..node_count {
                graph.add_undirected_edge(
                    &node_name(index - 1),
                    &node_name(index),
                    index as f64,
                );
            }
            for (from, to, weight) in extra_edges {
                let from = from % node_count;
                let to = to % node_count;
                if from != to {
                    graph.add_undirected_edge(&node_name(from), &node_name(to), weight);
                }
            }
            graph
        },
    )
}

proptest! {
    #[test]
    fn huffman_round_trip_restores_the_input(text in ".{1,64}") {
        let frequencies = build_frequency_table(&text);
        let root = build_code_tree(&frequencies).unwrap();
        let code_table = generate_code_table(&root);
        let encoded = encode(&text, &code_table).unwrap();
        let decoded = root.decode(&encoded).unwrap();
        prop_assert_eq!(decoded, text);
    }

    #[test]
    fn huffman_code_table_is_prefix_free(text in ".{2,64}") {
        let frequencies = build_frequency_table(&text);
        prop_assume!(frequencies.len() >= 2);
        let root = build_code_tree(&frequencies).unwrap();
        let code_table = generate_code_table(&root);
        for (symbol, code) in code_table.iter() {
            for (other_symbol, other_code) in code_table.iter() {
                if symbol != other_symbol {
                    prop_assert!(!other_code.starts_with(code.as_str()));
                }
            }
        }
    }

    #[test]
    fn quicksort_output_is_sorted_ascending(
        values in prop::collection::vec(-1e9f64..1e9, 0..64),
    ) {
        let sorted = quicksort(&values);
        prop_assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn quicksort_output_is_a_permutation_of_the_input(
        values in prop::collection::vec(-1e9f64..1e9, 0..64),
    ) {
        let sorted = quicksort(&values);
        let mut expected = values.clone();
        expected.sort_by(f64::total_cmp);
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn dijkstra_source_distance_is_zero_and_all_nodes_reachable(
        graph in connected_graph(),
    ) {
        let source = graph.nodes().next().unwrap().clone();
        let distances = dijkstra(&graph, &source).unwrap();
        prop_assert_eq!(distances[&source], 0.0);
        prop_assert!(distances.values().all(|distance| distance.is_finite()));
    }

    #[test]
    fn prim_spans_a_connected_graph_completely(graph in connected_graph()) {
        let tree = prim_mst(&graph).unwrap();
        prop_assert_eq!(tree.len(), graph.node_count() - 1);
        let mut covered: Vec<&str> = tree
            .iter()
            .flat_map(|edge| [edge.from.as_str(), edge.to.as_str()])
            .collect();
        covered.sort();
        covered.dedup();
        prop_assert_eq!(covered.len(), graph.node_count());
    }
}
