// Copyright 2025 Cowboy AI, LLC.

//! Community partitioner
//!
//! Clusters the compatibility graph into disjoint groups of mutually
//! non-antagonistic plants via greedy (Clauset-Newman-Moore style)
//! modularity maximization. The partitioner is behind a trait so that an
//! alternative clustering strategy can be substituted without touching the
//! filter or the assembler.

use std::collections::HashMap;

use tracing::debug;

use crate::graph::CompatibilityGraph;

/// Strategy for partitioning a compatibility graph into communities
///
/// Implementations must return disjoint communities covering every node of
/// the graph and must be deterministic for a fixed graph.
pub trait Partitioner {
    /// Partition the graph into communities of node names
    fn partition(&self, graph: &CompatibilityGraph) -> Vec<Vec<String>>;
}

/// Greedy agglomerative modularity maximization
///
/// Stored edge weights in {-1, 0, 1} are shifted to a positive clustering
/// scale {1, 2, 3}, so a fully neutral complete graph still collapses into
/// a single community while negative relations push nodes apart.
///
/// Determinism: candidate merges are scanned in lexicographic order of the
/// communities' smallest member names and a strictly greater modularity
/// gain is required to displace the current best, so equal-gain ties always
/// resolve to the lexicographically first pair. Output communities are
/// sorted by smallest member name, members ascending.
#[derive(Debug, Clone)]
pub struct GreedyModularity {
    /// Resolution parameter of the modularity null model
    pub resolution: f64,
}

impl Default for GreedyModularity {
    fn default() -> Self {
        Self { resolution: 1.0 }
    }
}

impl GreedyModularity {
    /// Create a partitioner with the given resolution
    pub fn with_resolution(resolution: f64) -> Self {
        Self { resolution }
    }
}

/// A community being agglomerated
struct Community {
    members: Vec<usize>,
    /// Sum of clustering weights of member-incident edges
    degree: f64,
    /// Smallest member name, the deterministic scan key
    min_name: String,
}

impl Partitioner for GreedyModularity {
    fn partition(&self, graph: &CompatibilityGraph) -> Vec<Vec<String>> {
        let n = graph.node_count();
        if n == 0 {
            return Vec::new();
        }
        if n == 1 {
            return vec![vec![graph.node_name(0).unwrap_or_default().to_string()]];
        }

        // shifted clustering weights; absent edges contribute nothing
        let mut total_weight = 0.0_f64;
        let mut degrees = vec![0.0_f64; n];
        // inter-community weights, keyed by community slot pair (min, max)
        let mut between: HashMap<(usize, usize), f64> = HashMap::new();
        for (i, j, stored) in graph.edges() {
            let weight = f64::from(stored) + 2.0;
            total_weight += weight;
            degrees[i] += weight;
            degrees[j] += weight;
            between.insert((i.min(j), i.max(j)), weight);
        }

        let mut communities: Vec<Option<Community>> = (0..n)
            .map(|i| {
                Some(Community {
                    members: vec![i],
                    degree: degrees[i],
                    min_name: graph.node_name(i).unwrap_or_default().to_string(),
                })
            })
            .collect();

        if total_weight > 0.0 {
            loop {
                let Some((a, b, gain)) =
                    self.best_merge(&communities, &between, total_weight)
                else {
                    break;
                };
                if gain <= 0.0 {
                    break;
                }
                merge_communities(&mut communities, &mut between, a, b);
            }
        }

        let mut result: Vec<Vec<String>> = communities
            .into_iter()
            .flatten()
            .map(|community| {
                let mut names: Vec<String> = community
                    .members
                    .iter()
                    .filter_map(|&i| graph.node_name(i).map(str::to_string))
                    .collect();
                names.sort();
                names
            })
            .collect();
        result.sort_by(|a, b| a[0].cmp(&b[0]));

        debug!(
            communities = result.len(),
            sizes = ?result.iter().map(Vec::len).collect::<Vec<_>>(),
            "graph partitioned"
        );
        result
    }
}

impl GreedyModularity {
    /// Find the merge with the highest modularity gain
    ///
    /// Slots are scanned in lexicographic order of community min-names so
    /// that equal gains resolve deterministically.
    fn best_merge(
        &self,
        communities: &[Option<Community>],
        between: &HashMap<(usize, usize), f64>,
        total_weight: f64,
    ) -> Option<(usize, usize, f64)> {
        let mut order: Vec<usize> = communities
            .iter()
            .enumerate()
            .filter_map(|(slot, c)| c.as_ref().map(|_| slot))
            .collect();
        order.sort_by(|&a, &b| {
            let a_name = &communities[a].as_ref().unwrap().min_name;
            let b_name = &communities[b].as_ref().unwrap().min_name;
            a_name.cmp(b_name)
        });

        let mut best: Option<(usize, usize, f64)> = None;
        for (pos, &a) in order.iter().enumerate() {
            for &b in &order[pos + 1..] {
                let key = (a.min(b), a.max(b));
                // communities with no connecting edge can only lose modularity
                let Some(&e_ab) = between.get(&key) else {
                    continue;
                };
                let deg_a = communities[a].as_ref().unwrap().degree;
                let deg_b = communities[b].as_ref().unwrap().degree;
                let gain = e_ab / total_weight
                    - self.resolution * deg_a * deg_b / (2.0 * total_weight * total_weight);
                if best.map(|(_, _, g)| gain > g).unwrap_or(true) {
                    best = Some((a, b, gain));
                }
            }
        }
        best
    }
}

/// Merge community `b` into community `a`, folding its inter-community
/// weights into `a`'s
fn merge_communities(
    communities: &mut [Option<Community>],
    between: &mut HashMap<(usize, usize), f64>,
    a: usize,
    b: usize,
) {
    let removed = communities[b].take().expect("community b must be live");
    between.remove(&(a.min(b), a.max(b)));

    let transfers: Vec<(usize, f64)> = between
        .iter()
        .filter_map(|(&(x, y), &w)| {
            if x == b {
                Some((y, w))
            } else if y == b {
                Some((x, w))
            } else {
                None
            }
        })
        .collect();
    for (other, weight) in transfers {
        between.remove(&(other.min(b), other.max(b)));
        *between.entry((other.min(a), other.max(a))).or_insert(0.0) += weight;
    }

    let target = communities[a].as_mut().expect("community a must be live");
    target.members.extend(removed.members);
    target.degree += removed.degree;
    if removed.min_name < target.min_name {
        target.min_name = removed.min_name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cohabitation::{CohabitationTable, GeneraCohabitation};
    use crate::enumerations::CohabitationType;
    use crate::plant::Plant;

    fn plant(name: &str, genus: &str) -> Plant {
        Plant::new(name, name).with_genus(genus)
    }

    fn partition(plants: &[Plant], entries: &[GeneraCohabitation]) -> Vec<Vec<String>> {
        let table = CohabitationTable::from_entries(entries);
        let graph = CompatibilityGraph::build(plants, &table);
        GreedyModularity::default().partition(&graph)
    }

    #[test]
    fn test_empty_graph() {
        let communities = partition(&[], &[]);
        assert!(communities.is_empty());
    }

    #[test]
    fn test_single_node() {
        let communities = partition(&[plant("only", "Only")], &[]);
        assert_eq!(communities, vec![vec!["only".to_string()]]);
    }

    #[test]
    fn test_neutral_complete_graph_collapses_to_one_community() {
        let plants: Vec<Plant> = (0..6)
            .map(|i| plant(&format!("plant_{i}"), &format!("Genus{i}")))
            .collect();
        let communities = partition(&plants, &[]);
        assert_eq!(communities.len(), 1);
        assert_eq!(communities[0].len(), 6);
    }

    #[test]
    fn test_negative_relation_splits_groups() {
        let mut plants = Vec::new();
        for i in 0..3 {
            plants.push(plant(&format!("oak_{i}"), "Quercus"));
            plants.push(plant(&format!("kalina_{i}"), "Viburnum"));
        }
        let communities = partition(
            &plants,
            &[GeneraCohabitation::new(
                "Quercus",
                "Viburnum",
                CohabitationType::Negative,
            )],
        );
        assert!(communities.len() >= 2);
        for community in &communities {
            let oaks = community.iter().filter(|n| n.starts_with("oak")).count();
            assert!(
                oaks == 0 || oaks == community.len(),
                "antagonistic genera must not share a community: {community:?}"
            );
        }
    }

    #[test]
    fn test_deterministic_across_runs() {
        let plants: Vec<Plant> = (0..8)
            .map(|i| plant(&format!("p{i}"), &format!("G{}", i % 4)))
            .collect();
        let entries = vec![
            GeneraCohabitation::new("G0", "G1", CohabitationType::Positive),
            GeneraCohabitation::new("G2", "G3", CohabitationType::Positive),
            GeneraCohabitation::new("G0", "G2", CohabitationType::Negative),
            GeneraCohabitation::new("G1", "G3", CohabitationType::Negative),
        ];
        let first = partition(&plants, &entries);
        for _ in 0..5 {
            assert_eq!(partition(&plants, &entries), first);
        }
    }

    #[test]
    fn test_partition_covers_all_nodes_disjointly() {
        let plants: Vec<Plant> = (0..10)
            .map(|i| plant(&format!("p{i}"), &format!("G{}", i % 3)))
            .collect();
        let entries = vec![GeneraCohabitation::new(
            "G0",
            "G1",
            CohabitationType::Negative,
        )];
        let communities = partition(&plants, &entries);
        let mut seen: Vec<&String> = communities.iter().flatten().collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn test_isolated_nodes_stay_singletons() {
        // a graph with no edges at all: each node is its own community
        let graph = CompatibilityGraph::build(&[plant("a", "A")], &CohabitationTable::default());
        let sub = graph.subgraph(["a"]);
        let communities = GreedyModularity::default().partition(&sub);
        assert_eq!(communities, vec![vec!["a".to_string()]]);
    }
}
