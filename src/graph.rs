// Copyright 2025 Cowboy AI, LLC.

//! Compatibility graph
//!
//! Undirected weighted graph over plants. Nodes are identified by
//! `name_ru`; each unordered pair of distinct plants carries exactly one
//! edge whose weight comes from the genus pair's cohabitation entry
//! (-1 negative, 0 neutral or unrecorded, 1 positive). Node and edge
//! collections are insertion-ordered so downstream clustering is
//! reproducible.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cohabitation::CohabitationTable;
use crate::enumerations::LifeForm;
use crate::plant::Plant;

/// Attributes carried on a graph node for downstream consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeAttributes {
    /// Latin name of the plant
    pub name_latin: String,
    /// Genus of the plant, if known
    pub genus: Option<String>,
    /// Life form of the plant, if known
    pub life_form: Option<LifeForm>,
    /// Whether the species is invasive
    pub is_invasive: bool,
}

/// Undirected weighted graph over plant names
#[derive(Debug, Clone, Default)]
pub struct CompatibilityGraph {
    nodes: IndexMap<String, NodeAttributes>,
    /// Keyed by node index pair with the smaller index first
    edges: IndexMap<(usize, usize), i8>,
}

impl CompatibilityGraph {
    /// Build the graph over `plants` from genus cohabitation data
    ///
    /// Every unordered pair of distinct plants gets one edge; the weight
    /// defaults to neutral when either genus is unknown or the pair has no
    /// recorded relation.
    pub fn build(plants: &[Plant], cohabitation: &CohabitationTable) -> Self {
        let mut nodes = IndexMap::with_capacity(plants.len());
        for plant in plants {
            nodes.insert(
                plant.name_ru.clone(),
                NodeAttributes {
                    name_latin: plant.name_latin.clone(),
                    genus: plant.genus.clone(),
                    life_form: plant.life_form,
                    is_invasive: plant.is_invasive,
                },
            );
        }

        let mut edges = IndexMap::new();
        for (i, left) in plants.iter().enumerate() {
            for (j, right) in plants.iter().enumerate().skip(i + 1) {
                let weight = match (&left.genus, &right.genus) {
                    (Some(g1), Some(g2)) => cohabitation
                        .get(g1, g2)
                        .map(|c| c.to_weight())
                        .unwrap_or(0),
                    _ => 0,
                };
                edges.insert((i, j), weight);
            }
        }

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            "compatibility graph built"
        );
        Self { nodes, edges }
    }

    /// Restrict the graph to nodes whose names appear in `names`
    ///
    /// Node and edge order of the subgraph follows this graph's order.
    pub fn subgraph<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Self {
        let keep: Vec<&str> = names.into_iter().collect();
        let mut index_map = IndexMap::new();
        let mut nodes = IndexMap::new();
        for (old_index, (name, attributes)) in self.nodes.iter().enumerate() {
            if keep.contains(&name.as_str()) {
                index_map.insert(old_index, nodes.len());
                nodes.insert(name.clone(), attributes.clone());
            }
        }

        let mut edges = IndexMap::new();
        for (&(i, j), &weight) in &self.edges {
            if let (Some(&new_i), Some(&new_j)) = (index_map.get(&i), index_map.get(&j)) {
                edges.insert((new_i, new_j), weight);
            }
        }
        Self { nodes, edges }
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Node names in insertion order
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Name of the node at `index`
    pub fn node_name(&self, index: usize) -> Option<&str> {
        self.nodes.get_index(index).map(|(name, _)| name.as_str())
    }

    /// Attributes of a node by name
    pub fn node_attributes(&self, name: &str) -> Option<&NodeAttributes> {
        self.nodes.get(name)
    }

    /// Edge weight between two nodes by index, `None` for self-pairs and
    /// out-of-range indices
    pub fn weight(&self, a: usize, b: usize) -> Option<i8> {
        if a == b {
            return None;
        }
        let key = if a < b { (a, b) } else { (b, a) };
        self.edges.get(&key).copied()
    }

    /// Edge weight between two nodes by name
    pub fn weight_by_name(&self, a: &str, b: &str) -> Option<i8> {
        let a = self.nodes.get_index_of(a)?;
        let b = self.nodes.get_index_of(b)?;
        self.weight(a, b)
    }

    /// Iterate edges as (index, index, weight), smaller index first
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, i8)> + '_ {
        self.edges.iter().map(|(&(i, j), &w)| (i, j, w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cohabitation::GeneraCohabitation;
    use crate::enumerations::CohabitationType;

    fn plant(name: &str, genus: &str) -> Plant {
        Plant::new(name, format!("{name} latin")).with_genus(genus)
    }

    #[test]
    fn test_one_edge_per_unordered_pair() {
        let plants = vec![plant("a", "A"), plant("b", "B"), plant("c", "C")];
        let graph = CompatibilityGraph::build(&plants, &CohabitationTable::default());
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.weight(0, 1), graph.weight(1, 0));
        assert_eq!(graph.weight(1, 1), None);
    }

    #[test]
    fn test_weights_from_cohabitation_both_orderings() {
        let plants = vec![plant("oak", "Quercus"), plant("kalina", "Viburnum")];
        let table = CohabitationTable::from_entries(&[GeneraCohabitation::new(
            "Viburnum",
            "Quercus",
            CohabitationType::Negative,
        )]);
        let graph = CompatibilityGraph::build(&plants, &table);
        assert_eq!(graph.weight_by_name("oak", "kalina"), Some(-1));
    }

    #[test]
    fn test_missing_relation_defaults_to_neutral() {
        let plants = vec![plant("oak", "Quercus"), plant("apple", "Malus")];
        let graph = CompatibilityGraph::build(&plants, &CohabitationTable::default());
        assert_eq!(graph.weight_by_name("oak", "apple"), Some(0));
    }

    #[test]
    fn test_plant_without_genus_gets_neutral_edges() {
        let plants = vec![plant("oak", "Quercus"), Plant::new("orphan", "orphan")];
        let table = CohabitationTable::from_entries(&[GeneraCohabitation::new(
            "Quercus",
            "Quercus",
            CohabitationType::Positive,
        )]);
        let graph = CompatibilityGraph::build(&plants, &table);
        assert_eq!(graph.weight_by_name("oak", "orphan"), Some(0));
    }

    #[test]
    fn test_node_attributes_carried() {
        let plants = vec![plant("oak", "Quercus").with_life_form(LifeForm::Tree).invasive()];
        let graph = CompatibilityGraph::build(&plants, &CohabitationTable::default());
        let attributes = graph.node_attributes("oak").unwrap();
        assert_eq!(attributes.genus.as_deref(), Some("Quercus"));
        assert_eq!(attributes.life_form, Some(LifeForm::Tree));
        assert!(attributes.is_invasive);
        assert_eq!(attributes.name_latin, "oak latin");
    }

    #[test]
    fn test_subgraph_keeps_weights_and_order() {
        let plants = vec![plant("a", "A"), plant("b", "B"), plant("c", "C")];
        let table = CohabitationTable::from_entries(&[GeneraCohabitation::new(
            "A",
            "C",
            CohabitationType::Positive,
        )]);
        let graph = CompatibilityGraph::build(&plants, &table);
        let sub = graph.subgraph(["a", "c"]);
        assert_eq!(sub.node_count(), 2);
        assert_eq!(sub.edge_count(), 1);
        assert_eq!(sub.weight_by_name("a", "c"), Some(1));
        assert_eq!(sub.node_names().collect::<Vec<_>>(), vec!["a", "c"]);
    }
}
