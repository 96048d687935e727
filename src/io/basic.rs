//! Edge-list text format.
//!
//! ```text
//! # comment
//! A B 1.0     directed edge A -> B with weight 1.0
//! C           node C without edges
//! ```

use std::io::BufRead;

use log::debug;

use crate::graph::{LabeledGraph, MutableGraph};
use crate::io::check_weight;
use crate::{Error, Result, Weight};

#[derive(Debug, Default, Clone, Copy)]
pub struct BasicParser;

impl BasicParser {
    pub fn new() -> Self {
        BasicParser
    }

    pub fn parse<R: BufRead>(&self, reader: R) -> Result<LabeledGraph<Weight>> {
        let mut graph: LabeledGraph<Weight> = LabeledGraph::new();

        for (i, line) in reader.lines().enumerate() {
            let line_no = i + 1;
            let line = line.map_err(|e| Error::Parse {
                line: line_no,
                message: e.to_string(),
            })?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [label] => {
                    graph.get_or_create_node(label);
                }
                [from, to, weight] => {
                    let weight: f64 = weight.parse().map_err(|_| Error::Parse {
                        line: line_no,
                        message: format!("invalid weight '{}'", weight),
                    })?;
                    let weight = check_weight(weight, line_no)?;

                    let from = graph.get_or_create_node(from);
                    let to = graph.get_or_create_node(to);
                    graph.add_edge(from, to, weight);
                }
                _ => {
                    return Err(Error::Parse {
                        line: line_no,
                        message: format!("expected 'FROM TO WEIGHT' or 'NODE', got '{}'", line),
                    });
                }
            }
        }

        debug!("Basic parser read {} nodes", graph.nodes().count());
        Ok(graph)
    }
}
