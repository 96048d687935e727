//! Sidewalk CSV datasets.
//!
//! The first row is a header naming at least `start_code`, `end_code` and
//! `length`; other columns are ignored. Every row is a sidewalk segment between
//! two intersection codes and can be walked both ways.

use std::io::Read;

use log::debug;
use serde::Deserialize;

use crate::graph::{LabeledGraph, MutableGraph};
use crate::io::check_weight;
use crate::{Error, Result, Weight};

#[derive(Debug, Deserialize)]
struct SidewalkRecord {
    start_code: String,
    end_code: String,
    length: f64,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DbParser;

impl DbParser {
    pub fn new() -> Self {
        DbParser
    }

    pub fn parse<R: Read>(&self, reader: R) -> Result<LabeledGraph<Weight>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = reader.headers()?.clone();

        let mut graph: LabeledGraph<Weight> = LabeledGraph::new();
        let mut segments = 0usize;

        for row in reader.records() {
            let row = row?;
            let line = row.position().map_or(0, |pos| pos.line() as usize);
            let segment: SidewalkRecord = row.deserialize(Some(&headers))?;

            if segment.start_code.is_empty() || segment.end_code.is_empty() {
                return Err(Error::Parse {
                    line,
                    message: "empty intersection code".to_string(),
                });
            }
            let weight = check_weight(segment.length, line)?;

            let start = graph.get_or_create_node(&segment.start_code);
            let end = graph.get_or_create_node(&segment.end_code);
            graph.add_edge(start, end, weight);
            graph.add_edge(end, start, weight);
            segments += 1;
        }

        debug!("Sidewalk parser read {} segments", segments);
        Ok(graph)
    }
}
