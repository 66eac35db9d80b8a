//! GML graph loading.
//!
//! Supports the subset of GML needed for weighted networks:
//!
//! ```text
//! graph [
//!     node [ id 1 label "a" ]
//!     node [ id 2 ]
//!     edge [ source 1 target 2 weight 3.5 ]
//! ]
//! ```
//!
//! Unknown attributes, including nested lists such as `graphics [ .. ]`,
//! are skipped. Edges without a `weight` get weight 0. Node ids are signed
//! 64-bit integers.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::graph::{VertexId, WeightedGraph};

use super::LoadError;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Key(String),
    Value(String),
    Text(String),
    Open,
    Close,
    Eof,
}

struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
}

impl Lexer {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        if self.peek() == Some('\n') {
            self.line += 1;
        }
        self.position += 1;
    }

    fn skip_blank(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else if ch == '#' {
                while !matches!(self.peek(), None | Some('\n')) {
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_text(&mut self) -> Result<String, String> {
        let start = self.line;
        self.advance();
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            self.advance();
            match ch {
                '"' => return Ok(text),
                '\\' => {
                    if let Some(escaped) = self.peek() {
                        self.advance();
                        text.push(match escaped {
                            'n' => '\n',
                            't' => '\t',
                            other => other,
                        });
                    }
                }
                _ => text.push(ch),
            }
        }
        Err(format!("Unterminated string starting on line {}", start))
    }

    fn read_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || matches!(ch, '_' | '.' | '-' | '+') {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        word
    }

    fn next_token(&mut self) -> Result<Token, String> {
        self.skip_blank();
        match self.peek() {
            None => Ok(Token::Eof),
            Some('[') => {
                self.advance();
                Ok(Token::Open)
            }
            Some(']') => {
                self.advance();
                Ok(Token::Close)
            }
            Some('"') => self.read_text().map(Token::Text),
            Some(ch) if ch.is_alphabetic() || ch == '_' => Ok(Token::Key(self.read_word())),
            Some(ch) if ch.is_numeric() || matches!(ch, '-' | '+' | '.') => {
                Ok(Token::Value(self.read_word()))
            }
            Some(ch) => Err(format!("Unexpected character '{}'", ch)),
        }
    }
}

struct Parser<'a> {
    lexer: Lexer,
    current: Token,
    line: usize,
    origin: &'a str,
}

impl<'a> Parser<'a> {
    fn new(input: &str, origin: &'a str) -> Result<Self, LoadError> {
        let mut parser = Self {
            lexer: Lexer::new(input),
            current: Token::Eof,
            line: 1,
            origin,
        };
        parser.advance()?;
        Ok(parser)
    }

    fn error(&self, message: impl Into<String>) -> LoadError {
        LoadError::parse(self.origin, self.line, message)
    }

    fn advance(&mut self) -> Result<(), LoadError> {
        self.lexer.skip_blank();
        self.line = self.lexer.line;
        self.current = self
            .lexer
            .next_token()
            .map_err(|message| LoadError::parse(self.origin, self.line, message))?;
        Ok(())
    }

    fn expect(&mut self, expected: Token) -> Result<(), LoadError> {
        if self.current != expected {
            return Err(self.error(format!("Expected {:?}, found {:?}", expected, self.current)));
        }
        self.advance()
    }

    fn take_key(&mut self) -> Result<String, LoadError> {
        match &self.current {
            Token::Key(key) => {
                let key = key.clone();
                self.advance()?;
                Ok(key)
            }
            other => Err(self.error(format!("Expected attribute name, found {:?}", other))),
        }
    }

    /// Consume a scalar value or a whole nested list. Lists yield `None`.
    fn take_value(&mut self) -> Result<Option<String>, LoadError> {
        match self.current.clone() {
            Token::Key(v) | Token::Value(v) | Token::Text(v) => {
                self.advance()?;
                Ok(Some(v))
            }
            Token::Open => {
                self.skip_list()?;
                Ok(None)
            }
            other => Err(self.error(format!("Expected value, found {:?}", other))),
        }
    }

    fn skip_list(&mut self) -> Result<(), LoadError> {
        self.expect(Token::Open)?;
        while self.current != Token::Close {
            self.take_key()?;
            self.take_value()?;
        }
        self.expect(Token::Close)
    }

    fn parse_id(&self, key: &str, value: Option<String>) -> Result<VertexId, LoadError> {
        let value = value.ok_or_else(|| self.error(format!("'{}' must be a scalar", key)))?;
        value
            .parse::<VertexId>()
            .map_err(|_| self.error(format!("Invalid {} '{}'", key, value)))
    }

    fn parse_node(&mut self) -> Result<(VertexId, usize), LoadError> {
        let line = self.line;
        self.expect(Token::Open)?;
        let mut id = None;
        while self.current != Token::Close {
            let key = self.take_key()?;
            let value = self.take_value()?;
            if key == "id" {
                id = Some(self.parse_id("node id", value)?);
            }
        }
        self.expect(Token::Close)?;
        let id = id.ok_or_else(|| LoadError::parse(self.origin, line, "Node missing required 'id'"))?;
        Ok((id, line))
    }

    fn parse_edge(&mut self) -> Result<(VertexId, VertexId, f64, usize), LoadError> {
        let line = self.line;
        self.expect(Token::Open)?;
        let mut source = None;
        let mut target = None;
        let mut weight = 0.0;
        while self.current != Token::Close {
            let key = self.take_key()?;
            let value = self.take_value()?;
            match key.as_str() {
                "source" => source = Some(self.parse_id("edge source", value)?),
                "target" => target = Some(self.parse_id("edge target", value)?),
                "weight" => {
                    let raw = value.ok_or_else(|| self.error("'weight' must be a scalar"))?;
                    weight = raw
                        .parse::<f64>()
                        .map_err(|_| self.error(format!("Invalid edge weight '{}'", raw)))?;
                }
                _ => {}
            }
        }
        self.expect(Token::Close)?;
        let source =
            source.ok_or_else(|| LoadError::parse(self.origin, line, "Edge missing required 'source'"))?;
        let target =
            target.ok_or_else(|| LoadError::parse(self.origin, line, "Edge missing required 'target'"))?;
        Ok((source, target, weight, line))
    }

    fn parse_graph(&mut self) -> Result<WeightedGraph, LoadError> {
        if self.take_key()? != "graph" {
            return Err(self.error("Document must start with 'graph'"));
        }
        self.expect(Token::Open)?;

        let mut graph = WeightedGraph::new();
        let mut edges = Vec::new();
        while self.current != Token::Close {
            let key = self.take_key()?;
            match key.as_str() {
                "node" => {
                    let (id, line) = self.parse_node()?;
                    graph
                        .add_vertex(id)
                        .map_err(|source| LoadError::graph(self.origin, line, source))?;
                }
                "edge" => edges.push(self.parse_edge()?),
                _ => {
                    let value = self.take_value()?;
                    if key == "directed" && value.as_deref() == Some("1") {
                        warn!("{}: directed graph will be analyzed as undirected", self.origin);
                    }
                }
            }
        }
        self.expect(Token::Close)?;

        // Nodes may follow the edges that reference them.
        for (source, target, weight, line) in edges {
            let added = graph
                .add_edge(source, target, weight)
                .map_err(|error| LoadError::graph(self.origin, line, error))?;
            if !added {
                debug!("{}:{}: duplicate edge {} - {} ignored", self.origin, line, source, target);
            }
        }
        Ok(graph)
    }
}

/// Parse a GML document held in memory.
pub fn parse_gml_graph(content: &str) -> Result<WeightedGraph, LoadError> {
    Parser::new(content, "<gml>")?.parse_graph()
}

/// Load a graph from a GML file.
pub fn load_gml_graph(path: &Path) -> Result<WeightedGraph, LoadError> {
    let origin = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: origin.clone(),
        source,
    })?;
    Parser::new(&content, &origin)?.parse_graph()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_simple_gml() {
        let graph = parse_gml_graph(
            r#"
            graph [
                node [ id 1 label "Node1" ]
                node [ id 2 ]
                edge [ source 1 target 2 weight 3.5 ]
            ]
        "#,
        )
        .unwrap();
        assert_eq!(graph.vertices(), vec![1, 2]);
        assert_eq!(graph.edge_weight(&2, &1).unwrap(), 3.5);
    }

    #[test]
    fn test_unknown_attributes_and_nested_lists_are_skipped() {
        let graph = parse_gml_graph(
            r#"
            # exported topology
            graph [
                directed 0
                node [ id 0 AS "65001" graphics [ x 1.0 y -2 ] ]
                node [ id 1 ]
                edge [ source 0 target 1 latency "5ms" ]
            ]
        "#,
        )
        .unwrap();
        assert_eq!(graph.vertices_count(), 2);
        assert_eq!(graph.edge_weight(&0, &1).unwrap(), 0.0);
    }

    #[test]
    fn test_edges_may_precede_nodes() {
        let graph = parse_gml_graph("graph [ edge [ source 1 target 2 ] node [ id 1 ] node [ id 2 ] ]").unwrap();
        assert_eq!(graph.edges_count(), 1);
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        let err = parse_gml_graph("graph [\n node [ id 1 ]\n node [ label \"x\" ]\n]").unwrap_err();
        match err {
            LoadError::Parse { line, message, .. } => {
                assert_eq!(line, 3);
                assert!(message.contains("id"));
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = parse_gml_graph("graph [\n node [ id 1 ]\n edge [ source 1 target 9 ]\n]").unwrap_err();
        assert!(matches!(err, LoadError::Graph { line: 3, .. }));
    }

    #[test]
    fn test_negative_node_ids() {
        let graph =
            parse_gml_graph("graph [ node [ id -4 ] node [ id 2 ] edge [ source -4 target 2 weight 1 ] ]").unwrap();
        assert_eq!(graph.vertices(), vec![-4, 2]);
        assert!(graph.has_edge(&2, &-4));
    }

    #[test]
    fn test_unterminated_string() {
        assert!(matches!(
            parse_gml_graph("graph [ node [ id 1 label \"open ] ]"),
            Err(LoadError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_gml_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "graph [ node [ id 1 ] node [ id 2 ] edge [ source 1 target 2 weight 2 ] ]").unwrap();
        let graph = load_gml_graph(file.path()).unwrap();
        assert_eq!(graph.strength(&1).unwrap(), 2.0);
    }
}
