//! Netlist parsing - line-oriented wiring description between parts
//!
//! Each non-comment line is one net: semicolon-separated node tokens where
//! the first token is the net's driving output and the rest are its sinks.
//! Part tokens follow `REFDES-UID.PORT` (alphanumeric refdes and uid,
//! decimal port); bare `SOURCE.n` / `SINK.n` tokens name terminal nodes.
//! This grammar is an external contract and must not change.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetlistError {
    #[error("netlist token '{0}' is not a part, source, or sink")]
    BadToken(String),

    #[error("netlist line '{0}' has no nodes")]
    EmptyNet(String),
}

/// A part reference inside a net: `REFDES-UID.PORT`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub refdes: String,
    pub uid: String,
    pub port: String,
}

/// A single node token of a net
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Part(Part),
    Source(String),
    Sink(String),
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Part(p) => write!(f, "{}-{}.{}", p.refdes, p.uid, p.port),
            Node::Source(id) => write!(f, "SOURCE.{}", id),
            Node::Sink(id) => write!(f, "SINK.{}", id),
        }
    }
}

/// One net: a driving output node and its sink nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Net {
    pub input: Node,
    pub outputs: Vec<Node>,
}

/// Parse a whole netlist text. Blank lines and `#` comments are skipped.
pub fn parse_netlist(text: &str) -> Result<Vec<Net>, NetlistError> {
    let mut nets = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        nets.push(parse_net(line)?);
    }
    Ok(nets)
}

/// Parse one net line into its input node and sink nodes
pub fn parse_net(line: &str) -> Result<Net, NetlistError> {
    let line = line.trim().trim_end_matches(';');

    let mut tokens = line.split(';').map(str::trim).filter(|t| !t.is_empty());
    let input = match tokens.next() {
        Some(t) => parse_node(t)?,
        None => return Err(NetlistError::EmptyNet(line.to_string())),
    };

    let outputs = tokens.map(parse_node).collect::<Result<Vec<_>, _>>()?;

    Ok(Net { input, outputs })
}

/// Parse a single node token
pub fn parse_node(token: &str) -> Result<Node, NetlistError> {
    let token = token.trim();

    if let Some((head, port)) = token.rsplit_once('.') {
        if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) {
            if let Some((refdes, uid)) = head.split_once('-') {
                if is_alnum(refdes) && is_alnum(uid) {
                    return Ok(Node::Part(Part {
                        refdes: refdes.to_string(),
                        uid: uid.to_string(),
                        port: port.to_string(),
                    }));
                }
            } else if head.eq_ignore_ascii_case("SOURCE") {
                return Ok(Node::Source(port.to_string()));
            } else if head.eq_ignore_ascii_case("SINK") {
                return Ok(Node::Sink(port.to_string()));
            }
        }
    }

    Err(NetlistError::BadToken(token.to_string()))
}

fn is_alnum(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric())
}
