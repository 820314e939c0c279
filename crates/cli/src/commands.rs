//! Subcommands and their execution.
//!
//! Every command returns its output as lines so it can be tested without
//! capturing stdout.

use anyhow::{anyhow, Context};
use clap::Subcommand;
use flowkey::{protocol, Address, Endpoint, Flow, ProtoEndpoint, StableHash};
use tracing::{debug, info, warn};

/// Output of a command, one entry per printed line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandResult {
    pub lines: Vec<String>,
}

impl CommandResult {
    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Parse an address and print its canonical form and family
    Address { text: String },
    /// Print the big-endian in_addr layout of an IPv4 address
    InAddr { text: String },
    /// Parse an endpoint such as 10.0.0.1:80 or [::1]:443
    Endpoint { socket: String },
    /// Render a 5-tuple flow key
    Flow {
        /// Protocol number or name (tcp, udp, ...)
        protocol: String,
        source: String,
        destination: String,
        /// Render the reply direction instead
        #[arg(long)]
        reverse: bool,
    },
    /// Render a protocol-tagged endpoint and its plain projection
    Three { protocol: String, socket: String },
    /// Sort flows given as PROTO,SRC,DST in table key order
    Sort {
        #[arg(required = true)]
        flows: Vec<String>,
    },
    /// Print the stable and direction-insensitive hashes of a flow
    Hash {
        protocol: String,
        source: String,
        destination: String,
    },
}

impl Command {
    pub fn execute(&self) -> anyhow::Result<CommandResult> {
        let mut out = CommandResult::default();
        match self {
            Command::Address { text } => {
                let address = parse_address(text)?;
                let family = if address.is_ipv4() { "ipv4" } else { "ipv6" };
                out.push(format!("{address} {family}"));
            }
            Command::InAddr { text } => {
                let address = parse_address(text)?;
                let in_addr = address.to_in_addr().map_err(|err| {
                    warn!(%address, "no in_addr layout");
                    err
                })?;
                let [a, b, c, d] = in_addr.octets();
                out.push(format!("bytes {a:02x} {b:02x} {c:02x} {d:02x}"));
                out.push(format!("s_addr 0x{:08x}", in_addr.s_addr));
                out.push(format!("value 0x{:08x}", in_addr.to_bits()));
            }
            Command::Endpoint { socket } => {
                let endpoint = parse_endpoint(socket)?;
                out.push(endpoint.to_string());
            }
            Command::Flow {
                protocol,
                source,
                destination,
                reverse,
            } => {
                let mut flow = parse_flow(protocol, source, destination)?;
                if *reverse {
                    flow = flow.reverse();
                }
                info!(%flow, "flow key");
                out.push(flow.to_string());
            }
            Command::Three { protocol, socket } => {
                let three = ProtoEndpoint::new(parse_protocol(protocol)?, parse_endpoint(socket)?);
                out.push(three.to_string());
                out.push(three.to_endpoint().to_string());
            }
            Command::Sort { flows } => {
                let mut keys = flows
                    .iter()
                    .map(|spec| parse_flow_spec(spec))
                    .collect::<anyhow::Result<Vec<_>>>()?;
                keys.sort();
                keys.dedup();
                info!(count = keys.len(), "sorted flows");
                out.lines.extend(keys.iter().map(Flow::to_string));
            }
            Command::Hash {
                protocol,
                source,
                destination,
            } => {
                let flow = parse_flow(protocol, source, destination)?;
                out.push(format!("stable 0x{:016x}", flow.stable_hash()));
                out.push(format!("symmetric 0x{:016x}", flow.symmetric_hash()));
            }
        }
        Ok(out)
    }
}

fn parse_address(text: &str) -> anyhow::Result<Address> {
    let address = Address::parse(text).map_err(|err| {
        warn!(text, "rejected address");
        err
    })?;
    debug!(%address, "parsed address");
    Ok(address)
}

fn parse_endpoint(text: &str) -> anyhow::Result<Endpoint> {
    let endpoint: Endpoint = text.parse().map_err(|err| {
        warn!(text, "rejected endpoint");
        err
    })?;
    debug!(%endpoint, "parsed endpoint");
    Ok(endpoint)
}

fn parse_protocol(text: &str) -> anyhow::Result<u8> {
    text.parse::<u8>()
        .ok()
        .or_else(|| protocol::by_name(text))
        .ok_or_else(|| anyhow!("unknown protocol {text:?}"))
}

fn parse_flow(protocol: &str, source: &str, destination: &str) -> anyhow::Result<Flow> {
    Ok(Flow::new(
        parse_protocol(protocol)?,
        parse_endpoint(source)?,
        parse_endpoint(destination)?,
    ))
}

fn parse_flow_spec(spec: &str) -> anyhow::Result<Flow> {
    let mut fields = spec.split(',');
    match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(protocol), Some(source), Some(destination), None) => {
            parse_flow(protocol, source, destination)
                .with_context(|| format!("in flow {spec:?}"))
        }
        _ => Err(anyhow!("expected PROTO,SRC,DST, got {spec:?}")),
    }
}
