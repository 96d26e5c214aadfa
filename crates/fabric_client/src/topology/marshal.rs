//! GraphML serialization of the compiled graph document.
//!
//! Output is byte-stable: XML declaration, two-space indentation, key
//! declarations before the graph element, data entries in document order.
//! The orchestrator parses this structurally, so the writer never reorders
//! or omits anything.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::graph::{DataEntry, GraphDocument, GRAPHML_XMLNS};
use crate::error::{FabricError, Result};

/// Serialize `doc` to the orchestrator's GraphML dialect.
pub fn to_graphml(doc: &GraphDocument) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(ser_err)?;

    let mut root = BytesStart::new("graphml");
    root.push_attribute(("xmlns", GRAPHML_XMLNS));
    writer.write_event(Event::Start(root)).map_err(ser_err)?;

    for key in &doc.keys {
        let mut el = BytesStart::new("key");
        el.push_attribute(("id", key.id));
        el.push_attribute(("for", key.domain));
        el.push_attribute(("attr.name", key.name));
        el.push_attribute(("attr.type", key.attr_type));
        writer.write_event(Event::Empty(el)).map_err(ser_err)?;
    }

    let mut graph = BytesStart::new("graph");
    graph.push_attribute(("edgedefault", "directed"));
    writer.write_event(Event::Start(graph)).map_err(ser_err)?;

    for node in &doc.nodes {
        let mut el = BytesStart::new("node");
        el.push_attribute(("id", node.id.as_str()));
        writer.write_event(Event::Start(el)).map_err(ser_err)?;
        write_data(&mut writer, &node.data)?;
        writer
            .write_event(Event::End(BytesEnd::new("node")))
            .map_err(ser_err)?;
    }

    for edge in &doc.edges {
        let mut el = BytesStart::new("edge");
        el.push_attribute(("source", edge.source.as_str()));
        el.push_attribute(("target", edge.target.as_str()));
        writer.write_event(Event::Start(el)).map_err(ser_err)?;
        write_data(&mut writer, &edge.data)?;
        writer
            .write_event(Event::End(BytesEnd::new("edge")))
            .map_err(ser_err)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("graph")))
        .map_err(ser_err)?;
    writer
        .write_event(Event::End(BytesEnd::new("graphml")))
        .map_err(ser_err)?;

    String::from_utf8(writer.into_inner()).map_err(ser_err)
}

fn write_data(writer: &mut Writer<Vec<u8>>, entries: &[DataEntry]) -> Result<()> {
    for entry in entries {
        let mut el = BytesStart::new("data");
        el.push_attribute(("key", entry.key));
        writer.write_event(Event::Start(el)).map_err(ser_err)?;
        writer
            .write_event(Event::Text(BytesText::new(&entry.value)))
            .map_err(ser_err)?;
        writer
            .write_event(Event::End(BytesEnd::new("data")))
            .map_err(ser_err)?;
    }
    Ok(())
}

fn ser_err(err: impl std::fmt::Display) -> FabricError {
    FabricError::GraphSerialization(err.to_string())
}
