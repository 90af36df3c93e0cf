use crate::websocket::enums::node_target::NodeTarget;
use crate::websocket::errors::ClusterError;
use crate::websocket::structs::api_command::ApiCommand;
use crate::websocket::structs::subscription::Subscription;
use crate::websocket::structs::subscription_key::SubscriptionKey;
use crate::websocket::structs::xml_document::XmlDocument;
use crate::websocket::structs::xml_element::XmlElement;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

pub const EVENT_GROUP: &str = "event";

/// Element and attribute names accepted in outgoing frames.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Command element: root named after the group, `action` first, then the
/// command attributes, then an optional `<parameters>` block.
pub fn command_element(command: &ApiCommand) -> XmlElement {
    let mut element = XmlElement::new(&command.group).with_attribute("action", &command.action);
    for (key, value) in &command.attributes {
        element.set_attribute(key, value);
    }
    if !command.parameters.is_empty() {
        let mut parameters = XmlElement::new("parameters");
        for (name, value) in &command.parameters {
            parameters.children.push(
                XmlElement::new("parameter")
                    .with_attribute("name", name)
                    .with_attribute("value", value),
            );
        }
        element.children.push(parameters);
    }
    element
}

pub fn build_command(command: &ApiCommand) -> Result<String, ClusterError> {
    write_element_to_string(&command_element(command))
}

pub fn build_auth_frame(response: &str, user: &str) -> Result<String, ClusterError> {
    write_element_to_string(
        &XmlElement::new("auth")
            .with_attribute("response", response)
            .with_attribute("user", user),
    )
}

pub fn write_document(document: &XmlDocument) -> Result<String, ClusterError> {
    write_element_to_string(&document.root)
}

fn write_element_to_string(element: &XmlElement) -> Result<String, ClusterError> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, element)?;
    String::from_utf8(writer.into_inner()).map_err(encoding_error)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &XmlElement) -> Result<(), ClusterError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    if element.children.is_empty() && element.text.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(encoding_error);
    }
    writer.write_event(Event::Start(start)).map_err(encoding_error)?;
    if !element.text.is_empty() {
        writer
            .write_event(Event::Text(BytesText::new(&element.text)))
            .map_err(encoding_error)?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(encoding_error)
}

fn encoding_error<E: std::fmt::Display>(error: E) -> ClusterError {
    ClusterError::Encoding(error.to_string())
}

fn decoding_error<E: std::fmt::Display>(error: E) -> ClusterError {
    ClusterError::Decoding(error.to_string())
}

pub fn parse_document(input: &str) -> Result<XmlDocument, ClusterError> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => stack.push(element_from(&start)?),
            Ok(Event::Empty(start)) => {
                let element = element_from(&start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| ClusterError::Decoding("unexpected closing tag".to_string()))?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Text(text)) => {
                let text = text.unescape().map_err(decoding_error)?;
                match stack.last_mut() {
                    Some(parent) => parent.text.push_str(&text),
                    None => return Err(ClusterError::Decoding("text outside of the root element".to_string())),
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(parent) = stack.last_mut() {
                    parent.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ClusterError::Decoding(format!(
                    "{} at position {}",
                    e,
                    reader.buffer_position()
                )));
            }
        }
    }

    if let Some(open) = stack.last() {
        return Err(ClusterError::Decoding(format!("unclosed element <{}>", open.name)));
    }
    root.map(XmlDocument::new)
        .ok_or_else(|| ClusterError::Decoding("empty document".to_string()))
}

fn element_from(start: &BytesStart) -> Result<XmlElement, ClusterError> {
    let mut element = XmlElement::new(&String::from_utf8_lossy(start.name().as_ref()));
    for attribute in start.attributes() {
        let attribute = attribute.map_err(decoding_error)?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value().map_err(decoding_error)?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) -> Result<(), ClusterError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(element);
            Ok(())
        }
        None if root.is_some() => Err(ClusterError::Decoding("more than one root element".to_string())),
        None => {
            *root = Some(element);
            Ok(())
        }
    }
}

/// Turns an error reply into `ClusterError::Application`.
///
/// Error replies are either an `<error>` root or any root carrying
/// `status="KO"`.
pub fn check_reply(document: &XmlDocument) -> Result<(), ClusterError> {
    let root = document.root();
    let failed = root.name == "error" || root.attribute("status") == Some("KO");
    if !failed {
        return Ok(());
    }
    let code = root
        .attribute("code")
        .or_else(|| root.attribute("error-code"))
        .unwrap_or("KO")
        .to_string();
    let message = root
        .attribute("error")
        .or_else(|| root.attribute("message"))
        .map(str::to_string)
        .unwrap_or_else(|| root.text.clone());
    Err(ClusterError::Application { code, message })
}

pub fn encode_embedded(command: &ApiCommand) -> Result<String, ClusterError> {
    Ok(STANDARD.encode(build_command(command)?))
}

pub fn decode_embedded(encoded: &str) -> Result<XmlDocument, ClusterError> {
    let raw = STANDARD.decode(encoded).map_err(decoding_error)?;
    let text = String::from_utf8(raw).map_err(decoding_error)?;
    parse_document(&text)
}

pub fn subscribe_command(subscription: &Subscription, external_id: u64) -> Result<ApiCommand, ClusterError> {
    if subscription.event_type.is_empty() {
        return Err(ClusterError::Encoding("subscription without event type".to_string()));
    }
    let mut builder = ApiCommand::builder(EVENT_GROUP, "subscribe")
        .attribute("type", &subscription.event_type)
        .attribute("api_cmd", encode_embedded(&subscription.command)?)
        .attribute("send_now", if subscription.send_now { "yes" } else { "no" })
        .attribute("external_id", external_id)
        .node(subscription.node.clone());
    if let Some(object_id) = subscription.object_id {
        builder = builder.attribute("object_id", object_id);
    }
    builder.build()
}

pub fn unsubscribe_command(key: &SubscriptionKey, node: NodeTarget) -> Result<ApiCommand, ClusterError> {
    let mut builder = ApiCommand::builder(EVENT_GROUP, "unsubscribe")
        .attribute("type", &key.event_type)
        .attribute("external_id", key.external_id)
        .node(node);
    if let Some(object_id) = key.object_id {
        builder = builder.attribute("object_id", object_id);
    }
    builder.build()
}

pub fn unsubscribe_all_command(node: NodeTarget) -> Result<ApiCommand, ClusterError> {
    ApiCommand::builder(EVENT_GROUP, "unsubscribeall").node(node).build()
}
